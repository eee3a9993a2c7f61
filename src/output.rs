use owo_colors::{OwoColorize, Style};
use std::env;
use std::sync::OnceLock;

const MARK: &str = "🦀";

static SHOW_SERVICE_NAME: OnceLock<bool> = OnceLock::new();

/// Chooses whether console lines carry the `[service]` label. Only the
/// first call has an effect; without it the `SORT_PLAIN_OUTPUT` variable
/// decides.
pub fn init(plain_output: bool) {
    let _ = SHOW_SERVICE_NAME.set(!plain_output);
}

fn show_service_name() -> bool {
    *SHOW_SERVICE_NAME.get_or_init(|| {
        let value = env::var("SORT_PLAIN_OUTPUT")
            .unwrap_or_else(|_| "0".to_string())
            .to_lowercase();
        !(value == "1" || value == "true" || value == "yes")
    })
}

fn line(service: &str, style: Style, message: &str) {
    if show_service_name() {
        let label = format!("[{}]", service);
        println!(
            "{} {} {}",
            MARK,
            label.style(style.bold()),
            message.style(style)
        );
    } else {
        println!("{} {}", MARK, message.style(style));
    }
}

/// Print a status message (cyan)
pub fn status(service: &str, message: &str) {
    line(service, Style::new().cyan(), message);
}

/// Print an info message (default color)
pub fn info(service: &str, message: &str) {
    line(service, Style::new(), message);
}

/// Print a success message (green)
pub fn success(service: &str, message: &str) {
    line(service, Style::new().green(), message);
}

/// Print a warning (yellow)
pub fn warn(service: &str, message: &str) {
    line(service, Style::new().yellow(), message);
}

/// Print an error (red)
pub fn error(service: &str, message: &str) {
    line(service, Style::new().red(), message);
}

/// Log one handled request: method, path, status and how many numbers were
/// sorted.
pub fn request(service: &str, method: &str, path: &str, status: u16, count: usize) {
    let summary = format!("{} {} -> {} ({} numbers)", method, path, status, count);
    if status >= 400 {
        warn(service, &summary);
    } else {
        line(service, Style::new().blue(), &summary);
    }
}

pub fn startup_banner(service: &str) {
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}  {} {}",
        MARK,
        "FERRIS SORT".bright_cyan().bold(),
        format!("- {}", service).bright_white()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

pub fn config_item(service: &str, key: &str, value: &str) {
    if show_service_name() {
        println!(
            "{} {} {} {}",
            MARK,
            format!("[{}]", service).dimmed(),
            format!("{}:", key).bright_white(),
            value.bright_cyan()
        );
    } else {
        println!(
            "{} {} {}",
            MARK,
            format!("{}:", key).bright_white(),
            value.bright_cyan()
        );
    }
}

/// Print a labelled sequence, e.g. `Sorted: 1, 2, 3`.
pub fn sequence(label: &str, numbers: &str) {
    println!("{} {}", format!("{:>9}:", label).bright_white().bold(), numbers.bright_yellow());
}
