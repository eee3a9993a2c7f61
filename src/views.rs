use crate::outcome::SortOutcome;
use crate::parser::format_sequence;

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - {service}</title>
</head>
<body>
<header><nav><a href="/">{service}</a> | <a href="/privacy">Privacy</a></nav></header>
<main>
{body}
</main>
</body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"<h1>QuickSort</h1>
<form method="post" action="/">
<label for="numbers">Enter integers separated by commas, spaces, semicolons or new lines:</label><br>
<textarea id="numbers" name="numbers" rows="4" cols="60">{input}</textarea><br>
<button type="submit">Sort</button>
</form>
{results}"#;

const RESULTS_TEMPLATE: &str = r#"<section id="results">
<p><strong>Original:</strong> <span id="original">{original}</span></p>
<p><strong>Sorted:</strong> <span id="sorted">{sorted}</span></p>
</section>
"#;

const NO_NUMBERS_MESSAGE: &str =
    r#"<section id="results"><p id="no-numbers">No valid integers were found in the input.</p></section>
"#;

const PRIVACY_BODY: &str = r#"<h1>Privacy Policy</h1>
<p>Submitted numbers are sorted in memory for the current request only. Nothing is stored.</p>
"#;

const ERROR_TEMPLATE: &str = r#"<h1 class="text-danger">Error.</h1>
<h2 class="text-danger">{status}</h2>
<p>{message}</p>
"#;

/// Substitutes `{key}` placeholders in a single pass, so placeholder text
/// inside a substituted value is never expanded again.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let found = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match found {
            Some((key, value)) => {
                filled.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                filled.push('{');
                rest = tail;
            }
        }
    }

    filled.push_str(rest);
    filled
}

pub fn layout(service: &str, title: &str, body: &str) -> String {
    fill(
        LAYOUT_TEMPLATE,
        &[
            ("title", escape_html(title).as_str()),
            ("service", escape_html(service).as_str()),
            ("body", body),
        ],
    )
}

/// The form page, with results when the outcome carries a parsed sequence.
pub fn index_page(service: &str, outcome: &SortOutcome) -> String {
    let results = match (&outcome.original, &outcome.sorted) {
        (Some(original), _) if original.is_empty() => NO_NUMBERS_MESSAGE.to_string(),
        (Some(original), Some(sorted)) => fill(
            RESULTS_TEMPLATE,
            &[
                ("original", format_sequence(original).as_str()),
                ("sorted", format_sequence(sorted).as_str()),
            ],
        ),
        _ => String::new(),
    };

    let input = escape_html(outcome.input.as_deref().unwrap_or(""));
    let body = fill(INDEX_TEMPLATE, &[("results", results.as_str()), ("input", input.as_str())]);

    layout(service, "Home", &body)
}

pub fn privacy_page(service: &str) -> String {
    layout(service, "Privacy Policy", PRIVACY_BODY)
}

pub fn error_page(service: &str, status: u16, message: &str) -> String {
    let body = fill(
        ERROR_TEMPLATE,
        &[
            ("status", status.to_string().as_str()),
            ("message", escape_html(message).as_str()),
        ],
    );
    layout(service, "Error", &body)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoed_input_is_escaped() {
        let outcome = SortOutcome::from_input(Some("<b>1</b>, 2"));
        let page = index_page("ferris-sort", &outcome);
        assert!(page.contains("&lt;b&gt;1&lt;/b&gt;, 2"));
        assert!(!page.contains("<b>1</b>"));
    }

    #[test]
    fn absent_input_renders_no_results() {
        let page = index_page("ferris-sort", &SortOutcome::from_input(Some("   ")));
        assert!(!page.contains(r#"id="results""#));
    }

    #[test]
    fn empty_sequence_renders_notice() {
        let page = index_page("ferris-sort", &SortOutcome::from_input(Some(",,,")));
        assert!(page.contains(r#"id="no-numbers""#));
        assert!(!page.contains(r#"id="sorted""#));
    }

    #[test]
    fn placeholder_text_in_values_stays_literal() {
        let outcome = SortOutcome::from_input(Some("{service} {results} 1"));
        let page = index_page("{body}", &outcome);

        assert_eq!(page.matches("<h1>QuickSort</h1>").count(), 1);
        assert!(page.contains("<title>Home - {body}</title>"));
        assert!(page.contains(">{service} {results} 1</textarea>"));
        assert!(page.contains(r#"<span id="sorted">1</span>"#));
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        assert_eq!(fill("{a}{b}{", &[("a", "x")]), "x{b}{");
    }

    #[test]
    fn results_list_both_sequences() {
        let page = index_page("ferris-sort", &SortOutcome::from_input(Some("5,3,8,4,2")));
        assert!(page.contains(r#"<span id="original">5, 3, 8, 4, 2</span>"#));
        assert!(page.contains(r#"<span id="sorted">2, 3, 4, 5, 8</span>"#));
    }
}
