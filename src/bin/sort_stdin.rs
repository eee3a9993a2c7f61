use ferris_sort::output;
use ferris_sort::parser::format_sequence;
use ferris_sort::SortOutcome;
use std::io::{self, Read};

const SERVICE: &str = "sort_stdin";

const NO_INPUT_NOTICE: &str =
    "No input given. Pipe in integers separated by commas, semicolons, spaces or new lines.";
const NO_NUMBERS_NOTICE: &str = "No valid integers were found in the input.";

fn read_input() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn main() -> io::Result<()> {
    output::init(true);
    let input = read_input()?;
    let outcome = SortOutcome::from_input(Some(&input));

    match (&outcome.original, &outcome.sorted) {
        (Some(original), _) if original.is_empty() => output::warn(SERVICE, NO_NUMBERS_NOTICE),
        (Some(original), Some(sorted)) => {
            output::sequence("Original", &format_sequence(original));
            output::sequence("Sorted", &format_sequence(sorted));
        }
        _ => output::warn(SERVICE, NO_INPUT_NOTICE),
    }

    Ok(())
}
