/// An ordered list of parsed integers. Duplicates are allowed.
pub type IntegerSequence = Vec<i32>;

/// Characters that separate tokens in user input.
pub const DELIMITERS: [char; 5] = [',', ' ', ';', '\n', '\r'];

/// Parses free-form delimited text into integers.
///
/// Returns `None` when `raw` is empty or whitespace only. Otherwise returns
/// the successfully parsed tokens in input order; tokens that are not valid
/// `i32` values are dropped, so the sequence may be empty (e.g. for `",,,"`).
pub fn parse_integers(raw: &str) -> Option<IntegerSequence> {
    if raw.trim().is_empty() {
        return None;
    }

    let numbers = raw
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .filter_map(parse_token)
        .collect();

    Some(numbers)
}

/// Parses a single token, tolerating a sign and surrounding whitespace that
/// is not itself a delimiter (tabs, for instance).
fn parse_token(token: &str) -> Option<i32> {
    token.trim().parse().ok()
}

/// Formats a sequence the way it is shown back to the user.
pub fn format_sequence(seq: &[i32]) -> String {
    seq.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
