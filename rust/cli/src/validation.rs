//! Input parsing and validation for interactive commands.
//!
//! Players answer by option number (1-based, as displayed) or by typing the
//! option text. A bare number always means a slot; `=TEXT` matches the option
//! text only, so `=3` picks the option reading "3" in numeric games.
//! `q`/`quit` ends the session.

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Zero-based option index
    Choice(usize),
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input against the displayed `options`.
///
/// # Example
///
/// ```rust
/// # use lumo_cli::validation::{parse_answer, ParseResult};
/// let options = vec!["Red".to_string(), "Blue".to_string()];
/// assert_eq!(parse_answer("2", &options), ParseResult::Choice(1));
/// assert_eq!(parse_answer("red", &options), ParseResult::Choice(0));
/// assert_eq!(parse_answer("q", &options), ParseResult::Quit);
///
/// let sums = vec!["4".to_string(), "3".to_string()];
/// assert_eq!(parse_answer("=3", &sums), ParseResult::Choice(1));
/// ```
pub fn parse_answer(input: &str, options: &[String]) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    let lower = input.to_lowercase();
    if lower == "q" || lower == "quit" {
        return ParseResult::Quit;
    }

    if let Some(value) = input.strip_prefix('=') {
        let value = value.trim();
        return match options.iter().position(|o| o.eq_ignore_ascii_case(value)) {
            Some(idx) => ParseResult::Choice(idx),
            None => ParseResult::Invalid(format!("No option reads {}", value)),
        };
    }

    if let Ok(n) = input.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return ParseResult::Choice(n - 1);
        }
        // Numeric options (math, side counts) may be typed as text too.
        if let Some(idx) = options.iter().position(|o| o == input) {
            return ParseResult::Choice(idx);
        }
        return ParseResult::Invalid(format!(
            "Choose an option between 1 and {}",
            options.len()
        ));
    }

    match options.iter().position(|o| o.eq_ignore_ascii_case(input)) {
        Some(idx) => ParseResult::Choice(idx),
        None => ParseResult::Invalid(format!("Unrecognized answer: {}", input)),
    }
}
