//! Question and progress formatters for terminal display.

use lumo_engine::challenge::Question;
use lumo_engine::session::ProgressEvent;

/// Numbered option list on one line, e.g. `1) Red  2) Blue`.
///
/// ```rust
/// # use lumo_cli::formatters::format_options;
/// let options = vec!["Red".to_string(), "Blue".to_string()];
/// assert_eq!(format_options(&options), "1) Red  2) Blue");
/// ```
pub fn format_options(options: &[String]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}) {}", i + 1, o))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Header, prompt and options of a question, one per line.
pub fn format_question(question: &Question) -> String {
    format!(
        "[{} level {}] {}\n{}",
        question.game,
        question.level,
        question.challenge.prompt(),
        format_options(&question.options)
    )
}

pub fn format_event(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::ScoreUpdated { score } => format!("Score: {}", score),
        ProgressEvent::LevelUpdated { level } => format!("Level: {}", level),
        ProgressEvent::LivesUpdated { lives } => format!("Lives: {}", lives),
        ProgressEvent::GameComplete { won: true, score } => {
            format!("You won! Final score: {}", score)
        }
        ProgressEvent::GameComplete { won: false, score } => {
            format!("Game over. Final score: {}", score)
        }
    }
}
