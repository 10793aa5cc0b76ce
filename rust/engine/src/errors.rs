use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("No question in progress")]
    NoQuestionInProgress,
    #[error("Game is already over")]
    GameOver,
    #[error("Invalid choice: {choice}, available options: {available}")]
    InvalidChoice { choice: usize, available: usize },
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown game: {0} (expected math, alphabet, colors or shapes)")]
    UnknownGame(String),
}
