//! `quiz` command: render the question a level produces.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_question;
use lumo_engine::challenge::{generate, GameKind};
use std::io::Write;
use tracing::debug;

pub fn handle_quiz_command(
    game: GameKind,
    level: Option<u32>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let level = level.unwrap_or(cfg.level);
    let question = generate(game, level, 0, &cfg.question_settings());
    debug!(%game, level, key = %question.challenge.key(), "quiz question");

    if json {
        let s = serde_json::to_string_pretty(&question).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "{}", format_question(&question))?;
    }
    Ok(())
}
