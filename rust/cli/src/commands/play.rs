//! # Play Command
//!
//! Interactive game session on stdin. Each round prints the question and its
//! numbered options; the player answers by number, by option text or with
//! `=VALUE` (needed when the options are themselves numbers), and
//! `q`/`quit` (or EOF) ends the session early. Progress events (score, level,
//! lives, completion) are printed as they happen.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_event, format_question};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_answer};
use lumo_engine::challenge::GameKind;
use lumo_engine::session::GameSession;
use std::io::{BufRead, Write};
use tracing::info;

/// Handle the play command.
///
/// `level` and `lives` override the configured values.
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration,
/// `CliError::Engine` when the overrides form an invalid session (e.g. a
/// start level above the configured max level) and `CliError::Io` on write
/// failures.
pub fn handle_play_command(
    game: GameKind,
    level: Option<u32>,
    lives: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let mut session_cfg = cfg.session_config(game);
    if let Some(level) = level {
        session_cfg.start_level = level;
    }
    if let Some(lives) = lives {
        session_cfg.lives = lives;
    }
    let max_lives = session_cfg.lives;
    let mut session = GameSession::new(session_cfg)?;

    writeln!(
        out,
        "play: game={} level={} lives={}",
        game,
        session.level(),
        session.lives()
    )?;

    let mut quit = false;
    while !session.is_over() && !quit {
        let question = session.next_question()?.clone();
        // Bare numbers pick slots, so numeric options need the `=` form.
        let numeric = question.options.iter().all(|o| o.parse::<i64>().is_ok());
        writeln!(out, "{}", format_question(&question))?;

        loop {
            write!(
                out,
                "Answer (1-{}{}, q to quit) {}: ",
                question.options.len(),
                if numeric { ", =N for value N" } else { "" },
                ui::lives_bar(session.lives(), max_lives)
            )?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                quit = true;
                break;
            };
            match parse_answer(&line, &question.options) {
                ParseResult::Choice(choice) => {
                    if question.is_correct(choice) {
                        writeln!(out, "Correct!")?;
                    } else {
                        writeln!(out, "Not quite: the answer was {}", question.answer_text())?;
                    }
                    for event in session.answer(choice)? {
                        writeln!(out, "{}", format_event(&event))?;
                    }
                    break;
                }
                ParseResult::Quit => {
                    quit = true;
                    break;
                }
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }
    }

    info!(
        %game,
        level = session.level(),
        score = session.score(),
        finished = session.is_over(),
        "play session ended"
    );
    writeln!(
        out,
        "Session ended: level={} score={} lives={}",
        session.level(),
        session.score(),
        session.lives()
    )?;
    Ok(())
}
