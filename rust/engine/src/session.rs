//! Play-session state: level, score and lives for one game, plus the progress
//! events a front end reacts to.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::challenge::{generate, GameKind, Question, QuestionSettings, MAX_OPTION_COUNT};
use crate::errors::EngineError;
use crate::history::RecentHistory;
use crate::selector::DEFAULT_STEP_SEED;

/// Points for a correct answer, multiplied by the level it was answered on.
pub const POINTS_PER_LEVEL: u32 = 10;

/// How many shifted targets a session tries before accepting a recent repeat.
pub const MAX_ATTEMPTS: u32 = 8;

/// Largest recent-history window a session may keep.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub game: GameKind,
    pub start_level: u32,
    /// Clearing this level ends the session as a win.
    pub max_level: u32,
    pub lives: u8,
    pub option_count: usize,
    pub history_capacity: usize,
    pub step_seed: u64,
}

impl SessionConfig {
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            start_level: 1,
            max_level: 20,
            lives: 3,
            option_count: 4,
            history_capacity: 5,
            step_seed: DEFAULT_STEP_SEED,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.start_level == 0 {
            return Err(EngineError::InvalidConfig("start level must be >= 1".into()));
        }
        if self.max_level < self.start_level {
            return Err(EngineError::InvalidConfig(format!(
                "max level {} is below start level {}",
                self.max_level, self.start_level
            )));
        }
        if self.lives == 0 {
            return Err(EngineError::InvalidConfig("lives must be >= 1".into()));
        }
        if self.option_count < 2 {
            return Err(EngineError::InvalidConfig("option count must be >= 2".into()));
        }
        if self.option_count > MAX_OPTION_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "option count must be <= {}",
                MAX_OPTION_COUNT
            )));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(EngineError::InvalidConfig(format!(
                "history capacity must be <= {}",
                MAX_HISTORY_CAPACITY
            )));
        }
        Ok(())
    }
}

/// Progress notifications produced by [`GameSession::answer`], in the order
/// a front end should apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressEvent {
    ScoreUpdated { score: u32 },
    LevelUpdated { level: u32 },
    LivesUpdated { lives: u8 },
    GameComplete { won: bool, score: u32 },
}

/// Serializable view of a session for display or logging.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub game: GameKind,
    pub level: u32,
    pub score: u32,
    pub lives: u8,
    pub finished: bool,
    pub recent: Vec<String>,
}

#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    settings: QuestionSettings,
    level: u32,
    score: u32,
    lives: u8,
    finished: bool,
    history: RecentHistory<String>,
    current: Option<Question>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            settings: QuestionSettings {
                option_count: config.option_count,
                step_seed: config.step_seed,
            },
            level: config.start_level,
            score: 0,
            lives: config.lives,
            finished: false,
            history: RecentHistory::new(config.history_capacity),
            current: None,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_over(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &RecentHistory<String> {
        &self.history
    }

    /// Question for the current level.
    ///
    /// Repeated calls without an answer return the same question. A new
    /// question skips targets still in the recent history when one of the
    /// first [`MAX_ATTEMPTS`] shifted targets is fresh.
    pub fn next_question(&mut self) -> Result<&Question, EngineError> {
        if self.finished {
            return Err(EngineError::GameOver);
        }
        if self.current.is_none() {
            let question = self.pick_fresh();
            self.history.push(question.challenge.key());
            debug!(
                game = %self.config.game,
                level = self.level,
                key = %question.challenge.key(),
                "question selected"
            );
            self.current = Some(question);
        }
        self.current.as_ref().ok_or(EngineError::NoQuestionInProgress)
    }

    fn pick_fresh(&self) -> Question {
        let first = generate(self.config.game, self.level, 0, &self.settings);
        if !self.history.contains(&first.challenge.key()) {
            return first;
        }
        (1..MAX_ATTEMPTS)
            .map(|attempt| generate(self.config.game, self.level, attempt, &self.settings))
            .find(|q| !self.history.contains(&q.challenge.key()))
            .unwrap_or(first)
    }

    /// Answers the current question with option index `choice` (zero-based).
    pub fn answer(&mut self, choice: usize) -> Result<Vec<ProgressEvent>, EngineError> {
        if self.finished {
            return Err(EngineError::GameOver);
        }
        let question = self.current.as_ref().ok_or(EngineError::NoQuestionInProgress)?;
        if choice >= question.options.len() {
            return Err(EngineError::InvalidChoice {
                choice,
                available: question.options.len(),
            });
        }
        let correct = question.is_correct(choice);
        self.current = None;

        let mut events = Vec::new();
        if correct {
            self.score = self
                .score
                .saturating_add(POINTS_PER_LEVEL.saturating_mul(self.level));
            events.push(ProgressEvent::ScoreUpdated { score: self.score });
            if self.level >= self.config.max_level {
                self.finish(true, &mut events);
            } else {
                self.level += 1;
                debug!(level = self.level, score = self.score, "level up");
                events.push(ProgressEvent::LevelUpdated { level: self.level });
            }
        } else {
            self.lives = self.lives.saturating_sub(1);
            debug!(lives = self.lives, level = self.level, "wrong answer");
            events.push(ProgressEvent::LivesUpdated { lives: self.lives });
            if self.lives == 0 {
                self.finish(false, &mut events);
            }
        }
        Ok(events)
    }

    fn finish(&mut self, won: bool, events: &mut Vec<ProgressEvent>) {
        self.finished = true;
        info!(
            game = %self.config.game,
            won,
            score = self.score,
            level = self.level,
            "game complete"
        );
        events.push(ProgressEvent::GameComplete {
            won,
            score: self.score,
        });
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.config.game,
            level: self.level,
            score: self.score,
            lives: self.lives,
            finished: self.finished,
            recent: self.history.iter().cloned().collect(),
        }
    }
}
