//! # lumo-engine: Deterministic quiz content
//!
//! Content selection for a set of children's learning mini-games. Every
//! question is derived from the player's level with plain arithmetic instead
//! of a random source, so the same level always shows the same question and
//! option order, while consecutive levels avoid repeating content.
//!
//! ## Core Modules
//!
//! - [`selector`] - Level → index, rotation and sample functions
//! - [`history`] - Fixed-capacity recent-history buffer
//! - [`content`] - Static letter, colour, shape and object tables
//! - [`challenge`] - Challenge kinds and per-game question generation
//! - [`session`] - Score, level and lives tracking with progress events
//! - [`errors`] - Error types for session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use lumo_engine::challenge::{generate, GameKind, QuestionSettings};
//!
//! let q = generate(GameKind::Colors, 1, 0, &QuestionSettings::default());
//! assert_eq!(q.answer_text(), "Red");
//! println!("{} {:?}", q.challenge.prompt(), q.options);
//! ```
//!
//! ## Sessions
//!
//! ```rust
//! use lumo_engine::challenge::GameKind;
//! use lumo_engine::session::{GameSession, ProgressEvent, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new(GameKind::Math)).unwrap();
//! let answer = session.next_question().unwrap().answer;
//! let events = session.answer(answer).unwrap();
//! assert!(events.contains(&ProgressEvent::LevelUpdated { level: 2 }));
//! ```

pub mod challenge;
pub mod content;
pub mod errors;
pub mod history;
pub mod selector;
pub mod session;
