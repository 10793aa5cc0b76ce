//! Question generation for the four mini-games.
//!
//! A [`Question`] is fully determined by `(game, level, attempt, settings)`:
//! targets come from [`crate::selector`] rather than a random source, so every
//! player on a given level sees the same question with the same option order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::{
    letter_for_word, shape_with_sides, COLORS, COUNTABLES, LETTERS, SHAPES,
};
use crate::errors::EngineError;
use crate::selector::{
    cycle_pick, level_index, number_for_level, rotate_array, unique_index, DEFAULT_STEP_SEED,
};

/// Highest operand a math question uses, whatever the level.
pub const MATH_CEILING: u32 = 50;

/// Most answer options a question may show.
pub const MAX_OPTION_COUNT: usize = 10;

/// The mini-games that draw questions from the selector.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Math,
    Alphabet,
    Colors,
    Shapes,
}

impl GameKind {
    pub fn all() -> [GameKind; 4] {
        [
            GameKind::Math,
            GameKind::Alphabet,
            GameKind::Colors,
            GameKind::Shapes,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Math => "math",
            GameKind::Alphabet => "alphabet",
            GameKind::Colors => "colors",
            GameKind::Shapes => "shapes",
        }
    }

    /// Number of distinct targets, or `None` when the game computes them.
    pub fn pool_size(&self) -> Option<usize> {
        match self {
            GameKind::Math => None,
            GameKind::Alphabet => Some(LETTERS.len()),
            GameKind::Colors => Some(COLORS.len()),
            GameKind::Shapes => Some(SHAPES.len()),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(GameKind::Math),
            "alphabet" | "abc" => Ok(GameKind::Alphabet),
            "colors" | "colours" => Ok(GameKind::Colors),
            "shapes" => Ok(GameKind::Shapes),
            other => Err(EngineError::UnknownGame(other.to_string())),
        }
    }
}

/// One kind of question, carrying exactly the data its prompt needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Challenge {
    Addition { lhs: u32, rhs: u32 },
    Subtraction { lhs: u32, rhs: u32 },
    Counting { object: &'static str, count: u32 },
    /// Pick the word that starts with `letter`.
    WordForLetter { letter: char },
    /// Pick the letter that `word` starts with.
    LetterForWord { word: &'static str },
    NameColor { hex: &'static str },
    CountSides { shape: &'static str },
    FindShape { sides: u8 },
}

impl Challenge {
    pub fn game(&self) -> GameKind {
        match self {
            Challenge::Addition { .. } | Challenge::Subtraction { .. } | Challenge::Counting { .. } => {
                GameKind::Math
            }
            Challenge::WordForLetter { .. } | Challenge::LetterForWord { .. } => GameKind::Alphabet,
            Challenge::NameColor { .. } => GameKind::Colors,
            Challenge::CountSides { .. } | Challenge::FindShape { .. } => GameKind::Shapes,
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Challenge::Addition { lhs, rhs } => format!("What is {} + {}?", lhs, rhs),
            Challenge::Subtraction { lhs, rhs } => format!("What is {} - {}?", lhs, rhs),
            Challenge::Counting { object, count } => {
                format!("Count the {}: {}", object, "*".repeat(*count as usize))
            }
            Challenge::WordForLetter { letter } => format!("Which word starts with {}?", letter),
            Challenge::LetterForWord { word } => format!("Which letter does {} start with?", word),
            Challenge::NameColor { hex } => format!("Which colour is {}?", hex),
            Challenge::CountSides { shape } => format!("How many sides does a {} have?", shape),
            Challenge::FindShape { sides } => format!("Which shape has {} sides?", sides),
        }
    }

    /// Identity of the question's target, used to avoid recent repeats.
    ///
    /// Both alphabet variants share the letter as key, both shape variants
    /// the shape, so switching mode does not count as fresh content.
    pub fn key(&self) -> String {
        match self {
            Challenge::Addition { lhs, rhs } => format!("math:{}+{}", lhs, rhs),
            Challenge::Subtraction { lhs, rhs } => format!("math:{}-{}", lhs, rhs),
            Challenge::Counting { object, count } => format!("math:{}x{}", count, object),
            Challenge::WordForLetter { letter } => format!("alphabet:{}", letter),
            Challenge::LetterForWord { word } => match letter_for_word(word) {
                Some(letter) => format!("alphabet:{}", letter),
                None => format!("alphabet:{}", word),
            },
            Challenge::NameColor { hex } => format!("colors:{}", hex),
            Challenge::CountSides { shape } => format!("shapes:{}", shape),
            Challenge::FindShape { sides } => match shape_with_sides(*sides) {
                Some(shape) => format!("shapes:{}", shape.name),
                None => format!("shapes:{}", sides),
            },
        }
    }
}

/// A rendered question: the challenge, its display options and the index of
/// the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub game: GameKind,
    pub level: u32,
    pub challenge: Challenge,
    pub options: Vec<String>,
    pub answer: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }

    pub fn answer_text(&self) -> &str {
        &self.options[self.answer]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSettings {
    /// Requested number of options; clamped to `[2, pool size]` and to
    /// [`MAX_OPTION_COUNT`].
    pub option_count: usize,
    /// Seed for the coprime step of the full-cycle games.
    pub step_seed: u64,
}

impl Default for QuestionSettings {
    fn default() -> Self {
        Self {
            option_count: 4,
            step_seed: DEFAULT_STEP_SEED,
        }
    }
}

impl QuestionSettings {
    fn options_for(&self, kind: GameKind) -> usize {
        let wanted = self.option_count.clamp(2, MAX_OPTION_COUNT);
        match kind.pool_size() {
            Some(pool) => wanted.min(pool),
            None => wanted,
        }
    }
}

/// Builds the question for `level` of `kind`.
///
/// `attempt` shifts the target along the game's selection order (or reseeds
/// the operands for math) so a caller can probe past a recently seen target.
/// Attempt 0 is the canonical question for the level.
pub fn generate(kind: GameKind, level: u32, attempt: u32, settings: &QuestionSettings) -> Question {
    let n = settings.options_for(kind);
    let lvl = i64::from(level);
    let probe = lvl + i64::from(attempt);

    let (challenge, correct, distractors) = match kind {
        GameKind::Math => math_challenge(lvl, attempt, n),
        GameKind::Alphabet => {
            let idx = unique_index(probe, LETTERS.len(), settings.step_seed);
            let (letter, word) = LETTERS[idx];
            let others = pick_others(&LETTERS, idx, lvl, "alphabet-distractor", n - 1);
            if number_for_level(lvl, 0, 2, "alphabet-mode") == 0 {
                (
                    Challenge::WordForLetter { letter },
                    word.to_string(),
                    others.iter().map(|(_, w)| w.to_string()).collect(),
                )
            } else {
                (
                    Challenge::LetterForWord { word },
                    letter.to_string(),
                    others.iter().map(|(l, _)| l.to_string()).collect(),
                )
            }
        }
        GameKind::Colors => {
            let idx = level_index(probe, COLORS.len());
            let swatch = COLORS[idx];
            let others = pick_others(&COLORS, idx, lvl, "colors-distractor", n - 1);
            (
                Challenge::NameColor { hex: swatch.hex },
                swatch.name.to_string(),
                others.iter().map(|c| c.name.to_string()).collect(),
            )
        }
        GameKind::Shapes => {
            let idx = unique_index(probe, SHAPES.len(), settings.step_seed);
            let shape = SHAPES[idx];
            let others = pick_others(&SHAPES, idx, lvl, "shapes-distractor", n - 1);
            if number_for_level(lvl, 0, 2, "shapes-mode") == 0 {
                (
                    Challenge::CountSides { shape: shape.name },
                    shape.sides.to_string(),
                    others.iter().map(|s| s.sides.to_string()).collect(),
                )
            } else {
                (
                    Challenge::FindShape { sides: shape.sides },
                    shape.name.to_string(),
                    others.iter().map(|s| s.name.to_string()).collect(),
                )
            }
        }
    };

    let slot_salt = format!("{}-slot", kind.as_str());
    let (options, answer) = arrange(lvl, &slot_salt, correct, distractors, n);
    Question {
        game: kind,
        level,
        challenge,
        options,
        answer,
    }
}

fn math_challenge(level: i64, attempt: u32, n: usize) -> (Challenge, String, Vec<String>) {
    let ceiling = (5 + 2 * level).clamp(5, i64::from(MATH_CEILING));
    let lhs_salt = format!("math-lhs:{}", attempt);
    let rhs_salt = format!("math-rhs:{}", attempt);

    let (challenge, answer) = match number_for_level(level, 0, 3, "math-mode") {
        0 => {
            let lhs = number_for_level(level, 0, ceiling + 1, &lhs_salt);
            let rhs = number_for_level(level, 0, ceiling - lhs + 1, &rhs_salt);
            (
                Challenge::Addition {
                    lhs: lhs as u32,
                    rhs: rhs as u32,
                },
                lhs + rhs,
            )
        }
        1 => {
            let lhs = number_for_level(level, 0, ceiling + 1, &lhs_salt);
            let rhs = number_for_level(level, 0, lhs + 1, &rhs_salt);
            (
                Challenge::Subtraction {
                    lhs: lhs as u32,
                    rhs: rhs as u32,
                },
                lhs - rhs,
            )
        }
        _ => {
            let count = number_for_level(level, 1, ceiling.min(20) + 1, &lhs_salt);
            let object = COUNTABLES[level_index(level + i64::from(attempt), COUNTABLES.len())];
            (
                Challenge::Counting {
                    object,
                    count: count as u32,
                },
                count,
            )
        }
    };

    (challenge, answer.to_string(), nearby_numbers(answer, n - 1))
}

/// `count` distinct non-negative numbers close to `answer`, alternating
/// above and below it.
fn nearby_numbers(answer: i64, count: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    let mut distance = 1;
    while out.len() < count {
        for candidate in [answer + distance, answer - distance] {
            if candidate >= 0 && out.len() < count {
                out.push(candidate.to_string());
            }
        }
        distance += 1;
    }
    out
}

/// `count` entries of `pool` other than `target`, read consecutively from a
/// salted starting point.
fn pick_others<T: Copy>(pool: &[T], target: usize, level: i64, salt: &str, count: usize) -> Vec<T> {
    let others: Vec<T> = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target)
        .map(|(_, item)| *item)
        .collect();
    let start = number_for_level(level, 1, others.len() as i64 + 1, salt);
    cycle_pick(&others, start, count.min(others.len()))
}

/// Places the correct option among the distractors and rotates the list so
/// the answer slot varies by level. Returns the options and the answer index.
fn arrange(
    level: i64,
    salt: &str,
    correct: String,
    distractors: Vec<String>,
    n: usize,
) -> (Vec<String>, usize) {
    let mut options = Vec::with_capacity(n);
    options.push(correct);
    for d in distractors {
        if options.len() == n {
            break;
        }
        if !options.contains(&d) {
            options.push(d);
        }
    }
    let len = options.len();
    let shift = number_for_level(level, 0, len as i64, salt) as usize;
    let rotated = rotate_array(&options, shift as i64);
    (rotated, (len - shift) % len)
}
