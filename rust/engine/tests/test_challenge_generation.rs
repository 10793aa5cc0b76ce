use std::collections::HashSet;

use lumo_engine::challenge::{generate, Challenge, GameKind, QuestionSettings};
use lumo_engine::content::{COLORS, LETTERS, SHAPES};

fn settings() -> QuestionSettings {
    QuestionSettings::default()
}

#[test]
fn generation_is_deterministic() {
    for kind in GameKind::all() {
        for level in 1..30 {
            assert_eq!(
                generate(kind, level, 0, &settings()),
                generate(kind, level, 0, &settings())
            );
        }
    }
}

#[test]
fn colours_follow_table_order() {
    for (i, swatch) in COLORS.iter().enumerate() {
        let q = generate(GameKind::Colors, i as u32 + 1, 0, &settings());
        assert_eq!(q.challenge, Challenge::NameColor { hex: swatch.hex });
        assert_eq!(q.answer_text(), swatch.name);
    }
}

#[test]
fn alphabet_visits_every_letter_once_per_cycle() {
    let letters: HashSet<String> = (1..=LETTERS.len() as u32)
        .map(|level| generate(GameKind::Alphabet, level, 0, &settings()).challenge.key())
        .collect();
    assert_eq!(letters.len(), LETTERS.len());
}

#[test]
fn shapes_visit_every_shape_once_per_cycle() {
    let shapes: HashSet<String> = (1..=SHAPES.len() as u32)
        .map(|level| generate(GameKind::Shapes, level, 0, &settings()).challenge.key())
        .collect();
    assert_eq!(shapes.len(), SHAPES.len());
}

#[test]
fn answer_slot_varies_across_levels() {
    for kind in GameKind::all() {
        let slots: HashSet<usize> = (1..40)
            .map(|level| generate(kind, level, 0, &settings()).answer)
            .collect();
        assert!(slots.len() > 1, "{kind} always answers in the same slot");
    }
}

#[test]
fn attempts_shift_the_target() {
    let base = generate(GameKind::Colors, 4, 0, &settings());
    let shifted = generate(GameKind::Colors, 4, 1, &settings());
    assert_ne!(base.challenge.key(), shifted.challenge.key());
    assert_eq!(shifted.answer_text(), COLORS[4].name);
}

#[test]
fn step_seed_changes_alphabet_order() {
    let a = QuestionSettings {
        step_seed: 97,
        ..settings()
    };
    let b = QuestionSettings {
        step_seed: 5,
        ..settings()
    };
    let order = |s: &QuestionSettings| -> Vec<String> {
        (1..=5)
            .map(|level| generate(GameKind::Alphabet, level, 0, s).challenge.key())
            .collect()
    };
    assert_ne!(order(&a), order(&b));
}

#[test]
fn questions_serialize_with_tagged_challenge() {
    let q = generate(GameKind::Colors, 1, 0, &settings());
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["game"], "colors");
    assert_eq!(json["challenge"]["type"], "name_color");
    assert_eq!(json["challenge"]["hex"], "#FF0000");
    assert_eq!(json["options"].as_array().map(|o| o.len()), Some(4));
}
