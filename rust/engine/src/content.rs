//! Static candidate lists the games draw from.
//!
//! The order of every table is part of the content contract: level 1 of the
//! colour game is always the first entry of [`COLORS`], and so on.

use serde::Serialize;

/// A named colour and its display swatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    /// `#RRGGBB`
    pub hex: &'static str,
}

/// A named shape with its number of straight sides (0 for curves).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub name: &'static str,
    pub sides: u8,
}

pub const LETTERS: [(char, &str); 26] = [
    ('A', "Apple"),
    ('B', "Ball"),
    ('C', "Cat"),
    ('D', "Dog"),
    ('E', "Elephant"),
    ('F', "Fish"),
    ('G', "Giraffe"),
    ('H', "Hat"),
    ('I', "Igloo"),
    ('J', "Juice"),
    ('K', "Kite"),
    ('L', "Lion"),
    ('M', "Moon"),
    ('N', "Nest"),
    ('O', "Orange"),
    ('P', "Penguin"),
    ('Q', "Queen"),
    ('R', "Rabbit"),
    ('S', "Sun"),
    ('T', "Tree"),
    ('U', "Umbrella"),
    ('V', "Violin"),
    ('W', "Whale"),
    ('X', "Xylophone"),
    ('Y', "Yo-yo"),
    ('Z', "Zebra"),
];

pub const COLORS: [ColorSwatch; 10] = [
    ColorSwatch { name: "Red", hex: "#FF0000" },
    ColorSwatch { name: "Blue", hex: "#0000FF" },
    ColorSwatch { name: "Green", hex: "#00A000" },
    ColorSwatch { name: "Yellow", hex: "#FFD700" },
    ColorSwatch { name: "Orange", hex: "#FF8C00" },
    ColorSwatch { name: "Purple", hex: "#800080" },
    ColorSwatch { name: "Pink", hex: "#FF69B4" },
    ColorSwatch { name: "Brown", hex: "#8B4513" },
    ColorSwatch { name: "Black", hex: "#000000" },
    ColorSwatch { name: "White", hex: "#FFFFFF" },
];

pub const SHAPES: [Shape; 8] = [
    Shape { name: "Circle", sides: 0 },
    Shape { name: "Triangle", sides: 3 },
    Shape { name: "Square", sides: 4 },
    Shape { name: "Pentagon", sides: 5 },
    Shape { name: "Hexagon", sides: 6 },
    Shape { name: "Heptagon", sides: 7 },
    Shape { name: "Octagon", sides: 8 },
    Shape { name: "Decagon", sides: 10 },
];

pub const COUNTABLES: [&str; 8] = [
    "apples", "stars", "balloons", "ducks", "cookies", "flowers", "cars", "fish",
];

pub fn letter_for_word(word: &str) -> Option<char> {
    LETTERS
        .iter()
        .find(|(_, w)| w.eq_ignore_ascii_case(word))
        .map(|(l, _)| *l)
}

/// The shape with exactly `sides` sides; side counts are unique.
pub fn shape_with_sides(sides: u8) -> Option<&'static Shape> {
    SHAPES.iter().find(|s| s.sides == sides)
}
