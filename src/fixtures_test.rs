//! Shared puzzles for unit tests.

use crate::puzzle::{Group, GroupColor, PuzzleDocument, Settings};

pub fn group(color: GroupColor, words: [&str; 4]) -> Group {
    Group { name: None, color, words: words.map(str::to_owned) }
}

/// YELLOW=A-D, GREEN=E-H, BLUE=I-L, PURPLE=M-P, four mistakes, no shuffle.
pub fn letters_puzzle() -> PuzzleDocument {
    PuzzleDocument::new(
        None,
        [
            group(GroupColor::Yellow, ["A", "B", "C", "D"]),
            group(GroupColor::Green, ["E", "F", "G", "H"]),
            group(GroupColor::Blue, ["I", "J", "K", "L"]),
            group(GroupColor::Purple, ["M", "N", "O", "P"]),
        ],
        Settings { shuffle_on_load: false, max_mistakes: 4 },
    )
}

/// A fully decorated puzzle: title, group names, mixed-case words, shuffling.
pub fn animals_puzzle() -> PuzzleDocument {
    let mut groups = [
        group(GroupColor::Yellow, ["Cat", "Dog", "Bird", "Fish"]),
        group(GroupColor::Green, ["Rose", "Tulip", "Daisy", "Lily"]),
        group(GroupColor::Blue, ["Oak", "Pine", "Elm", "Ash"]),
        group(GroupColor::Purple, ["Mars", "Venus", "Earth", "Saturn"]),
    ];
    groups[0].name = Some("Pets".to_owned());
    groups[1].name = Some("Flowers".to_owned());
    groups[3].name = Some("Planets".to_owned());
    PuzzleDocument::new(
        Some("Nature Night".to_owned()),
        groups,
        Settings { shuffle_on_load: true, max_mistakes: 3 },
    )
}
