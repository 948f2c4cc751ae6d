//! Puzzle document: the versioned, immutable description of one puzzle.
//!
//! A `PuzzleDocument` is what a creator authors and what a link carries. It is
//! serialized with serde into the compact JSON shape used inside payloads:
//!
//! ```text
//! { "v": 1, "title"?: string,
//!   "groups": [ { "name"?: string, "color": "yellow"|"green"|"blue"|"purple",
//!                 "words": [string, string, string, string] } x4 ],
//!   "settings": { "shuffleOnLoad": bool, "maxMistakes": 1..=10 } }
//! ```
//!
//! Deserialization deliberately goes through [`crate::schema::validate`]
//! rather than a serde derive, so untrusted input has exactly one gate.

#[cfg(test)]
#[path = "puzzle_test.rs"]
mod puzzle_test;

use serde::{Serialize, Serializer};

use crate::consts::{GROUP_COUNT, GROUP_SIZE, PUZZLE_VERSION};

/// Color tag of a group. Doubles as the group's stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl GroupColor {
    /// All colors in canonical (easiest to hardest) order.
    pub const ALL: [Self; GROUP_COUNT] = [Self::Yellow, Self::Green, Self::Blue, Self::Purple];

    /// Wire name of the color.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Parse a wire name. Matching is exact; `"Yellow"` is not a color.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == raw)
    }
}

impl std::fmt::Display for GroupColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document format version. Closed: unknown versions never get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    #[default]
    V1,
}

impl Version {
    /// Numeric tag written to the `v` field.
    #[must_use]
    pub fn number(self) -> u64 {
        match self {
            Self::V1 => PUZZLE_VERSION,
        }
    }

    /// Map a numeric tag to a known version.
    #[must_use]
    pub fn from_number(raw: u64) -> Option<Self> {
        (raw == PUZZLE_VERSION).then_some(Self::V1)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.number())
    }
}

/// One hidden category of four words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Category label shown once the group is solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: GroupColor,
    /// Member words in authored casing.
    pub words: [String; GROUP_SIZE],
}

/// Per-puzzle play settings chosen by the creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Shuffle the grid when a player opens the link.
    pub shuffle_on_load: bool,
    /// Incorrect guesses allowed before the game is lost (1..=10).
    pub max_mistakes: u8,
}

/// A complete puzzle as authored and as carried in a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleDocument {
    #[serde(rename = "v")]
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub groups: [Group; GROUP_COUNT],
    pub settings: Settings,
}

impl PuzzleDocument {
    /// Build a current-version document.
    #[must_use]
    pub fn new(title: Option<String>, groups: [Group; GROUP_COUNT], settings: Settings) -> Self {
        Self { version: Version::V1, title, groups, settings }
    }

    /// Look up a group by its color tag.
    #[must_use]
    pub fn group(&self, color: GroupColor) -> Option<&Group> {
        self.groups.iter().find(|group| group.color == color)
    }

    /// All sixteen words in group order.
    #[must_use]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|group| group.words.iter().map(String::as_str))
    }
}
