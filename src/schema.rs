//! Structural validation of untrusted puzzle JSON.
//!
//! DESIGN
//! ======
//! This is the single gate between decoded link data and the rest of the
//! crate. It walks a `serde_json::Value` and either produces a complete
//! [`PuzzleDocument`] or rejects it; there are no partial documents and no
//! coercion (`"4"` is not a number, `null` is not an absent title, `4.0` is
//! not an integer). Unknown extra keys are ignored.
//!
//! The version tag is checked before anything else so that a future `v: 2`
//! document is reported as unsupported rather than as a shape mismatch.
//!
//! Word uniqueness is a creation-time rule (see [`crate::form`]) and is not
//! re-checked here. Color distinctness is, because colors identify groups.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde_json::{Map, Value};

use crate::consts::{GROUP_COUNT, GROUP_SIZE, MAX_MISTAKES, MIN_MISTAKES};
use crate::puzzle::{Group, GroupColor, PuzzleDocument, Settings, Version};

/// Why a value failed validation. Paths use `groups[1].words[3]` notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unsupported document version: {0}")]
    UnsupportedVersion(String),
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("`{path}` must be {expected}")]
    WrongType { path: String, expected: &'static str },
    #[error("`{path}` must have exactly {expected} entries, found {found}")]
    WrongLength { path: String, expected: usize, found: usize },
    #[error("`{path}` is out of range: {value}")]
    OutOfRange { path: String, value: String },
    #[error("`{path}` is not a known color: {value}")]
    UnknownColor { path: String, value: String },
    #[error("color `{0}` is used by more than one group")]
    DuplicateColor(GroupColor),
    #[error("`{0}` must not be empty")]
    EmptyWord(String),
}

/// Validate a decoded JSON value as a version-1 puzzle document.
///
/// # Errors
///
/// Returns the first [`SchemaError`] encountered, walking fields in document
/// order after the version check.
pub fn validate(raw: &Value) -> Result<PuzzleDocument, SchemaError> {
    let root = object(raw, "$")?;

    let version = parse_version(required(root, "v", "v")?)?;
    let title = optional_string(root, "title", "title")?;
    let groups = parse_groups(required(root, "groups", "groups")?)?;
    let settings = parse_settings(required(root, "settings", "settings")?)?;

    Ok(PuzzleDocument { version, title, groups, settings })
}

fn parse_version(value: &Value) -> Result<Version, SchemaError> {
    value
        .as_u64()
        .and_then(Version::from_number)
        .ok_or_else(|| SchemaError::UnsupportedVersion(value.to_string()))
}

fn parse_groups(value: &Value) -> Result<[Group; GROUP_COUNT], SchemaError> {
    let items = array(value, "groups", GROUP_COUNT)?;

    let mut groups = Vec::with_capacity(GROUP_COUNT);
    for (index, item) in items.iter().enumerate() {
        let group = parse_group(item, &format!("groups[{index}]"))?;
        if groups.iter().any(|seen: &Group| seen.color == group.color) {
            return Err(SchemaError::DuplicateColor(group.color));
        }
        groups.push(group);
    }

    groups.try_into().map_err(|rest: Vec<Group>| SchemaError::WrongLength {
        path: "groups".into(),
        expected: GROUP_COUNT,
        found: rest.len(),
    })
}

fn parse_group(value: &Value, path: &str) -> Result<Group, SchemaError> {
    let fields = object(value, path)?;

    let name = optional_string(fields, "name", &format!("{path}.name"))?;

    let color_path = format!("{path}.color");
    let raw_color = string(required(fields, "color", &color_path)?, &color_path)?;
    let color = GroupColor::parse(raw_color).ok_or_else(|| SchemaError::UnknownColor {
        path: color_path.clone(),
        value: raw_color.to_owned(),
    })?;

    let words_path = format!("{path}.words");
    let items = array(required(fields, "words", &words_path)?, &words_path, GROUP_SIZE)?;
    let mut words = Vec::with_capacity(GROUP_SIZE);
    for (index, item) in items.iter().enumerate() {
        let word_path = format!("{words_path}[{index}]");
        let word = string(item, &word_path)?;
        if word.is_empty() {
            return Err(SchemaError::EmptyWord(word_path));
        }
        words.push(word.to_owned());
    }
    let words = words.try_into().map_err(|rest: Vec<String>| SchemaError::WrongLength {
        path: words_path,
        expected: GROUP_SIZE,
        found: rest.len(),
    })?;

    Ok(Group { name, color, words })
}

fn parse_settings(value: &Value) -> Result<Settings, SchemaError> {
    let fields = object(value, "settings")?;

    let shuffle_path = "settings.shuffleOnLoad";
    let shuffle_on_load = required(fields, "shuffleOnLoad", shuffle_path)?
        .as_bool()
        .ok_or_else(|| wrong_type(shuffle_path, "a boolean"))?;

    let mistakes_path = "settings.maxMistakes";
    let raw = required(fields, "maxMistakes", mistakes_path)?;
    let number = raw.as_i64().ok_or_else(|| {
        if raw.is_u64() { out_of_range(mistakes_path, raw) } else { wrong_type(mistakes_path, "an integer") }
    })?;
    if !(i64::from(MIN_MISTAKES)..=i64::from(MAX_MISTAKES)).contains(&number) {
        return Err(out_of_range(mistakes_path, number));
    }
    let max_mistakes = u8::try_from(number).map_err(|_| out_of_range(mistakes_path, number))?;

    Ok(Settings { shuffle_on_load, max_mistakes })
}

// =============================================================================
// VALUE ACCESSORS
// =============================================================================

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| wrong_type(path, "an object"))
}

fn array<'a>(value: &'a Value, path: &str, len: usize) -> Result<&'a [Value], SchemaError> {
    let items = value.as_array().ok_or_else(|| wrong_type(path, "an array"))?;
    if items.len() != len {
        return Err(SchemaError::WrongLength { path: path.to_owned(), expected: len, found: items.len() });
    }
    Ok(items)
}

fn string<'a>(value: &'a Value, path: &str) -> Result<&'a str, SchemaError> {
    value.as_str().ok_or_else(|| wrong_type(path, "a string"))
}

fn required<'a>(fields: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value, SchemaError> {
    fields.get(key).ok_or_else(|| SchemaError::MissingField(path.to_owned()))
}

/// An absent key is `None`; a present key must hold a string (`null` included).
fn optional_string(fields: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>, SchemaError> {
    fields
        .get(key)
        .map(|value| string(value, path).map(str::to_owned))
        .transpose()
}

fn wrong_type(path: &str, expected: &'static str) -> SchemaError {
    SchemaError::WrongType { path: path.to_owned(), expected }
}

fn out_of_range(path: &str, value: impl ToString) -> SchemaError {
    SchemaError::OutOfRange { path: path.to_owned(), value: value.to_string() }
}
