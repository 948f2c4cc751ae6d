//! Creator form validation and document construction.
//!
//! The form holds exactly what the creator typed. [`validate`] reports every
//! problem at once (nothing short-circuits) so the editor can mark each
//! offending input; [`build_document`] refuses to produce a document while
//! any problem remains.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;
use std::fmt;

use crate::consts::{DEFAULT_MAX_MISTAKES, GROUP_COUNT, GROUP_SIZE, MAX_MISTAKES, MIN_MISTAKES};
use crate::game::normalize_word;
use crate::puzzle::{Group, GroupColor, PuzzleDocument, Settings};

/// Raw inputs for one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub name: String,
    pub words: [String; GROUP_SIZE],
}

/// Raw inputs of the whole editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    /// Groups in color order: yellow, green, blue, purple.
    pub groups: [GroupForm; GROUP_COUNT],
    pub shuffle_on_load: bool,
    /// Kept wide so out-of-range input can be reported instead of clamped.
    pub max_mistakes: i64,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            groups: Default::default(),
            shuffle_on_load: true,
            max_mistakes: i64::from(DEFAULT_MAX_MISTAKES),
        }
    }
}

/// Input a validation error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Zero-based group and word position.
    Word { group: usize, word: usize },
    MaxMistakes,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word { group, word } => write!(f, "group-{group}-word-{word}"),
            Self::MaxMistakes => f.write_str("maxMistakes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: String) -> Self {
        Self { field, message }
    }
}

/// Check every rule and return all violations in input order.
///
/// - an empty (after trimming) word is reported at its position;
/// - a word repeated inside its group is reported at each repeat;
/// - a word appearing in more than one group is reported at every occurrence;
/// - a mistake budget outside 1..=10 is reported once.
///
/// Word comparison ignores case and surrounding whitespace.
#[must_use]
pub fn validate(form: &CreateForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // normalized word -> groups it appears in
    let mut groups_by_word: HashMap<String, Vec<usize>> = HashMap::new();
    for (g, group) in form.groups.iter().enumerate() {
        for word in &group.words {
            let normalized = normalize_word(word);
            if !normalized.is_empty() {
                groups_by_word.entry(normalized).or_default().push(g);
            }
        }
    }

    for (g, group) in form.groups.iter().enumerate() {
        for (w, word) in group.words.iter().enumerate() {
            let field = Field::Word { group: g, word: w };
            let trimmed = word.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::new(field, format!("Word {} in group {} is empty", w + 1, g + 1)));
                continue;
            }

            let normalized = normalize_word(trimmed);
            let repeated_in_group = group.words[..w].iter().any(|earlier| normalize_word(earlier) == normalized);
            if repeated_in_group {
                errors.push(FieldError::new(field, format!("Duplicate word \"{trimmed}\" in group {}", g + 1)));
            }

            let in_other_group = groups_by_word
                .get(&normalized)
                .is_some_and(|found_in| found_in.iter().any(|&other| other != g));
            if in_other_group {
                errors.push(FieldError::new(field, format!("Word \"{trimmed}\" is used in multiple groups")));
            }
        }
    }

    if !(i64::from(MIN_MISTAKES)..=i64::from(MAX_MISTAKES)).contains(&form.max_mistakes) {
        errors.push(mistakes_error());
    }

    errors
}

/// Turn a valid form into a document: words trimmed, blank title and names
/// dropped, colors assigned in canonical order.
///
/// # Errors
///
/// Returns every [`FieldError`] from [`validate`] if there is at least one.
pub fn build_document(form: &CreateForm) -> Result<PuzzleDocument, Vec<FieldError>> {
    let errors = validate(form);
    if !errors.is_empty() {
        return Err(errors);
    }
    let max_mistakes = u8::try_from(form.max_mistakes).map_err(|_| vec![mistakes_error()])?;

    let groups = std::array::from_fn(|i| {
        let group = &form.groups[i];
        Group {
            name: non_blank(&group.name),
            color: GroupColor::ALL[i],
            words: group.words.clone().map(|word| word.trim().to_owned()),
        }
    });

    let doc = PuzzleDocument::new(
        non_blank(&form.title),
        groups,
        Settings { shuffle_on_load: form.shuffle_on_load, max_mistakes },
    );
    tracing::debug!(title = ?doc.title, max_mistakes, "puzzle document built");
    Ok(doc)
}

fn mistakes_error() -> FieldError {
    FieldError::new(
        Field::MaxMistakes,
        format!("Max mistakes must be between {MIN_MISTAKES} and {MAX_MISTAKES}"),
    )
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
