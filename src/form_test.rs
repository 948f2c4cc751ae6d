use super::*;
use crate::fixtures::letters_puzzle;

fn form(words: [[&str; 4]; 4]) -> CreateForm {
    CreateForm {
        groups: words.map(|group| GroupForm { name: String::new(), words: group.map(str::to_owned) }),
        ..CreateForm::default()
    }
}

fn letters_form() -> CreateForm {
    let mut form = form([
        ["A", "B", "C", "D"],
        ["E", "F", "G", "H"],
        ["I", "J", "K", "L"],
        ["M", "N", "O", "P"],
    ]);
    form.shuffle_on_load = false;
    form
}

fn fields(errors: &[FieldError]) -> Vec<String> {
    errors.iter().map(|e| e.field.to_string()).collect()
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_form_has_no_errors() {
    assert!(validate(&letters_form()).is_empty());
}

#[test]
fn default_form_reports_every_empty_word() {
    let errors = validate(&CreateForm::default());
    assert_eq!(errors.len(), 16);
    assert_eq!(errors[0].field, Field::Word { group: 0, word: 0 });
    assert_eq!(errors[0].message, "Word 1 in group 1 is empty");
    assert_eq!(errors[15].field, Field::Word { group: 3, word: 3 });
}

#[test]
fn whitespace_only_word_is_empty() {
    let mut form = letters_form();
    form.groups[2].words[1] = "   ".into();
    let errors = validate(&form);
    assert_eq!(fields(&errors), ["group-2-word-1"]);
    assert_eq!(errors[0].message, "Word 2 in group 3 is empty");
}

#[test]
fn duplicate_within_group_reports_the_repeat() {
    let mut form = letters_form();
    form.groups[1].words[3] = " e ".into();
    let errors = validate(&form);
    assert_eq!(fields(&errors), ["group-1-word-3"]);
    assert_eq!(errors[0].message, "Duplicate word \"e\" in group 2");
}

#[test]
fn duplicate_across_groups_reports_each_occurrence() {
    let mut form = letters_form();
    form.groups[3].words[2] = "b".into();
    let errors = validate(&form);
    assert_eq!(fields(&errors), ["group-0-word-1", "group-3-word-2"]);
    assert_eq!(errors[0].message, "Word \"B\" is used in multiple groups");
    assert_eq!(errors[1].message, "Word \"b\" is used in multiple groups");
}

#[test]
fn word_repeated_in_and_across_groups_gets_both_errors() {
    let mut form = letters_form();
    form.groups[0].words[3] = "A".into();
    form.groups[2].words[0] = "a".into();
    let errors = validate(&form);
    assert_eq!(fields(&errors), ["group-0-word-0", "group-0-word-3", "group-0-word-3", "group-2-word-0"]);
    assert!(errors[1].message.starts_with("Duplicate word"));
    assert!(errors[2].message.contains("multiple groups"));
}

#[test]
fn mistakes_out_of_range() {
    for n in [0, 11, -1, 300] {
        let mut form = letters_form();
        form.max_mistakes = n;
        let errors = validate(&form);
        assert_eq!(errors.len(), 1, "max_mistakes {n}");
        assert_eq!(errors[0].field, Field::MaxMistakes);
        assert_eq!(errors[0].message, "Max mistakes must be between 1 and 10");
    }
}

#[test]
fn errors_do_not_short_circuit() {
    let mut form = letters_form();
    form.groups[0].words[0] = String::new();
    form.groups[1].words[0] = "F".into();
    form.max_mistakes = 0;
    let errors = validate(&form);
    assert_eq!(fields(&errors), ["group-0-word-0", "group-1-word-1", "maxMistakes"]);
}

#[test]
fn field_display_matches_editor_ids() {
    assert_eq!(Field::Word { group: 3, word: 0 }.to_string(), "group-3-word-0");
    assert_eq!(Field::MaxMistakes.to_string(), "maxMistakes");
}

// =============================================================
// build_document
// =============================================================

#[test]
fn build_document_from_valid_form() {
    let doc = build_document(&letters_form()).unwrap();
    assert_eq!(doc, letters_puzzle());
}

#[test]
fn build_document_trims_and_drops_blanks() {
    let mut form = letters_form();
    form.title = "  Party  ".into();
    form.groups[0].name = "   ".into();
    form.groups[1].name = " Second ".into();
    form.groups[2].words[0] = "  I ".into();
    let doc = build_document(&form).unwrap();
    assert_eq!(doc.title.as_deref(), Some("Party"));
    assert_eq!(doc.groups[0].name, None);
    assert_eq!(doc.groups[1].name.as_deref(), Some("Second"));
    assert_eq!(doc.groups[2].words[0], "I");
}

#[test]
fn build_document_assigns_canonical_colors() {
    let doc = build_document(&letters_form()).unwrap();
    let colors: Vec<_> = doc.groups.iter().map(|g| g.color).collect();
    assert_eq!(colors, GroupColor::ALL);
}

#[test]
fn build_document_blank_title_is_absent() {
    let mut form = letters_form();
    form.title = " \t".into();
    assert_eq!(build_document(&form).unwrap().title, None);
}

#[test]
fn build_document_refuses_invalid_form() {
    let mut form = letters_form();
    form.max_mistakes = 12;
    let errors = build_document(&form).unwrap_err();
    assert_eq!(errors[0].field, Field::MaxMistakes);
}

#[test]
fn built_document_survives_the_codec() {
    let mut form = letters_form();
    form.title = "Round trip".into();
    let doc = build_document(&form).unwrap();
    assert_eq!(crate::codec::decode(&crate::codec::encode(&doc)).unwrap(), doc);
}
