use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use smart_diff::{
    analyze_text_changes, select_strategy, smart_diff, DiffSegment, DiffStrategy, SegmentKind,
    SmartDiff, TextDiff,
};

#[test]
fn test_pure_insertion() {
    // Empty old text means everything was added
    assert_eq!(
        smart_diff("", "Paracetamol"),
        vec![DiffSegment::added("Paracetamol")]
    );
}

#[test]
fn test_pure_deletion() {
    assert_eq!(
        smart_diff("Paracetamol", ""),
        vec![DiffSegment::removed("Paracetamol")]
    );
}

#[test]
fn test_identical_texts() {
    assert_eq!(
        smart_diff("Obat batuk", "Obat batuk"),
        vec![DiffSegment::unchanged("Obat batuk")]
    );
    // Even the empty string comes back as one unchanged segment
    assert_eq!(smart_diff("", ""), vec![DiffSegment::unchanged("")]);
}

#[test]
fn test_abbreviation_expansion_uses_character_diff() {
    let old = "Obat dgn dosis";
    let new = "Obat dengan dosis";

    let analysis = analyze_text_changes(old, new);
    assert!(analysis.has_abbreviation_expansion);
    assert_eq!(select_strategy(&analysis), DiffStrategy::Character);

    // The edit is split inside the word, not swapped as a whole word
    assert_eq!(
        smart_diff(old, new),
        vec![
            DiffSegment::unchanged("Obat d"),
            DiffSegment::added("en"),
            DiffSegment::unchanged("g"),
            DiffSegment::added("a"),
            DiffSegment::unchanged("n dosis"),
        ]
    );
}

#[test]
fn test_number_unit_change_uses_word_diff() {
    let old = "Dosis 500mg";
    let new = "Dosis 250mg";

    let analysis = analyze_text_changes(old, new);
    assert!(analysis.has_number_unit_changes);
    assert!(!analysis.has_abbreviation_expansion);
    assert!(!analysis.has_punctuation_only_changes);
    assert_eq!(select_strategy(&analysis), DiffStrategy::Word);

    // 500mg and 250mg are replaced as whole tokens
    assert_eq!(
        smart_diff(old, new),
        vec![
            DiffSegment::unchanged("Dosis "),
            DiffSegment::removed("500mg"),
            DiffSegment::added("250mg"),
        ]
    );
}

#[test]
fn test_punctuation_only_change() {
    let old = "Halo, Dunia!";
    let new = "Halo Dunia";

    let analysis = analyze_text_changes(old, new);
    assert!(analysis.has_punctuation_only_changes);

    let diff = SmartDiff::compute(old, new);
    assert_eq!(diff.strategy(), DiffStrategy::Character);
    assert_snapshot!(TextDiff::render_inline(diff.segments()), @"Halo[-,-] Dunia[-!-]");
}

#[test]
fn test_word_replacement() {
    let old = "Obat batuk anak";
    let new = "Obat flu anak";

    let analysis = analyze_text_changes(old, new);
    assert!(analysis.has_word_replacements);
    assert!(!analysis.has_punctuation_only_changes);

    let diff = SmartDiff::compute(old, new);
    assert_eq!(diff.strategy(), DiffStrategy::Word);
    assert_snapshot!(TextDiff::render_inline(diff.segments()), @"Obat [-batuk-]{+flu+} anak");
}

#[test]
fn test_clean_word_change_wins_over_character_similarity() {
    // Character similarity is above 0.8 here, but the inserted word is
    // clearer as a word-level change
    let old = "Tablet salut selaput 10 strip";
    let new = "Tablet salut selaput isi 10 strip";

    let analysis = analyze_text_changes(old, new);
    assert!(analysis.has_clean_word_changes);
    assert!(analysis.word_similarity > 0.6);
    assert!(analysis.character_similarity > 0.8);

    let diff = SmartDiff::compute(old, new);
    assert_eq!(diff.strategy(), DiffStrategy::Word);
    assert_snapshot!(
        TextDiff::render_inline(diff.segments()),
        @"Tablet salut selaput{+ isi+} 10 strip"
    );
}

#[test]
fn test_small_typo_uses_character_diff() {
    let old = "Amoxicillin";
    let new = "Amoxicilin";

    let diff = SmartDiff::compute(old, new);

    assert_eq!(diff.strategy(), DiffStrategy::Character);
    assert_eq!(
        diff.segments(),
        &[
            DiffSegment::unchanged("Amoxici"),
            DiffSegment::removed("l"),
            DiffSegment::unchanged("lin"),
        ]
    );
}

#[test]
fn test_unrelated_texts_use_word_diff() {
    let old = "Vitamin C";
    let new = "Antasida sirup";

    let diff = SmartDiff::compute(old, new);

    assert_eq!(diff.strategy(), DiffStrategy::Word);
    assert_eq!(
        diff.segments(),
        &[
            DiffSegment::removed("Vitamin"),
            DiffSegment::added("Antasida"),
            DiffSegment::unchanged(" "),
            DiffSegment::removed("C"),
            DiffSegment::added("sirup"),
        ]
    );
}

#[test]
fn test_smart_diff_summary() {
    let diff = SmartDiff::compute("Dosis 500mg", "Dosis 250mg");
    let summary = diff.summary();

    assert!(summary.has_changes());
    assert_eq!(summary.added_chars, 5);
    assert_eq!(summary.removed_chars, 5);
    assert_eq!(summary.unchanged_chars, 6);

    let identical = SmartDiff::compute("Dosis 500mg", "Dosis 500mg");
    assert_eq!(identical.strategy(), DiffStrategy::Identical);
    assert!(!identical.summary().has_changes());
    assert!(identical
        .segments()
        .iter()
        .all(|s| s.kind == SegmentKind::Unchanged));
}
