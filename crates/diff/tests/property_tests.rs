use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffOp};
use smart_diff::{
    analyze_text_changes, reconstruct_new, reconstruct_old, smart_diff, tokenize, DiffSegment,
    EditScript, TextDiff,
};

/// Text built from words that trigger the classifiers
fn pharmacy_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "Obat", "dgn", "dengan", "yg", "yang", "dosis", "500mg", "250mg", "10", "12", "tab",
        "tablet", "Halo,", "Halo", "Dunia!", "sirup", "°C",
    ]);
    let separators = prop::sample::select(vec![" ", "  ", "\n", "\t"]);

    prop::collection::vec((words, separators), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{}{}", word, sep))
            .collect()
    })
}

/// Arbitrary short text, including multibyte characters
fn short_text() -> impl Strategy<Value = String> {
    "[a-cA-C0-9 ,.!é🚀\n]{0,16}"
}

fn text_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        (pharmacy_text(), pharmacy_text()),
        (short_text(), short_text()),
    ]
}

fn unchanged_units<T: Eq + std::hash::Hash + Ord>(a: &[T], b: &[T]) -> usize {
    capture_diff_slices(Algorithm::Myers, a, b)
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum()
}

fn assert_well_formed(segments: &[DiffSegment]) -> Result<(), TestCaseError> {
    for pair in segments.windows(2) {
        prop_assert_ne!(pair[0].kind, pair[1].kind);
    }
    for segment in segments {
        prop_assert!(!segment.text.is_empty());
    }
    Ok(())
}

proptest! {
    #[test]
    fn smart_diff_round_trips((old, new) in text_pair()) {
        let segments = smart_diff(&old, &new);
        prop_assert_eq!(reconstruct_new(&segments), new.clone());
        prop_assert_eq!(reconstruct_old(&segments), old.clone());
    }

    #[test]
    fn smart_diff_segments_are_maximal_and_non_empty((old, new) in text_pair()) {
        prop_assume!(old != new);
        assert_well_formed(&smart_diff(&old, &new))?;
    }

    #[test]
    fn identical_texts_are_one_unchanged_segment(text in text_pair().prop_map(|(old, _)| old)) {
        prop_assert_eq!(smart_diff(&text, &text), vec![DiffSegment::unchanged(text.clone())]);
    }

    #[test]
    fn both_granularities_round_trip((old, new) in text_pair()) {
        for segments in [TextDiff::chars(&old, &new), TextDiff::words(&old, &new)] {
            prop_assert_eq!(reconstruct_new(&segments), new.clone());
            prop_assert_eq!(reconstruct_old(&segments), old.clone());
            if old != new {
                assert_well_formed(&segments)?;
            }
        }
    }

    #[test]
    fn metrics_stay_in_unit_range((old, new) in text_pair()) {
        let analysis = analyze_text_changes(&old, &new);
        prop_assert!((0.0..=1.0).contains(&analysis.word_similarity));
        prop_assert!((0.0..=1.0).contains(&analysis.character_similarity));
        prop_assert!((0.0..=1.0).contains(&analysis.change_ratio));
    }

    #[test]
    fn character_script_is_a_longest_common_subsequence((old, new) in text_pair()) {
        let a: Vec<char> = old.chars().collect();
        let b: Vec<char> = new.chars().collect();

        let script = EditScript::compute(&a, &b);
        prop_assert_eq!(script.unchanged_count(), unchanged_units(&a, &b));
    }

    #[test]
    fn word_script_is_a_longest_common_subsequence((old, new) in text_pair()) {
        let a = tokenize(&old);
        let b = tokenize(&new);

        let script = EditScript::compute(&a, &b);
        prop_assert_eq!(script.unchanged_count(), unchanged_units(&a, &b));
    }
}
