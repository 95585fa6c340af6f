//! Algebraic properties of extraction and transposition.

use chordsheet::{extract_chords, transpose_line, transpose_text};
use proptest::prelude::*;

/// Text biased towards chord-like material: roots, accidentals, extensions,
/// brackets, punctuation and a little lowercase noise.
fn sheet_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"[A-Gbm#°/ 479(),\-\[\]{}xyé\n\t]{0,80}")
        .expect("valid regex")
}

fn chord_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"[A-Hbm#°/ 4679M()\-\[\]xsu\t]{0,40}").expect("valid regex")
}

proptest! {
    #[test]
    fn extraction_is_idempotent(text in sheet_text()) {
        let once = extract_chords(&text);
        prop_assert_eq!(extract_chords(&once), once);
    }

    #[test]
    fn extraction_is_idempotent_on_any_text(text in any::<String>()) {
        let once = extract_chords(&text);
        prop_assert_eq!(extract_chords(&once), once);
    }

    #[test]
    fn extraction_never_leaves_blank_runs(text in sheet_text()) {
        let extracted = extract_chords(&text);
        prop_assert!(!extracted.contains("\n\n\n"));
    }

    #[test]
    fn transposition_composes(line in chord_line(), a in -40i32..40, b in -40i32..40) {
        prop_assert_eq!(
            transpose_line(&transpose_line(&line, a), b),
            transpose_line(&line, a + b)
        );
    }

    #[test]
    fn twelve_semitones_is_zero(line in chord_line(), n in -5i32..5) {
        prop_assert_eq!(transpose_line(&line, 12 * n), transpose_line(&line, 0));
    }

    #[test]
    fn zero_shift_is_identity_without_flats(line in chord_line()) {
        // Flat roots are respelled with sharps even at a zero shift.
        prop_assume!(!line.contains('b'));
        prop_assert_eq!(transpose_line(&line, 0), line);
    }

    #[test]
    fn transposition_preserves_line_count(text in sheet_text(), n in -12i32..12) {
        let transposed = transpose_text(&text, n);
        prop_assert_eq!(transposed.split('\n').count(), text.split('\n').count());
    }

    #[test]
    fn transposition_preserves_whitespace_layout(line in chord_line(), n in -12i32..12) {
        let spaces = |s: &str| s.chars().filter(|c| c.is_whitespace()).count();
        let transposed = transpose_line(&line, n);
        prop_assert_eq!(spaces(&transposed), spaces(&line));
    }
}
