//! # Line Classification
//!
//! Decides what a single line of pasted song text is:
//!
//! - **Blank**: nothing but whitespace
//! - **Structural marker**: a section header wholly wrapped in `[...]`,
//!   `(...)` or `{...}`
//! - **Chord-only**: valid chords account for all of the line's word-like
//!   content
//! - **Prose**: anything else (lyrics, titles, chords mixed with words)
//!
//! The chord-only decision is two explicit steps: [`find_chord_matches`]
//! collects valid chords, then [`is_chord_only`] checks what is left once they
//! are removed. Leftovers are stripped of whitespace and light punctuation
//! (`. , ! ? ; : ' " -`); a remaining run of two or more ASCII letters means the
//! line is prose. Stray single letters (`x`, `N.C.`-style marks) are tolerated.

use crate::chord::{find_chord_matches, ChordToken};

const IGNORED_PUNCTUATION: [char; 9] = ['.', ',', '!', '?', ';', ':', '\'', '"', '-'];

const MARKER_BRACKETS: [(char, char); 3] = [('[', ']'), ('(', ')'), ('{', '}')];

/// Classification of one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    StructuralMarker,
    /// The valid chords found on the line, in order
    ChordOnly(Vec<ChordToken<'a>>),
    Prose,
}

/// True when a trimmed line is wrapped in one bracket pair.
pub fn is_structural_marker(trimmed: &str) -> bool {
    MARKER_BRACKETS
        .iter()
        .any(|&(open, close)| trimmed.starts_with(open) && trimmed.ends_with(close))
}

/// True when `matches` (from [`find_chord_matches`] on the same `line`) cover
/// all word-like content of the line. An empty match list is never chord-only,
/// and neither is a match list whose positions do not fit `line`.
pub fn is_chord_only(line: &str, matches: &[ChordToken<'_>]) -> bool {
    if matches.is_empty() {
        return false;
    }

    let mut residual = String::with_capacity(line.len());
    let mut cursor = 0;
    for chord in matches {
        let Some(gap) = line.get(cursor..chord.start) else {
            return false;
        };
        residual.push_str(gap);
        cursor = chord.end();
    }
    let Some(tail) = line.get(cursor..) else {
        return false;
    };
    residual.push_str(tail);

    let mut letter_run = 0;
    for ch in residual
        .chars()
        .filter(|ch| !ch.is_whitespace() && !IGNORED_PUNCTUATION.contains(ch))
    {
        if ch.is_ascii_alphabetic() {
            letter_run += 1;
            if letter_run >= 2 {
                return false;
            }
        } else {
            letter_run = 0;
        }
    }
    true
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_structural_marker(trimmed) {
        return LineKind::StructuralMarker;
    }

    let matches = find_chord_matches(line);
    if is_chord_only(line, &matches) {
        LineKind::ChordOnly(matches)
    } else {
        LineKind::Prose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord_texts<'a>(kind: &LineKind<'a>) -> Vec<&'a str> {
        match kind {
            LineKind::ChordOnly(chords) => chords.iter().map(|c| c.text).collect(),
            other => panic!("expected chord-only line, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t "), LineKind::Blank);
        assert_eq!(classify_line("\r"), LineKind::Blank);
    }

    #[test]
    fn test_structural_markers() {
        assert!(is_structural_marker("[Verse]"));
        assert!(is_structural_marker("(Chorus)"));
        assert!(is_structural_marker("{Bridge}"));
        assert!(is_structural_marker("[]"));
        assert!(!is_structural_marker("[Verse"));
        assert!(!is_structural_marker("(Chorus]"));
        assert_eq!(classify_line("  [Refrão]  "), LineKind::StructuralMarker);
    }

    #[test]
    fn test_chord_only_line() {
        let kind = classify_line("C  G  Am  F");
        assert_eq!(chord_texts(&kind), vec!["C", "G", "Am", "F"]);
    }

    #[test]
    fn test_chord_line_with_punctuation_and_single_letters() {
        assert_eq!(chord_texts(&classify_line("C - G, Am! F.")), vec!["C", "G", "Am", "F"]);
        assert_eq!(chord_texts(&classify_line("| C | G |")), vec!["C", "G"]);
        assert_eq!(chord_texts(&classify_line("C x G")), vec!["C", "G"]);
    }

    #[test]
    fn test_metadata_prefix_is_ordinary_prose() {
        assert_eq!(classify_line("Intro: C G"), LineKind::Prose);
    }

    #[test]
    fn test_lyrics_are_prose() {
        assert_eq!(classify_line("Hello world"), LineKind::Prose);
        assert_eq!(classify_line("Imagine there's no heaven"), LineKind::Prose);
    }

    #[test]
    fn test_chords_mixed_with_words_are_prose() {
        assert_eq!(classify_line("Amazing Grace"), LineKind::Prose);
        assert_eq!(classify_line("C  G  play softly"), LineKind::Prose);
    }

    #[test]
    fn test_letters_separated_by_punctuation_join_up() {
        // Stripping punctuation glues "x" and "y" into a two-letter run.
        let matches = find_chord_matches("C x-y G");
        assert!(!is_chord_only("C x-y G", &matches));
    }

    #[test]
    fn test_invalid_root_leaves_letters_behind() {
        // "Fb" is a grammar match but not a chord, so it stays in the residual.
        assert_eq!(classify_line("Fb C"), LineKind::Prose);
    }

    #[test]
    fn test_matches_from_another_line() {
        let long = "C      G      Am";
        let matches = find_chord_matches(long);
        assert!(!is_chord_only("C G", &matches));
        // Positions landing inside a multibyte character.
        let matches = find_chord_matches(" G");
        assert!(!is_chord_only("é", &matches));
    }

    #[test]
    fn test_no_matches_is_not_chord_only() {
        assert!(!is_chord_only("123 456", &[]));
        assert_eq!(classify_line("123 456"), LineKind::Prose);
    }
}
