//! Chord highlighting for display
//!
//! Splits chord text into spans so a viewer can emphasize the chords. Each
//! line is scanned from the start on its own; nothing carries over between
//! lines or calls.
//!
//! Only standalone chords are emphasized: a match touching a letter or digit
//! on either side (the `C` in `[Chorus]`) stays plain.

use serde::Serialize;

use crate::chord::{scan_chords, ChordToken};

/// A run of text, flagged when it is a recognized chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub is_chord: bool,
}

impl<'a> Span<'a> {
    pub fn chord(text: &'a str) -> Self {
        Self { text, is_chord: true }
    }

    pub fn plain(text: &'a str) -> Self {
        Self { text, is_chord: false }
    }
}

fn is_standalone(line: &str, chord: &ChordToken<'_>) -> bool {
    let before = line[..chord.start].chars().next_back();
    let after = line[chord.end()..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Spans for one line. Grammar matches whose root is not recognized stay in
/// the surrounding plain text.
pub fn highlight_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut plain_start = 0;

    for chord in scan_chords(line)
        .into_iter()
        .filter(|c| c.is_valid() && is_standalone(line, c))
    {
        if plain_start < chord.start {
            spans.push(Span::plain(&line[plain_start..chord.start]));
        }
        spans.push(Span::chord(chord.text));
        plain_start = chord.end();
    }
    if plain_start < line.len() {
        spans.push(Span::plain(&line[plain_start..]));
    }
    spans
}

/// Spans for every line of `content`, one inner `Vec` per `\n` line.
///
/// ```
/// use chordsheet::{render_highlighted, Span};
///
/// let lines = render_highlighted("[Verse]\nAm  G");
/// assert_eq!(lines[1], vec![Span::chord("Am"), Span::plain("  "), Span::chord("G")]);
/// ```
pub fn render_highlighted(content: &str) -> Vec<Vec<Span<'_>>> {
    content.split('\n').map(highlight_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        assert_eq!(highlight_line("[Chorus]"), vec![Span::plain("[Chorus]")]);
        assert!(highlight_line("").is_empty());
    }

    #[test]
    fn test_chords_and_gaps() {
        assert_eq!(
            highlight_line("  C7M/G   Dm"),
            vec![
                Span::plain("  "),
                Span::chord("C7M/G"),
                Span::plain("   "),
                Span::chord("Dm"),
            ]
        );
    }

    #[test]
    fn test_chords_inside_words_are_plain() {
        assert_eq!(
            highlight_line("[Chorus] Cmaj7 G"),
            vec![Span::plain("[Chorus] Cmaj7 "), Span::chord("G")]
        );
        assert_eq!(highlight_line("(C)"), vec![Span::plain("("), Span::chord("C"), Span::plain(")")]);
    }

    #[test]
    fn test_invalid_root_is_plain_and_merged() {
        assert_eq!(
            highlight_line("x Fb7 A"),
            vec![Span::plain("x Fb7 "), Span::chord("A")]
        );
    }

    #[test]
    fn test_multibyte_positions() {
        assert_eq!(
            highlight_line("é B° ü"),
            vec![Span::plain("é "), Span::chord("B°"), Span::plain(" ü")]
        );
    }

    #[test]
    fn test_lines_are_independent() {
        let lines = render_highlighted("C\nC\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[1]);
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_serializes_for_viewers() {
        let json = serde_json::to_string(&highlight_line("G x")).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"G","is_chord":true},{"text":" x","is_chord":false}]"#
        );
    }
}
