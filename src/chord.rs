//! Chord symbol grammar
//!
//! Recognizes chord tokens of the form `Root [Quality] [Extension] [/Bass]`:
//!
//! - **Root**: `A`-`G`, optionally followed by `#` or `b`
//! - **Quality**: `m` (minor) or `°` (diminished)
//! - **Extension**: one of [`EXTENSIONS`]
//! - **Bass**: `/` followed by another root (`G/B`, `F7M/C`)
//!
//! The same parser backs every caller: [`scan_chords`] walks a line and
//! returns every grammar match left to right, [`parse_chord`] matches a whole
//! token. A grammar match is only a *valid* chord if its root resolves in the
//! pitch table (`Cb` and `E#` match the grammar but are not valid).

use std::fmt;

use crate::pitch::PitchClass;

/// Closed set of chord extensions, ordered so that no entry is preceded by one
/// of its own prefixes (`7M` and `7(9-)` come before `7`, `13-` before `13`).
pub const EXTENSIONS: [&str; 13] = [
    "7(9-)", "7(9)", "7(4)", "add9", "sus4", "13-", "7M", "11", "13", "4", "6", "7", "9",
];

/// Chord quality marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Minor,
    Diminished,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Minor => "m",
            Quality::Diminished => "°",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grammar match borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// The full matched substring
    pub text: &'a str,
    /// Byte offset of the match in the scanned text
    pub start: usize,
    pub root: &'a str,
    pub quality: Option<Quality>,
    pub extension: Option<&'static str>,
    /// Bass root without the leading `/`
    pub bass: Option<&'a str>,
}

impl<'a> ChordToken<'a> {
    /// Byte offset just past the match
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length in characters (`°` counts once)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn root_pitch_class(&self) -> Option<PitchClass> {
        PitchClass::from_spelling(self.root)
    }

    pub fn bass_pitch_class(&self) -> Option<PitchClass> {
        self.bass.and_then(PitchClass::from_spelling)
    }

    /// True when the root resolves in the pitch table.
    pub fn is_valid(&self) -> bool {
        self.root_pitch_class().is_some()
    }
}

/// Parse a root at byte offset `at`, returning the offset just past it.
fn parse_root(text: &str, at: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if !matches!(bytes.get(at), Some(b'A'..=b'G')) {
        return None;
    }
    let mut end = at + 1;
    if matches!(bytes.get(end), Some(b'#') | Some(b'b')) {
        end += 1;
    }
    Some(end)
}

/// Match the chord grammar starting exactly at byte offset `start`.
///
/// Every component after the root is greedy; `start` must lie on a char
/// boundary.
pub fn parse_chord_at(text: &str, start: usize) -> Option<ChordToken<'_>> {
    let root_end = parse_root(text, start)?;
    let mut end = root_end;

    let quality = if text[end..].starts_with('m') {
        end += 1;
        Some(Quality::Minor)
    } else if text[end..].starts_with('°') {
        end += '°'.len_utf8();
        Some(Quality::Diminished)
    } else {
        None
    };

    let extension = EXTENSIONS
        .iter()
        .copied()
        .find(|ext| text[end..].starts_with(ext));
    if let Some(ext) = extension {
        end += ext.len();
    }

    // A slash only belongs to the chord when a root follows it
    let mut bass = None;
    if text[end..].starts_with('/') {
        if let Some(bass_end) = parse_root(text, end + 1) {
            bass = Some(&text[end + 1..bass_end]);
            end = bass_end;
        }
    }

    Some(ChordToken {
        text: &text[start..end],
        start,
        root: &text[start..root_end],
        quality,
        extension,
        bass,
    })
}

/// Match the chord grammar against a whole token.
///
/// Returns `None` unless the entire token is consumed. The root is not
/// validated here; check [`ChordToken::is_valid`].
///
/// ```
/// use chordsheet::chord::{parse_chord, Quality};
///
/// let chord = parse_chord("F#m7/C#").unwrap();
/// assert_eq!(chord.root, "F#");
/// assert_eq!(chord.quality, Some(Quality::Minor));
/// assert_eq!(chord.extension, Some("7"));
/// assert_eq!(chord.bass, Some("C#"));
///
/// assert!(parse_chord("Cmaj7").is_none());
/// ```
pub fn parse_chord(token: &str) -> Option<ChordToken<'_>> {
    parse_chord_at(token, 0).filter(|chord| chord.text.len() == token.len())
}

/// Every grammar match in `line`, left to right and non-overlapping.
///
/// Matches with an unrecognized root are included (and still consume their
/// text); callers filter on [`ChordToken::is_valid`].
pub fn scan_chords(line: &str) -> Vec<ChordToken<'_>> {
    let mut chords = Vec::new();
    let mut pos = 0;
    while let Some(ch) = line[pos..].chars().next() {
        match parse_chord_at(line, pos) {
            Some(chord) => {
                pos = chord.end();
                chords.push(chord);
            }
            None => pos += ch.len_utf8(),
        }
    }
    chords
}

/// Every valid chord in `line`.
pub fn find_chord_matches(line: &str) -> Vec<ChordToken<'_>> {
    scan_chords(line)
        .into_iter()
        .filter(ChordToken::is_valid)
        .collect()
}
