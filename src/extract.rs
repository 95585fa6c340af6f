//! Chord extraction
//!
//! Reduces pasted song text to its chord skeleton. Chord-only lines are
//! re-emitted with a fixed separator, section markers are kept, and everything
//! else becomes a blank line so the shape of the song survives. Runs of blank
//! lines are then collapsed to one.

use tracing::debug;

use crate::classify::{classify_line, LineKind};
use crate::config::EngineConfig;

/// Extract the chord-only skeleton of `text` using the default settings.
///
/// ```
/// use chordsheet::extract_chords;
///
/// let sheet = "[Verse]\nC  G  Am  F\nHello world";
/// assert_eq!(extract_chords(sheet), "[Verse]\nC      G      Am      F\n");
/// ```
pub fn extract_chords(text: &str) -> String {
    extract_chords_with_options(text, &EngineConfig::default())
}

/// Extract chords with a custom separator width.
pub fn extract_chords_with_options(text: &str, config: &EngineConfig) -> String {
    let separator = " ".repeat(config.chord_spacing);
    let mut chord_lines = 0;
    let mut discarded = 0;

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| match classify_line(line) {
            LineKind::Blank => String::new(),
            LineKind::StructuralMarker => line.trim().to_string(),
            LineKind::ChordOnly(chords) => {
                chord_lines += 1;
                chords
                    .iter()
                    .map(|chord| chord.text)
                    .collect::<Vec<_>>()
                    .join(separator.as_str())
            }
            LineKind::Prose => {
                discarded += 1;
                String::new()
            }
        })
        .collect();

    debug!(chord_lines, discarded, "extracted chord lines");
    collapse_blank_runs(lines).join("\n")
}

/// Keep at most one blank line out of every run of consecutive blank lines.
fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut collapsed = Vec::with_capacity(lines.len());
    let mut last_was_blank = false;
    for line in lines {
        let is_blank = line.trim().is_empty();
        if !(is_blank && last_was_blank) {
            collapsed.push(line);
        }
        last_was_blank = is_blank;
    }
    collapsed
}
