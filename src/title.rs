//! # Title Detection
//!
//! Suggests a song title from unstructured pasted text.
//!
//! ## Rules
//! Lines are scanned in order. Blank lines, section markers and metadata lines
//! (`Intro:`, `Tom:` by default) are skipped. The first remaining line wins
//! unless it is predominantly chords, as judged by [`TitleHeuristic`].
//!
//! ## Tolerance
//! Titles occasionally contain stray chord-like tokens ("Amazing Grace" scans
//! as `Am` and `G`), so a line is only rejected when chords make up most of
//! it, or when there are several chords and almost nothing else.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chord::{find_chord_matches, ChordToken};
use crate::classify::is_structural_marker;
use crate::config::EngineConfig;

/// Chord-density thresholds for rejecting title candidates.
///
/// These are empirical values, not derived ones. Tune them rather than trust
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TitleHeuristic {
    /// A line whose chord characters exceed this share of its length is a
    /// chord line.
    pub chord_ratio: f64,
    /// With more than this many chords...
    pub dense_min_matches: usize,
    /// ...and fewer than this many non-chord characters, a line is a chord
    /// line.
    pub dense_max_residual: usize,
}

impl Default for TitleHeuristic {
    fn default() -> Self {
        Self {
            chord_ratio: 0.5,
            dense_min_matches: 2,
            dense_max_residual: 5,
        }
    }
}

impl TitleHeuristic {
    /// Judge a trimmed line given its valid chord matches. Lengths are in
    /// characters.
    pub fn is_chord_line(&self, trimmed: &str, chords: &[ChordToken<'_>]) -> bool {
        if chords.is_empty() {
            return false;
        }
        let line_len = trimmed.chars().count();
        let chord_len: usize = chords.iter().map(ChordToken::char_len).sum();
        let residual = line_len.saturating_sub(chord_len);

        chord_len as f64 / line_len as f64 > self.chord_ratio
            || (chords.len() > self.dense_min_matches && residual < self.dense_max_residual)
    }
}

/// Suggest a title using the default settings. Empty when nothing qualifies.
///
/// ```
/// use chordsheet::extract_title;
///
/// let sheet = "Imagine\n[Verse]\nC  G  Am  F\nImagine there's no heaven";
/// assert_eq!(extract_title(sheet), "Imagine");
/// ```
pub fn extract_title(text: &str) -> String {
    extract_title_with_options(text, &EngineConfig::default())
}

pub fn extract_title_with_options(text: &str, config: &EngineConfig) -> String {
    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || is_structural_marker(trimmed)
            || config.is_metadata_line(trimmed)
        {
            continue;
        }

        let chords = find_chord_matches(trimmed);
        if config.title_heuristic.is_chord_line(trimmed, &chords) {
            trace!(line = trimmed, chords = chords.len(), "skipping chord line");
            continue;
        }

        debug!(title = trimmed, "title candidate found");
        return trimmed.to_string();
    }
    String::new()
}
