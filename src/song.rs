//! Songs, repertoires and songbook search
//!
//! A [`Song`] bundles what the editor saves: a title, the text as pasted, and
//! the extracted chord sheet. A [`Repertoire`] is a named, ordered set list of
//! song titles. Storage is the caller's business; this module only builds,
//! checks and searches them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::SheetError;
use crate::extract::extract_chords_with_options;
use crate::title::extract_title_with_options;
use crate::transpose::transpose_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub original_content: String,
    pub extracted_chords: String,
}

impl Song {
    /// Build a song from pasted text using the default settings.
    ///
    /// ```
    /// use chordsheet::Song;
    ///
    /// let song = Song::from_source("Wonderwall\n[Verse]\nEm7  G  Dsus4  A7(4)\nToday is gonna be the day");
    /// assert_eq!(song.title, "Wonderwall");
    /// assert_eq!(song.extracted_chords, "\n[Verse]\nEm7      G      Dsus4      A7(4)\n");
    /// ```
    pub fn from_source(text: &str) -> Self {
        Self::from_source_with_options(text, &EngineConfig::default())
    }

    /// Build a song from pasted text. The title is detected from the raw text,
    /// falling back to the extracted chords when the raw text offers none.
    pub fn from_source_with_options(text: &str, config: &EngineConfig) -> Self {
        let extracted_chords = extract_chords_with_options(text, config);
        let mut title = extract_title_with_options(text, config);
        if title.is_empty() {
            debug!("no title in pasted text, trying extracted chords");
            title = extract_title_with_options(&extracted_chords, config);
        }

        Self {
            title,
            original_content: text.to_string(),
            extracted_chords,
        }
    }

    /// Replace the detected title. Surrounding whitespace is dropped.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into().trim().to_string();
        self
    }

    /// Check the song is fit to save.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.title.trim().is_empty() {
            return Err(SheetError::MissingTitle);
        }
        if self.extracted_chords.trim().is_empty() {
            return Err(SheetError::NoChords);
        }
        Ok(())
    }

    /// Commit a transposition of the chord sheet. The original text is kept.
    pub fn transpose(&mut self, semitones: i32) {
        self.extracted_chords = transpose_text(&self.extracted_chords, semitones);
    }
}

/// A named set list. Songs are referenced by title, in play order, each at
/// most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repertoire {
    name: String,
    song_titles: Vec<String>,
}

impl Repertoire {
    /// Create an empty repertoire. The name is trimmed and must not be blank.
    pub fn new(name: &str) -> Result<Self, SheetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SheetError::MissingRepertoireName);
        }
        Ok(Self {
            name: name.to_string(),
            song_titles: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn song_titles(&self) -> &[String] {
        &self.song_titles
    }

    pub fn contains(&self, title: &str) -> bool {
        self.song_titles.iter().any(|t| t == title)
    }

    /// Add `title` to the end of the list, or remove it. Adding a title that is
    /// already present keeps its position.
    pub fn toggle_song(&mut self, title: &str, included: bool) {
        if included {
            if !self.contains(title) {
                self.song_titles.push(title.to_string());
            }
        } else {
            self.song_titles.retain(|t| t != title);
        }
        debug!(repertoire = %self.name, title, included, "repertoire membership");
    }
}

/// An in-memory collection of songs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Songbook {
    songs: Vec<Song>,
}

impl Songbook {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The first song with exactly this title.
    pub fn get(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.title == title)
    }

    /// Songs whose title starts with `term`, or whose chords contain it, sorted
    /// by title. Matching ignores case but not surrounding whitespace; an empty
    /// term matches every song.
    pub fn search(&self, term: &str) -> Vec<&Song> {
        self.navigable(term, None)
    }

    /// The songs a viewer can step through. With a repertoire only its songs
    /// are candidates (titles missing from the songbook are skipped), then the
    /// same filter and ordering as [`Songbook::search`] apply.
    pub fn navigable(&self, term: &str, repertoire: Option<&Repertoire>) -> Vec<&Song> {
        let candidates: Vec<&Song> = match repertoire {
            Some(repertoire) => repertoire
                .song_titles()
                .iter()
                .filter_map(|title| self.get(title))
                .collect(),
            None => self.songs.iter().collect(),
        };

        let term = term.to_lowercase();
        let mut found: Vec<&Song> = candidates
            .into_iter()
            .filter(|song| {
                song.title.to_lowercase().starts_with(&term)
                    || song.extracted_chords.to_lowercase().contains(&term)
            })
            .collect();
        found.sort_by_cached_key(|song| song.title.to_lowercase());
        found
    }
}
