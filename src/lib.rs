//! # chordsheet
//!
//! Turns pasted song text into a clean chord sheet.
//!
//! ## Pipeline
//! 1. [`extract_chords`] keeps chord lines and section markers, blanks lyrics
//! 2. [`extract_title`] suggests a title from the pasted text
//! 3. [`transpose_line`] / [`transpose_text`] shift chords by semitones
//! 4. [`render_highlighted`] splits a sheet into chord and plain spans
//!
//! Every step is a pure function of its input; nothing is cached or shared.
//!
//! ```rust
//! use chordsheet::{extract_chords, extract_title, transpose_text};
//!
//! let pasted = "Imagine\n[Verse]\nC  F7M  G\nImagine there's no heaven";
//! let sheet = extract_chords(pasted);
//! assert_eq!(extract_title(pasted), "Imagine");
//! assert_eq!(transpose_text(&sheet, 2), "\n[Verse]\nD      G7M      A\n");
//! ```

pub mod chord;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod pitch;
pub mod song;
pub mod title;
pub mod transpose;
pub mod viewer;

pub use chord::{find_chord_matches, parse_chord, ChordToken, Quality};
pub use classify::{classify_line, is_chord_only, LineKind};
pub use config::EngineConfig;
pub use error::SheetError;
pub use extract::{extract_chords, extract_chords_with_options};
pub use highlight::{render_highlighted, Span};
pub use pitch::{canonical_spelling_of, pitch_class_of, PitchClass};
pub use song::{Repertoire, Song, Songbook};
pub use title::{extract_title, extract_title_with_options, TitleHeuristic};
pub use transpose::{transpose_line, transpose_text};
pub use viewer::TransposeView;
