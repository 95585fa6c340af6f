//! # Error Types
//!
//! The text engine itself never fails: extraction, title detection,
//! transposition and highlighting are total over any input. Errors only come
//! from the layers around it.
//!
//! ## Error Types
//! - `ConfigError` - Invalid YAML or out-of-range engine settings
//! - `MissingTitle` - A song without a usable title
//! - `NoChords` - A song whose extracted chords are empty
//! - `MissingRepertoireName` - A repertoire created with a blank name
//! - `Io` - A file could not be read

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::ConfigError("chord-spacing must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: chord-spacing must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The song has no title, and none could be detected.
    #[error("Song title is empty")]
    MissingTitle,

    /// Nothing survived chord extraction.
    #[error("No chords found in song text")]
    NoChords,

    #[error("Repertoire name is empty")]
    MissingRepertoireName,

    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
