//! # Engine Configuration
//!
//! Tunable settings for extraction and title detection, loadable from YAML.
//!
//! ## Format
//! Keys are kebab-case and every key is optional; missing keys take the
//! defaults shown here.
//!
//! ```yaml
//! chord-spacing: 6
//! title-heuristic:
//!   chord-ratio: 0.5
//!   dense-min-matches: 2
//!   dense-max-residual: 5
//! metadata-prefixes:
//!   - "intro:"
//!   - "tom:"
//! ```
//!
//! ## Example
//! ```rust
//! use chordsheet::EngineConfig;
//!
//! let config = EngineConfig::from_yaml("chord-spacing: 4")?;
//! assert_eq!(config.chord_spacing, 4);
//! assert_eq!(config.title_heuristic.chord_ratio, 0.5);
//! # Ok::<(), chordsheet::SheetError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SheetError;
use crate::title::TitleHeuristic;

/// Separator width between chords on an extracted line.
pub const DEFAULT_CHORD_SPACING: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    pub chord_spacing: usize,
    pub title_heuristic: TitleHeuristic,
    /// Line prefixes (case-insensitive) that never make a title
    pub metadata_prefixes: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chord_spacing: DEFAULT_CHORD_SPACING,
            title_heuristic: TitleHeuristic::default(),
            metadata_prefixes: vec!["intro:".to_string(), "tom:".to_string()],
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, SheetError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| SheetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading engine config");
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), SheetError> {
        if self.chord_spacing == 0 {
            return Err(SheetError::ConfigError(
                "chord-spacing must be at least 1".to_string(),
            ));
        }
        let ratio = self.title_heuristic.chord_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SheetError::ConfigError(format!(
                "title-heuristic.chord-ratio must be in (0, 1], got {}",
                ratio
            )));
        }
        Ok(())
    }

    /// True when a trimmed line starts with one of the metadata prefixes,
    /// ignoring case.
    pub fn is_metadata_line(&self, trimmed: &str) -> bool {
        let lowered = trimmed.to_lowercase();
        self.metadata_prefixes
            .iter()
            .any(|prefix| lowered.starts_with(&prefix.to_lowercase()))
    }
}
