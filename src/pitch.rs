//! # Pitch Table
//!
//! The twelve equal-tempered pitch classes and their spellings.
//!
//! ## Spellings
//! Input accepts both sharp and flat spellings (`C#` and `Db` are the same
//! pitch class). Output always uses the sharp-preferring canonical table, so a
//! flat chord re-rendered after transposition comes back spelled with a sharp.
//!
//! ```text
//! 0=C  1=C#/Db  2=D  3=D#/Eb  4=E  5=F  6=F#/Gb  7=G  8=G#/Ab  9=A  10=A#/Bb  11=B
//! ```
//!
//! Lowercase roots, double accidentals and theoretical spellings such as `Cb`
//! or `E#` are not in the table.

use std::fmt;

/// Sharp-preferring display spelling for each pitch class, indexed by class.
pub const CANONICAL_SPELLINGS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the 12 chromatic steps, independent of octave. Always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(value: u8) -> Option<Self> {
        (value < 12).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Look up a root spelling. Exact and case-sensitive.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        let value = match spelling {
            "C" => 0,
            "C#" | "Db" => 1,
            "D" => 2,
            "D#" | "Eb" => 3,
            "E" => 4,
            "F" => 5,
            "F#" | "Gb" => 6,
            "G" => 7,
            "G#" | "Ab" => 8,
            "A" => 9,
            "A#" | "Bb" => 10,
            "B" => 11,
            _ => return None,
        };
        Some(Self(value))
    }

    /// Shift by `semitones` (any sign, any magnitude), wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> Self {
        let shifted = (i64::from(self.0) + i64::from(semitones)).rem_euclid(12);
        Self(shifted as u8)
    }

    pub fn spelling(self) -> &'static str {
        CANONICAL_SPELLINGS[usize::from(self.0)]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Pitch class for a root spelling, or `None` if the spelling is not recognized.
///
/// ```
/// use chordsheet::pitch_class_of;
///
/// assert_eq!(pitch_class_of("C#"), pitch_class_of("Db"));
/// assert_eq!(pitch_class_of("H"), None);
/// ```
pub fn pitch_class_of(spelling: &str) -> Option<PitchClass> {
    PitchClass::from_spelling(spelling)
}

pub fn canonical_spelling_of(pitch_class: PitchClass) -> &'static str {
    pitch_class.spelling()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enharmonic_spellings_share_a_class() {
        for (sharp, flat) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")] {
            assert_eq!(pitch_class_of(sharp), pitch_class_of(flat), "{} vs {}", sharp, flat);
        }
    }

    #[test]
    fn test_unrecognized_spellings() {
        for spelling in ["c", "H", "Cb", "E#", "B#", "Fb", "C##", "Dbb", "", "Do"] {
            assert_eq!(pitch_class_of(spelling), None, "{:?} should not resolve", spelling);
        }
    }

    #[test]
    fn test_canonical_spelling_prefers_sharps() {
        let bb = pitch_class_of("Bb").unwrap();
        assert_eq!(bb.value(), 10);
        assert_eq!(canonical_spelling_of(bb), "A#");
        assert_eq!(bb.to_string(), "A#");
    }

    #[test]
    fn test_every_canonical_spelling_round_trips() {
        for (value, spelling) in CANONICAL_SPELLINGS.iter().enumerate() {
            let pc = pitch_class_of(spelling).unwrap();
            assert_eq!(usize::from(pc.value()), value);
        }
    }

    #[test]
    fn test_transpose_wraps_both_directions() {
        let c = PitchClass::new(0).unwrap();
        assert_eq!(c.transpose(-1).spelling(), "B");
        assert_eq!(c.transpose(13).spelling(), "C#");
        assert_eq!(c.transpose(-25).spelling(), "B");
        assert_eq!(c.transpose(i32::MIN).value(), (i64::from(i32::MIN).rem_euclid(12)) as u8);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(PitchClass::new(11).is_some());
        assert!(PitchClass::new(12).is_none());
    }
}
