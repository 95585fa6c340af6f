use crate::chord::parse_chord;
use crate::classify::is_structural_marker;
use crate::pitch::PitchClass;

/// Split a line into alternating runs of whitespace and non-whitespace,
/// keeping both so the line can be rebuilt byte for byte.
fn split_keep_whitespace(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut run_start = 0;
    let mut in_space = None;

    for (idx, ch) in line.char_indices() {
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != is_space) {
            pieces.push(&line[run_start..idx]);
            run_start = idx;
        }
        in_space = Some(is_space);
    }
    if run_start < line.len() {
        pieces.push(&line[run_start..]);
    }
    pieces
}

/// Transpose one whitespace-free token, or return it unchanged if it is not a
/// complete chord with a recognized root.
fn transpose_token(token: &str, semitones: i32) -> String {
    let Some(chord) = parse_chord(token) else {
        return token.to_string();
    };
    let Some(root) = chord.root_pitch_class() else {
        return token.to_string();
    };

    let mut transposed = root.transpose(semitones).spelling().to_string();
    if let Some(quality) = chord.quality {
        transposed.push_str(quality.as_str());
    }
    if let Some(ext) = chord.extension {
        transposed.push_str(ext);
    }

    if let Some(bass) = chord.bass {
        transposed.push('/');
        match PitchClass::from_spelling(bass) {
            Some(pc) => transposed.push_str(pc.transpose(semitones).spelling()),
            // Unknown bass is carried over as written
            None => transposed.push_str(bass),
        }
    }

    transposed
}

/// Transpose every chord token in a line by `semitones`.
///
/// Blank lines and section markers come back verbatim. Other tokens are
/// matched whole, so words that merely start like a chord are left alone.
/// Whitespace is preserved exactly. Output always uses sharp spellings, even
/// for a shift of zero.
///
/// ```
/// use chordsheet::transpose_line;
///
/// assert_eq!(transpose_line("G/B    Em7", 2), "A/C#    F#m7");
/// assert_eq!(transpose_line("Db", 0), "C#");
/// assert_eq!(transpose_line("[Chorus]", 5), "[Chorus]");
/// ```
pub fn transpose_line(line: &str, semitones: i32) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_structural_marker(trimmed) {
        return line.to_string();
    }

    split_keep_whitespace(line)
        .into_iter()
        .map(|piece| {
            if piece.trim().is_empty() {
                piece.to_string()
            } else {
                transpose_token(piece, semitones)
            }
        })
        .collect()
}

/// Transpose every line of a chord sheet.
pub fn transpose_text(text: &str, semitones: i32) -> String {
    text.split('\n')
        .map(|line| transpose_line(line, semitones))
        .collect::<Vec<_>>()
        .join("\n")
}
