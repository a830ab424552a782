use itertools::Itertools;

/// Converts CRLF and lone CR line endings to LF, so blank lines of Windows and old Mac files are
/// counted like any other.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Number of blank lines, i.e. non-overlapping occurrences of two consecutive LF characters.
/// A run of three LFs therefore counts once, a run of four counts twice.
pub fn count_blank_lines(text: &str) -> usize {
    text.matches("\n\n").count()
}

/// Collapses every run of consecutive LF characters into a single LF.
pub fn collapse_blank_lines(text: &str) -> String {
    text.chars()
        .dedup_by(|prev, next| *prev == '\n' && *next == '\n')
        .collect()
}
