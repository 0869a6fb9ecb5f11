// src/codes.rs
// Facility code list: one code per line, order kept.
use std::{fs, path::Path};

use tracing::info;

use crate::error::{Error, Result};

/// Read the code list file. A missing file is fatal.
pub fn read_codes(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::ReadCodes { path: path.to_path_buf(), source })?;
    let codes = parse_codes(&text);
    info!(path = %path.display(), count = codes.len(), "loaded facility codes");
    Ok(codes)
}

/// One code per line, trailing whitespace trimmed.
///
/// A blank line in the middle is still a code (the empty one) and still gets
/// a row, so output rows line up with input lines. Only the break after the
/// last line does not start a new code.
pub fn parse_codes(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| s!(l.trim_end()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_keep_their_place() {
        assert_eq!(parse_codes("001\n\n00X\n"), vec!["001", "", "00X"]);
        assert_eq!(parse_codes("001  \r\n00X\t"), vec!["001", "00X"]);
        assert!(parse_codes("").is_empty());
    }
}
