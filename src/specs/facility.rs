// src/specs/facility.rs
//! Page reader for the facility data page (`FacilityData.aspx?bNum=<code>`).
//!
//! The page is a two-column layout table. Each datum sits a fixed number of
//! lines below the `<td>` carrying its label, wrapped in a fixed tag nesting:
//!
//! ```text
//! <td>FACILITY COMMON NAME</td>        ← label line (i)
//! ...
//! <td><span id="..">Memorial Union</span></td>   ← value line (i + 2), segment 4
//! ```
//!
//! The coordinate row is one line deeper and holds two cells (latitude in
//! segment 2, longitude in segment 6), possibly with entity-escaped minus signs.
//!
//! All of that lives in [`FIELD_RULES`]. The scanner itself knows nothing
//! about particular fields.

use thiserror::Error;
use tracing::debug;

use crate::core::html::{markup_segments, split_lines, unescape_entities};
use crate::facility::{FacilityRecord, Field, FieldValue};

/// Lines kept clear at the end of the page; the scan stops before them.
const SCAN_MARGIN: usize = 4;
/// Lines skipped after a labelled row has been consumed.
const MATCH_STRIDE: usize = 3;

/// Which delimiter-split segment(s) of the value line hold the datum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segments {
    One(usize),
    /// Two segments joined with `,`.
    Joined(usize, usize),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    /// Substring that marks the label line.
    pub label: &'static str,
    /// Value line = label line + offset.
    pub offset: usize,
    pub segments: Segments,
    /// Decode HTML entities in the final value.
    pub unescape: bool,
}

/// Label → position policy for the facility page. Tried top to bottom.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule { field: Field::CommonName,   label: "FACILITY COMMON NAME",  offset: 2, segments: Segments::One(4),       unescape: false },
    FieldRule { field: Field::Abbreviation, label: "FACILITY ABBREVIATION", offset: 2, segments: Segments::One(4),       unescape: false },
    FieldRule { field: Field::Address,      label: "FACILITY ADDRESS",      offset: 2, segments: Segments::One(4),       unescape: false },
    FieldRule { field: Field::Campus,       label: "CAMPUS/SITE LOCATION",  offset: 2, segments: Segments::One(4),       unescape: false },
    FieldRule { field: Field::Coordinates,  label: "FACILITY LATITUDE,",    offset: 3, segments: Segments::Joined(2, 6), unescape: true  },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{label}: value line {line} is past the end of the page")]
    MissingLine { label: &'static str, line: usize },

    #[error("{label}: line {line} has no segment {index}")]
    MissingSegment { label: &'static str, line: usize, index: usize },
}

impl FieldRule {
    /// Read this rule's value relative to the label line `at` (0-based).
    fn read(&self, lines: &[&str], at: usize) -> Result<String, ExtractError> {
        let ix = at + self.offset;
        // Error line numbers are 1-based, like an editor shows them.
        let line = lines
            .get(ix)
            .ok_or(ExtractError::MissingLine { label: self.label, line: ix + 1 })?;

        let segs = markup_segments(line);
        let pick = |index: usize| {
            segs.get(index)
                .map(|s| s.trim())
                .ok_or(ExtractError::MissingSegment { label: self.label, line: ix + 1, index })
        };

        let value = match self.segments {
            Segments::One(a) => s!(pick(a)?),
            Segments::Joined(a, b) => format!("{},{}", pick(a)?, pick(b)?),
        };

        Ok(if self.unescape { unescape_entities(&value) } else { value })
    }
}

/// Extract the page-derived fields using [`FIELD_RULES`].
/// `number` is left absent; the caller tags the record with its code.
pub fn extract(page: &str) -> Result<FacilityRecord, ExtractError> {
    extract_with(page, FIELD_RULES)
}

/// Same scan with a caller-supplied rule table.
pub fn extract_with(page: &str, rules: &[FieldRule]) -> Result<FacilityRecord, ExtractError> {
    let lines = split_lines(page);
    let mut record = FacilityRecord::default();

    let mut i = 0usize;
    while i + SCAN_MARGIN < lines.len() {
        match rules.iter().find(|r| lines[i].contains(r.label)) {
            Some(rule) => {
                let value = rule.read(&lines, i)?;
                debug!(field = ?rule.field, value = %value, "extracted");
                record.set(rule.field, FieldValue::Text(value));
                i += MATCH_STRIDE;
            }
            None => i += 1,
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_page_is_never_scanned() {
        // Four lines: the label would match, but the margin keeps the scan out.
        let page = "<td>FACILITY COMMON NAME</td>\n\n<td><span>X</span></td>\n";
        assert_eq!(extract(page).unwrap(), FacilityRecord::default());
    }

    #[test]
    fn labels_match_as_substrings_in_rule_order() {
        let page = [
            "<tr><td>FACILITY ADDRESS / FACILITY COMMON NAME</td>",
            "",
            "<td><span>both</span></td>",
            "", "", "", "",
        ].join("\r\n");
        let rec = extract(&page).unwrap();
        // First rule in the table wins.
        assert_eq!(rec.common_name, FieldValue::from("both"));
        assert!(rec.address.is_absent());
    }
}
