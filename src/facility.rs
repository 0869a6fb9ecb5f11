// src/facility.rs
//! The one entity this crate produces: a facility record with six scalar fields.
//!
//! Each field is either found on the page ([`FieldValue::Text`]) or not
//! ([`FieldValue::Absent`]). Absent fields render as the literal `0` in output
//! tables, which is what downstream spreadsheets already expect. Keep the two
//! apart in memory; only the rendered cell collapses them.

use std::fmt;

/// Cell text written for a field the page never labelled.
pub const ABSENT_SENTINEL: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Absent,
    Text(String),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Text(s) => Some(s),
        }
    }

    /// Output cell text (`0` for absent).
    pub fn cell(&self) -> &str {
        self.as_text().unwrap_or(ABSENT_SENTINEL)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cell())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s!(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Column identity, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Number,
    CommonName,
    Abbreviation,
    Address,
    Campus,
    Coordinates,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Number,
        Field::CommonName,
        Field::Abbreviation,
        Field::Address,
        Field::Campus,
        Field::Coordinates,
    ];

    /// Column header in the output table.
    pub fn header(self) -> &'static str {
        match self {
            Field::Number       => "Facility Number",
            Field::CommonName   => "Facility Name",
            Field::Abbreviation => "Abbreviation",
            Field::Address      => "Address",
            Field::Campus       => "Campus/Site Location",
            Field::Coordinates  => "Longitude/Latitude",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacilityRecord {
    pub number: FieldValue,
    pub common_name: FieldValue,
    pub abbreviation: FieldValue,
    pub address: FieldValue,
    pub campus: FieldValue,
    pub coordinates: FieldValue,
}

impl FacilityRecord {
    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Number       => &self.number,
            Field::CommonName   => &self.common_name,
            Field::Abbreviation => &self.abbreviation,
            Field::Address      => &self.address,
            Field::Campus       => &self.campus,
            Field::Coordinates  => &self.coordinates,
        }
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        let slot = match field {
            Field::Number       => &mut self.number,
            Field::CommonName   => &mut self.common_name,
            Field::Abbreviation => &mut self.abbreviation,
            Field::Address      => &mut self.address,
            Field::Campus       => &mut self.campus,
            Field::Coordinates  => &mut self.coordinates,
        };
        *slot = value;
    }

    /// Tag with the facility code it was fetched for.
    pub fn with_number(mut self, code: &str) -> Self {
        self.number = FieldValue::from(code);
        self
    }

    /// Six output cells in column order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| self.get(*f).to_string()).collect()
    }
}
