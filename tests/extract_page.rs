// tests/extract_page.rs
//
// Field extraction from facility pages, no network.
mod common;

use common::Page;
use facility_scrape::facility::{FacilityRecord, Field, FieldValue};
use facility_scrape::specs::facility::{extract, extract_with, ExtractError, FieldRule, Segments};

#[test]
fn full_page_yields_every_field() {
    let rec = extract(&Page::full().html()).unwrap();

    assert_eq!(rec.common_name, FieldValue::from("Memorial Union"));
    assert_eq!(rec.abbreviation, FieldValue::from("MU"));
    assert_eq!(rec.address, FieldValue::from("301 E Orange St"));
    assert_eq!(rec.campus, FieldValue::from("Tempe"));
    assert_eq!(rec.coordinates, FieldValue::from("33.4242,-111.9281"));
    // The page never carries the code; the driver tags it.
    assert!(rec.number.is_absent());
}

#[test]
fn missing_labels_stay_absent_and_leave_others_alone() {
    let page = Page { abbrev: None, campus: None, ..Page::full() };
    let rec = extract(&page.html()).unwrap();

    assert!(rec.abbreviation.is_absent());
    assert!(rec.campus.is_absent());
    assert_eq!(rec.common_name, FieldValue::from("Memorial Union"));
    assert_eq!(rec.address, FieldValue::from("301 E Orange St"));
    assert_eq!(rec.coordinates, FieldValue::from("33.4242,-111.9281"));
}

#[test]
fn page_without_labels_is_all_sentinels() {
    let rec = extract(&Page::empty().html()).unwrap();
    assert_eq!(rec, FacilityRecord::default());

    let row = rec.with_number("00X").to_row();
    assert_eq!(row, vec!["00X", "0", "0", "0", "0", "0"]);
}

#[test]
fn coordinate_entities_are_decoded() {
    let page = Page { lat_long: Some(("33.4242", "&#45;111.9281")), ..Page::full() };
    let rec = extract(&page.html()).unwrap();
    assert_eq!(rec.coordinates.as_text(), Some("33.4242,-111.9281"));

    let page = Page { lat_long: Some(("33.4242", "&#x2D;111.9281")), ..Page::full() };
    let rec = extract(&page.html()).unwrap();
    assert_eq!(rec.coordinates.as_text(), Some("33.4242,-111.9281"));
}

#[test]
fn only_coordinates_are_unescaped() {
    let page = Page { name: Some("Art &amp; Design North"), ..Page::full() };
    let rec = extract(&page.html()).unwrap();
    assert_eq!(rec.common_name.as_text(), Some("Art &amp; Design North"));
}

#[test]
fn lf_only_pages_read_the_same() {
    let lf = Page::full().lines().join("\n");
    assert_eq!(extract(&lf).unwrap(), extract(&Page::full().html()).unwrap());
}

#[test]
fn later_label_overwrites_earlier_value() {
    let mut lines = Page::full().lines();
    let tail = lines.split_off(lines.len() - 3);
    lines.extend([
        "<tr>".to_string(),
        "<td>FACILITY COMMON NAME</td>".to_string(),
        "</tr><tr>".to_string(),
        "<td><span id=\"lblName2\">Memorial Union Annex</span></td>".to_string(),
        "</tr>".to_string(),
    ]);
    lines.extend(tail);

    let rec = extract(&lines.join("\r\n")).unwrap();
    assert_eq!(rec.common_name.as_text(), Some("Memorial Union Annex"));
}

#[test]
fn label_too_close_to_the_end_is_ignored() {
    let page = [
        "<td>FACILITY COMMON NAME</td>",
        "",
        "<td><span>Too Late</span></td>",
        "</tr>",
    ]
    .join("\r\n");
    assert!(extract(&page).unwrap().common_name.is_absent());
}

#[test]
fn value_line_without_enough_segments_is_an_error() {
    let page = [
        "<table>",
        "<td>FACILITY ABBREVIATION</td>",
        "</tr><tr>",
        "MU",
        "</tr>",
        "</table>",
        "",
    ]
    .join("\r\n");

    let err = extract(&page).unwrap_err();
    assert_eq!(
        err,
        ExtractError::MissingSegment { label: "FACILITY ABBREVIATION", line: 4, index: 4 }
    );
}

#[test]
fn custom_rule_table_swaps_the_policy() {
    const RULES: &[FieldRule] = &[FieldRule {
        field: Field::Campus,
        label: "SITE",
        offset: 1,
        segments: Segments::One(2),
        unescape: true,
    }];
    let page = ["<td>SITE</td>", "<b>West &amp; North</b>", "", "", "", ""].join("\n");

    let rec = extract_with(&page, RULES).unwrap();
    assert_eq!(rec.campus.as_text(), Some("West & North"));
    assert!(rec.common_name.is_absent());
}
