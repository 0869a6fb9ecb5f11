// src/core/html.rs
// Line-level helpers for pages we read by position rather than by DOM query.

use scraper::Html;

/// Split a page into lines the way the facility pages are laid out
/// (`\r\n`), while tolerating bare `\n`. A trailing line break yields a
/// trailing empty line, same as a plain split would.
pub fn split_lines(page: &str) -> Vec<&str> {
    page.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// Trim the line and cut it on every markup delimiter (`<`, `>`, `:`).
///
/// `<td><span>Name</span></td>` → `["", "td", "", "span", "Name", "/span", "", "/td", ""]`
pub fn markup_segments(line: &str) -> Vec<&str> {
    line.trim()
        .split(['<', '>', ':'])
        .collect()
}

/// Decode HTML character references (`&#45;`, `&#x2D;`, `&amp;`, `&nbsp;` …)
/// to literal characters. Text without `&` is returned as-is.
///
/// html5ever also accepts legacy named references without the closing `;`
/// (`&amp b` → `& b`). Coordinate cells never carry those.
pub fn unescape_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let frag = Html::parse_fragment(s);
    frag.root_element().text().collect()
}
