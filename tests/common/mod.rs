// tests/common/mod.rs
//
// Hand-written facility pages laid out like the live FacilityData.aspx page.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub struct Page {
    pub name: Option<&'static str>,
    pub abbrev: Option<&'static str>,
    pub address: Option<&'static str>,
    pub campus: Option<&'static str>,
    /// Raw cell text, entities allowed.
    pub lat_long: Option<(&'static str, &'static str)>,
}

impl Page {
    pub fn full() -> Self {
        Self {
            name: Some("Memorial Union"),
            abbrev: Some("MU"),
            address: Some("301 E Orange St"),
            campus: Some("Tempe"),
            lat_long: Some(("33.4242", "-111.9281")),
        }
    }

    pub fn empty() -> Self {
        Self { name: None, abbrev: None, address: None, campus: None, lat_long: None }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = vec![
            "<html>".into(),
            "<body>".into(),
            "<h1>Facility Data</h1>".into(),
            "<table class=\"facility\">".into(),
        ];

        let single = |out: &mut Vec<String>, label: &str, id: &str, value: &str| {
            out.push("<tr>".into());
            out.push(format!("    <td>{label}</td>"));
            out.push("</tr><tr>".into());
            out.push(format!("    <td><span id=\"{id}\">{value}</span></td>"));
            out.push("</tr>".into());
        };

        if let Some(v) = self.name    { single(&mut out, "FACILITY COMMON NAME",  "lblName",   v); }
        if let Some(v) = self.abbrev  { single(&mut out, "FACILITY ABBREVIATION", "lblAbbrev", v); }
        if let Some(v) = self.address { single(&mut out, "FACILITY ADDRESS",      "lblAddr",   v); }
        if let Some(v) = self.campus  { single(&mut out, "CAMPUS/SITE LOCATION",  "lblCampus", v); }

        if let Some((lat, long)) = self.lat_long {
            out.push("<tr>".into());
            out.push("    <td>FACILITY LATITUDE, LONGITUDE</td>".into());
            out.push("</tr>".into());
            out.push("<tr>".into());
            out.push(format!("    <td>{lat}</td><td>{long}</td>"));
            out.push("</tr>".into());
        }

        out.push("</table>".into());
        out.push("</body>".into());
        out.push("</html>".into());
        out
    }

    /// CRLF-joined with a final line break, like the server sends it.
    pub fn html(&self) -> String {
        let mut s = self.lines().join("\r\n");
        s.push_str("\r\n");
        s
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("facility_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
