// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use facility_scrape::specs::facility::extract;

/// A page shaped like FacilityData.aspx: lots of layout noise around the
/// five labelled rows.
fn sample_page() -> String {
    let mut lines: Vec<String> = Vec::new();
    for i in 0..400 {
        lines.push(format!("<div class=\"nav\"><a href=\"/n/{i}\">Link {i}</a></div>"));
    }
    let fields = [
        ("FACILITY COMMON NAME", "Memorial Union"),
        ("FACILITY ABBREVIATION", "MU"),
        ("FACILITY ADDRESS", "301 E Orange St"),
        ("CAMPUS/SITE LOCATION", "Tempe"),
    ];
    for (label, value) in fields {
        lines.push("<tr>".into());
        lines.push(format!("<td>{label}</td>"));
        lines.push("</tr><tr>".into());
        lines.push(format!("<td><span id=\"lbl\">{value}</span></td>"));
        lines.push("</tr>".into());
    }
    lines.push("<tr>".into());
    lines.push("<td>FACILITY LATITUDE, LONGITUDE</td>".into());
    lines.push("</tr>".into());
    lines.push("<tr>".into());
    lines.push("<td>33.4242</td><td>&#45;111.9281</td>".into());
    lines.push("</tr>".into());
    for _ in 0..200 {
        lines.push("<p>footer</p>".into());
    }
    lines.join("\r\n")
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();

    c.bench_function("extract_facility_page", |b| {
        b.iter(|| {
            let rec = extract(black_box(&page)).unwrap();
            black_box(rec)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
