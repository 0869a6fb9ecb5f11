// tests/http_fetch.rs
//
// HttpFetcher against a one-shot HTTP server on loopback.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use facility_scrape::config::options::RunOptions;
use facility_scrape::core::net::{FetchError, HttpFetcher, PageSource};
use reqwest::StatusCode;

/// Accept one connection, answer it with `response`, hand back the raw request head.
fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/UFRM/FDS/FacilityData.aspx?bNum=", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (base, handle)
}

fn fetcher_for(base: &str) -> HttpFetcher {
    let opts = RunOptions { base_url: base.to_string(), ..RunOptions::default() };
    HttpFetcher::new(&opts).unwrap()
}

#[test]
fn not_found_is_a_status_error_naming_the_url() {
    let (base, server) = serve_once(
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    );
    let fetcher = fetcher_for(&base);

    let err = fetcher.fetch_page("001").unwrap_err();
    server.join().unwrap();

    match err {
        FetchError::Status { url, status } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(url, format!("{base}001"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ok_returns_body_verbatim_and_sends_user_agent() {
    let body = "<td>FACILITY COMMON NAME</td>\r\n\r\n<td><span>Memorial Union</span></td>\r\n";
    let (base, server) = serve_once(format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    let fetcher = fetcher_for(&base);
    assert_eq!(fetcher.url_for("00X"), format!("{base}00X"));

    let page = fetcher.fetch_page("00X").unwrap();
    let request = server.join().unwrap();

    assert_eq!(page, body);
    assert!(request.starts_with("GET /UFRM/FDS/FacilityData.aspx?bNum=00X HTTP/1.1\r\n"));

    let agent = request
        .lines()
        .find_map(|l| l.split_once(':').filter(|(k, _)| k.eq_ignore_ascii_case("user-agent")))
        .map(|(_, v)| v.trim().to_string());
    assert_eq!(agent.as_deref(), Some(concat!("facility_scrape/", env!("CARGO_PKG_VERSION"))));
}
