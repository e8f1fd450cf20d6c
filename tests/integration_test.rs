//! Integration tests for goog-routes
//!
//! These tests run the whole pipeline against a local HTTP server.

use goog_routes::config::Config;
use goog_routes::error::RoutesError;
use goog_routes::{run, RunSummary};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;

const SAMPLE: &str = include_str!("../src/tests/test_data/goog_sample.json");

const SAMPLE_ROUTES: &str = "\
route ADD 8.8.4.0 MASK 255.255.255.0 0.0.0.0
route ADD 8.8.8.0 MASK 255.255.255.0 0.0.0.0
route ADD 8.34.208.0 MASK 255.255.240.0 0.0.0.0
route ADD 34.0.0.0 MASK 255.254.0.0 0.0.0.0
";

/// Serve `count` requests with the same canned response, return the URL.
fn serve(status: &'static str, body: &'static str, count: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        for _ in 0..count {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/ipranges/goog.json")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build client")
}

fn config(dir: &Path, url: String) -> Config {
    Config {
        url,
        extras_file: Some(dir.join("extras.json")),
        routes_file: dir.join("routes.txt"),
    }
}

#[tokio::test]
async fn test_full_run_without_extras_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("200 OK", SAMPLE, 1));
    let mut out = Vec::new();

    let summary = run(&config, &client(), &mut out).await.expect("run failed");

    assert_eq!(
        summary,
        RunSummary {
            fetched: 4,
            extras: 0,
            written: 4,
            skipped: 0,
            failed_writes: 0,
        }
    );
    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_ROUTES);
    assert_eq!(
        std::fs::read_to_string(&config.routes_file).unwrap(),
        SAMPLE_ROUTES
    );
}

#[tokio::test]
async fn test_full_run_with_extras_and_bad_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("200 OK", SAMPLE, 1));
    std::fs::write(
        dir.path().join("extras.json"),
        r#"["10.10.10.5/8", "not-a-cidr", "192.168.1.0/24"]"#,
    )
    .unwrap();
    let mut out = Vec::new();

    let summary = run(&config, &client(), &mut out).await.expect("run failed");

    assert_eq!(summary.fetched, 4);
    assert_eq!(summary.extras, 3);
    assert_eq!(summary.written, 6);
    assert_eq!(summary.skipped, 1);

    let expected = format!(
        "{SAMPLE_ROUTES}route ADD 10.0.0.0 MASK 255.0.0.0 0.0.0.0\nroute ADD 192.168.1.0 MASK 255.255.255.0 0.0.0.0\n"
    );
    let routes = std::fs::read_to_string(&config.routes_file).unwrap();
    assert_eq!(routes, expected);
    assert!(!routes.contains("not-a-cidr"));
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_malformed_extras_falls_back_to_fetched_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("200 OK", SAMPLE, 1));
    std::fs::write(dir.path().join("extras.json"), r#"["10.0.0.0/8", 7]"#).unwrap();

    let summary = run(&config, &client(), std::io::sink())
        .await
        .expect("run failed");

    assert_eq!(summary.extras, 0);
    assert_eq!(
        std::fs::read_to_string(&config.routes_file).unwrap(),
        SAMPLE_ROUTES
    );
}

#[tokio::test]
async fn test_extras_stage_disabled() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("extras.json"), r#"["10.0.0.0/8"]"#).unwrap();
    let config = Config {
        extras_file: None,
        ..config(dir.path(), serve("200 OK", SAMPLE, 1))
    };

    let summary = run(&config, &client(), std::io::sink())
        .await
        .expect("run failed");

    assert_eq!(summary.extras, 0);
    assert_eq!(summary.written, 4);
}

#[tokio::test]
async fn test_second_run_is_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("200 OK", SAMPLE, 2));
    std::fs::write(dir.path().join("extras.json"), r#"["1.2.3.0/24"]"#).unwrap();

    run(&config, &client(), std::io::sink())
        .await
        .expect("first run failed");
    let first = std::fs::read(&config.routes_file).unwrap();

    run(&config, &client(), std::io::sink())
        .await
        .expect("second run failed");
    let second = std::fs::read(&config.routes_file).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap().lines().count(),
        5,
        "routes file must be overwritten, not appended"
    );
}

#[tokio::test]
async fn test_http_error_status_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("404 Not Found", "{}", 1));

    let err = run(&config, &client(), std::io::sink()).await.unwrap_err();

    assert!(
        matches!(err, RoutesError::HttpStatus { status: 404, .. }),
        "{err:?}"
    );
    assert!(err.is_fatal());
    assert!(!config.routes_file.exists(), "no output file after a failed fetch");
}

#[tokio::test]
async fn test_invalid_json_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config(dir.path(), serve("200 OK", "{\"prefixes\": [", 1));

    let err = run(&config, &client(), std::io::sink()).await.unwrap_err();

    assert!(matches!(err, RoutesError::Decode { .. }), "{err:?}");
    assert!(!config.routes_file.exists());
}

#[tokio::test]
async fn test_output_create_failure_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        routes_file: dir.path().join("missing").join("routes.txt"),
        ..config(dir.path(), serve("200 OK", SAMPLE, 1))
    };
    let mut out = Vec::new();

    let err = run(&config, &client(), &mut out).await.unwrap_err();

    assert!(matches!(err, RoutesError::OutputCreate { .. }), "{err:?}");
    assert!(out.is_empty(), "nothing printed before the output file exists");
}
