//! Behavioural tests for [`GeminiCompletionProvider`] against a local
//! single-shot HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nutrigrow_core::{CompletionError, TextCompletion};
use nutrigrow_data::{GeminiCompletionProvider, GeminiConfig};
use rstest::rstest;

/// What the server saw of the request.
struct Captured {
    request_line: String,
    api_key: Option<String>,
    body: String,
}

/// Serve exactly one request with `status` and `body`, optionally stalling
/// before replying.
fn serve_once(status: &'static str, body: &'static str, stall: Duration) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");
        let mut content_length = 0;
        let mut api_key = None;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header");
            let header = line.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                match name.to_ascii_lowercase().as_str() {
                    "content-length" => {
                        content_length = value.trim().parse().expect("numeric length");
                    }
                    "x-goog-api-key" => api_key = Some(value.trim().to_owned()),
                    _ => {}
                }
            }
        }
        let mut raw_body = vec![0; content_length];
        reader.read_exact(&mut raw_body).expect("read body");

        thread::sleep(stall);
        let mut writer = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        // The client may already have given up after a timeout.
        let _ignored = writer.write_all(response.as_bytes());
        Captured {
            request_line: request_line.trim_end().to_owned(),
            api_key,
            body: String::from_utf8(raw_body).expect("utf-8 body"),
        }
    });
    (base_url, handle)
}

fn provider(base_url: &str, timeout: Duration) -> GeminiCompletionProvider {
    let config = GeminiConfig::new("test-key")
        .with_base_url(base_url)
        .with_model("gemini-test")
        .with_timeout(timeout);
    GeminiCompletionProvider::with_config(config).expect("provider should build")
}

#[rstest]
fn returns_candidate_text_and_sends_prompt() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"nutrition_recommendation"}]}}]}"#,
        Duration::ZERO,
    );

    let reply = provider(&base_url, Duration::from_secs(5)).complete("What should I eat?");

    assert_eq!(reply, Ok("nutrition_recommendation".to_owned()));
    let captured = server.join().expect("server thread");
    assert_eq!(
        captured.request_line,
        "POST /v1beta/models/gemini-test:generateContent HTTP/1.1"
    );
    assert_eq!(captured.api_key.as_deref(), Some("test-key"));
    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("json body");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "What should I eat?");
}

#[rstest]
fn maps_error_status_to_http_error() {
    let (base_url, server) = serve_once(
        "429 Too Many Requests",
        r#"{"error":{"code":429,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#,
        Duration::ZERO,
    );

    let err = provider(&base_url, Duration::from_secs(5))
        .complete("hello")
        .expect_err("should fail");

    assert!(
        matches!(err, CompletionError::HttpError { status: 429, .. }),
        "expected HttpError, got {err:?}"
    );
    server.join().expect("server thread");
}

#[rstest]
fn empty_candidates_are_an_empty_response() {
    let (base_url, server) = serve_once("200 OK", r#"{"candidates":[]}"#, Duration::ZERO);

    let err = provider(&base_url, Duration::from_secs(5))
        .complete("hello")
        .expect_err("should fail");

    assert_eq!(err, CompletionError::EmptyResponse);
    server.join().expect("server thread");
}

#[rstest]
fn non_json_body_is_a_parse_error() {
    let (base_url, server) = serve_once("200 OK", "not json", Duration::ZERO);

    let err = provider(&base_url, Duration::from_secs(5))
        .complete("hello")
        .expect_err("should fail");

    assert!(matches!(err, CompletionError::ParseError { .. }), "{err:?}");
    server.join().expect("server thread");
}

#[rstest]
fn slow_service_times_out() {
    let (base_url, server) = serve_once("200 OK", "{}", Duration::from_secs(3));

    let err = provider(&base_url, Duration::from_millis(500))
        .complete("hello")
        .expect_err("should time out");

    assert!(matches!(err, CompletionError::Timeout { .. }), "{err:?}");
    server.join().expect("server thread");
}

#[rstest]
fn refused_connection_is_a_network_error() {
    let base_url = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
        format!("http://{}", listener.local_addr().expect("local addr"))
    };

    let err = provider(&base_url, Duration::from_secs(2))
        .complete("hello")
        .expect_err("should fail");

    assert!(matches!(err, CompletionError::NetworkError { .. }), "{err:?}");
}
