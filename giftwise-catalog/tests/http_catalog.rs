#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! End-to-end coverage for [`HttpCatalogProvider`] against a local socket.
//!
//! Each test serves a single canned HTTP response from a loopback listener,
//! so no external service is required.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use giftwise_catalog::CatalogProvider;
use giftwise_catalog::CatalogError;
use giftwise_catalog::http::{HttpCatalogProvider, HttpCatalogProviderConfig};
use rstest::rstest;

/// Serve one response and return the URL to request.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0_u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/products")
}

/// Accept one connection and never answer it.
fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        }
    });
    format!("http://{addr}/products")
}

#[rstest]
fn fetches_and_normalises_products() {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"[{"id":1,"title":"Tea Mug","price":"9.5","category":"Kitchen","image":"mug.png"},{"title":"Scarf"}]"#,
    );
    let provider = HttpCatalogProvider::new(url).expect("provider builds");

    let catalog = provider.fetch().expect("catalog fetched");

    assert_eq!(catalog.len(), 2);
    let mug = catalog.iter().next().expect("first product");
    assert_eq!(mug.id, "1");
    assert_eq!(mug.category, "kitchen");
    assert_eq!(mug.image_url, "mug.png");
    assert_eq!(mug.price.to_bits(), 9.5_f64.to_bits());
}

#[rstest]
fn error_status_is_reported() {
    let url = serve_once("HTTP/1.1 503 Service Unavailable", "{}");
    let provider = HttpCatalogProvider::new(url.clone()).expect("provider builds");

    let err = provider.fetch().expect_err("service unavailable");

    match err {
        CatalogError::Http { status, url: reported, .. } => {
            assert_eq!(status, 503);
            assert_eq!(reported, url);
        }
        other => panic!("expected Http error, found {other:?}"),
    }
}

#[rstest]
fn malformed_payload_is_a_parse_error() {
    let url = serve_once("HTTP/1.1 200 OK", r#"{"products":[]}"#);
    let provider = HttpCatalogProvider::new(url).expect("provider builds");

    let err = provider.fetch().expect_err("object payload");

    assert!(matches!(err, CatalogError::Parse { .. }), "unexpected error: {err:?}");
}

#[rstest]
fn slow_service_times_out() {
    let config =
        HttpCatalogProviderConfig::new(serve_silence()).with_timeout(Duration::from_millis(300));
    let provider = HttpCatalogProvider::with_config(config).expect("provider builds");

    let err = provider.fetch().expect_err("no response");

    assert!(matches!(err, CatalogError::Timeout { .. }), "unexpected error: {err:?}");
}

#[rstest]
fn closed_port_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    let provider =
        HttpCatalogProvider::new(format!("http://{addr}/products")).expect("provider builds");

    let err = provider.fetch().expect_err("nothing listening");

    assert!(matches!(err, CatalogError::Network { .. }), "unexpected error: {err:?}");
}
