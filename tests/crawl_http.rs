// tests/crawl_http.rs
// =============================================================================
// End-to-end crawls against a local HTTP server (wiremock), going through the
// real reqwest client and the scraper-based HTML parser.
// =============================================================================

use std::sync::{Arc, Mutex};
use std::time::Duration;

use page_crawler::{run, CrawlError, CrawlParameters};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}

async fn serve(server: &MockServer, page: &str, status: u16, body: String, hits: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html")
                .set_body_string(body),
        )
        .expect(hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawls_whole_site_once_per_page() {
    let server = MockServer::start().await;
    serve(&server, "/", 200, html(&["/a", "/b", "https://elsewhere.org/"]), 1).await;
    serve(&server, "/a", 200, html(&["/", "/b"]), 1).await;
    serve(&server, "/b", 200, html(&["/a"]), 1).await;

    let seed = format!("{}/", server.uri());
    let summary = run(&seed, CrawlParameters::new(|_| Ok(()))).await.unwrap();

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(
        summary.urls,
        vec![
            format!("{}/", server.uri()),
            format!("{}/a", server.uri()),
            format!("{}/b", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_not_found_child_aborts_crawl() {
    let server = MockServer::start().await;
    serve(&server, "/", 200, html(&["/gone", "/never"]), 1).await;
    serve(&server, "/gone", 404, String::new(), 1).await;
    serve(&server, "/never", 200, html(&[]), 0).await;

    let seed = format!("{}/", server.uri());
    let err = run(&seed, CrawlParameters::new(|_| Ok(()))).await.unwrap_err();

    let gone = format!("{}/gone", server.uri());
    assert_eq!(err.page_url(), Some(gone.as_str()));
    assert!(matches!(err.root_cause(), CrawlError::BadStatus { code: 404, .. }));
}

#[tokio::test]
async fn test_content_callback_rejects_page() {
    let server = MockServer::start().await;
    serve(&server, "/", 200, html(&["/secret"]), 1).await;
    serve(&server, "/secret", 200, "<p>password: hunter2</p>".to_string(), 1).await;

    let bodies = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&bodies);
    let params = CrawlParameters::new(move |body: &str| {
        *counter.lock().unwrap() += 1;
        if body.contains("password") {
            anyhow::bail!("page leaks a password");
        }
        Ok(())
    });

    let seed = format!("{}/", server.uri());
    let err = run(&seed, params).await.unwrap_err();

    assert!(matches!(err.root_cause(), CrawlError::Callback(_)));
    assert!(err.to_string().contains("page leaks a password"));
    assert_eq!(*bodies.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_links_limit() {
    let server = MockServer::start().await;
    serve(&server, "/", 200, html(&["/1", "/2", "/3"]), 1).await;
    serve(&server, "/1", 200, html(&[]), 1).await;
    serve(&server, "/2", 200, html(&[]), 0).await;
    serve(&server, "/3", 200, html(&[]), 0).await;

    let seed = format!("{}/", server.uri());
    let summary = run(&seed, CrawlParameters::new(|_| Ok(())).with_links_limit(1))
        .await
        .unwrap();

    assert_eq!(summary.pages_visited, 2);
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let seed = format!("{}/slow", server.uri());
    let params = CrawlParameters::new(|_| Ok(())).with_timeout(Duration::from_millis(200));
    let err = run(&seed, params).await.unwrap_err();

    assert!(matches!(err.root_cause(), CrawlError::Transport(_)));
}

#[tokio::test]
async fn test_custom_status_range() {
    let server = MockServer::start().await;
    serve(&server, "/", 203, html(&[]), 1).await;

    let seed = format!("{}/", server.uri());
    let params = CrawlParameters::new(|_| Ok(())).with_status_range(200, 202);
    let err = run(&seed, params).await.unwrap_err();

    assert!(matches!(
        err.root_cause(),
        CrawlError::BadStatus { code: 203, min: 200, max: 202 }
    ));
}
