// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{entries, ScriptedFetcher};
use linkscan::application::use_cases::scan_use_case::{ScanOptions, ScanUseCase};
use linkscan::domain::models::fetch_outcome::{FetchFault, FetchOutcome};
use linkscan::engines::reqwest_engine::ReqwestEngine;
use linkscan::infrastructure::progress::ScanProgress;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options(search: &str, concurrency: usize, timeout: Duration) -> ScanOptions {
    ScanOptions {
        search_string: search.to_string(),
        timeout,
        concurrency,
        preserve_input_order: true,
    }
}

fn http_use_case(search: &str, timeout: Duration) -> ScanUseCase {
    let engine = Arc::new(ReqwestEngine::new("linkscan-test").unwrap());
    ScanUseCase::new(engine, options(search, 4, timeout))
}

#[tokio::test]
async fn test_matching_page_is_recorded_with_element_and_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>say hello world</p>"))
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let partition = http_use_case("hello", Duration::from_secs(5))
        .execute(entries(&[&url]), ScanProgress::hidden())
        .await;

    assert_eq!(partition.matched().len(), 1);
    assert!(partition.non_matching().is_empty());
    assert!(partition.errored().is_empty());

    let record = &partition.matched()[0];
    assert_eq!(record.url.as_str(), url);
    assert_eq!(record.line_number, 1);
    assert_eq!(record.tag_name, "p");
    assert_eq!(record.html_fragment, "<p>say hello world</p>");
}

#[tokio::test]
async fn test_not_found_page_is_recorded_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<p>hello</p>"))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let partition = http_use_case("hello", Duration::from_secs(5))
        .execute(entries(&[&url]), ScanProgress::hidden())
        .await;

    assert!(partition.matched().is_empty());
    assert!(partition.non_matching().is_empty());
    assert_eq!(partition.errored().len(), 1);
    assert_eq!(partition.errored()[0].url.as_str(), url);
    assert_eq!(partition.errored()[0].description, "404 Not Found");
}

#[tokio::test]
async fn test_page_without_search_string_is_non_matching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body><p>nothing</p></body></html>"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let partition = http_use_case("hello", Duration::from_secs(5))
        .execute(entries(&[&url]), ScanProgress::hidden())
        .await;

    assert!(partition.matched().is_empty());
    assert!(partition.errored().is_empty());
    assert_eq!(partition.non_matching().len(), 1);
    assert_eq!(partition.non_matching()[0].as_str(), url);
}

#[tokio::test]
async fn test_slow_page_is_recorded_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>hello</p>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let url = format!("{}/slow", server.uri());
    let partition = http_use_case("hello", Duration::from_millis(300))
        .execute(entries(&[&url]), ScanProgress::hidden())
        .await;

    assert_eq!(partition.errored().len(), 1);
    assert_eq!(partition.errored()[0].description, "Timeout");
}

#[tokio::test]
async fn test_every_entry_lands_in_exactly_one_collection() {
    let urls: Vec<String> = (0..30).map(|i| format!("http://site{}.test/", i)).collect();
    let mut fetcher = ScriptedFetcher::new();
    for (i, url) in urls.iter().enumerate() {
        let outcome = match i % 3 {
            0 => FetchOutcome::Success {
                status: 200,
                body: format!("<div><span>Hello number {}</span></div>", i),
            },
            1 => FetchOutcome::Success {
                status: 200,
                body: format!("<div><span>Goodbye number {}</span></div>", i),
            },
            _ if i % 2 == 0 => FetchOutcome::http_error(500),
            _ => FetchOutcome::NetworkError {
                fault: FetchFault::Dns,
            },
        };
        fetcher = fetcher.respond(url, outcome);
    }
    let fetcher = Arc::new(fetcher);

    let raw: Vec<&str> = urls.iter().map(String::as_str).collect();
    let use_case = ScanUseCase::new(fetcher.clone(), options("hello", 5, Duration::from_secs(1)));
    let partition = use_case.execute(entries(&raw), ScanProgress::hidden()).await;

    assert_eq!(partition.len(), 30);
    assert_eq!(partition.matched().len(), 10);
    assert_eq!(partition.non_matching().len(), 10);
    assert_eq!(partition.errored().len(), 10);
    assert_eq!(fetcher.calls(), 30);

    let mut seen = HashSet::new();
    for record in partition.matched() {
        assert!(seen.insert(record.url.index()));
        assert_eq!(record.tag_name, "span");
    }
    for url in partition.non_matching() {
        assert_eq!(url.index() % 3, 1);
        assert!(seen.insert(url.index()));
    }
    for record in partition.errored() {
        assert_eq!(record.url.index() % 3, 2);
        assert!(seen.insert(record.url.index()));
    }
    assert_eq!(seen.len(), 30);

    let descriptions: HashSet<&str> = partition
        .errored()
        .iter()
        .map(|record| record.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        HashSet::from(["500 Internal Server Error", "Error: dns lookup failed"])
    );
}

#[tokio::test]
async fn test_duplicate_urls_are_fetched_and_recorded_independently() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let use_case = ScanUseCase::new(fetcher.clone(), options("hello", 2, Duration::from_secs(1)));

    let partition = use_case
        .execute(
            entries(&["http://dup.test/", "http://dup.test/"]),
            ScanProgress::hidden(),
        )
        .await;

    assert_eq!(fetcher.calls(), 2);
    assert_eq!(partition.non_matching().len(), 2);
    assert_eq!(partition.non_matching()[0].index(), 0);
    assert_eq!(partition.non_matching()[1].index(), 1);
}

#[tokio::test]
async fn test_in_flight_fetches_never_exceed_concurrency() {
    let fetcher = Arc::new(ScriptedFetcher::new().with_delay(Duration::from_millis(20)));
    let urls: Vec<String> = (0..24).map(|i| format!("http://load{}.test/", i)).collect();
    let raw: Vec<&str> = urls.iter().map(String::as_str).collect();

    let use_case = ScanUseCase::new(fetcher.clone(), options("hello", 3, Duration::from_secs(1)));
    let partition = use_case.execute(entries(&raw), ScanProgress::hidden()).await;

    assert_eq!(partition.len(), 24);
    assert_eq!(fetcher.calls(), 24);
    assert!(fetcher.max_in_flight() <= 3);
    assert!(fetcher.max_in_flight() >= 1);
}

#[tokio::test]
async fn test_results_follow_input_order_when_preserved() {
    let fetcher = Arc::new(ScriptedFetcher::new().with_delay(Duration::from_millis(5)));
    let urls: Vec<String> = (0..12).map(|i| format!("http://order{}.test/", i)).collect();
    let raw: Vec<&str> = urls.iter().map(String::as_str).collect();

    let use_case = ScanUseCase::new(fetcher, options("hello", 4, Duration::from_secs(1)));
    let partition = use_case.execute(entries(&raw), ScanProgress::hidden()).await;

    let indices: Vec<usize> = partition.non_matching().iter().map(|url| url.index()).collect();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_empty_input_produces_empty_partition() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let use_case = ScanUseCase::new(fetcher.clone(), options("hello", 4, Duration::from_secs(1)));

    let partition = use_case.execute(Vec::new(), ScanProgress::hidden()).await;

    assert!(partition.is_empty());
    assert_eq!(fetcher.calls(), 0);
}
