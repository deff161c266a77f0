//! Router-level tests against an in-memory snapshot source

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use natmon_core::data::SnapshotSource;
use natmon_core::{Monument, StateMatch};
use natmon_server::{router, AppState};
use tower::ServiceExt;

struct StubSource(Vec<Monument>);

#[async_trait]
impl SnapshotSource for StubSource {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Monument>> {
        Ok(self.0.clone())
    }

    async fn row_count(&self) -> anyhow::Result<usize> {
        Ok(self.0.len())
    }

    fn source_name(&self) -> &str {
        "stub"
    }
}

fn monument(name: &str, president: &str, states: &str, date: &str, year: i32) -> Monument {
    Monument {
        name: name.to_string(),
        agency: "NPS".to_string(),
        president: president.to_string(),
        states: states.to_string(),
        date: date.to_string(),
        year,
        acres: 1000.0,
    }
}

fn sample() -> Vec<Monument> {
    vec![
        monument(
            "Devils Tower",
            "Theodore Roosevelt",
            "Wyoming",
            "9/24",
            1906,
        ),
        monument(
            "Yellowstone Forest",
            "Congress",
            "Wyoming, Montana",
            "6/8",
            1906,
        ),
        monument("Aniakchak", "Jimmy Carter", "Alaska", "12/1", 1978),
    ]
}

fn app(records: Vec<Monument>, state_match: StateMatch) -> axum::Router {
    router(AppState {
        store: Arc::new(StubSource(records)),
        state_match,
    })
}

async fn get_page(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_reports_the_total_and_timeline() {
    let (status, body) = get_page(app(sample(), StateMatch::Exact), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("3 monuments on record"));
    assert!(body.contains("\"1906\""));
    assert!(body.contains("\"1978\""));
}

#[tokio::test]
async fn president_list_excludes_congress() {
    let (status, body) = get_page(app(sample(), StateMatch::Exact), "/presidents").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Theodore Roosevelt"));
    assert!(body.contains("Jimmy Carter"));
    assert!(!body.contains("/president/Congress"));
}

#[tokio::test]
async fn detail_page_has_wraparound_neighbors() {
    let (status, body) = get_page(
        app(sample(), StateMatch::Exact),
        "/president/Jimmy%20Carter",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Monuments proclaimed by Jimmy Carter"));
    assert!(body.contains("Aniakchak"));
    // Two presidents total, so both pager links point at the other one.
    assert_eq!(
        body.matches("/president/Theodore%20Roosevelt").count(),
        2,
        "{body}"
    );
}

#[tokio::test]
async fn state_pages_list_multi_state_monuments() {
    let (status, body) = get_page(app(sample(), StateMatch::Exact), "/state/Montana").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Yellowstone Forest"));
}

#[tokio::test]
async fn unknown_keys_get_a_dimension_specific_404() {
    let app_exact = app(sample(), StateMatch::Exact);
    let (status, body) = get_page(app_exact.clone(), "/president/Unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No monuments found for president Unknown."));

    let (status, body) = get_page(app_exact.clone(), "/state/Ida").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No monuments found in Ida."));

    let (status, body) = get_page(app_exact, "/year/1999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No monuments found for the year 1999."));
}

#[tokio::test]
async fn non_numeric_year_is_not_found() {
    let (status, _) = get_page(app(sample(), StateMatch::Exact), "/year/ninety").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_dataset_turns_key_lists_into_404() {
    let (status, body) = get_page(app(Vec::new(), StateMatch::Exact), "/years").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No monument data found"));
}

#[tokio::test]
async fn year_detail_sorts_newest_first() {
    let records = vec![
        monument("Mid", "T", "Z", "1/11", 1906),
        monument("New", "T", "Z", "12/3", 1906),
    ];
    let (status, body) = get_page(app(records, StateMatch::Exact), "/year/1906").await;
    assert_eq!(status, StatusCode::OK);
    let new_at = body.find("New").unwrap();
    let mid_at = body.find("Mid").unwrap();
    assert!(new_at < mid_at);
}
