//! Page handlers
//!
//! Every handler fetches the snapshot exactly once and derives keys,
//! selections and neighbors from it, so navigation can never disagree with
//! the page contents.

use axum::extract::{Path, State};
use axum::response::Html;
use natmon_core::{
    cumulative_timeline, derive_category_keys, neighbors, select_records, Dimension, Key, Monument,
};
use natmon_templates as templates;
use tracing::debug;

use crate::error::PageError;
use crate::AppState;

type PageResult = Result<Html<String>, PageError>;

async fn snapshot(state: &AppState) -> Result<Vec<Monument>, PageError> {
    state.store.fetch_all().await.map_err(PageError::Internal)
}

fn empty_dimension_message(dimension: Dimension) -> String {
    format!("No monument data found for any {}.", dimension.as_str())
}

fn missing_key_message(dimension: Dimension, key: &Key) -> String {
    match dimension {
        Dimension::President => format!("No monuments found for president {key}."),
        Dimension::State => format!("No monuments found in {key}."),
        Dimension::Year => format!("No monuments found for the year {key}."),
    }
}

fn heading_for(dimension: Dimension, key: &Key) -> String {
    match dimension {
        Dimension::President => format!("Monuments proclaimed by {key}"),
        Dimension::State => format!("Monuments in {key}"),
        Dimension::Year => format!("Monuments proclaimed in {key}"),
    }
}

pub async fn index(State(state): State<AppState>) -> PageResult {
    let records = snapshot(&state).await?;
    let (labels, values) = templates::chart_series(&cumulative_timeline(&records));
    let total = records.len().to_string();
    Ok(Html(templates::INDEX.render(&[
        ("total", &total),
        ("chart_labels", &labels),
        ("chart_values", &values),
    ])))
}

pub async fn presidents(State(state): State<AppState>) -> PageResult {
    key_list_page(&state, Dimension::President).await
}

pub async fn states(State(state): State<AppState>) -> PageResult {
    key_list_page(&state, Dimension::State).await
}

pub async fn years(State(state): State<AppState>) -> PageResult {
    key_list_page(&state, Dimension::Year).await
}

async fn key_list_page(state: &AppState, dimension: Dimension) -> PageResult {
    let records = snapshot(state).await?;
    let keys = derive_category_keys(&records, dimension);
    if keys.is_empty() {
        return Err(PageError::NotFound(empty_dimension_message(dimension)));
    }
    debug!(dimension = dimension.as_str(), keys = keys.len(), "rendering key list");
    let items = templates::link_list(dimension, &keys);
    let heading = format!("Monuments by {}", dimension.as_str());
    Ok(Html(templates::KEY_LIST.render(&[
        ("title", &heading),
        ("heading", &heading),
        ("items", &items),
    ])))
}

pub async fn president(State(state): State<AppState>, Path(name): Path<String>) -> PageResult {
    detail_page(&state, Dimension::President, Key::text(name)).await
}

pub async fn state(State(state): State<AppState>, Path(name): Path<String>) -> PageResult {
    detail_page(&state, Dimension::State, Key::text(name)).await
}

pub async fn year(State(state): State<AppState>, Path(year): Path<String>) -> PageResult {
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| PageError::NotFound(format!("No monuments found for the year {year}.")))?;
    detail_page(&state, Dimension::Year, Key::year(year)).await
}

async fn detail_page(state: &AppState, dimension: Dimension, key: Key) -> PageResult {
    let records = snapshot(state).await?;
    let keys = derive_category_keys(&records, dimension);

    // Membership in the derived key list gates the page; a key that is not
    // in the list has no defined neighbors.
    let Some((prev, next)) = neighbors(&keys, &key) else {
        return Err(PageError::NotFound(missing_key_message(dimension, &key)));
    };

    let selected = select_records(&records, dimension, &key, state.state_match);
    if selected.is_empty() {
        return Err(PageError::NotFound(missing_key_message(dimension, &key)));
    }
    debug!(
        dimension = dimension.as_str(),
        key = %key,
        matches = selected.len(),
        "rendering detail page"
    );

    let heading = templates::escape_html(&heading_for(dimension, &key));
    let count = selected.len().to_string();
    let table = templates::monument_table(&selected);
    let (labels, values) = templates::chart_series(&cumulative_timeline(&selected));
    let prev_href = templates::key_href(dimension, prev);
    let next_href = templates::key_href(dimension, next);
    let prev_label = templates::escape_html(&prev.to_string());
    let next_label = templates::escape_html(&next.to_string());
    Ok(Html(templates::DETAIL.render(&[
        ("title", &heading),
        ("heading", &heading),
        ("count", &count),
        ("table", &table),
        ("prev_href", &prev_href),
        ("prev_label", &prev_label),
        ("next_href", &next_href),
        ("next_label", &next_label),
        ("chart_labels", &labels),
        ("chart_values", &values),
    ])))
}
