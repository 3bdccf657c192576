use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

use crate::{
    api::views::SearchResultsView,
    error::{ApiError, ValidationError},
    server::AppState,
    types::{SearchFilters, SortKey, SortOrder},
    utils, warning,
};

/// Raw query string of `/api/v1/search`. Everything arrives as text and is
/// validated by the accessors below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> Result<String, ValidationError> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .ok_or(ValidationError::MissingParameter("query"))
    }

    pub fn page(&self) -> Result<usize, ValidationError> {
        utils::parse_page(self.page.as_deref())
    }

    pub fn filters(&self) -> Result<SearchFilters, ValidationError> {
        Ok(SearchFilters {
            start_date: utils::parse_date_param("startDate", self.start_date.as_deref())?,
            end_date: utils::parse_date_param("endDate", self.end_date.as_deref())?,
            sort_by: self.sort_by.as_deref().and_then(SortKey::from_key),
            sort_order: self
                .sort_order
                .as_deref()
                .map(SortOrder::from_key)
                .unwrap_or_default(),
            min_duration: utils::parse_duration_param("minDuration", self.min_duration.as_deref())?,
            max_duration: utils::parse_duration_param("maxDuration", self.max_duration.as_deref())?,
        })
    }
}

pub async fn search(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<AppState>,
) -> Result<Json<SearchResultsView>, ApiError> {
    let query = params.query()?;
    let page = params.page()?;
    let filters = params.filters()?;

    let result = state
        .catalog
        .search(&query, page, &filters)
        .await
        .map_err(|e| {
            warning!("Search error: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(SearchResultsView::new(&query, &result, &filters)))
}
