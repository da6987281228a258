//! External volumes lookup handlers.

use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::lookup::{SearchField, VolumeSummary};
use crate::models::ApiResponse;
use crate::state::AppState;

/// Search the volumes API by author.
#[instrument(skip(state))]
pub async fn by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<ApiResponse<Vec<VolumeSummary>>> {
    let volumes = search(&state, SearchField::Author, &author).await?;
    if volumes.is_empty() {
        return Err(AppError::NotFound(format!(
            "No books found by author \"{author}\""
        )));
    }
    Ok(ApiResponse::ok(
        format!("Books found by author \"{author}\""),
        volumes,
    ))
}

/// Search the volumes API by title.
#[instrument(skip(state))]
pub async fn by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiResponse<Vec<VolumeSummary>>> {
    let volumes = search(&state, SearchField::Title, &title).await?;
    if volumes.is_empty() {
        return Err(AppError::NotFound(format!(
            "No books found with title \"{title}\""
        )));
    }
    Ok(ApiResponse::ok(
        format!("Books found with title \"{title}\""),
        volumes,
    ))
}

async fn search(state: &AppState, field: SearchField, term: &str) -> Result<Vec<VolumeSummary>> {
    Ok(state.volumes().search(field, term).await?)
}
