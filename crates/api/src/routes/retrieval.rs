//! Handlers that read the catalog through the deferred retrieval helper.

use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{ApiResponse, Book};
use crate::state::AppState;

/// List every book once the retrieval delay has passed.
#[instrument(skip(state))]
pub async fn all_books(State(state): State<AppState>) -> Result<ApiResponse<Vec<Book>>> {
    let books = state
        .retrieval()
        .fetch(|| Ok::<_, AppError>(state.catalog().read().list_books()))
        .await?;

    Ok(ApiResponse::ok("List of all books", books))
}

/// Show a book by ISBN once the retrieval delay has passed.
#[instrument(skip(state))]
pub async fn by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<ApiResponse<Book>> {
    let book = state
        .retrieval()
        .fetch(|| state.catalog().read().find_by_isbn(&isbn))
        .await
        .map_err(|_| AppError::NotFound("Book not found".to_string()))?;

    Ok(ApiResponse::ok(format!("Book found for ISBN {isbn}"), book))
}
