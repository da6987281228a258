//! Review handlers.
//!
//! Reviews are addressed by their text: posting a comment that matches an
//! existing one (ignoring case) rewrites it, and deletion removes the first
//! match.

use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::JsonOrDefault;
use crate::models::{ApiResponse, Book, Review, ReviewOutcome};
use crate::state::AppState;

/// Body of the review endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewPayload {
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewPayload {
    fn into_comment(self) -> String {
        self.comment.unwrap_or_default()
    }
}

/// List the reviews of a book.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vec<Review>>> {
    let (title, reviews) = state.catalog().read().get_reviews(&id)?;
    Ok(ApiResponse::ok(format!("Reviews for book \"{title}\""), reviews))
}

/// Add a review, or update the one with the same text.
#[instrument(skip(state, payload))]
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrDefault(payload): JsonOrDefault<ReviewPayload>,
) -> Result<ApiResponse<Book>> {
    let comment = payload.into_comment();

    let (book, outcome) = state.catalog().write().upsert_review(&id, &comment)?;

    Ok(match outcome {
        ReviewOutcome::Updated => {
            ApiResponse::ok(format!("Review updated for book \"{}\"", book.title), book)
        }
        ReviewOutcome::Created => {
            ApiResponse::created(format!("Review added for book \"{}\"", book.title), book)
        }
    })
}

/// Delete the first review whose text matches.
#[instrument(skip(state, payload))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrDefault(payload): JsonOrDefault<ReviewPayload>,
) -> Result<ApiResponse<Book>> {
    let comment = payload.into_comment();

    let book = state.catalog().write().delete_review(&id, &comment)?;

    Ok(ApiResponse::ok(
        format!(
            "Review with comment \"{comment}\" deleted for book \"{}\"",
            book.title
        ),
        book,
    ))
}
