//! Inbound HTTP adapter: the REST surface over the catalog service.

mod auth;
mod data;
mod likes;
mod videos;

use crate::application::catalog::{CatalogError, CatalogService};
use crate::ports::repository::VideoRepository;
use crate::ports::storage::BlobStore;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub use auth::{Principal, PRINCIPAL_HEADER};

pub fn router<R, B>(catalog: Arc<CatalogService<R, B>>) -> Router
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    Router::new()
        .route(
            "/video",
            get(videos::list::<R, B>).post(videos::add::<R, B>),
        )
        .route("/video/:id", get(videos::get_one::<R, B>))
        .route(
            "/video/:id/data",
            post(data::upload::<R, B>).get(data::download::<R, B>),
        )
        .route("/video/:id/like", post(likes::like::<R, B>))
        .route("/video/:id/unlike", post(likes::unlike::<R, B>))
        .route("/video/:id/likedby", get(likes::liked_by::<R, B>))
        .route(
            "/video/search/findByTitle",
            get(videos::find_by_title::<R, B>),
        )
        .route(
            "/video/search/findByDurationLessThan",
            get(videos::find_by_duration::<R, B>),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(catalog)
}

/// Map catalog errors onto the wire: plain status plus a short text body.
pub(crate) fn error_response(err: CatalogError) -> (StatusCode, String) {
    let status = match &err {
        CatalogError::NotFound => StatusCode::NOT_FOUND,
        CatalogError::AlreadyLiked | CatalogError::NotLiked => StatusCode::BAD_REQUEST,
        CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("request failed: {}", err);
    }
    (status, err.to_string())
}
