//! Like ledger handlers.

use super::auth::Principal;
use super::error_response;
use crate::application::catalog::CatalogService;
use crate::ports::repository::VideoRepository;
use crate::ports::storage::BlobStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

pub(super) async fn like<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
    principal: Principal,
) -> Result<StatusCode, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog
        .like(id, &principal.0)
        .await
        .map(|_| StatusCode::OK)
        .map_err(error_response)
}

pub(super) async fn unlike<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
    principal: Principal,
) -> Result<StatusCode, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog
        .unlike(id, &principal.0)
        .await
        .map(|_| StatusCode::OK)
        .map_err(error_response)
}

pub(super) async fn liked_by<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<String>>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog.liked_by(id).await.map(Json).map_err(error_response)
}
