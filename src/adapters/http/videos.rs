//! Metadata handlers: list, submit, fetch, search.

use super::error_response;
use crate::application::catalog::CatalogService;
use crate::domain::video::Video;
use crate::ports::repository::VideoRepository;
use crate::ports::storage::BlobStore;
use axum::extract::{Host, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

// Canonical payload URLs carry the authority the client used to reach us;
// the default http port is not repeated.
fn base_url(host: &str) -> String {
    let host = host.strip_suffix(":80").unwrap_or(host);
    format!("http://{}", host)
}

pub(super) async fn list<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
) -> Result<Json<Vec<Video>>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog.list().await.map(Json).map_err(error_response)
}

pub(super) async fn add<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Host(host): Host,
    Json(video): Json<Video>,
) -> Result<Json<Video>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog
        .add_video(video, &base_url(&host))
        .await
        .map(Json)
        .map_err(error_response)
}

pub(super) async fn get_one<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
) -> Result<Json<Video>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog.get(id).await.map(Json).map_err(error_response)
}

#[derive(Debug, Deserialize)]
pub(super) struct TitleQuery {
    title: String,
}

pub(super) async fn find_by_title<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<Video>>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog
        .find_by_title(&query.title)
        .await
        .map(Json)
        .map_err(error_response)
}

#[derive(Debug, Deserialize)]
pub(super) struct DurationQuery {
    duration: u64,
}

pub(super) async fn find_by_duration<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Query(query): Query<DurationQuery>,
) -> Result<Json<Vec<Video>>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    catalog
        .find_by_duration_less_than(query.duration)
        .await
        .map(Json)
        .map_err(error_response)
}
