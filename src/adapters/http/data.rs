//! Payload handlers: multipart upload and streamed download.

use super::error_response;
use crate::application::catalog::CatalogService;
use crate::domain::video::VideoStatus;
use crate::ports::repository::VideoRepository;
use crate::ports::storage::BlobStore;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use futures::TryStreamExt;
use std::io;
use std::sync::Arc;
use tokio_util::io::{ReaderStream, StreamReader};

/// Multipart field carrying the payload bytes.
const DATA_FIELD: &str = "data";

pub(super) async fn upload<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
    mut multipart: Multipart,
) -> Result<Json<VideoStatus>, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    // Unknown ids are rejected before any of the body is consumed.
    catalog.get(id).await.map_err(error_response)?;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some(DATA_FIELD) {
            continue;
        }

        let stream = field.map_err(|err| io::Error::new(io::ErrorKind::Other, err));
        let reader = StreamReader::new(stream);
        futures::pin_mut!(reader);

        let status = catalog
            .save_data(id, &mut reader)
            .await
            .map_err(error_response)?;
        return Ok(Json(status));
    }

    Err((
        StatusCode::BAD_REQUEST,
        format!("multipart field \"{}\" missing", DATA_FIELD),
    ))
}

pub(super) async fn download<R, B>(
    State(catalog): State<Arc<CatalogService<R, B>>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, (StatusCode, String)>
where
    R: VideoRepository + 'static,
    B: BlobStore + 'static,
{
    let (video, blob) = catalog.open_data(id).await.map_err(error_response)?;

    let content_type = if video.content_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        video.content_type
    };
    let headers = [
        (header::CONTENT_TYPE, content_type),
        (header::CONTENT_LENGTH, blob.len.to_string()),
    ];

    Ok((headers, Body::from_stream(ReaderStream::new(blob.reader))))
}
