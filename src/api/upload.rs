//! Upload Endpoint

use serde::de::DeserializeOwned;

use crate::http::{ApiError, ContentType, HttpClient, MultipartForm, RequestOptions};

/// Multipart upload; the response shape is chosen by the caller
pub async fn upload_file<R: DeserializeOwned>(
    client: &HttpClient,
    form: MultipartForm,
) -> Result<R, ApiError> {
    client
        .post_multipart(
            "/api/upload",
            form,
            RequestOptions::default().content_type(ContentType::Multipart),
        )
        .await
}
