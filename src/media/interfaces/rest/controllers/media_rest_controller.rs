use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode, header::RETRY_AFTER},
    routing::{get, post},
};

use crate::{
    auth::domain::{
        model::enums::auth_domain_error::AuthDomainError,
        services::access_guard_service::AccessGuardService,
    },
    media::{
        interfaces::acl::media_storage_facade::{MediaStorageError, MediaStorageFacade},
        interfaces::rest::resources::{
            media_error_response_resource::MediaErrorResponseResource,
            upload_authorization_response_resource::UploadAuthorizationResponseResource,
            uploaded_media_response_resource::UploadedMediaResponseResource,
        },
    },
    shared::rate_limiting::fixed_window_rate_limiter::{
        FixedWindowRateLimiter, RateLimitDecision,
    },
};

#[derive(Clone)]
pub struct MediaRestControllerState {
    pub media_storage_facade: Arc<dyn MediaStorageFacade>,
    pub access_guard_service: Arc<dyn AccessGuardService>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
    pub upload_folder: String,
}

pub fn router(state: MediaRestControllerState) -> Router {
    Router::new()
        .route("/api/upload", post(upload_media))
        .route("/api/upload", get(upload_authorization))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "media",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Media uploaded", body = UploadedMediaResponseResource),
        (status = 400, description = "No file provided", body = MediaErrorResponseResource),
        (status = 401, description = "Missing or invalid credential", body = MediaErrorResponseResource),
        (status = 429, description = "Rate limited", body = MediaErrorResponseResource),
        (status = 500, description = "Upload failed", body = MediaErrorResponseResource)
    )
)]
pub async fn upload_media(
    State(state): State<MediaRestControllerState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<
    Json<UploadedMediaResponseResource>,
    (StatusCode, HeaderMap, Json<MediaErrorResponseResource>),
> {
    if let RateLimitDecision::Deny {
        retry_after_seconds,
    } = state
        .rate_limiter
        .check(&client_address(&headers), "/api/upload")
    {
        return Err(rate_limited(retry_after_seconds));
    }

    let authorization = bearer_header(&headers);
    state
        .access_guard_service
        .handle_require_authenticated(authorization.as_deref())
        .await
        .map_err(map_guard_error)?;

    let mut file_name = "upload.bin".to_string();
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(e.to_string()))?
    {
        if field.name() == Some("file") {
            if let Some(name) = field.file_name() {
                file_name = name.to_string();
            }
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(e.to_string()))?;
            file_bytes = Some(bytes.to_vec());
        }
    }

    let Some(bytes) = file_bytes else {
        return Err(bad_request("No file provided".to_string()));
    };

    let uploaded = state
        .media_storage_facade
        .upload_media(bytes, &file_name, &state.upload_folder)
        .await
        .map_err(map_storage_error)?;

    Ok(Json(UploadedMediaResponseResource {
        url: uploaded.url,
        file_id: uploaded.file_id,
    }))
}

#[utoipa::path(
    get,
    path = "/api/upload",
    tag = "media",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Upload authorization parameters", body = UploadAuthorizationResponseResource),
        (status = 401, description = "Missing or invalid credential", body = MediaErrorResponseResource),
        (status = 500, description = "Verification failed upstream", body = MediaErrorResponseResource)
    )
)]
pub async fn upload_authorization(
    State(state): State<MediaRestControllerState>,
    headers: HeaderMap,
) -> Result<
    Json<UploadAuthorizationResponseResource>,
    (StatusCode, HeaderMap, Json<MediaErrorResponseResource>),
> {
    let authorization = bearer_header(&headers);
    state
        .access_guard_service
        .handle_require_authenticated(authorization.as_deref())
        .await
        .map_err(map_guard_error)?;

    let parameters = state.media_storage_facade.authentication_parameters();

    Ok(Json(UploadAuthorizationResponseResource {
        token: parameters.token,
        expire: parameters.expire,
        signature: parameters.signature,
    }))
}

fn bearer_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

fn bad_request(message: String) -> (StatusCode, HeaderMap, Json<MediaErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        HeaderMap::new(),
        Json(MediaErrorResponseResource { message }),
    )
}

fn rate_limited(
    retry_after_seconds: u64,
) -> (StatusCode, HeaderMap, Json<MediaErrorResponseResource>) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = retry_after_seconds.to_string().parse() {
        headers.insert(RETRY_AFTER, value);
    }

    (
        StatusCode::TOO_MANY_REQUESTS,
        headers,
        Json(MediaErrorResponseResource {
            message: "Too many requests, please try again later.".to_string(),
        }),
    )
}

fn map_guard_error(
    error: AuthDomainError,
) -> (StatusCode, HeaderMap, Json<MediaErrorResponseResource>) {
    let status = match &error {
        AuthDomainError::Unauthenticated => StatusCode::UNAUTHORIZED,
        AuthDomainError::Forbidden => StatusCode::FORBIDDEN,
        AuthDomainError::UpstreamFailure(details) => {
            tracing::error!(%details, "upload guard failed upstream");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "verification failed".to_string()
    } else {
        error.to_string()
    };

    (
        status,
        HeaderMap::new(),
        Json(MediaErrorResponseResource { message }),
    )
}

fn map_storage_error(
    error: MediaStorageError,
) -> (StatusCode, HeaderMap, Json<MediaErrorResponseResource>) {
    let MediaStorageError::Unavailable(details) = &error;
    tracing::error!(%details, "media upload failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        HeaderMap::new(),
        Json(MediaErrorResponseResource {
            message: "Upload failed".to_string(),
        }),
    )
}
