use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};

use crate::auth::{
    domain::{
        model::enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
        services::access_guard_service::AccessGuardService,
    },
    interfaces::rest::resources::{
        admin_verification_response_resource::AdminVerificationResponseResource,
        auth_error_response_resource::AuthErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct AuthRestControllerState {
    pub access_guard_service: Arc<dyn AccessGuardService>,
}

pub fn router(state: AuthRestControllerState) -> Router {
    Router::new()
        .route("/api/auth/verify-admin", get(verify_admin))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/auth/verify-admin",
    tag = "auth",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Caller holds the admin role", body = AdminVerificationResponseResource),
        (status = 401, description = "Missing or invalid credential", body = AuthErrorResponseResource),
        (status = 403, description = "Authenticated but not admin", body = AuthErrorResponseResource),
        (status = 500, description = "Verification failed upstream", body = AuthErrorResponseResource)
    )
)]
pub async fn verify_admin(
    State(state): State<AuthRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<AdminVerificationResponseResource>, (StatusCode, Json<AuthErrorResponseResource>)>
{
    let authorization = bearer_header(&headers);

    let principal = state
        .access_guard_service
        .handle_require_role(authorization.as_deref(), UserRole::Admin)
        .await
        .map_err(map_auth_error)?;

    tracing::debug!(subject = principal.subject_id.value(), "admin access verified");

    Ok(Json(AdminVerificationResponseResource { ok: true }))
}

fn bearer_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn map_auth_error(error: AuthDomainError) -> (StatusCode, Json<AuthErrorResponseResource>) {
    match error {
        AuthDomainError::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            Json(AuthErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(AuthErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::UpstreamFailure(details) => {
            tracing::error!(%details, "admin verification failed upstream");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthErrorResponseResource {
                    message: "verification failed".to_string(),
                }),
            )
        }
    }
}
