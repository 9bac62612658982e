use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::RETRY_AFTER},
    routing::{get, patch, post},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::domain::{
        model::enums::{auth_domain_error::AuthDomainError, user_role::UserRole},
        services::access_guard_service::AccessGuardService,
    },
    shared::rate_limiting::fixed_window_rate_limiter::{
        FixedWindowRateLimiter, RateLimitDecision,
    },
    users::{
        domain::{
            model::{
                commands::{
                    promote_user_command::PromoteUserCommand,
                    reconcile_subject_command::ReconcileSubjectCommand,
                    register_user_command::{RegisterUserCommand, RegisterUserCommandParts},
                },
                enums::users_domain_error::UsersDomainError,
                queries::find_user_query::FindUserQuery,
            },
            services::{
                user_command_service::UserCommandService, user_query_service::UserQueryService,
            },
        },
        interfaces::rest::resources::{
            promote_user_response_resource::{PromoteUserResponseResource, PromotedUserResource},
            reconcile_user_request_resource::ReconcileUserRequestResource,
            register_user_request_resource::RegisterUserRequestResource,
            user_response_resource::UserResponseResource,
            users_error_response_resource::UsersErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct UsersRestControllerState {
    pub command_service: Arc<dyn UserCommandService>,
    pub query_service: Arc<dyn UserQueryService>,
    pub access_guard_service: Arc<dyn AccessGuardService>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
}

pub fn router(state: UsersRestControllerState) -> Router {
    Router::new()
        .route("/api/users", get(find_user))
        .route("/api/users", post(register_user))
        .route("/api/users/:id", patch(reconcile_user))
        .route("/api/users/:id/promote", post(promote_user))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(
        ("external_id" = Option<String>, Query, description = "Identity provider subject id"),
        ("email" = Option<String>, Query, description = "Email lookup fallback")
    ),
    responses(
        (status = 200, description = "User record found", body = UserResponseResource),
        (status = 400, description = "Missing lookup criteria", body = UsersErrorResponseResource),
        (status = 404, description = "No matching user record", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn find_user(
    State(state): State<UsersRestControllerState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Json<UserResponseResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let query = FindUserQuery::new(
        params.get("external_id").cloned(),
        params.get("email").cloned(),
    )
    .map_err(map_domain_error)?;

    let record = state
        .query_service
        .handle_find_user(query)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(UsersDomainError::UserNotFound))?;

    Ok(Json(UserResponseResource::from_record(record)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterUserRequestResource,
    responses(
        (status = 201, description = "User record created or already present", body = UserResponseResource),
        (status = 400, description = "Invalid request", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn register_user(
    State(state): State<UsersRestControllerState>,
    Json(request): Json<RegisterUserRequestResource>,
) -> Result<(StatusCode, Json<UserResponseResource>), (StatusCode, Json<UsersErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(UsersErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = RegisterUserCommand::new(RegisterUserCommandParts {
        external_id: request.external_id,
        email: request.email,
        display_name: request.display_name,
        photo_url: request.photo_url,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_register_user(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponseResource::from_record(record)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "Local user record id")
    ),
    request_body = ReconcileUserRequestResource,
    responses(
        (status = 200, description = "Subject id reconciled", body = UserResponseResource),
        (status = 400, description = "Invalid request", body = UsersErrorResponseResource),
        (status = 404, description = "No matching user record", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn reconcile_user(
    State(state): State<UsersRestControllerState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReconcileUserRequestResource>,
) -> Result<Json<UserResponseResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(UsersErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command =
        ReconcileSubjectCommand::new(id, request.external_id).map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_reconcile_subject(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UserResponseResource::from_record(record)))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/promote",
    tag = "users",
    params(
        ("id" = String, Path, description = "Local user record id")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "User promoted to admin", body = PromoteUserResponseResource),
        (status = 401, description = "Missing or invalid credential", body = UsersErrorResponseResource),
        (status = 403, description = "Caller is not admin", body = UsersErrorResponseResource),
        (status = 404, description = "No matching user record", body = UsersErrorResponseResource),
        (status = 429, description = "Rate limited", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn promote_user(
    State(state): State<UsersRestControllerState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<
    Json<PromoteUserResponseResource>,
    (StatusCode, HeaderMap, Json<UsersErrorResponseResource>),
> {
    if let RateLimitDecision::Deny {
        retry_after_seconds,
    } = state
        .rate_limiter
        .check(&client_address(&headers), "/api/users/:id/promote")
    {
        return Err(rate_limited(retry_after_seconds));
    }

    let authorization = bearer_header(&headers);
    state
        .access_guard_service
        .handle_require_role(authorization.as_deref(), UserRole::Admin)
        .await
        .map_err(map_guard_error)?;

    let record = state
        .command_service
        .handle_promote_user(PromoteUserCommand::new(id))
        .await
        .map_err(|e| without_headers(map_domain_error(e)))?;

    Ok(Json(PromoteUserResponseResource {
        message: "User promoted to admin successfully".to_string(),
        user: PromotedUserResource {
            id: record.id.to_string(),
            email: record.email,
            role: record.role.as_str().to_string(),
            status: record.status.as_str().to_string(),
        },
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

fn rate_limited(
    retry_after_seconds: u64,
) -> (StatusCode, HeaderMap, Json<UsersErrorResponseResource>) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = retry_after_seconds.to_string().parse() {
        headers.insert(RETRY_AFTER, value);
    }

    (
        StatusCode::TOO_MANY_REQUESTS,
        headers,
        Json(UsersErrorResponseResource {
            message: "Too many requests, please try again later.".to_string(),
        }),
    )
}

fn without_headers(
    reply: (StatusCode, Json<UsersErrorResponseResource>),
) -> (StatusCode, HeaderMap, Json<UsersErrorResponseResource>) {
    (reply.0, HeaderMap::new(), reply.1)
}

fn map_guard_error(
    error: AuthDomainError,
) -> (StatusCode, HeaderMap, Json<UsersErrorResponseResource>) {
    let reply = match error {
        AuthDomainError::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            Json(UsersErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(UsersErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthDomainError::UpstreamFailure(details) => {
            tracing::error!(%details, "promotion guard failed upstream");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UsersErrorResponseResource {
                    message: "verification failed".to_string(),
                }),
            )
        }
    };

    without_headers(reply)
}

fn map_domain_error(
    error: UsersDomainError,
) -> (StatusCode, Json<UsersErrorResponseResource>) {
    let status = match error {
        UsersDomainError::InvalidEmail
        | UsersDomainError::InvalidExternalId
        | UsersDomainError::MissingLookupCriteria => StatusCode::BAD_REQUEST,
        UsersDomainError::UserNotFound => StatusCode::NOT_FOUND,
        UsersDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if let UsersDomainError::InfrastructureError(details) = &error {
        tracing::error!(%details, "users infrastructure error");
        return (
            status,
            Json(UsersErrorResponseResource {
                message: "infrastructure error".to_string(),
            }),
        );
    }

    (
        status,
        Json(UsersErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
