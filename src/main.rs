use std::{sync::Arc, time::Duration};

use axum::Router;
use dotenvy::dotenv;
use hotel_marketplace_api::{
    auth::{
        build_auth_router,
        interfaces::rest::resources::{
            admin_verification_response_resource::AdminVerificationResponseResource,
            auth_error_response_resource::AuthErrorResponseResource,
        },
    },
    config::app_config::AppConfig,
    identity_provider::select_identity_verification_facade,
    media::{
        build_media_router,
        interfaces::rest::resources::{
            media_error_response_resource::MediaErrorResponseResource,
            upload_authorization_response_resource::UploadAuthorizationResponseResource,
            uploaded_media_response_resource::UploadedMediaResponseResource,
        },
    },
    reviews::{
        build_reviews_router,
        interfaces::rest::resources::{
            review_response_resource::{
                ReviewDeletedResponseResource, ReviewResource, ReviewResponseResource,
            },
            reviews_error_response_resource::ReviewsErrorResponseResource,
            update_review_request_resource::UpdateReviewRequestResource,
        },
    },
    shared::{
        interfaces::rest::openapi::security::BearerSecurityAddon,
        rate_limiting::fixed_window_rate_limiter::FixedWindowRateLimiter,
    },
    users::{
        build_users_router,
        interfaces::rest::resources::{
            promote_user_response_resource::{PromoteUserResponseResource, PromotedUserResource},
            reconcile_user_request_resource::ReconcileUserRequestResource,
            register_user_request_resource::RegisterUserRequestResource,
            user_response_resource::UserResponseResource,
            users_error_response_resource::UsersErrorResponseResource,
        },
    },
};
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        hotel_marketplace_api::users::interfaces::rest::controllers::users_rest_controller::find_user,
        hotel_marketplace_api::users::interfaces::rest::controllers::users_rest_controller::register_user,
        hotel_marketplace_api::users::interfaces::rest::controllers::users_rest_controller::reconcile_user,
        hotel_marketplace_api::users::interfaces::rest::controllers::users_rest_controller::promote_user,
        hotel_marketplace_api::reviews::interfaces::rest::controllers::reviews_rest_controller::get_review,
        hotel_marketplace_api::reviews::interfaces::rest::controllers::reviews_rest_controller::update_review,
        hotel_marketplace_api::reviews::interfaces::rest::controllers::reviews_rest_controller::delete_review,
        hotel_marketplace_api::media::interfaces::rest::controllers::media_rest_controller::upload_media,
        hotel_marketplace_api::media::interfaces::rest::controllers::media_rest_controller::upload_authorization,
        hotel_marketplace_api::auth::interfaces::rest::controllers::auth_rest_controller::verify_admin
    ),
    components(
        schemas(
            UserResponseResource,
            RegisterUserRequestResource,
            ReconcileUserRequestResource,
            PromoteUserResponseResource,
            PromotedUserResource,
            UsersErrorResponseResource,
            ReviewResource,
            ReviewResponseResource,
            ReviewDeletedResponseResource,
            UpdateReviewRequestResource,
            ReviewsErrorResponseResource,
            UploadedMediaResponseResource,
            UploadAuthorizationResponseResource,
            MediaErrorResponseResource,
            AdminVerificationResponseResource,
            AuthErrorResponseResource
        )
    ),
    tags(
        (name = "users", description = "Local user records, reconciliation and promotion"),
        (name = "reviews", description = "Hotel review CRUD"),
        (name = "media", description = "Media upload behind the object storage facade"),
        (name = "auth", description = "Credential verification and role guard")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = PgPool::connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let identity_verification_facade = select_identity_verification_facade(&config)
        .expect("failed to select identity verification facade");

    let rate_limiter = Arc::new(FixedWindowRateLimiter::new(Duration::from_secs(60), 30));
    let sweeper = rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            sweeper.sweep_expired();
        }
    });

    let users_router = build_users_router(
        &config,
        identity_verification_facade.clone(),
        rate_limiter.clone(),
    )
    .await
    .expect("failed to build users router");
    let reviews_router = build_reviews_router(
        &config,
        identity_verification_facade.clone(),
        rate_limiter.clone(),
    )
    .await
    .expect("failed to build reviews router");
    let media_router = build_media_router(
        &config,
        identity_verification_facade.clone(),
        rate_limiter,
    )
    .await
    .expect("failed to build media router");
    let auth_router = build_auth_router(&config, identity_verification_facade)
        .await
        .expect("failed to build auth router");

    let app = Router::new()
        .merge(users_router)
        .merge(reviews_router)
        .merge(media_router)
        .merge(auth_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    println!("Servidor corriendo en http://localhost:{}", config.port);
    println!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
