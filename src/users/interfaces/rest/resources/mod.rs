pub mod promote_user_response_resource;
pub mod reconcile_user_request_resource;
pub mod register_user_request_resource;
pub mod user_response_resource;
pub mod users_error_response_resource;
