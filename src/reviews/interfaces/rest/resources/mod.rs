pub mod review_response_resource;
pub mod reviews_error_response_resource;
pub mod update_review_request_resource;
