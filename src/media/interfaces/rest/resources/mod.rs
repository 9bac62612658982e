pub mod media_error_response_resource;
pub mod upload_authorization_response_resource;
pub mod uploaded_media_response_resource;
