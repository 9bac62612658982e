pub mod acl;
pub mod ambient_credential_store;
pub mod api_http_client;
pub mod session_bridge_impl;
