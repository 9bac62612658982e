pub mod http_user_profile_gateway_impl;
