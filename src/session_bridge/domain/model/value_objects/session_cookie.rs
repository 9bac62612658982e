pub const SESSION_COOKIE_NAME: &str = "firebase_token";

pub struct SessionCookie;

impl SessionCookie {
    pub fn set_header(token: &str, secure_transport: bool) -> String {
        format!(
            "{SESSION_COOKIE_NAME}={token}; Path=/; SameSite=Strict{}",
            secure_flag(secure_transport)
        )
    }

    pub fn clear_header(secure_transport: bool) -> String {
        format!(
            "{SESSION_COOKIE_NAME}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Strict{}",
            secure_flag(secure_transport)
        )
    }
}

fn secure_flag(secure_transport: bool) -> &'static str {
    if secure_transport { "; Secure" } else { "" }
}
