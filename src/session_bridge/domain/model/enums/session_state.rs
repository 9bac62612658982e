#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Error,
}
