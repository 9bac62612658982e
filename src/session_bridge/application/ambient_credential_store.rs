use std::sync::RwLock;

#[derive(Default)]
pub struct AmbientCredentialStore {
    token: RwLock<Option<String>>,
}

impl AmbientCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, token: String) {
        *self.token.write().expect("lock poisoned") = Some(token);
    }

    pub fn clear(&self) {
        *self.token.write().expect("lock poisoned") = None;
    }

    pub fn current(&self) -> Option<String> {
        self.token.read().expect("lock poisoned").clone()
    }
}
