use std::sync::{Arc, RwLock};

use tokio::sync::watch;

use crate::session_bridge::{
    application::ambient_credential_store::AmbientCredentialStore,
    domain::model::{
        entities::{local_user_profile::LocalUserProfile, provider_session::ProviderSession},
        enums::session_state::SessionState,
        value_objects::session_cookie::SessionCookie,
    },
    interfaces::acl::user_profile_gateway::{
        NewUserProfileDraft, UserProfileGateway, UserProfileGatewayError,
    },
};

pub struct SessionBridgeImpl {
    ambient_credentials: Arc<AmbientCredentialStore>,
    profile_gateway: Arc<dyn UserProfileGateway>,
    secure_transport: bool,
    state: RwLock<SessionState>,
    profile: RwLock<Option<LocalUserProfile>>,
    cookie_header: RwLock<Option<String>>,
}

impl SessionBridgeImpl {
    pub fn new(
        ambient_credentials: Arc<AmbientCredentialStore>,
        profile_gateway: Arc<dyn UserProfileGateway>,
        secure_transport: bool,
    ) -> Self {
        Self {
            ambient_credentials,
            profile_gateway,
            secure_transport,
            state: RwLock::new(SessionState::Unauthenticated),
            profile: RwLock::new(None),
            cookie_header: RwLock::new(None),
        }
    }

    pub fn state(&self) -> SessionState {
        *self.state.read().expect("lock poisoned")
    }

    pub fn profile(&self) -> Option<LocalUserProfile> {
        self.profile.read().expect("lock poisoned").clone()
    }

    pub fn cookie_header(&self) -> Option<String> {
        self.cookie_header.read().expect("lock poisoned").clone()
    }

    pub async fn run(&self, mut notifications: watch::Receiver<Option<ProviderSession>>) {
        loop {
            let session = notifications.borrow_and_update().clone();
            self.handle_session_notification(session).await;

            if notifications.changed().await.is_err() {
                break;
            }
        }
    }

    pub async fn handle_session_notification(&self, session: Option<ProviderSession>) {
        match session {
            Some(session) => self.handle_sign_in(session).await,
            None => self.handle_sign_out(),
        }
    }

    pub fn sign_out(&self) {
        self.handle_sign_out();
    }

    async fn handle_sign_in(&self, session: ProviderSession) {
        self.set_state(SessionState::Authenticating);

        if session.id_token.trim().is_empty() {
            tracing::warn!("provider session carries no id token");
            self.set_state(SessionState::Error);
            return;
        }

        self.ambient_credentials.store(session.id_token.clone());
        *self.cookie_header.write().expect("lock poisoned") = Some(SessionCookie::set_header(
            &session.id_token,
            self.secure_transport,
        ));

        let profile = match self.reconcile_profile(&session).await {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::warn!(%error, "profile reconciliation failed, signing in without profile");
                None
            }
        };

        *self.profile.write().expect("lock poisoned") = profile;
        self.set_state(SessionState::Authenticated);
    }

    fn handle_sign_out(&self) {
        self.ambient_credentials.clear();
        *self.profile.write().expect("lock poisoned") = None;
        *self.cookie_header.write().expect("lock poisoned") =
            Some(SessionCookie::clear_header(self.secure_transport));
        self.set_state(SessionState::Unauthenticated);
    }

    async fn reconcile_profile(
        &self,
        session: &ProviderSession,
    ) -> Result<LocalUserProfile, UserProfileGatewayError> {
        if let Some(profile) = self
            .profile_gateway
            .find_by_external_id(&session.subject_id)
            .await?
        {
            return Ok(profile);
        }

        if let Some(email) = session.email.as_deref() {
            if let Some(profile) = self.profile_gateway.find_by_email(email).await? {
                return self
                    .profile_gateway
                    .backfill_external_id(&profile.id, &session.subject_id)
                    .await;
            }
        }

        let draft = NewUserProfileDraft {
            external_id: session.subject_id.clone(),
            email: session.email.clone().unwrap_or_default(),
            display_name: session.display_name.clone().unwrap_or_default(),
            photo_url: session.photo_url.clone(),
        };

        match self.profile_gateway.register_profile(draft).await {
            Ok(profile) => Ok(profile),
            Err(error) => {
                // creation can lose the uniqueness race with a concurrent notification
                if let Some(email) = session.email.as_deref() {
                    if let Some(profile) = self.profile_gateway.find_by_email(email).await? {
                        return Ok(profile);
                    }
                }
                Err(error)
            }
        }
    }

    fn set_state(&self, next: SessionState) {
        *self.state.write().expect("lock poisoned") = next;
    }
}
