use std::sync::Arc;

use hotel_marketplace_api::session_bridge::application::{
    ambient_credential_store::AmbientCredentialStore, session_bridge_impl::SessionBridgeImpl,
};

use super::fakes::FakeUserProfileGateway;

pub struct BridgeHarness {
    pub gateway: Arc<FakeUserProfileGateway>,
    pub ambient: Arc<AmbientCredentialStore>,
    pub bridge: SessionBridgeImpl,
}

pub fn create_bridge_harness(secure_transport: bool) -> BridgeHarness {
    let gateway = Arc::new(FakeUserProfileGateway::new());
    let ambient = Arc::new(AmbientCredentialStore::new());

    let bridge = SessionBridgeImpl::new(ambient.clone(), gateway.clone(), secure_transport);

    BridgeHarness {
        gateway,
        ambient,
        bridge,
    }
}
