pub mod decode_only_identity_verification_facade_impl;
pub mod grpc_identity_verification_facade_impl;
