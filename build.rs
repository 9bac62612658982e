fn main() {
    println!("cargo:rerun-if-changed=proto/identity_token_verification.proto");

    // Point tonic-build at a vendored `protoc` so the build does not depend on a
    // system-installed protobuf compiler.
    if std::env::var_os("PROTOC").is_none() {
        // SAFETY: single-threaded build script, set before any threads are spawned.
        unsafe {
            std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path().unwrap());
        }
    }

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/identity_token_verification.proto"], &["proto"])
        .expect("failed to compile identity token verification proto");
}
