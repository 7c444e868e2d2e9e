pub mod stub_backend;

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use memes_frontend::{
    bucket::BucketClient, config::Config, meme_client::MemeClient, routes, state::AppState,
};

/// Sets every required environment variable, pointing the backend at the
/// given base URL. Callers must run under `#[serial]`.
pub fn set_required_env(backend_base_url: &str) {
    std::env::set_var("S3_ENDPOINT", "localhost");
    std::env::set_var("S3_ENDPOINT_PORT", "9000");
    std::env::set_var("S3_ACCESS_KEY", "minioadmin");
    std::env::set_var("S3_SECRET_KEY", "minioadmin");
    std::env::set_var("S3_BUCKET_NAME", "memes");
    std::env::set_var("DB_CLIENT_ENDPOINT", backend_base_url);
    std::env::set_var("USE_SSL", "false");
}

/// Builds the full router with real dependencies, wired to the given backend
pub fn test_router(backend_base_url: &str) -> axum::Router {
    set_required_env(backend_base_url);

    let config = Arc::new(Config::from_env().expect("test environment should be complete"));

    let s3_client = Arc::new(S3Client::from_conf(config.s3_client_config()));
    let bucket_client = Arc::new(BucketClient::new(
        s3_client,
        config.bucket_name().to_string(),
    ));
    let meme_client = Arc::new(MemeClient::new(config.backend_base_url().to_string()));

    routes::routes().with_state(AppState {
        config,
        meme_client,
        bucket_client,
    })
}
