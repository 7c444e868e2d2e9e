use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use memes_frontend::{
    bucket::BucketClient, config::Config, meme_client::MemeClient, server, state::AppState,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Startup-time contract: a partially configured process must not serve
    // a single request.
    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            eprintln!("ERROR {err}");
            std::process::exit(1);
        }
    };

    let s3_client = Arc::new(S3Client::from_conf(config.s3_client_config()));
    let bucket_client = Arc::new(BucketClient::new(
        s3_client,
        config.bucket_name().to_string(),
    ));
    let meme_client = Arc::new(MemeClient::new(config.backend_base_url().to_string()));

    server::start(AppState {
        config,
        meme_client,
        bucket_client,
    })
    .await
}
