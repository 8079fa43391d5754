use argh::FromArgs;
use mixeval::{
    Assessor, PlaceholderEvaluator,
    server::{self, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig},
};
use std::{sync::Arc, time::Duration};

// defaults for the server
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 7860;

#[derive(FromArgs)]
/// Serves the mixing degree assessment page.
struct ServerArgs {
    /// the host to run the server on
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to run the server on
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,

    /// simulated evaluation time in milliseconds
    #[argh(option, default = "1000")]
    delay_ms: u64,

    /// largest accepted upload in MiB
    #[argh(option, default = "(DEFAULT_MAX_UPLOAD_BYTES / (1024 * 1024)) as u64")]
    max_upload_mb: u64,
}

impl ServerArgs {
    fn config(&self) -> ServerConfig {
        ServerConfig {
            delay: Duration::from_millis(self.delay_ms),
            max_upload_bytes: (self.max_upload_mb as usize).saturating_mul(1024 * 1024),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: ServerArgs = argh::from_env();
    let config = args.config();

    // format the host and port
    let addr = format!("{}:{}", args.host, args.port);

    let assessor = Arc::new(Assessor::new(PlaceholderEvaluator::with_delay(config.delay)));
    let app = server::router(assessor, config.max_upload_bytes);

    log::info!("Starting the server with {:?}", config);
    log::info!("Listening on: http://{}", addr);
    log::info!("Press Ctrl+C to stop the server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Shutting down");
        })
        .await?;

    Ok(())
}
