mod cli;
mod config;
mod demo;

use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    let directive = args.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap_or_else(|_| {
                    eprintln!("invalid log level '{directive}', using info");
                    "info".parse().unwrap()
                })),
        )
        .init();

    tracing::info!("tabhost v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::load(args.config.as_deref());
    demo::run(config).await;
}
