use clap::Parser;
use tokio::net::TcpListener;

use web_skeleton::config::load_config;
use web_skeleton::http::HttpServer;
use web_skeleton::lifecycle::Shutdown;
use web_skeleton::observability::logging;

#[derive(Parser)]
#[command(name = "web-skeleton")]
#[command(about = "Empty MVC-style web application skeleton", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config problems are fatal; nothing is served from a bad config.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.listener.bind_address,
        static_root = %config.static_files.root,
        https_redirect = config.https_redirect.enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let bind_address = config.listener.bind_address.clone();
    let tls = config.listener.tls.clone();
    let server = HttpServer::new(config);

    match tls {
        Some(tls) => {
            // Validated at load time.
            let addr = bind_address.parse()?;
            server.run_tls(addr, &tls, shutdown.subscribe()).await?;
        }
        None => {
            let listener = TcpListener::bind(&bind_address).await?;
            server.run(listener, shutdown.subscribe()).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
