use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_tracker::{
    AppState, build_router, graceful_shutdown, logging_middleware,
    stores::{InMemoryTransactionStore, TransactionStore},
};

/// The REST API server for the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to serve the API from.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory containing an SSL certificate `cert.pem` and key `key.pem`.
    /// Serves plain HTTP when not set.
    #[arg(long)]
    cert_path: Option<PathBuf>,

    /// Start with no transactions instead of the example transactions.
    #[arg(long)]
    empty: bool,

    /// File to write debug level logs to.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(args.log_file.as_ref()) {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    let store = if args.empty {
        InMemoryTransactionStore::new()
    } else {
        InMemoryTransactionStore::with_sample_data()
    };
    match store.len() {
        Ok(count) => tracing::info!("Starting with {count} transactions"),
        Err(error) => tracing::warn!("Could not count the initial transactions: {error}"),
    }
    let state = AppState::new(store);

    let addr = SocketAddr::from((args.host, args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    let result = match args.cert_path {
        Some(cert_path) => {
            let tls_config = match RustlsConfig::from_pem_file(
                cert_path.join("cert.pem"),
                cert_path.join("key.pem"),
            )
            .await
            {
                Ok(config) => config,
                Err(error) => {
                    tracing::error!("Could not open TLS certificates: {error}");
                    return ExitCode::FAILURE;
                }
            };

            tracing::info!("HTTPS server listening on {}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
        None => {
            tracing::info!("HTTP server listening on {}", addr);
            axum_server::bind(addr)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Server stopped with an error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_filter(
        EnvFilter::builder()
            .with_default_directive(filter::LevelFilter::INFO.into())
            .from_env_lossy(),
    );

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
