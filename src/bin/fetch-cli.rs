use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetchwrap::config::loader::load_request;
use fetchwrap::{
    CallPolicy, FetchExecutor, FetchObserver, HttpTransport, LifecycleState, Payload,
    RequestConfig, RequestOptions,
};

#[derive(Parser)]
#[command(name = "fetch-cli")]
#[command(about = "Run one request through the fetch pipeline", long_about = None)]
struct Cli {
    /// Target URL (ignored when --config is given).
    url: Option<String>,

    /// HTTP method (default GET).
    #[arg(short, long)]
    method: Option<String>,

    /// Header as name:value; repeatable.
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Request body.
    #[arg(short, long)]
    body: Option<String>,

    /// Milliseconds to wait before dispatching the call.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Milliseconds before the in-flight call is aborted.
    #[arg(long, default_value_t = 20_000)]
    timeout_ms: u64,

    /// Load the whole request from a TOML file instead.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Prints the finalized error descriptor the way a UI observer would
/// render it.
struct PrintObserver;

impl FetchObserver for PrintObserver {
    fn on_transition(&self, state: &LifecycleState) {
        if let LifecycleState::Error(descriptor) = state {
            eprintln!("{}", descriptor.message);
            if let Some(errors) = &descriptor.errors {
                eprintln!("{}", errors);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetchwrap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let request = build_request(&cli)?;

    let executor = FetchExecutor::with_observer(HttpTransport::new(), Arc::new(PrintObserver));
    match executor.execute_config(&request).await {
        Ok(Payload::Json(value)) => println!("{}", serde_json::to_string_pretty(&value)?),
        Ok(Payload::Text(text)) | Ok(Payload::Acknowledged(text)) => println!("{}", text),
        Err(_) => {
            // The observer already printed the descriptor.
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_request(cli: &Cli) -> Result<RequestConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        return Ok(load_request(path)?);
    }

    let url = cli
        .url
        .clone()
        .ok_or("either a URL or --config is required")?;

    let mut headers = Vec::new();
    for raw in &cli.headers {
        let (name, value) = raw
            .split_once(':')
            .ok_or_else(|| format!("invalid header '{}', expected name:value", raw))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    Ok(RequestConfig {
        url,
        options: RequestOptions {
            method: cli.method.clone(),
            headers,
            body: cli.body.clone(),
        },
        policy: CallPolicy {
            additional_call_time_ms: cli.delay_ms,
            abort_timeout_ms: cli.timeout_ms,
        },
    })
}
