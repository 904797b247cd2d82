mod cli;
mod commands;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use tronrpc_core::{ClientConfig, CoreError, HttpNodeClient, NodeError};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut config =
        ClientConfig::new(&args.node_url).with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(api_key) = &args.api_key {
        config = config.with_api_key(api_key);
    }
    let rpc = HttpNodeClient::with_config(config).context("build node client")?;
    tracing::debug!(node_url = rpc.base_url(), "node client ready");

    let value = commands::run(&rpc, &args.command)
        .await
        .map_err(|err| explain_error(&args.node_url, err))?;

    let rendered = serde_json::to_string_pretty(&value).context("render result")?;
    println!("{rendered}");
    Ok(())
}

/// Node call failures get the request context and a hint; anything raised
/// before a request was sent (argument parsing, address validation) is
/// passed through unchanged.
fn explain_error(node_url: &str, err: eyre::Report) -> eyre::Report {
    match err.downcast_ref::<CoreError>() {
        Some(core @ CoreError::Node { .. }) => eyre!(format_node_error(node_url, core)),
        _ => err,
    }
}

fn format_node_error(node_url: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("request to node `{node_url}` failed"),
        format!("error: {err}"),
    ];
    if let Some(hint) = hint_for(err) {
        lines.push(format!("hint: {hint}"));
    }
    lines.join("\n")
}

fn hint_for(err: &CoreError) -> Option<&'static str> {
    match err.node_error()? {
        NodeError::Transport(source) if source.is_timeout() => {
            Some("the node did not answer in time; raise --timeout-secs or check its load")
        }
        NodeError::Transport(source) if source.is_connect() => {
            Some("connection failed; verify the node url and that its HTTP API is enabled")
        }
        NodeError::HttpStatus { status } => match status.as_u16() {
            401 | 403 => Some("authentication failed; verify --api-key"),
            404 => Some("endpoint not found; the node url must be the wallet API root"),
            429 => Some("rate limited by the gateway; supply --api-key or slow down"),
            _ => None,
        },
        NodeError::Deserialization(_) => {
            Some("the response was not the expected JSON; verify the url targets a TRON full node")
        }
        _ => None,
    }
}
