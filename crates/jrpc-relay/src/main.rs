use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use jrpc_shape::{DEFAULT_ENDPOINT, HttpTransport, Options, Relay};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "jrpc-relay",
    about = "Forward line-delimited JSON-RPC from stdin to an HTTP endpoint and normalize the replies",
    version
)]
struct Args {
    /// HTTP endpoint receiving each request as a POST body (defaults to the
    /// fixed upstream URL)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Keep `{}` for this field instead of turning it into null (repeatable)
    #[arg(long = "keep-empty", value_name = "FIELD")]
    keep_empty: Vec<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let options = args
        .keep_empty
        .into_iter()
        .fold(Options::default(), Options::keep_empty_object);

    let transport = HttpTransport::new(args.endpoint.as_str())
        .with_context(|| format!("failed to set up HTTP client for {}", args.endpoint))?;
    let relay = Relay::new(transport, options);

    relay.run(stdin().lock(), stdout().lock())?;
    Ok(())
}
