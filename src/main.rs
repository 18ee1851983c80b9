//! Entry point for the opstop TUI. Parses args and runs the App.

use std::env;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use opstop::app::App;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[derive(Debug)]
struct ParsedArgs {
    url: Option<String>,
    interval_secs: Option<u64>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "opstop".into());
    let mut url: Option<String> = None;
    let mut interval_secs: Option<u64> = None;

    let usage =
        || format!("Usage: {prog} [--interval SECONDS|-i SECONDS] [http://HOST:PORT/api]");

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(usage());
            }
            "--interval" | "-i" => match it.next().map(|v| v.parse::<u64>()) {
                Some(Ok(secs)) if secs > 0 => interval_secs = Some(secs),
                _ => return Err(format!("--interval expects a positive number of seconds. {}", usage())),
            },
            _ if arg.starts_with("--interval=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    match v.parse::<u64>() {
                        Ok(secs) if secs > 0 => interval_secs = Some(secs),
                        _ => {
                            return Err(format!(
                                "--interval expects a positive number of seconds. {}",
                                usage()
                            ))
                        }
                    }
                }
            }
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {}", usage()));
                }
            }
        }
    }
    Ok(ParsedArgs { url, interval_secs })
}

fn init_tracing() {
    // Console-equivalent log on stderr; quiet unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reuse the same parsing logic for testability
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    init_tracing();

    let url = parsed.url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let interval = Duration::from_secs(parsed.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS));

    let mut app = App::new(interval);
    app.run(&url).await
}
