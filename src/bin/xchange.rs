//! xchange CLI - interactive currency converter
//!
//! Fetches the latest rates once, then converts amounts until you type `exit`.
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert with live rates
//! xchange
//!
//! # Point at another endpoint with a longer timeout, keep scrollback
//! xchange --api-url https://api.fxratesapi.com/latest --timeout 30 --no-clear
//!
//! # Debug logging to stderr
//! xchange --verbose
//! ```

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use std::time::Duration;
use xchange::controller::{report_session_error, Controller, SessionEnd};
use xchange::error::XchangeError;
use xchange::presenter::{Presenter, TerminalPresenter};
use xchange::rates::{ClientConfig, FxRatesApiClient, RateSource, DEFAULT_API_URL};

/// xchange: convert between currencies using live exchange rates
#[derive(Parser)]
#[command(name = "xchange")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive currency converter with live exchange rates", long_about = None)]
struct Cli {
    /// Latest-rates endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value_t = 10)]
    timeout: u64,

    /// Keep previous output instead of clearing the screen each round
    #[arg(long)]
    no_clear: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            let _ = TerminalPresenter::output_only().show_error(&format!("Unexpected error: {}", e));
            process::exit(1);
        }
    };

    let code = runtime.block_on(run(cli)).unwrap_or_else(|e| {
        log::debug!("{:#}", e);
        let _ = TerminalPresenter::output_only().show_error(&format!("Unexpected error: {}", e));
        1
    });

    // The stdin reader may still be blocked after an interrupt; exit without joining it.
    process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut out = TerminalPresenter::output_only();
    let config = ClientConfig {
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout),
    };

    out.show_info("Fetching latest exchange rates...")?;
    let client = FxRatesApiClient::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Contacting {}", client.config().api_url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = tokio::select! {
        result = client.fetch_rates() => result,
        _ = tokio::signal::ctrl_c() => Err(XchangeError::UserCancelled),
    };
    spinner.finish_and_clear();

    let rates = match fetched {
        Ok(rates) => rates,
        Err(e) => return Ok(report_session_error(&mut out, &e)?),
    };

    let clear_screen = !cli.no_clear;
    let mut session = tokio::task::spawn_blocking(move || {
        let mut controller = Controller::new(TerminalPresenter::stdio(clear_screen));
        controller.run(&rates)
    });

    let outcome = tokio::select! {
        joined = &mut session => joined?,
        _ = tokio::signal::ctrl_c() => Err(XchangeError::UserCancelled),
    };

    match outcome {
        Ok(SessionEnd::UserExit) => Ok(0),
        Err(e) => Ok(report_session_error(&mut out, &e)?),
    }
}
