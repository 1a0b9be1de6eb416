use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use passcheck::{
    DEFAULT_API_URL, Error, FailureMode, PasswordChecker, RangeClient, init_logging, run,
};
use passcheck_verifier::COMMON_PASSWORDS_FILE;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "passcheck")]
#[command(about = "Check passwords against a common password list and Have I Been Pwned")]
struct Args {
    /// Passwords to check. Options go first; everything from the first
    /// password on is a password, even if it starts with `-`
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    passwords: Vec<String>,

    /// Local list of common passwords, one per line
    #[arg(long, default_value = COMMON_PASSWORDS_FILE)]
    common_file: PathBuf,

    /// Base URL of the Pwned Passwords range API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Delay before every range request, in milliseconds
    #[arg(long, default_value_t = 1500, value_parser = clap::value_parser!(u64).range(1500..))]
    delay_ms: u64,

    /// Abort the run on the first failed range request
    #[arg(long)]
    fail_fast: bool,

    /// Disable progress bar
    #[arg(long)]
    no_progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let client = RangeClient::new(args.api_url)?;
    let checker = PasswordChecker::new(client, args.common_file)
        .with_request_delay(Duration::from_millis(args.delay_ms))
        .with_progress(progress.clone());

    let mode = if args.fail_fast { FailureMode::Abort } else { FailureMode::Continue };

    let mut stdout = io::stdout();
    let summary = match run(&checker, &args.passwords, mode, &mut stdout).await {
        Ok(summary) => summary,
        Err(e @ Error::NoPasswords) => {
            progress.finish_and_clear();
            println!("{e}");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    debug!(
        checked = summary.checked(),
        common = summary.common,
        breached = summary.breached,
        clean = summary.clean,
        failed = summary.failed,
        "run complete"
    );
    if summary.failed > 0 {
        warn!("{} of {} checks could not complete", summary.failed, summary.checked());
    }

    Ok(ExitCode::from(summary.exit_code()))
}
