use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::ProgressBar;
use passcheck_verifier::{CommonPasswords, PasswordDigest, scan_range};
use tracing::{debug, warn};

use crate::client::{API_REQUEST_DELAY, RangeClient};
use crate::error::Error;
use crate::report;

/// Classification of one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Listed in the local common password file. No remote lookup was made.
    Common,
    /// Seen this many times in breach data.
    Breached(u64),
    /// Neither common nor breached.
    Clean,
    /// The remote lookup could not complete.
    Failed(String),
}

/// A finished check, ready for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub password: String,
    pub status: CheckStatus,
}

/// What to do when a remote lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Record a failed row and move on to the next password.
    #[default]
    Continue,
    /// Stop the run and return the error. No row is written for that password.
    Abort,
}

/// Exit code for a run where some checks could not complete. 1 is the usage
/// error and 2 is clap's argument error, so this stays distinct from both.
pub const EXIT_INCOMPLETE: u8 = 3;

/// Tallies for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub common: usize,
    pub breached: usize,
    pub clean: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, status: &CheckStatus) {
        match status {
            CheckStatus::Common => self.common += 1,
            CheckStatus::Breached(_) => self.breached += 1,
            CheckStatus::Clean => self.clean += 1,
            CheckStatus::Failed(_) => self.failed += 1,
        }
    }

    pub fn checked(&self) -> usize {
        self.common + self.breached + self.clean + self.failed
    }

    /// 0 when every password was checked, [`EXIT_INCOMPLETE`] when at least one
    /// check failed. Findings alone never make the run fail.
    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 { 0 } else { EXIT_INCOMPLETE }
    }
}

/// Checks passwords locally first, then against the range API.
pub struct PasswordChecker {
    client: RangeClient,
    common_file: PathBuf,
    common: OnceLock<CommonPasswords>,
    request_delay: Duration,
    progress: ProgressBar,
}

impl PasswordChecker {
    /// The common password file is read once, on the first check.
    pub fn new(client: RangeClient, common_file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            common_file: common_file.into(),
            common: OnceLock::new(),
            request_delay: API_REQUEST_DELAY,
            progress: ProgressBar::hidden(),
        }
    }

    /// Uses an already loaded set instead of reading a file.
    pub fn with_common_passwords(client: RangeClient, common: CommonPasswords) -> Self {
        let mut checker = Self::new(client, PathBuf::new());
        checker.common = OnceLock::from(common);
        checker
    }

    /// Sleep before every remote lookup. Defaults to [`API_REQUEST_DELAY`].
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    fn common_passwords(&self) -> &CommonPasswords {
        self.common.get_or_init(|| {
            self.progress.suspend(|| CommonPasswords::load_or_empty(&self.common_file))
        })
    }

    /// Checks one password as given. Callers trim it first.
    pub async fn check(&self, password: &str) -> Result<CheckStatus, Error> {
        if self.common_passwords().contains(password) {
            return Ok(CheckStatus::Common);
        }

        let digest = PasswordDigest::new(password);

        // Unconditional, even before the first request of the run.
        self.progress
            .set_message(format!("waiting {:.1}s for rate limit", self.request_delay.as_secs_f64()));
        tokio::time::sleep(self.request_delay).await;

        self.progress.set_message(format!("querying range {}", digest.prefix()));
        let body = self.client.fetch_range(digest.prefix()).await?;
        let scan = scan_range(&body, digest.suffix());
        debug!(prefix = digest.prefix(), count = scan.count, "range scanned");

        Ok(if scan.is_breached() { CheckStatus::Breached(scan.count) } else { CheckStatus::Clean })
    }
}

/// Checks every password in order and writes the report to `out`.
///
/// Passwords are trimmed and checked one at a time. The header is written once,
/// then one row per password as soon as its check finishes.
pub async fn run<W: Write>(
    checker: &PasswordChecker,
    passwords: &[String],
    mode: FailureMode,
    out: &mut W,
) -> Result<RunSummary, Error> {
    if passwords.is_empty() {
        return Err(Error::NoPasswords);
    }

    let progress = &checker.progress;
    progress.set_length(passwords.len() as u64);

    progress.suspend(|| report::write_header(out))?;

    let mut summary = RunSummary::default();
    for raw in passwords {
        let password = raw.trim();

        let status = match checker.check(password).await {
            Ok(status) => status,
            Err(e) if mode == FailureMode::Continue => {
                progress.suspend(|| warn!("check failed: {e}"));
                CheckStatus::Failed(e.to_string())
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        summary.record(&status);
        let result = CheckResult { password: password.to_string(), status };
        progress.suspend(|| report::write_row(out, &result))?;
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}
