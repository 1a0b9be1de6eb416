//! Checks passwords against a local list of common passwords and the
//! [Pwned Passwords](https://haveibeenpwned.com/Passwords) range API.
//!
//! Each password is looked up locally first. Only a miss hashes it and asks the
//! range API for every breached suffix sharing its 5 character prefix, so the
//! full hash never leaves the machine.
//!
//! # Usage
//!
//! ```sh
//! passcheck hunter2 'correct horse battery staple'
//! ```
//!
//! Requests are spaced by [`API_REQUEST_DELAY`] to stay inside the API's rate
//! limit, and passwords are checked strictly one after another.

pub mod checker;
pub mod client;
pub mod error;
pub mod logging;
pub mod report;

pub use checker::{
    CheckResult, CheckStatus, EXIT_INCOMPLETE, FailureMode, PasswordChecker, RunSummary, run,
};
pub use client::{API_REQUEST_DELAY, DEFAULT_API_URL, RangeClient};
pub use error::Error;
pub use logging::init_logging;
