//! Fixed-width tabular report written to stdout.

use std::io::{self, Write};

use crate::checker::{CheckResult, CheckStatus};

pub const PASSWORD_WIDTH: usize = 20;
pub const STATUS_WIDTH: usize = 15;
pub const SEPARATOR_WIDTH: usize = 60;

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Common => "Common password",
            CheckStatus::Breached(_) => "Data breach",
            CheckStatus::Clean => "Non-breached password",
            CheckStatus::Failed(_) => "Check failed",
        }
    }

    pub fn details(&self) -> String {
        match self {
            CheckStatus::Common => {
                "Found in common_passwords list. Consider changing it!".to_string()
            }
            CheckStatus::Breached(count) => {
                format!("Found {count} times in breaches. Consider changing your password!")
            }
            CheckStatus::Clean => "Not found in breach or common_passwords list.".to_string(),
            CheckStatus::Failed(reason) => reason.clone(),
        }
    }
}

/// Blank line, column titles, then a dashed separator.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write_columns(out, "Password", "Status", "Details")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// One row followed by a blank line.
pub fn write_row<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    write_columns(out, &result.password, result.status.label(), &result.status.details())?;
    writeln!(out)
}

fn write_columns<W: Write>(out: &mut W, password: &str, status: &str, details: &str) -> io::Result<()> {
    writeln!(
        out,
        "{password:<pw$} | {status:<sw$} | {details}",
        pw = PASSWORD_WIDTH,
        sw = STATUS_WIDTH
    )
}
