//! Local lookup against a list of known common passwords.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

/// Default file name, resolved against the working directory.
pub const COMMON_PASSWORDS_FILE: &str = "common_passwords.txt";

/// An immutable set of common passwords, one per line of the source file.
///
/// Membership is an exact, case-sensitive string match. Lines are stored as-is
/// apart from their terminator, so leading or trailing spaces are significant.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// An empty set. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads every line of `reader` into the set.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let entries = reader.lines().collect::<io::Result<HashSet<String>>>()?;
        Ok(Self { entries })
    }

    /// Opens and reads the file at `path`.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Like [`CommonPasswords::open`], but a missing or unreadable file only
    /// logs a warning and yields an empty set, so checks fall through to the
    /// remote lookup.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::open(path) {
            Ok(set) => {
                debug!(path = %path.display(), entries = set.len(), "loaded common passwords");
                set
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "'{}' not found. Skipping local common password check.",
                    path.display()
                );
                Self::empty()
            }
            Err(e) => {
                warn!(
                    "Error reading '{}': {e}. Skipping local common password check.",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    #[inline]
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(Into::into).collect() }
    }
}

/// One-shot lookup: loads the file at `path` and tests `password` against it.
///
/// Never fails. A file that cannot be read counts as "not common".
pub fn is_common(path: &Path, password: &str) -> bool {
    CommonPasswords::load_or_empty(path).contains(password)
}
