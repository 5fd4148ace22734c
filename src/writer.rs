//! One-shot output write.
//!
//! The expander buffers the entire result first; any failure aborts before
//! this runs, so a partial or truncated file is never left behind.

use std::fs;
use std::io;
use std::path::Path;

pub fn emit(expanded: &str, path: &Path) -> io::Result<()> {
    fs::write(path, expanded)
}
