//! JSON transaction store: the per-account files the savings tracker reads.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::transaction::Transaction;

/// Write the full transaction list as a pretty-printed JSON array,
/// creating missing parent directories and replacing any existing file.
///
/// Output is two-space indented with non-ASCII characters kept literal,
/// and is byte-identical across runs over the same input.
pub fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(transactions).context("serialize transactions")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Read a previously written transaction file.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}
