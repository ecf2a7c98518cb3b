//! releve-ingest: brokerage statement parsers producing tracker transactions.

pub mod parsers;
pub mod types;

pub use parsers::pea::parse_pea_csv;
pub use types::{ImportMode, ParsedStatement, RowIssue};
