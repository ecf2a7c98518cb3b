//! Statement locale: the token tables and number conventions of a source
//! spreadsheet.
//!
//! PEA exports spell dates like `02-janv-2024` and amounts like
//! `1 234,56 €`. Everything locale-specific lives behind [`Locale`] so the
//! row mapping in releve-ingest never touches a vocabulary table.

use anyhow::Result;
use chrono::NaiveDate;

use crate::transaction::TransactionType;

/// French short month names as spreadsheets export them: with and without
/// the trailing period, accented and unaccented.
const FRENCH_MONTHS: &[(&str, u32)] = &[
    ("janv", 1),
    ("janv.", 1),
    ("févr", 2),
    ("févr.", 2),
    ("fevr", 2),
    ("fevr.", 2),
    ("mars", 3),
    ("avr", 4),
    ("avr.", 4),
    ("mai", 5),
    ("juin", 6),
    ("juil", 7),
    ("juil.", 7),
    ("août", 8),
    ("aout", 8),
    ("sept", 9),
    ("sept.", 9),
    ("oct", 10),
    ("oct.", 10),
    ("nov", 11),
    ("nov.", 11),
    ("déc", 12),
    ("déc.", 12),
    ("dec", 12),
    ("dec.", 12),
];

/// Statement operation terms mapped to the tracker's canonical types.
/// Lookup is exact and case-sensitive; unknown terms stay verbatim.
const FRENCH_OPERATIONS: &[(&str, TransactionType)] = &[
    ("Achat", TransactionType::Buy),
    ("Vente", TransactionType::Sell),
    ("Dividende", TransactionType::Dividend),
    ("Frais", TransactionType::Fee),
];

/// Date and number conventions of a source statement.
///
/// Retargeting the importer to another broker locale means supplying a
/// different `Locale` value; the row mapping stays unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    /// Decimal separator used by the source.
    pub decimal_separator: char,
    months: &'static [(&'static str, u32)],
    operations: &'static [(&'static str, TransactionType)],
}

/// The French brokerage export locale.
pub const FRENCH: Locale = Locale {
    decimal_separator: ',',
    months: FRENCH_MONTHS,
    operations: FRENCH_OPERATIONS,
};

impl Locale {
    /// Look up a lowercased month token, e.g. `janv.` or `aout`.
    pub fn month_number(&self, token: &str) -> Option<u32> {
        self.months
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, number)| *number)
    }

    /// Look up a statement operation term, e.g. `Achat`.
    pub fn operation(&self, term: &str) -> Option<TransactionType> {
        self.operations
            .iter()
            .find(|(name, _)| *name == term)
            .map(|(_, kind)| *kind)
    }

    /// Parse a statement date like `02-janv-2024` into ISO `YYYY-MM-DD`.
    ///
    /// Anything that does not form a valid calendar date comes back as the
    /// trimmed input, so downstream always has the source text to show.
    /// This never errors.
    pub fn parse_date(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.try_parse_date(trimmed) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => trimmed.to_string(),
        }
    }

    fn try_parse_date(&self, trimmed: &str) -> Option<NaiveDate> {
        let mut parts = trimmed.split('-');
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        let day: u32 = day.trim().parse().ok()?;
        let month = self.month_number(&month.trim().to_lowercase())?;
        let year: i32 = year.trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Parse locale-formatted monetary text, e.g. `1 234,56 €`.
    ///
    /// Keeps only digits, the decimal separator and `-`, which drops
    /// currency symbols, spaces and thousands separators. Missing or
    /// unparseable input yields 0.0; this never errors.
    pub fn parse_amount(&self, raw: &str) -> f64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        let cleaned: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == self.decimal_separator || *c == '-')
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        cleaned.parse().unwrap_or(0.0)
    }

    /// Parse a unit count like `2,5`.
    ///
    /// An empty cell counts as zero units; non-numeric or non-finite input
    /// is an error the caller decides how to handle. Unlike
    /// [`Locale::parse_amount`], no symbol stripping is applied.
    pub fn parse_quantity(&self, raw: &str) -> Result<f64> {
        if raw.is_empty() {
            return Ok(0.0);
        }
        let normalized = raw.trim().replace(self.decimal_separator, ".");
        // "inf" and "NaN" parse as f64 but have no JSON number form.
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(anyhow::anyhow!("invalid quantity '{raw}'")),
        }
    }
}
