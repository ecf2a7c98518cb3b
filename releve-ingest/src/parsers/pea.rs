//! PEA statement parser (CSV export).
//!
//! Expected header (column order does not matter, names do):
//!   Date de l'opération, Type d'opération, Nom de l'action/ETF, Code ISIN,
//!   Ticker, Nombre de parts, Prix unitaire, Frais de courtage, TTF,
//!   Montant total de l operation
//!
//! Sample row:
//!   02-janv-2024,Achat,Total,FR0000120271,FP,10,"55,20 €","1,00 €","0,30 €","553,30 €"

use anyhow::{Context, Result};
use csv::StringRecord;
use std::path::Path;

use releve_core::{Locale, Transaction};

use crate::types::{ImportMode, ParsedStatement, RowIssue};

pub const COL_DATE: &str = "Date de l'opération";
pub const COL_TYPE: &str = "Type d'opération";
pub const COL_ASSET: &str = "Nom de l'action/ETF";
pub const COL_ISIN: &str = "Code ISIN";
pub const COL_TICKER: &str = "Ticker";
pub const COL_QUANTITY: &str = "Nombre de parts";
pub const COL_UNIT_PRICE: &str = "Prix unitaire";
pub const COL_FEES: &str = "Frais de courtage";
pub const COL_TTF: &str = "TTF";
pub const COL_TOTAL: &str = "Montant total de l operation";

/// Positions of the named columns in this particular export.
///
/// A column absent from the header reads as an empty cell on every row,
/// so its field takes the same default as any other blank value.
struct Columns {
    date: Option<usize>,
    kind: Option<usize>,
    asset: Option<usize>,
    isin: Option<usize>,
    ticker: Option<usize>,
    quantity: Option<usize>,
    unit_price: Option<usize>,
    fees: Option<usize>,
    ttf: Option<usize>,
    total: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            date: find(COL_DATE),
            kind: find(COL_TYPE),
            asset: find(COL_ASSET),
            isin: find(COL_ISIN),
            ticker: find(COL_TICKER),
            quantity: find(COL_QUANTITY),
            unit_price: find(COL_UNIT_PRICE),
            fees: find(COL_FEES),
            ttf: find(COL_TTF),
            total: find(COL_TOTAL),
        }
    }
}

fn cell<'a>(record: &'a StringRecord, index: Option<usize>) -> &'a str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

/// Parse a PEA CSV export into tracker transactions.
///
/// One record per data row in source order, ids numbered from 1. Monetary
/// and date cells that do not parse take their defaults; an unparseable
/// quantity is handled per `mode`. Reader and I/O errors are always fatal.
pub fn parse_pea_csv(
    path: impl AsRef<Path>,
    locale: &Locale,
    mode: ImportMode,
) -> Result<ParsedStatement> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let columns = Columns::locate(rdr.headers()?);

    let mut transactions = Vec::new();
    let mut issues = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row = index + 1;

        let term = cell(&record, columns.kind).trim();
        let kind = match locale.operation(term) {
            Some(known) => known.as_str().to_string(),
            None => term.to_string(),
        };

        let raw_quantity = cell(&record, columns.quantity);
        let quantity = match locale.parse_quantity(raw_quantity) {
            Ok(quantity) => quantity,
            Err(err) => match mode {
                ImportMode::Strict => return Err(err.context(format!("row {row}"))),
                ImportMode::Lenient => {
                    issues.push(RowIssue {
                        row,
                        column: COL_QUANTITY.to_string(),
                        value: raw_quantity.to_string(),
                    });
                    0.0
                }
            },
        };

        transactions.push(Transaction {
            id: row.to_string(),
            date: locale.parse_date(cell(&record, columns.date)),
            kind,
            asset_name: cell(&record, columns.asset).trim().to_string(),
            isin: cell(&record, columns.isin).trim().to_string(),
            ticker: cell(&record, columns.ticker).trim().to_string(),
            quantity,
            unit_price: locale.parse_amount(cell(&record, columns.unit_price)),
            fees: locale.parse_amount(cell(&record, columns.fees)),
            ttf: locale.parse_amount(cell(&record, columns.ttf)),
            total_amount: locale.parse_amount(cell(&record, columns.total)),
        });
    }

    Ok(ParsedStatement { transactions, issues })
}
