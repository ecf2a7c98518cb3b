//! Transaction records as the savings tracker stores them.

use serde::{Deserialize, Serialize};

/// Canonical transaction vocabulary of the tracker.
///
/// Source statements spell these in French; terms outside the vocabulary
/// are kept verbatim in [`Transaction::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Fee,
}

impl TransactionType {
    /// Canonical spelling used in the output file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
            TransactionType::Dividend => "Dividend",
            TransactionType::Fee => "Fee",
        }
    }
}

/// One normalized brokerage transaction.
///
/// Serialized field names and order match the tracker's JSON schema; the
/// tracker reads these files directly, so neither may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 1-based position of the row in the source statement.
    pub id: String,
    /// ISO `YYYY-MM-DD`, or the raw statement text when parsing fell back.
    pub date: String,
    /// A [`TransactionType`] spelling, or the raw statement term.
    #[serde(rename = "type")]
    pub kind: String,
    pub asset_name: String,
    pub isin: String,
    pub ticker: String,
    /// Number of units bought or sold.
    pub quantity: f64,
    pub unit_price: f64,
    /// Brokerage fees, EUR.
    pub fees: f64,
    /// French financial transaction tax, EUR.
    pub ttf: f64,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_spellings() {
        assert_eq!(TransactionType::Buy.as_str(), "Buy");
        assert_eq!(TransactionType::Sell.as_str(), "Sell");
        assert_eq!(TransactionType::Dividend.as_str(), "Dividend");
        assert_eq!(TransactionType::Fee.as_str(), "Fee");
    }

    #[test]
    fn test_serializes_with_tracker_field_names() {
        let tx = Transaction {
            id: "1".to_string(),
            date: "2024-01-02".to_string(),
            kind: "Buy".to_string(),
            asset_name: "Total".to_string(),
            isin: "FR0000120271".to_string(),
            ticker: "FP".to_string(),
            quantity: 10.0,
            unit_price: 55.2,
            fees: 1.0,
            ttf: 0.3,
            total_amount: 553.3,
        };

        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","date":"2024-01-02","type":"Buy","assetName":"Total","isin":"FR0000120271","ticker":"FP","quantity":10.0,"unitPrice":55.2,"fees":1.0,"ttf":0.3,"totalAmount":553.3}"#
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let tx = Transaction {
            id: "7".to_string(),
            date: "12-xyz-2023".to_string(),
            kind: "Transfert".to_string(),
            asset_name: "Société Générale".to_string(),
            isin: "".to_string(),
            ticker: "GLE".to_string(),
            quantity: 0.0,
            unit_price: 0.0,
            fees: 0.0,
            ttf: 0.0,
            total_amount: 0.0,
        };

        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
