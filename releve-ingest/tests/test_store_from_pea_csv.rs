use releve_core::locale::FRENCH;
use releve_core::{read_transactions, write_transactions};
use releve_ingest::{ImportMode, parse_pea_csv};
use std::io::Write;
use tempfile::NamedTempFile;

fn statement_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE_CSV: &str = "Date de l'opération,Type d'opération,Nom de l'action/ETF,Code ISIN,Ticker,Nombre de parts,Prix unitaire,Frais de courtage,TTF,Montant total de l operation\n\
02-janv-2024,Achat,Total,FR0000120271,FP,10,\"55,20 €\",\"1,00 €\",\"0,30 €\",\"553,30 €\"\n\
15-mars-2024,Vente,Société Générale,FR0000130809,GLE,4,\"24,50 €\",\"1,00 €\",,\"97,00 €\"\n\
28-juin-2024,Dividende,Total,FR0000120271,FP,,,,,\"12,40 €\"\n";

/// End-to-end: parse a statement, persist it, read it back unchanged.
#[test]
fn test_parse_write_read_round_trip() {
    let csv = statement_file(SAMPLE_CSV);
    let parsed = parse_pea_csv(csv.path(), &FRENCH, ImportMode::Strict).unwrap();
    assert_eq!(parsed.transactions.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    // Intermediate directories do not exist yet; the store creates them.
    let out = dir.path().join("savings").join("transactions").join("pea-main.json");
    write_transactions(&out, &parsed.transactions).unwrap();

    let restored = read_transactions(&out).unwrap();
    assert_eq!(restored, parsed.transactions);
    assert_eq!(restored[1].asset_name, "Société Générale");
    assert_eq!(restored[2].date, "2024-06-28");
}

/// Re-importing the same statement produces byte-identical output.
#[test]
fn test_reimport_is_byte_identical() {
    let csv = statement_file(SAMPLE_CSV);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pea-main.json");

    let first = parse_pea_csv(csv.path(), &FRENCH, ImportMode::Strict).unwrap();
    write_transactions(&out, &first.transactions).unwrap();
    let bytes_first = std::fs::read(&out).unwrap();

    let second = parse_pea_csv(csv.path(), &FRENCH, ImportMode::Strict).unwrap();
    write_transactions(&out, &second.transactions).unwrap();
    let bytes_second = std::fs::read(&out).unwrap();

    assert_eq!(bytes_first, bytes_second);
}

/// A header-only export stores an empty list, not an error.
#[test]
fn test_header_only_export_stores_empty_list() {
    let csv = statement_file(
        "Date de l'opération,Type d'opération,Nom de l'action/ETF,Code ISIN,Ticker,Nombre de parts,Prix unitaire,Frais de courtage,TTF,Montant total de l operation\n",
    );
    let parsed = parse_pea_csv(csv.path(), &FRENCH, ImportMode::Strict).unwrap();
    assert!(parsed.transactions.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.json");
    write_transactions(&out, &parsed.transactions).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[]");
}

/// Accented characters land in the JSON file as-is, not escaped.
#[test]
fn test_written_json_keeps_accents_literal() {
    let csv = statement_file(SAMPLE_CSV);
    let parsed = parse_pea_csv(csv.path(), &FRENCH, ImportMode::Strict).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("accents.json");
    write_transactions(&out, &parsed.transactions).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Société Générale"));
    assert!(!text.contains("\\u"));
}
