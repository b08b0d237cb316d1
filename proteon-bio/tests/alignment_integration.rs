//! Integration tests for alignment records: Grishin text and JSON exchange

use proteon_bio::alignment::{AlignmentMethod, AlignmentRecord, MultipleAlignments};
use proteon_bio::sequence::FastaRecord;
use proteon_bio::{parse_grishin_blocks, RecordValidator};
use proteon_core::{AlignmentConfig, Config, FormatError};
use serde_json::{json, Value};
use std::sync::Arc;

fn hhsearch_record() -> AlignmentRecord {
    let mut record = AlignmentRecord::new();
    record.alignment_method = Some(AlignmentMethod::HhSearch);
    record.rank = Some(5);
    record.query_description = Some("T0999".to_string());
    record.query_start = Some(1);
    record.query_aln_seq = Some("MKV-LAAG".to_string());
    record.target_start = Some(1);
    record.target_pdb_code = Some("1ABC".to_string());
    record.target_pdb_chain = Some("A".to_string());
    record.target_aln_seq = Some("MKVALA-G".to_string());
    record
}

#[test]
fn test_hhsearch_tag() {
    assert_eq!(hhsearch_record().target_grishin_tag().unwrap(), "1ABCA_205");
}

#[test]
fn test_grishin_offsets_are_zero_based() {
    let text = hhsearch_record().grishin_lines().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "## T0999 1ABCA_205");
    assert!(lines[3].starts_with("0 "));
    assert!(lines[4].starts_with("0 "));
    assert_eq!(lines[5], "--");
}

#[test]
fn test_concatenated_blocks_round_trip() {
    let config = AlignmentConfig::default();
    let mut records = Vec::new();
    for (method, rank) in [
        (AlignmentMethod::HhSearch, 1),
        (AlignmentMethod::SparksX, 2),
        (AlignmentMethod::User, 3),
    ] {
        let mut record = hhsearch_record();
        record.alignment_method = Some(method);
        record.rank = Some(rank);
        record.query_start = Some(10 + rank);
        records.push(record);
    }

    let text: String = records
        .iter()
        .map(|r| r.grishin_lines().unwrap())
        .collect();
    let blocks = parse_grishin_blocks(&text).unwrap();
    assert_eq!(blocks.len(), 3);

    for (block, original) in blocks.into_iter().zip(&records) {
        let parsed = AlignmentRecord::from_block(block, &config).unwrap();
        assert_eq!(parsed.alignment_method, original.alignment_method);
        assert_eq!(parsed.rank, original.rank);
        assert_eq!(parsed.query_start, original.query_start);
        assert_eq!(parsed.hash().unwrap(), original.hash().unwrap());
    }
}

#[test]
fn test_wide_chain_configuration() {
    let config = AlignmentConfig {
        pdb_code_length: 4,
        pdb_chain_length: 2,
    };
    let mut record = hhsearch_record();
    record.target_pdb_chain = Some("AB".to_string());

    let parsed = AlignmentRecord::from_grishin(&record.grishin_lines().unwrap(), &config).unwrap();
    assert_eq!(parsed.target_pdb_code.as_deref(), Some("1ABC"));
    assert_eq!(parsed.target_pdb_chain.as_deref(), Some("AB"));
}

#[test]
fn test_truncated_block_is_malformed() {
    let text = "## T0999 1ABCA_205\n#  \nscores_from_program: 0\n0 MKV-LAAG\n--\n";
    match AlignmentRecord::from_grishin(text, &AlignmentConfig::default()) {
        Err(FormatError::MalformedBlock(_)) => {}
        other => panic!("Expected MalformedBlock, got {:?}", other),
    }
}

#[test]
fn test_rank_past_tag_range_overflows() {
    let mut record = hhsearch_record();
    record.alignment_method = Some(AlignmentMethod::User);
    record.rank = Some(600);
    match record.target_grishin_tag() {
        Err(FormatError::TagOverflow { tag_number }) => assert_eq!(tag_number, 1000),
        other => panic!("Expected TagOverflow, got {:?}", other),
    }
    // Dump degrades to null instead of failing
    assert_eq!(record.dump()["target_grishin_tag"], Value::Null);
}

#[test]
fn test_json_load_and_dump() {
    let input = json!({
        "alignment_method": "sparksX",
        "rank": 2,
        "query_description": "T0999",
        "target_pdb_code": "2XYZ",
        "target_pdb_chain": "B",
        "query_start": 4,
        "query_aln_seq": "MKV",
        "target_start": 7,
        "target_aln_seq": "MRV",
        "p_correct": 0.42,
        "unrelated": "ignored",
    });

    let query = Arc::new(FastaRecord::new("T0999", "AAAMKVAAA"));
    let mut record = AlignmentRecord::new()
        .with_query(Arc::clone(&query))
        .with_group(MultipleAlignments::new());
    record.load(input.as_object().unwrap()).unwrap();

    assert_eq!(record.method().code(), 'S');
    assert!(record.validate(&RecordValidator::new(Config::default())).is_ok());

    let dumped = record.dump();
    assert_eq!(dumped["alignment_method"], json!("sparksX"));
    assert_eq!(dumped["target_grishin_tag"], json!("2XYZB_302"));
    assert_eq!(dumped["FASTA"], json!(">T0999\nAAAMKVAAA"));
    assert_eq!(
        dumped["grishin_lines"],
        json!("## T0999 2XYZB_302\n#  \nscores_from_program: 0\n3 MKV\n6 MRV\n--\n\n")
    );
    assert!(!dumped.contains_key("unrelated"));
    assert!(!dumped.contains_key("active"));

    // Reloading the dump reproduces the whitelisted fields
    let reloaded = AlignmentRecord::from_json(&Value::Object(dumped)).unwrap();
    assert_eq!(reloaded.grishin_lines(), record.grishin_lines());
    assert_eq!(reloaded.p_correct, Some(0.42));
}

#[test]
fn test_extreme_integers_do_not_panic() {
    let mut record = hhsearch_record();
    record.rank = Some(i64::MAX);
    match record.target_grishin_tag() {
        Err(FormatError::TagOverflow { .. }) => {}
        other => panic!("Expected TagOverflow, got {:?}", other),
    }

    let mut record = hhsearch_record();
    record.query_start = Some(i64::MIN);
    assert!(record.grishin_lines().is_err());
    assert_eq!(record.dump()["grishin_lines"], Value::Null);

    let text = "## T0999 1ABCA_205\n#  \nscores_from_program: 0\n9223372036854775807 ACD\n0 ACD\n--\n";
    match AlignmentRecord::from_grishin(text, &AlignmentConfig::default()) {
        Err(FormatError::MalformedBlock(_)) => {}
        other => panic!("Expected MalformedBlock, got {:?}", other),
    }
}
