#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn proteon_cmd() -> Command {
    let mut cmd = Command::cargo_bin("proteon").unwrap();
    for key in [
        "PROTEON_CONFIG",
        "PROTEON_MAX_DESCRIPTION_LENGTH",
        "PROTEON_MAX_COMMENTS_LENGTH",
        "PROTEON_MAX_SEQUENCE_LENGTH",
        "PROTEON_MAX_FASTA_FILE_LENGTH",
        "PROTEON_PDB_CODE_LENGTH",
        "PROTEON_PDB_CHAIN_LENGTH",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Scratch directory for input files
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

pub fn alignment_json() -> &'static str {
    r#"{
        "alignment_method": "hhsearch",
        "rank": 5,
        "query_description": "T0999",
        "target_pdb_code": "1ABC",
        "target_pdb_chain": "A",
        "query_start": 1,
        "query_aln_seq": "MKV-LA",
        "target_start": 1,
        "target_aln_seq": "MKVALA"
    }"#
}
