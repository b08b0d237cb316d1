//! Grishin pairwise alignment blocks
//!
//! ```text
//! ## {query_description} {target_tag}
//! #
//! scores_from_program: 0
//! {query_start - 1} {query_aln_seq}
//! {target_start - 1} {target_aln_seq}
//! --
//!
//! ```
//!
//! Starts are written zero-based; the structs here hold them one-based.

use crate::alignment::AlignmentMethod;
use proteon_core::{AlignmentConfig, FormatError};

const HEADER_PREFIX: &str = "##";
const SCORES_LINE: &str = "scores_from_program: 0";
const TERMINATOR: &str = "--";

/// Largest number that fits the three digit tag suffix
pub const MAX_TAG_NUMBER: i64 = 999;

/// Target identifier `{pdb_code}{pdb_chain}_{rank + method offset}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrishinTag {
    pub pdb_code: String,
    pub pdb_chain: String,
    pub method: AlignmentMethod,
    pub rank: i64,
}

impl GrishinTag {
    pub fn new(
        pdb_code: impl Into<String>,
        pdb_chain: impl Into<String>,
        method: AlignmentMethod,
        rank: i64,
    ) -> Self {
        Self {
            pdb_code: pdb_code.into(),
            pdb_chain: pdb_chain.into(),
            method,
            rank,
        }
    }

    /// Numeric suffix: rank plus the method's offset
    pub fn number(&self) -> Result<i64, FormatError> {
        self.rank
            .checked_add(self.method.tag_offset())
            .ok_or(FormatError::TagOverflow {
                tag_number: self.rank.saturating_add(self.method.tag_offset()),
            })
    }

    /// Render the tag, refusing numbers outside `0..=999`
    pub fn render(&self) -> Result<String, FormatError> {
        let number = self.number()?;
        if !(0..=MAX_TAG_NUMBER).contains(&number) {
            return Err(FormatError::TagOverflow { tag_number: number });
        }
        Ok(format!("{}{}_{:03}", self.pdb_code, self.pdb_chain, number))
    }

    /// Decode a rendered tag, splitting code and chain by the configured widths
    pub fn parse(tag: &str, config: &AlignmentConfig) -> Result<Self, FormatError> {
        let (ident, number) = tag
            .rsplit_once('_')
            .ok_or_else(|| FormatError::MalformedBlock(format!("tag {:?} has no '_'", tag)))?;

        let number: i64 = number
            .parse()
            .map_err(|_| FormatError::MalformedBlock(format!("tag {:?} has no numeric suffix", tag)))?;
        let method = AlignmentMethod::from_tag_number(number).ok_or_else(|| {
            FormatError::MalformedBlock(format!("tag number {} matches no alignment method", number))
        })?;

        let ident: Vec<char> = ident.chars().collect();
        let code_len = config.pdb_code_length;
        if ident.len() < code_len || ident.len() > code_len.saturating_add(config.pdb_chain_length) {
            return Err(FormatError::MalformedBlock(format!(
                "tag {:?} does not start with a {}-character code and a chain of at most {}",
                tag, code_len, config.pdb_chain_length
            )));
        }

        Ok(Self {
            pdb_code: ident[..code_len].iter().collect(),
            pdb_chain: ident[code_len..].iter().collect(),
            method,
            rank: number - method.tag_offset(),
        })
    }
}

/// One rendered or parsed alignment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrishinBlock {
    pub query_description: String,
    pub target_tag: String,
    /// 1-based
    pub query_start: i64,
    pub query_aln_seq: String,
    /// 1-based
    pub target_start: i64,
    pub target_aln_seq: String,
}

impl GrishinBlock {
    /// Render the block; a start with no zero-based offset is rejected
    pub fn render(&self) -> Result<String, FormatError> {
        Ok(format!(
            "{} {} {}\n#  \n{}\n{} {}\n{} {}\n{}\n\n",
            HEADER_PREFIX,
            self.query_description,
            self.target_tag,
            SCORES_LINE,
            zero_based(self.query_start, "query")?,
            self.query_aln_seq,
            zero_based(self.target_start, "target")?,
            self.target_aln_seq,
            TERMINATOR,
        ))
    }

    /// Parse a single block; surrounding blank lines are ignored
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();

        match lines.last() {
            Some(&TERMINATOR) => Self::from_lines(&lines[..lines.len() - 1]),
            _ => Self::from_lines(&lines),
        }
    }

    /// Decode the target tag with the configured code/chain widths
    pub fn tag(&self, config: &AlignmentConfig) -> Result<GrishinTag, FormatError> {
        GrishinTag::parse(&self.target_tag, config)
    }

    fn from_lines(lines: &[&str]) -> Result<Self, FormatError> {
        if lines.len() != 5 {
            return Err(FormatError::MalformedBlock(format!(
                "expected 5 lines before '{}', found {}",
                TERMINATOR,
                lines.len()
            )));
        }

        let header = lines[0]
            .strip_prefix(HEADER_PREFIX)
            .and_then(|rest| rest.strip_prefix(' '))
            .ok_or_else(|| FormatError::MalformedBlock(format!("bad header line {:?}", lines[0])))?;
        let (query_description, target_tag) = match header.rsplit_once(' ') {
            Some((description, tag)) => (description.to_string(), tag.to_string()),
            None => (String::new(), header.to_string()),
        };
        if target_tag.is_empty() {
            return Err(FormatError::MalformedBlock("header has no target tag".to_string()));
        }

        if !lines[1].starts_with('#') {
            return Err(FormatError::MalformedBlock(format!("bad comment line {:?}", lines[1])));
        }
        if !lines[2].starts_with("scores_from_program:") {
            return Err(FormatError::MalformedBlock(format!("bad scores line {:?}", lines[2])));
        }

        let (query_start, query_aln_seq) = parse_offset_line(lines[3], "query")?;
        let (target_start, target_aln_seq) = parse_offset_line(lines[4], "target")?;

        Ok(Self {
            query_description,
            target_tag,
            query_start,
            query_aln_seq,
            target_start,
            target_aln_seq,
        })
    }
}

fn zero_based(start: i64, side: &str) -> Result<i64, FormatError> {
    start
        .checked_sub(1)
        .ok_or_else(|| FormatError::MalformedBlock(format!("{} start {} is out of range", side, start)))
}

/// `{offset} {sequence}` with a zero-based offset; returns the 1-based start
fn parse_offset_line(line: &str, side: &str) -> Result<(i64, String), FormatError> {
    let (offset, sequence) = line
        .split_once(' ')
        .ok_or_else(|| FormatError::MalformedBlock(format!("bad {} line {:?}", side, line)))?;
    let offset: i64 = offset
        .parse()
        .map_err(|_| FormatError::MalformedBlock(format!("bad {} offset {:?}", side, offset)))?;
    let sequence = sequence.trim();
    if sequence.is_empty() {
        return Err(FormatError::MalformedBlock(format!("empty {} sequence", side)));
    }
    let start = offset
        .checked_add(1)
        .ok_or_else(|| FormatError::MalformedBlock(format!("{} offset {} is out of range", side, offset)))?;
    Ok((start, sequence.to_string()))
}

/// Parse a file of concatenated blocks, each closed by a `--` line
pub fn parse_grishin_blocks(text: &str) -> Result<Vec<GrishinBlock>, FormatError> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line == TERMINATOR {
            blocks.push(GrishinBlock::from_lines(&current)?);
            current.clear();
        } else if !line.is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(GrishinBlock::from_lines(&current)?);
    }

    Ok(blocks)
}
