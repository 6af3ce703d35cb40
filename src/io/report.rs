// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chain reports: fixed-width tables, export files, and link verification.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::TokenRegistry;
use crate::token::{Half, Token, TokenId};

#[derive(Debug, Error)]
#[error("Error exporting chain to {}: {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// One displayed link of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRow {
    /// 1-based position in the chain.
    pub position: usize,
    pub id: TokenId,
    pub code: String,
    pub takes: Half,
    pub gives: Half,
}

impl ChainRow {
    fn from_token(position: usize, token: &Token) -> Self {
        Self {
            position,
            id: token.id(),
            code: token.code().to_owned(),
            takes: token.takes(),
            gives: token.gives(),
        }
    }
}

/// Resolve a chain to display rows. Unregistered ids are skipped but keep
/// their position.
pub fn chain_rows(registry: &TokenRegistry, chain: &[TokenId]) -> Vec<ChainRow> {
    chain
        .iter()
        .enumerate()
        .filter_map(|(index, &id)| registry.get(id).map(|token| ChainRow::from_token(index + 1, token)))
        .collect()
}

pub fn header_line() -> String {
    format!("{:<8} {:<5} {:<8} {:<6} {:<6}", "Position", "ID", "Number", "Takes", "Gives")
}

pub fn row_line(row: &ChainRow) -> String {
    format!(
        "{:<8} {:<5} {:<8} {:<6} {:<6}",
        row.position, row.id, row.code, row.takes, row.gives
    )
}

/// Join `head` and one line per row, each newline-terminated.
fn render_lines(head: Vec<String>, rows: &[ChainRow]) -> String {
    head.into_iter()
        .chain(rows.iter().map(row_line))
        .map(|line| line + "\n")
        .collect()
}

/// Table for terminal output: header and rows framed by 50-dash rules.
pub fn render_table(rows: &[ChainRow]) -> String {
    let rule = "-".repeat(50);
    render_lines(vec![rule.clone(), header_line(), rule], rows)
}

/// Contents of an export file. `generated_on` is written verbatim.
pub fn render_export(rows: &[ChainRow], chain_len: usize, generated_on: &str) -> String {
    let head = vec![
        format!("# Chain with {} tokens", chain_len),
        format!("# Generated on {}", generated_on),
        String::new(),
        header_line(),
        "-".repeat(40),
    ];
    render_lines(head, rows)
}

/// Write the chain to `path`, stamped with the local time.
pub fn write_export(path: &Path, rows: &[ChainRow], chain_len: usize) -> Result<(), ExportError> {
    let generated_on = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    fs::write(path, render_export(rows, chain_len, &generated_on)).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })
}

/// One link between consecutive chain entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck {
    /// 1-based position of the first token of the link.
    pub position: usize,
    pub from: String,
    pub to: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainVerification {
    pub links: Vec<LinkCheck>,
}

impl ChainVerification {
    /// True when every link connects. Trivially true for chains shorter
    /// than two tokens.
    pub fn is_valid(&self) -> bool {
        self.links.iter().all(|link| link.valid)
    }
}

/// Check that every consecutive pair in `chain` connects.
///
/// A link touching an unregistered id is invalid.
pub fn verify_chain(registry: &TokenRegistry, chain: &[TokenId]) -> ChainVerification {
    let links = chain
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let from = registry.get(pair[0]);
            let to = registry.get(pair[1]);
            LinkCheck {
                position: index + 1,
                from: from.map(|t| t.code().to_owned()).unwrap_or_default(),
                to: to.map(|t| t.code().to_owned()).unwrap_or_default(),
                valid: matches!((from, to), (Some(a), Some(b)) if a.connects_to(b)),
            }
        })
        .collect();
    ChainVerification { links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(codes: &[&str]) -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        for code in codes {
            assert!(registry.add_token_direct(code));
        }
        registry
    }

    fn ids(values: &[u32]) -> Vec<TokenId> {
        values.iter().copied().map(TokenId::new).collect()
    }

    #[test]
    fn test_row_layout() {
        let registry = registry(&["100200"]);
        let rows = chain_rows(&registry, &ids(&[1]));
        assert_eq!(header_line(), "Position ID    Number   Takes  Gives ");
        assert_eq!(row_line(&rows[0]), "1        1     100200   100    200   ");
    }

    #[test]
    fn test_render_table() {
        let registry = registry(&["100200", "200300"]);
        let table = render_table(&chain_rows(&registry, &ids(&[1, 2])));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-".repeat(50));
        assert_eq!(lines[4], "2        2     200300   200    300   ");
    }

    #[test]
    fn test_render_table_without_rows() {
        let table = render_table(&[]);
        assert_eq!(table, format!("{0}\n{1}\n{0}\n", "-".repeat(50), header_line()));
    }

    #[test]
    fn test_render_export() {
        let registry = registry(&["100200", "200300"]);
        let rows = chain_rows(&registry, &ids(&[1, 2]));
        let text = render_export(&rows, 2, "2025-01-01 00:00:00");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# Chain with 2 tokens");
        assert_eq!(lines[1], "# Generated on 2025-01-01 00:00:00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[4], "-".repeat(40));
        assert_eq!(lines.len(), 7);
        assert!(text.ends_with("200    300   \n"));
    }

    #[test]
    fn test_write_export_to_missing_directory_fails() {
        let err = write_export(Path::new("/definitely/not/here/out.txt"), &[], 0).unwrap_err();
        assert!(err.to_string().starts_with("Error exporting chain to /definitely/not/here/out.txt"));
    }

    #[test]
    fn test_verify_chain() {
        let registry = registry(&["100200", "200300", "900100"]);

        let good = verify_chain(&registry, &ids(&[3, 1, 2]));
        assert!(good.is_valid());
        assert_eq!(good.links.len(), 2);

        let bad = verify_chain(&registry, &ids(&[1, 3]));
        assert!(!bad.is_valid());
        assert_eq!(bad.links[0].from, "100200");
        assert_eq!(bad.links[0].to, "900100");

        let unknown = verify_chain(&registry, &ids(&[1, 7]));
        assert!(!unknown.is_valid());

        assert!(verify_chain(&registry, &[]).is_valid());
        assert!(verify_chain(&registry, &ids(&[2])).is_valid());
    }
}
