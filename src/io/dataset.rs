// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dataset loading.
//!
//! A dataset is plain text with one six-digit code per line. Surrounding
//! whitespace is ignored; blank or malformed lines are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::registry::TokenRegistry;
use crate::token::is_valid_code;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error loading dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading dataset: {0}")]
    Read(#[from] io::Error),
}

/// Reset `registry` and fill it from `reader`.
///
/// Returns the number of tokens accepted.
pub fn load_from_reader<R: BufRead>(registry: &mut TokenRegistry, reader: R) -> Result<usize, DatasetError> {
    registry.reset();

    let mut count = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        if is_valid_code(code) && registry.add_token_direct(code) {
            count += 1;
        } else {
            debug!("Skipping malformed line {}: {:?}", number + 1, code);
        }
    }
    Ok(count)
}

/// Reset `registry` and fill it from the file at `path`.
pub fn load_from_path(registry: &mut TokenRegistry, path: &Path) -> Result<usize, DatasetError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let count = load_from_reader(registry, BufReader::new(file)).map_err(|err| match err {
        DatasetError::Read(source) => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!("Loaded {} tokens from {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_skips_malformed_lines() {
        let mut registry = TokenRegistry::new();
        let input = "100200\n  200300  \n\nabcdef\n12345\n1234567\n300400\n";

        let count = load_from_reader(&mut registry, input.as_bytes()).unwrap();
        assert_eq!(count, 3);

        let codes: Vec<&str> = registry.get_all_tokens().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["100200", "200300", "300400"]);
    }

    #[test]
    fn test_load_resets_registry() {
        let mut registry = TokenRegistry::new();
        registry.add_token_direct("999999");

        load_from_reader(&mut registry, "111222\n".as_bytes()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_all_tokens()[0].id().value(), 1);
    }

    #[test]
    fn test_load_handles_crlf() {
        let mut registry = TokenRegistry::new();
        let count = load_from_reader(&mut registry, "100200\r\n200300\r\n".as_bytes()).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_missing_file() {
        let mut registry = TokenRegistry::new();
        let path = Path::new("/definitely/not/a/dataset.txt");
        let err = load_from_path(&mut registry, path).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
        assert_eq!(err.to_string(), "Dataset file not found: /definitely/not/a/dataset.txt");
    }
}
