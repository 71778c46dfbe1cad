//! This module provides the `RuleLoader` struct, responsible for loading rule
//! tables from files and string content.

use crate::parser::parse;
use crate::types::{MachineError, RuleTable};
use std::fs;
use std::path::Path;

/// `RuleLoader` is a utility struct for loading rule tables.
///
/// It reads rule quintuple text from a file or a string and parses it into a
/// `RuleTable`, preserving declaration order.
pub struct RuleLoader;

impl RuleLoader {
    /// Loads a rule table from the file at `path`.
    ///
    /// # Errors
    ///
    /// * [`MachineError::FileError`] if the file cannot be read.
    /// * [`MachineError::InvalidRule`] if a complete rule group is malformed.
    pub fn load_rules(path: &Path) -> Result<RuleTable, MachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MachineError::FileError(format!("failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a rule table from string content.
    ///
    /// Useful for rules that are not stored in files, e.g. from user input.
    pub fn load_rules_from_string(content: &str) -> Result<RuleTable, MachineError> {
        parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_rules() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("increment.rules");

        let content = "1 0 2 1 1\n2 * 0 * 0\n";
        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let table = RuleLoader::load_rules(&file_path).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.rules");

        let result = RuleLoader::load_rules(&file_path);
        assert!(matches!(result, Err(MachineError::FileError(_))));
    }

    #[test]
    fn test_load_rules_from_string() {
        let table = RuleLoader::load_rules_from_string("1 a 0 b 0").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_file_with_trailing_partial_group() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.rules");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"1 0 2 1 1\n2").unwrap();

        let table = RuleLoader::load_rules(&file_path).unwrap();
        assert_eq!(table.len(), 1);
    }
}
