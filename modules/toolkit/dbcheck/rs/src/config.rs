use derive_getters::{Dissolve, Getters};
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DATABASE: &str = "/srv/data/DB/cge_dbs/resfinder";
pub const DEFAULT_OUT_DATABASE: &str = "/srv/data/DB/cge_dbs/modified/resfinder";
pub const DEFAULT_DELIMITER: &str = "_";
pub const DEFAULT_EXPECTED_VALUES: usize = 2;
pub const DEFAULT_FILE_EXTENSION: &str = ".fsa";

/// Separator used to split a FASTA ID into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Split on runs of whitespace. Empty fields are never produced.
    Whitespace,
    /// Split on the exact string. Empty fields are kept, e.g. `a__b` on `_` gives three fields.
    Literal(String),
}

impl Delimiter {
    pub fn split<'a>(&self, id: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Whitespace => id.split_whitespace().collect(),
            Delimiter::Literal(sep) => id.split(sep.as_str()).collect(),
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::from(DEFAULT_DELIMITER)
    }
}

/// The empty string stands for "any whitespace".
impl From<&str> for Delimiter {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Delimiter::Whitespace
        } else {
            Delimiter::Literal(value.to_string())
        }
    }
}

impl From<String> for Delimiter {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Delimiter::Whitespace
        } else {
            Delimiter::Literal(value)
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Whitespace => write!(f, "<whitespace>"),
            Delimiter::Literal(sep) => write!(f, "{sep:?}"),
        }
    }
}

/// Settings of a single database check run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct CheckConfig {
    /// Directory with the database files to check.
    input_database: PathBuf,
    /// Directory where the cleaned copies are written. Created if missing.
    out_database: PathBuf,
    delimiter: Delimiter,
    /// Number of fields every ID must split into.
    expected_values: usize,
    /// Only files whose name ends with this suffix are checked.
    file_extension: String,
    /// Wrap output sequences every N bytes. `None` keeps each sequence on a single line.
    line_width: Option<NonZeroUsize>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DATABASE, DEFAULT_OUT_DATABASE)
    }
}

impl CheckConfig {
    pub fn new(input_database: impl Into<PathBuf>, out_database: impl Into<PathBuf>) -> Self {
        Self {
            input_database: input_database.into(),
            out_database: out_database.into(),
            delimiter: Delimiter::default(),
            expected_values: DEFAULT_EXPECTED_VALUES,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            line_width: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_expected_values(mut self, expected_values: usize) -> Self {
        self.expected_values = expected_values;
        self
    }

    pub fn with_file_extension(mut self, file_extension: impl Into<String>) -> Self {
        self.file_extension = file_extension.into();
        self
    }

    pub fn with_line_width(mut self, line_width: Option<NonZeroUsize>) -> Self {
        self.line_width = line_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.input_database(), &PathBuf::from(DEFAULT_INPUT_DATABASE));
        assert_eq!(config.out_database(), &PathBuf::from(DEFAULT_OUT_DATABASE));
        assert_eq!(config.delimiter(), &Delimiter::Literal("_".to_string()));
        assert_eq!(*config.expected_values(), 2);
        assert_eq!(config.file_extension(), ".fsa");
        assert_eq!(*config.line_width(), None);
    }

    #[test]
    fn test_builder() {
        let config = CheckConfig::new("in", "out")
            .with_delimiter("")
            .with_expected_values(3)
            .with_file_extension(".fasta")
            .with_line_width(NonZeroUsize::new(60));

        let (input, out, delimiter, values, extension, width) = config.dissolve();
        assert_eq!(input, PathBuf::from("in"));
        assert_eq!(out, PathBuf::from("out"));
        assert_eq!(delimiter, Delimiter::Whitespace);
        assert_eq!(values, 3);
        assert_eq!(extension, ".fasta");
        assert_eq!(width, NonZeroUsize::new(60));
    }

    #[test]
    fn test_literal_split_keeps_empty_fields() {
        let delimiter = Delimiter::from("_");
        assert_eq!(delimiter.split("blaTEM-1_1"), vec!["blaTEM-1", "1"]);
        assert_eq!(delimiter.split("blaTEM"), vec!["blaTEM"]);
        assert_eq!(delimiter.split("a__b"), vec!["a", "", "b"]);
        assert_eq!(delimiter.split("a_"), vec!["a", ""]);

        let delimiter = Delimiter::from("::".to_string());
        assert_eq!(delimiter.split("gene::allele::acc"), vec!["gene", "allele", "acc"]);
    }

    #[test]
    fn test_whitespace_split() {
        let delimiter = Delimiter::from("");
        assert_eq!(delimiter, Delimiter::Whitespace);
        assert_eq!(delimiter.split("gene  allele\tacc "), vec!["gene", "allele", "acc"]);
        assert_eq!(delimiter.split("gene_1"), vec!["gene_1"]);
        assert!(delimiter.split("   ").is_empty());
    }
}
