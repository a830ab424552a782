use clap::Parser;
use dbcheck_rs::config::{
    CheckConfig, DEFAULT_DELIMITER, DEFAULT_EXPECTED_VALUES, DEFAULT_FILE_EXTENSION,
    DEFAULT_INPUT_DATABASE, DEFAULT_OUT_DATABASE,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Checks a folder of FASTA databases for empty lines, malformed and duplicated headers, and
/// writes cleaned, uppercased copies to the output folder.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Folder with the databases to check
    #[arg(
        long,
        visible_alias = "in",
        alias = "input_database",
        default_value = DEFAULT_INPUT_DATABASE
    )]
    pub input_database: PathBuf,

    /// Folder for the cleaned databases, created if missing
    #[arg(
        long,
        visible_alias = "out",
        alias = "out_database",
        default_value = DEFAULT_OUT_DATABASE
    )]
    pub out_database: PathBuf,

    /// Delimiter that splits every header into fields; an empty string splits on whitespace
    #[arg(
        long,
        visible_alias = "delim",
        default_value = DEFAULT_DELIMITER,
        allow_hyphen_values = true
    )]
    pub delimiter: String,

    /// Number of fields every header must split into
    #[arg(
        long,
        visible_alias = "values",
        alias = "expected_num_of_values",
        default_value_t = DEFAULT_EXPECTED_VALUES
    )]
    pub expected_num_of_values: usize,

    /// Only files ending with this suffix are checked
    #[arg(
        long,
        visible_alias = "file-type",
        aliases = ["file_extension", "file_type"],
        default_value = DEFAULT_FILE_EXTENSION
    )]
    pub file_extension: String,

    /// Wrap output sequences every N characters instead of writing them on a single line
    #[arg(long)]
    pub line_width: Option<NonZeroUsize>,
}

impl From<Args> for CheckConfig {
    fn from(args: Args) -> Self {
        CheckConfig::new(args.input_database, args.out_database)
            .with_delimiter(args.delimiter)
            .with_expected_values(args.expected_num_of_values)
            .with_file_extension(args.file_extension)
            .with_line_width(args.line_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use dbcheck_rs::Delimiter;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config: CheckConfig = Args::parse_from(["dbcheck"]).into();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_aliases() {
        let config: CheckConfig = Args::parse_from([
            "dbcheck",
            "--in",
            "/data/in",
            "--out_database",
            "/data/out",
            "--delim",
            "",
            "--values",
            "3",
            "--file-type",
            ".fasta",
            "--line-width",
            "60",
        ])
        .into();

        assert_eq!(config.input_database(), &PathBuf::from("/data/in"));
        assert_eq!(config.out_database(), &PathBuf::from("/data/out"));
        assert_eq!(config.delimiter(), &Delimiter::Whitespace);
        assert_eq!(*config.expected_values(), 3);
        assert_eq!(config.file_extension(), ".fasta");
        assert_eq!(*config.line_width(), NonZeroUsize::new(60));
    }

    #[test]
    fn test_underscore_aliases() {
        let config: CheckConfig = Args::parse_from([
            "dbcheck",
            "--input_database",
            "/data/in",
            "--expected_num_of_values",
            "4",
            "--file_type",
            ".fa",
        ])
        .into();

        assert_eq!(config.input_database(), &PathBuf::from("/data/in"));
        assert_eq!(*config.expected_values(), 4);
        assert_eq!(config.file_extension(), ".fa");

        let config: CheckConfig = Args::parse_from(["dbcheck", "--file_extension", ".fna"]).into();
        assert_eq!(config.file_extension(), ".fna");
    }

    #[test]
    fn test_invalid_values() {
        assert!(Args::try_parse_from(["dbcheck", "--values", "two"]).is_err());
        assert!(Args::try_parse_from(["dbcheck", "--line-width", "0"]).is_err());
    }
}
