//! CLI struct definitions for the csv2graph command-line interface.
//!
//! The surface is exactly three positionals. Values may begin with `-`, so
//! `csv2graph -nodes.csv edges.csv out.json` reads a file named `-nodes.csv`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "csv2graph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a node CSV and an edge CSV into a {nodes, edges} JSON graph document."
)]
pub(crate) struct Cli {
    /// Node list: header with `name` (required) and `group` (optional).
    #[clap(allow_hyphen_values = true)]
    pub nodes_csv: PathBuf,
    /// Edge list: header with `source`, `target` and `value`.
    #[clap(allow_hyphen_values = true)]
    pub edges_csv: PathBuf,
    /// Destination JSON file; overwritten if present.
    #[clap(allow_hyphen_values = true)]
    pub output_json: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positionals() {
        let cli = Cli::try_parse_from(["csv2graph", "n.csv", "e.csv", "o.json"]).unwrap();
        assert_eq!(cli.nodes_csv, PathBuf::from("n.csv"));
        assert_eq!(cli.edges_csv, PathBuf::from("e.csv"));
        assert_eq!(cli.output_json, PathBuf::from("o.json"));
    }

    #[test]
    fn test_wrong_positional_count_is_rejected() {
        assert!(Cli::try_parse_from(["csv2graph", "n.csv", "e.csv"]).is_err());
        assert!(Cli::try_parse_from(["csv2graph", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_hyphen_leading_paths_are_positionals() {
        let cli =
            Cli::try_parse_from(["csv2graph", "-nodes.csv", "-edges.csv", "-out.json"]).unwrap();
        assert_eq!(cli.nodes_csv, PathBuf::from("-nodes.csv"));
        assert_eq!(cli.edges_csv, PathBuf::from("-edges.csv"));
        assert_eq!(cli.output_json, PathBuf::from("-out.json"));
    }

    #[test]
    fn test_double_hyphen_value_is_positional() {
        let cli = Cli::try_parse_from(["csv2graph", "--nodes.csv", "e.csv", "o.json"]).unwrap();
        assert_eq!(cli.nodes_csv, PathBuf::from("--nodes.csv"));
    }
}
