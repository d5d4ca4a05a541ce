use clap::Parser;
use std::path::PathBuf;

use crate::model::ConversionRequest;

pub const USAGE: &str = "Usage: txt2scad <input-path> <variable-name> <output-path>";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Plain-text coordinate listing
    pub input: PathBuf,
    /// Name of the OpenSCAD variable to declare
    pub variable: String,
    /// Output .scad file (created or truncated)
    pub output: PathBuf,
}

impl From<Cli> for ConversionRequest {
    fn from(cli: Cli) -> Self {
        ConversionRequest {
            source: cli.input,
            variable: cli.variable,
            destination: cli.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positionals() {
        let cli = Cli::try_parse_from(["txt2scad", "in.txt", "pts", "out.scad"]).unwrap();
        let req = ConversionRequest::from(cli);
        assert_eq!(req.source, PathBuf::from("in.txt"));
        assert_eq!(req.variable, "pts");
        assert_eq!(req.destination, PathBuf::from("out.scad"));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let cases: Vec<Vec<&str>> = vec![
            vec!["txt2scad"],
            vec!["txt2scad", "in.txt"],
            vec!["txt2scad", "in.txt", "pts"],
            vec!["txt2scad", "in.txt", "pts", "out.scad", "extra"],
        ];
        for args in cases {
            assert!(Cli::try_parse_from(args.iter().copied()).is_err(), "{args:?}");
        }
    }
}
