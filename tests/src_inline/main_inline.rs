use std::path::PathBuf;

use clap::Parser;

use super::Cli;

#[test]
fn test_cli_default_input_path() {
    let cli = Cli::try_parse_from(["geovar"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("dataset/dataset.csv"));
}

#[test]
fn test_cli_custom_input_path() {
    let cli = Cli::try_parse_from(["geovar", "--input", "samples/site.csv"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("samples/site.csv"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["geovar", "--format", "json"]).is_err());
}
