use std::path::PathBuf;

use clap::Parser;

use super::Cli;

#[test]
fn parse_minimal_args() {
    let cli = Cli::try_parse_from(["heredity-rs", "--pedigree", "family0.csv"])
        .expect("Failed to parse a minimal command line");
    assert_eq!(cli.pedigree, PathBuf::from("family0.csv"));
    assert_eq!(cli.output, None);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(!cli.overwrite);
}

#[test]
fn parse_full_args() {
    let cli = Cli::try_parse_from([
        "heredity-rs", "-vv", "--pedigree", "family0.csv", "--output", "results.tsv", "--overwrite",
    ]).expect("Failed to parse a full command line");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output, Some(PathBuf::from("results.tsv")));
    assert!(cli.overwrite);
}

#[test]
fn missing_pedigree_is_an_error() {
    assert!(Cli::try_parse_from(["heredity-rs"]).is_err());
}

#[test]
fn serialize_yaml_roundtrip() {
    let cli = Cli::try_parse_from(["heredity-rs", "--pedigree", "family0.csv"])
        .expect("Failed to parse command line");
    let yaml = cli.serialize().expect("Failed to serialize Cli");
    let deserialized: Cli = serde_yaml::from_str(&yaml).expect("Failed to deserialize Cli");
    assert_eq!(deserialized.pedigree, cli.pedigree);
}
