mod common;
use common::HeredityRunner;
use pretty_assertions::assert_eq;

/// Rounded output tolerance: the table is printed with four decimals.
const TOLERANCE: f64 = 1e-3;

const FAMILY: &str = "\
    name,mother,father,trait\n\
    Harry,Lily,James,\n\
    James,,,1\n\
    Lily,,,0\n";

const LONE_FOUNDER: &str = "\
    name,mother,father,trait\n\
    solo,,,\n";

#[test]
fn test_family_posteriors() {
    let runner = HeredityRunner::run(FAMILY).expect("Pipeline run failed");
    let results = runner.results().expect("Failed to parse results table");
    assert_eq!(results.len(), 3);

    for row in &results {
        let gene_sum: f64 = row.gene.iter().sum();
        let trait_sum = row.trait_present + row.trait_absent;
        assert!((gene_sum - 1.0).abs() < TOLERANCE, "{}: gene row sums to {gene_sum}", row.label);
        assert!((trait_sum - 1.0).abs() < TOLERANCE, "{}: trait row sums to {trait_sum}", row.label);
    }

    let get = |label: &str| results.iter().find(|row| row.label == label).unwrap();

    // Observed trait statuses are certainties in the output.
    assert_eq!(get("James").trait_present, 1.0);
    assert_eq!(get("Lily").trait_absent,   1.0);

    // With Harry unobserved, James' posterior collapses to Bayes rule over the
    // founder prior: [0.0096, 0.0168, 0.0065] / 0.0329.
    let james = get("James");
    assert!((james.gene[0] - 0.2918).abs() < TOLERANCE);
    assert!((james.gene[1] - 0.5106).abs() < TOLERANCE);
    assert!((james.gene[2] - 0.1976).abs() < TOLERANCE);

    // With a trait-observed father, Harry is a likelier carrier than the
    // 0.03 + 0.01 population rate.
    let harry = get("Harry");
    assert!(harry.gene[1] + harry.gene[2] > 0.04);
}

#[test]
fn test_lone_founder_keeps_the_prior() {
    let runner = HeredityRunner::run(LONE_FOUNDER).expect("Pipeline run failed");
    let results = runner.results().expect("Failed to parse results table");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].gene, [0.96, 0.03, 0.01]);
}

#[test]
fn test_reruns_are_deterministic() {
    let runner = HeredityRunner::run(FAMILY).expect("Pipeline run failed");
    let first = runner.raw_output().expect("Failed to read results table");

    runner.rerun(true).expect("Pipeline rerun failed");
    let second = runner.raw_output().expect("Failed to read results table");
    assert_eq!(first, second);
}

#[test]
fn test_overwrite_requires_explicit_flag() {
    let runner = HeredityRunner::run(FAMILY).expect("Pipeline run failed");
    assert!(runner.rerun(false).is_err());
    assert!(runner.rerun(true).is_ok());
}

#[test]
fn test_malformed_pedigree_fails_outright() {
    // 'Harry' records a single parent: the loader must reject the file.
    let malformed = "\
        name,mother,father,trait\n\
        Harry,Lily,,\n\
        Lily,,,0\n";
    assert!(HeredityRunner::run(malformed).is_err());
}
