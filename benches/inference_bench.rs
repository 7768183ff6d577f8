use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pedigree::inference::{infer, joint_probability, Hypothesis, HypothesisSpace};
use pedigree::model::GeneCount;
use pedigree::Pedigree;

fn reference_family() -> Pedigree {
    let mut pedigree = Pedigree::new();
    pedigree.add_individual("James", None, Some(true)).expect("Failed to insert founder");
    pedigree.add_individual("Lily",  None, Some(false)).expect("Failed to insert founder");
    pedigree.add_individual("Harry", Some(("Lily", "James")), None).expect("Failed to insert offspring");
    pedigree
}

fn bench_joint_probability(c: &mut Criterion) {
    let pedigree = reference_family();
    let space = HypothesisSpace::new(&pedigree).expect("Failed to build hypothesis space");
    let genes = [GeneCount::One, GeneCount::Two, GeneCount::Zero];
    let hypothesis = Hypothesis::new(&genes, 0b010);

    c.bench_function("joint probability - single hypothesis", |b| {
        b.iter(|| joint_probability(black_box(&space), black_box(&hypothesis)))
    });
}

fn bench_infer(c: &mut Criterion) {
    let pedigree = reference_family();

    c.bench_function("exact inference - three-member pedigree", |b| {
        b.iter(|| infer(black_box(&pedigree)).expect("Inference failed"))
    });
}

criterion_group!(benches, bench_joint_probability, bench_infer);
criterion_main!(benches);
