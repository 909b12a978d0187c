use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use molsketch::{build_molecule, FormulaKind, LayoutParams, Mol, PlanarLayout, Simulate, SpatialLayout};

const FRAME: f64 = 1.0 / 60.0;

fn molecule(kind: FormulaKind, text: &str) -> Mol {
    build_molecule(kind, text, [0.0, 0.0]).unwrap()
}

fn bench_planar(c: &mut Criterion) {
    let methane = molecule(FormulaKind::Molecular, "CH4");
    let branched = molecule(FormulaKind::Structural, "CH3C(CH2CH3)CHCHCOHO");

    let mut group = c.benchmark_group("planar");

    group.bench_function("step/methane", |b| {
        let mut layout = PlanarLayout::default();
        b.iter_batched_ref(
            || methane.clone(),
            |mol| layout.step(black_box(mol), FRAME),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("step/branched", |b| {
        let mut layout = PlanarLayout::default();
        b.iter_batched_ref(
            || branched.clone(),
            |mol| layout.step(black_box(mol), FRAME),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("200_steps/branched", |b| {
        let mut layout = PlanarLayout::default();
        b.iter_batched_ref(
            || branched.clone(),
            |mol| {
                for _ in 0..200 {
                    layout.step(mol, FRAME);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_spatial(c: &mut Criterion) {
    let branched = molecule(FormulaKind::Structural, "CH3C(CH2CH3)CHCHCOHO");

    let mut group = c.benchmark_group("spatial");

    group.bench_function("step/branched", |b| {
        b.iter_batched_ref(
            || {
                let mol = branched.clone();
                let layout =
                    SpatialLayout::new(&mol, LayoutParams::spatial(), &mut StdRng::seed_from_u64(0));
                (mol, layout)
            },
            |(mol, layout)| layout.step(black_box(mol), FRAME),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_planar, bench_spatial);
criterion_main!(benches);
