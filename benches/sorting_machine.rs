use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kernel_collections::prelude::*;
use kernel_collections::{MachineKind, TaggedSortingMachine};
use rand::prelude::*;
use rand::rngs::StdRng;

fn bench_sorting_machine(c: &mut Criterion) {
    for n in [16, 1_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let input: Vec<u32> = (0..n).map(|_| rng.r#gen()).collect();

        let mut group = c.benchmark_group(format!("Sorting machines (Add + Drain {n})"));
        for kind in MachineKind::ALL {
            group.bench_function(kind.name(), |b| {
                b.iter(|| {
                    let mut m: TaggedSortingMachine<u32, _> =
                        TaggedSortingMachine::new(kind, natural_order::<u32>);
                    m.add_all(input.iter().copied());
                    black_box(m.drain_sorted())
                })
            });
        }
        group.bench_function("std slice::sort", |b| {
            b.iter(|| {
                let mut v = input.clone();
                v.sort();
                black_box(v)
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_sorting_machine);
criterion_main!(benches);
