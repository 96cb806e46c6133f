use criterion::{criterion_group, criterion_main, Criterion};
use pattern::{AssemblyConfig, ChainAssembler, ProbeSet};

const OFFSETS: [i64; 8] = [0, 180, 420, 900, 1500, 2300, 3400, 4800];

/// Repetitive chromosome: many full insertions plus scattered single probe hits
fn synthetic_hits() -> Vec<Vec<i64>> {
    let mut hits = vec![Vec::new(); OFFSETS.len()];
    for insertion in 0..2_000i64 {
        let anchor = 5_000 + insertion * 12_000;
        let sign = if insertion % 3 == 0 { -1 } else { 1 };
        for (probe, offset) in OFFSETS.iter().enumerate() {
            if (insertion + probe as i64) % 7 != 0 {
                let jitter = (insertion * 37 + probe as i64) % 61 - 30;
                hits[probe].push(sign * anchor + offset + jitter);
            }
        }
    }
    for (probe, probe_hits) in hits.iter_mut().enumerate() {
        for i in 0..20_000i64 {
            let pos = (i * 7_919 + probe as i64 * 104_729) % 25_000_000 + 1;
            probe_hits.push(if i % 2 == 0 { pos } else { -pos });
        }
        probe_hits.sort_unstable();
    }
    hits
}

fn criterion_benchmark(c: &mut Criterion) {
    let probes = ProbeSet::new(
        OFFSETS
            .iter()
            .enumerate()
            .map(|(i, &offset)| (format!("k{}", i), offset)),
    )
    .unwrap();
    let hits = synthetic_hits();
    let positions = hits.iter().map(Vec::as_slice).collect::<Vec<_>>();
    let assembler = ChainAssembler::new(&probes, AssemblyConfig::new(700, 2, probes.len()));

    c.bench_function("assemble repetitive chromosome", |b| {
        b.iter(|| assembler.assemble_positions(&positions))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
