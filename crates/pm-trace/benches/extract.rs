use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pm_core::Grid;
use pm_trace::extract_loop;

/// A square ring of pipe hugging the map border, start in the corner.
fn ring_map(side: usize) -> String {
    let mut out = String::with_capacity(side * (side + 1));

    for row in 0..side {
        for col in 0..side {
            let c = match (row, col) {
                (0, 0) => 'S',
                (0, c) if c == side - 1 => '7',
                (r, 0) if r == side - 1 => 'L',
                (r, c) if r == side - 1 && c == side - 1 => 'J',
                (0, _) => '-',
                (r, _) if r == side - 1 => '-',
                (_, 0) => '|',
                (_, c) if c == side - 1 => '|',
                _ => '.',
            };
            out.push(c);
        }
        out.push('\n');
    }

    out
}

fn bench_extract_loop(c: &mut Criterion) {
    let map = ring_map(1000);
    let grid = Grid::parse(&map).expect("valid ring map");

    c.bench_function("pm_trace_extract_ring_1000", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            let path = extract_loop(black_box(&mut grid)).expect("closed loop");
            black_box(path.len());
        });
    });
}

criterion_group!(benches, bench_extract_loop);
criterion_main!(benches);
