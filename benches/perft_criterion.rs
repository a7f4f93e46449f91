use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minichess::game_state::chess_rules::STARTING_LAYOUT;
use minichess::game_state::game_state::GameState;
use minichess::move_generation::legal_move_generator::LegalMoveGenerator;
use minichess::move_generation::perft::{perft, perft_divide};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    max_depth: u8,
    /// Known node counts for the shallowest depths.
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_LAYOUT,
        max_depth: 5,
        expected_nodes: &[6, 36],
    },
    BenchCase {
        name: "open_middlegame",
        layout: "1r1k1/p1p2/2N2/1P3/3P1/B2K1 b 6",
        max_depth: 4,
        expected_nodes: &[],
    },
    BenchCase {
        name: "promotion_race",
        layout: "k4/2P1p/5/5/p1p2/4K w 10",
        max_depth: 5,
        expected_nodes: &[],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_layout(case.layout).expect("benchmark layout should parse");

        for depth in 1..=case.max_depth {
            // Correctness guard before benchmarking.
            let mut probe = game.clone();
            let warmup = perft(&LegalMoveGenerator, &mut probe, depth);
            let divided: usize = perft_divide(&LegalMoveGenerator, &mut probe, depth)
                .iter()
                .map(|(_, nodes)| nodes)
                .sum();
            assert_eq!(warmup.nodes, divided, "divide mismatch for {} depth {}", case.name, depth);
            if let Some(expected) = case.expected_nodes.get(usize::from(depth) - 1) {
                assert_eq!(
                    warmup.nodes, *expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }
            assert_eq!(probe, game, "perft must leave the position unchanged");

            group.throughput(Throughput::Elements(warmup.nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &warmup.nodes,
                |b, expected| {
                    b.iter(|| {
                        let count =
                            perft(&LegalMoveGenerator, black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
