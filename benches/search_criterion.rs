use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use minichess::game_state::chess_rules::STARTING_LAYOUT;
use minichess::game_state::game_state::GameState;
use minichess::move_generation::legal_move_generator::{generate_legal_moves, LegalMoveGenerator};
use minichess::search::board_scoring::{MaterialScorer, PositionalScorer};
use minichess::search::minimax::{minimax_best_move, MinimaxConfig};
use minichess::search::negamax::{search_best_move, SearchConfig};

const LAYOUTS: &[(&str, &str)] = &[
    ("start", STARTING_LAYOUT),
    ("open_middlegame", "1r1k1/p1p2/2N2/1P3/3P1/B2K1 b 6"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let negamax_config = SearchConfig {
        shuffle_root: false,
        ..SearchConfig::default()
    };
    let minimax_config = MinimaxConfig {
        shuffle_root: false,
        ..MinimaxConfig::default()
    };

    for (name, layout) in LAYOUTS {
        let game = GameState::from_layout(layout).expect("benchmark layout should parse");

        // Correctness guard before benchmarking.
        let mut probe = game.clone();
        let legal = generate_legal_moves(&mut probe);
        let mut probe = game.clone();
        let negamax = search_best_move(&mut probe, &LegalMoveGenerator, &MaterialScorer, &negamax_config);
        assert!(legal.contains(&negamax.best_move.expect("benchmark position has moves")));
        assert_eq!(probe, game);

        let mut negamax_game = game.clone();
        group.bench_with_input(
            BenchmarkId::new("negamax_pvs_d3", name),
            &negamax_config,
            |b, config| {
                b.iter(|| {
                    let result = search_best_move(
                        black_box(&mut negamax_game),
                        &LegalMoveGenerator,
                        &MaterialScorer,
                        config,
                    );
                    black_box(result.nodes)
                });
            },
        );

        let mut minimax_game = game.clone();
        group.bench_with_input(
            BenchmarkId::new("minimax_d4", name),
            &minimax_config,
            |b, config| {
                b.iter(|| {
                    let result = minimax_best_move(
                        black_box(&mut minimax_game),
                        &LegalMoveGenerator,
                        &PositionalScorer,
                        config,
                    );
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
