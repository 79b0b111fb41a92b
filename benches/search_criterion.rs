use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sable_chess::game_state::game_state::GameState;
use sable_chess::search::alpha_beta::{find_best_move, SearchConfig};
use sable_chess::search::threading::SearchControl;

const POSITIONS: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let legal_moves = game.legal_moves();

        for depth in 1..=3u8 {
            let config = SearchConfig {
                max_depth: depth,
                ..SearchConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(*name, depth),
                &config,
                |b, config| {
                    b.iter(|| {
                        let best = find_best_move(
                            black_box(&game),
                            black_box(&legal_moves),
                            config,
                            &SearchControl::new(),
                        );
                        black_box(best.expect("benchmark positions have legal moves"))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
