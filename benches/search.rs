//! Search benchmarks.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Root move selection per heuristic at increasing depth
//! - Raw minimax from the opening and from a midgame position
//! - Legal move generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trithello::search::minimax;
use trithello::{AIEngine, Board, HeuristicKind, Player};

fn opening() -> Board {
    let mut board = Board::new();
    board.setup_three_players();
    board
}

/// Position after a few rounds of greedy play
fn midgame() -> Board {
    let mut board = opening();
    let engine = AIEngine::new(HeuristicKind::Greedy, 0);
    for turn in 0..12u8 {
        let player = Player(turn % 3);
        if let Some(pos) = engine.get_move(&board, player) {
            board.place_at(pos, player).unwrap();
        }
    }
    board
}

fn bench_engine_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_depth");
    let board = opening();

    for kind in [HeuristicKind::Greedy, HeuristicKind::WeightedSum, HeuristicKind::Wedge] {
        for depth in [1u32, 2, 3] {
            let engine = AIEngine::new(kind, depth);
            group.bench_with_input(BenchmarkId::new(kind.name(), depth), &depth, |b, _| {
                b.iter(|| black_box(engine.get_move_with_stats(&board, Player::FIRST)))
            });
        }
    }

    group.finish();
}

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(20);

    for (name, board) in [("opening", opening()), ("midgame", midgame())] {
        group.bench_function(name, |b| {
            let mut work = board.clone();
            b.iter(|| {
                black_box(minimax(
                    &mut work,
                    3,
                    Player::FIRST,
                    Player::FIRST,
                    3,
                    0,
                    &HeuristicKind::WeightedSum,
                ))
            })
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| black_box(board.legal_moves(black_box(Player::SECOND))))
    });
}

criterion_group!(benches, bench_engine_depth, bench_minimax, bench_legal_moves);
criterion_main!(benches);
