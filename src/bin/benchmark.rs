//! Stress benchmark: random subdivide/merge workloads on large boards

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use square_board::domain::{check_merge, Board, SquareId};

/// Subdivide random squares until the board holds at least `target` squares
fn grow(board: &mut Board, rng: &mut StdRng, target: usize) -> usize {
    let mut edits = 0;
    while board.square_count() < target {
        let ids: Vec<SquareId> = board.all_squares().map(|sq| sq.id).collect();
        let Some(&id) = ids.choose(rng) else { break };
        let grid = rng.random_range(2..=5);
        if board.subdivide(id, grid).is_ok() {
            edits += 1;
        }
    }
    edits
}

/// Merge every sibling group whose parent region is still fully split
fn collapse(board: &mut Board) -> usize {
    let mut merges = 0;
    loop {
        let mut groups = std::collections::BTreeMap::<SquareId, Vec<SquareId>>::new();
        for sq in board.all_squares() {
            if let Some(parent) = sq.parent {
                groups.entry(parent).or_default().push(sq.id);
            }
        }
        let mergeable: Vec<Vec<SquareId>> = groups
            .into_values()
            .filter(|ids| board.can_merge(ids))
            .collect();
        if mergeable.is_empty() {
            return merges;
        }
        for ids in mergeable {
            if board.merge(&ids).is_ok() {
                merges += 1;
            }
        }
    }
}

fn benchmark_merge_check(board: &Board, iterations: u32) -> f64 {
    let ids: Vec<SquareId> = board.all_squares().take(64).map(|sq| sq.id).collect();
    let squares = board.store().get_many(&ids).unwrap_or_default();

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = check_merge(&squares);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Square Board Benchmark ===\n");
    println!(
        "{:>8} {:>10} {:>10} {:>12} {:>12} {:>10}",
        "Board", "Squares", "Splits", "Validate", "MergeChk", "Merges"
    );
    println!("{:-<68}", "");

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for (size, target) in [(5, 500), (10, 2_000), (20, 8_000)] {
        let mut board = match Board::with_size(size) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let splits = grow(&mut board, &mut rng, target);
        let squares = board.square_count();

        let start = Instant::now();
        let valid = board.validate();
        let validate_ms = start.elapsed().as_secs_f64() * 1000.0;

        let check_ms = benchmark_merge_check(&board, 100);
        let merges = collapse(&mut board);

        println!(
            "{:>8} {:>10} {:>10} {:>10.2}ms {:>10.3}ms {:>10}",
            format!("{}x{}", size, size),
            squares,
            splits,
            validate_ms,
            check_ms,
            merges
        );

        if let Err(err) = valid.and_then(|_| board.validate()) {
            eprintln!("partition check failed: {err}");
        }
    }
}
