use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use swiss_tournament::tournament::{
    StandingRecord, order_standings, pair_adjacent, rank_standings,
};

/// Helper to build a field of N players with spread-out records
fn field_of(n_players: usize) -> Vec<StandingRecord> {
    (0..n_players)
        .map(|i| {
            let wins = (i * 7 % 11) as u32;
            StandingRecord {
                player_id: i as i64 + 1,
                name: format!("player{}", i),
                wins,
                matches: wins + (i % 3) as u32,
            }
        })
        .collect()
}

/// Benchmark ordering plus pairing, the work done for every new round
fn bench_next_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_round");

    for n_players in [8, 64, 512, 4096] {
        let field = field_of(n_players);
        group.bench_with_input(BenchmarkId::from_parameter(n_players), &field, |b, field| {
            b.iter(|| {
                let mut standings = field.clone();
                order_standings(&mut standings);
                pair_adjacent(black_box(&standings))
            });
        });
    }

    group.finish();
}

/// Benchmark competition ranking of an ordered field
fn bench_rank_standings(c: &mut Criterion) {
    let mut standings = field_of(1024);
    order_standings(&mut standings);

    c.bench_function("rank_standings_1024", |b| {
        b.iter(|| rank_standings(black_box(standings.clone())));
    });
}

criterion_group!(benches, bench_next_round, bench_rank_standings);
criterion_main!(benches);
