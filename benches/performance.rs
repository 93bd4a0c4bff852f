use criterion::{black_box, criterion_group, criterion_main, Criterion};
use league::commands::standings::format_standings_table;
use league::fixtures::create_league_of;
use league::sorting::{sort_teams, IndexedTeam, SortDirection, SortKey, StandingsTable};

fn indexed(size: usize) -> Vec<IndexedTeam> {
    create_league_of(size)
        .into_iter()
        .enumerate()
        .map(|(original_index, team)| IndexedTeam { original_index, team })
        .collect()
}

fn bench_sort_teams(c: &mut Criterion) {
    let teams = indexed(32);

    c.bench_function("sort_teams_record_desc", |b| {
        b.iter(|| sort_teams(black_box(&teams), SortKey::Record, SortDirection::Descending))
    });

    c.bench_function("sort_teams_points_against_asc", |b| {
        b.iter(|| sort_teams(black_box(&teams), SortKey::PointsAgainst, SortDirection::Ascending))
    });

    c.bench_function("sort_teams_team_asc", |b| {
        b.iter(|| sort_teams(black_box(&teams), SortKey::Team, SortDirection::Ascending))
    });
}

fn bench_control_changes(c: &mut Criterion) {
    let mut table = StandingsTable::new(create_league_of(32));

    c.bench_function("cycle_every_column", |b| {
        b.iter(|| {
            for key in SortKey::all() {
                table.select(key, SortDirection::Ascending);
                table.select(key, SortDirection::Descending);
            }
            table.reset();
        })
    });
}

fn bench_render_table(c: &mut Criterion) {
    let mut table = StandingsTable::new(create_league_of(32));
    table.select(SortKey::PointsFor, SortDirection::Descending);

    c.bench_function("format_standings_table", |b| {
        b.iter(|| format_standings_table(black_box(&table)))
    });
}

criterion_group!(benches, bench_sort_teams, bench_control_changes, bench_render_table);
criterion_main!(benches);
