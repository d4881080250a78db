//! Performance benchmarks for roster reconciliation.
//!
//! This suite measures:
//! - Matching a batch of roster labels against a few hundred employees
//! - Consolidating one employee's month of overnight shifts
//! - Reconciling a full facility month end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use roster_reconcile::config::MatcherConfig;
use roster_reconcile::consolidation::{EARLY_MORNING, EVENING_START, LATE_NIGHT, consolidate};
use roster_reconcile::matching::IdentityMatcher;
use roster_reconcile::models::{EmployeeRecord, RawShiftEntry};
use roster_reconcile::roster::reconcile;

const SURNAMES: [&str; 15] = [
    "佐藤", "鈴木", "髙橋", "田中", "伊藤", "渡邊", "山本", "中村", "小林", "加藤", "吉田",
    "山田", "佐々木", "山﨑", "松本",
];

const GIVEN_NAMES: [&str; 20] = [
    "一郎", "花子", "健", "美咲", "大輔", "由美", "直子", "隆", "真理", "康陽", "弓恵", "幸子",
    "誠", "愛", "翔", "陽子", "亮", "彩", "拓海", "結衣",
];

const FACILITIES: [&str; 4] = ["南大泉", "芦花公園2", "グリーンビレッジＢ", "練馬"];

/// Builds a directory of 300 active employees.
fn create_employees() -> Vec<EmployeeRecord> {
    SURNAMES
        .iter()
        .flat_map(|surname| GIVEN_NAMES.iter().map(move |given| (surname, given)))
        .enumerate()
        .map(|(i, (surname, given))| {
            EmployeeRecord::active(&(i + 1).to_string(), &format!("{} {}", surname, given))
                .with_home_facility(FACILITIES[i % FACILITIES.len()])
        })
        .collect()
}

fn create_matcher() -> IdentityMatcher {
    IdentityMatcher::new(create_employees(), MatcherConfig::default())
        .expect("Failed to build matcher")
}

/// Roster labels mixing exact, normalized, variant, surname and unknown names.
fn create_labels(count: usize) -> Vec<String> {
    let forms: [fn(&str, &str) -> String; 5] = [
        |s, g| format!("{} {}", s, g),
        |s, g| format!("{}{}", s, g),
        |s, g| format!("{}  {}", s.replace('髙', "高").replace('邊', "辺"), g),
        |s, _| s.to_string(),
        |_, g| format!("不明{}", g),
    ];

    (0..count)
        .map(|i| {
            let surname = SURNAMES[i % SURNAMES.len()];
            let given = GIVEN_NAMES[(i / SURNAMES.len()) % GIVEN_NAMES.len()];
            forms[i % forms.len()](surname, given)
        })
        .collect()
}

/// One month of evening, night and next-morning cells for one person.
fn create_month_of_shifts(label: &str) -> Vec<RawShiftEntry> {
    let start = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
    (0..31u64)
        .step_by(2)
        .flat_map(|offset| {
            let day = start.checked_add_days(Days::new(offset)).unwrap();
            let next = start.checked_add_days(Days::new(offset + 1)).unwrap();
            [
                RawShiftEntry::new(day, "南大泉", EVENING_START, label),
                RawShiftEntry::new(day, "南大泉", LATE_NIGHT, label),
                RawShiftEntry::new(next, "南大泉", EARLY_MORNING, label),
            ]
        })
        .collect()
}

/// Benchmark: matching labels against 300 employees.
fn bench_match_names(c: &mut Criterion) {
    let matcher = create_matcher();
    let mut group = c.benchmark_group("match_names");

    for label_count in [100usize, 1000] {
        let labels = create_labels(label_count);
        group.throughput(Throughput::Elements(label_count as u64));
        group.bench_with_input(
            BenchmarkId::new("labels", label_count),
            &labels,
            |b, labels| {
                b.iter(|| {
                    let matched = labels
                        .iter()
                        .filter(|label| matcher.match_name(label, Some("南大泉")).is_match())
                        .count();
                    black_box(matched)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: consolidating one month of overnight cells.
fn bench_consolidate_month(c: &mut Criterion) {
    let entries = create_month_of_shifts("柳");

    c.bench_function("consolidate_month", |b| {
        b.iter(|| black_box(consolidate(entries.clone())))
    });
}

/// Benchmark: reconciling a month for every facility.
fn bench_reconcile_month(c: &mut Criterion) {
    let matcher = create_matcher();
    let labels = create_labels(40);
    let entries: Vec<RawShiftEntry> = labels
        .iter()
        .flat_map(|label| create_month_of_shifts(label))
        .collect();

    let mut group = c.benchmark_group("reconcile");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("month_40_labels", |b| {
        b.iter(|| black_box(reconcile(&matcher, entries.clone())))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_match_names,
    bench_consolidate_month,
    bench_reconcile_month,
);
criterion_main!(benches);
