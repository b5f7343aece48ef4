// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// Three hot paths:
//   1. Risk scoring — one weighted-deduction evaluation
//   2. Distance math — haversine between profile coordinates
//   3. History log — JSONL append and tail read

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use daybreak::agents::context::haversine_km;
use daybreak::core::risk::{RiskConfig, RiskScorer, WeightedDeduction};
use daybreak::core::types::{FoodCandidate, PlannerContext, TravelCandidate};
use daybreak::memory::{ExecutionRecord, HistoryStore};

fn sample_inputs() -> (FoodCandidate, TravelCandidate, PlannerContext) {
    let food = FoodCandidate {
        restaurant: "Sangeetha".into(),
        item: "Idli Vada".into(),
        price: 80.0,
        eta_minutes: 25.0,
        eta_variance: 4.0,
        rating: 4.3,
        service: "Swiggy".into(),
    };
    let travel = TravelCandidate {
        service: "Ola".into(),
        mode: "Ride".into(),
        cost: 95.0,
        eta_minutes: 12.0,
        eta_variance: 3.0,
        rating: 4.6,
    };
    let ctx = PlannerContext {
        current_time: "08:00".into(),
        date: "2026-08-25".into(),
        minutes_until_class: 60.0,
        distance_km: 18.4,
    };
    (food, travel, ctx)
}

fn sample_record() -> ExecutionRecord {
    ExecutionRecord {
        timestamp: "2026-08-25T08:02:11+05:30".into(),
        food: "Idli Vada from Sangeetha".into(),
        travel: "Ola Ride".into(),
        confidence: 0.8,
        buffer_minutes: 23.0,
        status: "executed".into(),
        approved_by_user: false,
    }
}

fn bench_risk_scoring(c: &mut Criterion) {
    let scorer = WeightedDeduction::new(RiskConfig::default());
    let (food, travel, ctx) = sample_inputs();

    c.bench_function("risk_evaluate", |b| {
        b.iter(|| scorer.evaluate(black_box(&food), black_box(&travel), black_box(&ctx)))
    });
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(13.0827),
                black_box(80.2707),
                black_box(13.1939),
                black_box(80.1180),
            )
        })
    });
}

fn bench_history_store(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = HistoryStore::new(dir.path().join("history.jsonl"));
    let record = sample_record();

    c.bench_function("history_append", |b| {
        b.iter(|| store.append(black_box(&record)).expect("append"))
    });

    // Populated tail read
    let read_store = HistoryStore::new(dir.path().join("history_read.jsonl"));
    for _ in 0..500 {
        read_store.append(&record).expect("append");
    }
    c.bench_function("history_read_tail_10", |b| {
        b.iter(|| black_box(read_store.read(10)))
    });
}

criterion_group!(
    benches,
    bench_risk_scoring,
    bench_haversine,
    bench_history_store
);
criterion_main!(benches);
