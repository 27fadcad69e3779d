//! Benchmarks for the matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_run
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use mentor_match::types::score::score_by_rank;
use mentor_match::{Cohort, MatchingEngine, MentorId, StudentId};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic cohort generation
// ============================================================================

/// Seeded cohort with random wish lists of up to `max_wishes` entries.
fn generate_cohort(students: usize, mentors: usize, max_wishes: usize, seed: u64) -> Cohort {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cohort = Cohort::with_capacity(students.max(mentors));

    let student_ids: Vec<StudentId> = (0..students)
        .map(|i| cohort.add_student(format!("s{i}"), None).unwrap())
        .collect();
    let mentor_ids: Vec<MentorId> = (0..mentors)
        .map(|i| cohort.add_mentor(format!("m{i}")).unwrap())
        .collect();

    for &student in &student_ids {
        let wishes: Vec<MentorId> = (0..rng.gen_range(1..=max_wishes))
            .map(|_| mentor_ids[rng.gen_range(0..mentors)])
            .collect();
        cohort.set_student_wish_list(student, wishes).unwrap();
    }
    for &mentor in &mentor_ids {
        let wishes: Vec<StudentId> = (0..rng.gen_range(1..=max_wishes * 4))
            .map(|_| student_ids[rng.gen_range(0..students)])
            .collect();
        cohort.set_mentor_wish_list(mentor, wishes).unwrap();
    }

    cohort
}

// ============================================================================
// BENCHMARK: Scoring primitive
// ============================================================================

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    group.bench_function("score_by_rank", |b| {
        b.iter(|| {
            for rank in 0..32 {
                black_box(score_by_rank(black_box(32), Some(rank)));
            }
        })
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Full matching run
// ============================================================================
// O(S x M) pairs per run

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.measurement_time(Duration::from_secs(10));

    for &(students, mentors) in &[(100usize, 10usize), (1_000, 100), (5_000, 250)] {
        let cohort = generate_cohort(students, mentors, 10, 42);
        group.throughput(Throughput::Elements((students * mentors) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{students}x{mentors}")),
            &cohort,
            |b, cohort| {
                b.iter_batched(
                    || cohort.clone(),
                    |mut cohort| black_box(MatchingEngine::new().run(&mut cohort).unwrap()),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: State root
// ============================================================================

fn bench_state_root(c: &mut Criterion) {
    let mut cohort = generate_cohort(5_000, 250, 10, 7);
    MatchingEngine::new().run(&mut cohort).unwrap();

    c.bench_function("compute_state_root", |b| {
        b.iter(|| black_box(cohort.compute_state_root().unwrap()))
    });
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_scoring, bench_full_run, bench_state_root);

criterion_main!(benches);
