//! Stress and determinism tests over large seeded cohorts.
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use mentor_match::types::score::combined_score;
use mentor_match::types::HasWishList;
use mentor_match::{Cohort, MatchingEngine, MentorId, StudentId};
use rust_decimal::{Decimal, RoundingStrategy};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Students in the large cohort
const STRESS_STUDENT_COUNT: usize = 2_000;

/// Mentors in the large cohort
const STRESS_MENTOR_COUNT: usize = 200;

/// Upper bound on a generated student wish list
const MAX_WISHES: usize = 12;

/// Upper bound on a generated mentor wish list
const MAX_MENTOR_WISHES: usize = 60;

/// Maximum allowed time for one run over the large cohort (seconds)
const MAX_TIME_SECONDS: f64 = 10.0;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Build a cohort with random wish lists. Same seed = same cohort.
///
/// Wish lists may contain duplicates; the engine must tolerate them.
fn generate_cohort(students: usize, mentors: usize, seed: u64) -> Cohort {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cohort = Cohort::with_capacity(students.max(mentors));

    let student_ids: Vec<StudentId> = (0..students)
        .map(|i| cohort.add_student(format!("student-{i}"), None).unwrap())
        .collect();
    let mentor_ids: Vec<MentorId> = (0..mentors)
        .map(|i| cohort.add_mentor(format!("mentor-{i}")).unwrap())
        .collect();

    for &student in &student_ids {
        let len = rng.gen_range(0..=MAX_WISHES);
        let wishes: Vec<MentorId> = (0..len)
            .map(|_| mentor_ids[rng.gen_range(0..mentor_ids.len())])
            .collect();
        cohort.set_student_wish_list(student, wishes).unwrap();
    }
    for &mentor in &mentor_ids {
        let len = rng.gen_range(0..=MAX_MENTOR_WISHES);
        let wishes: Vec<StudentId> = (0..len)
            .map(|_| student_ids[rng.gen_range(0..student_ids.len())])
            .collect();
        cohort.set_mentor_wish_list(mentor, wishes).unwrap();
    }

    cohort
}

/// Positional score recomputed from raw list indexes.
fn oracle_score<T: PartialEq>(list: &[T], target: &T) -> Decimal {
    match list.iter().position(|entry| entry == target) {
        Some(rank) => (Decimal::from(list.len() - rank) / Decimal::from(list.len()))
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero),
        None => Decimal::ZERO,
    }
}

/// Brute-force choice for one student over all mentors.
///
/// Returns the chosen mentor and the highest total seen. The tie record
/// starts at 0 and only moves when a tie replaces the choice.
fn oracle_choice(cohort: &Cohort, student: StudentId) -> Option<(MentorId, Decimal)> {
    let wishes = cohort.student(student).unwrap().wish_list();
    let mut chosen = None;
    let mut max_total = Decimal::ZERO;
    let mut tie_record = Decimal::ZERO;

    for (mentor_id, mentor) in cohort.mentors() {
        let mentor_points = oracle_score(wishes, &mentor_id);
        let student_points = oracle_score(mentor.wish_list(), &student);
        if mentor_points.is_zero() || student_points.is_zero() {
            continue;
        }
        let total = ((mentor_points + student_points) / Decimal::TWO)
            .round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);

        if total > max_total {
            max_total = total;
            chosen = Some(mentor_id);
        } else if total == max_total && student_points > tie_record {
            tie_record = student_points;
            chosen = Some(mentor_id);
        }
    }

    chosen.map(|mentor| (mentor, max_total))
}

/// Run one round over a seeded cohort and return the state root.
fn run_deterministic_sequence(seed: u64, students: usize, mentors: usize) -> [u8; 32] {
    let mut cohort = generate_cohort(students, mentors, seed);
    MatchingEngine::new()
        .run(&mut cohort)
        .unwrap()
        .state_root
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// One run over a large cohort, then check every assignment against the
/// matching rules.
#[test]
fn stress_large_cohort() {
    println!("\n=== STRESS TEST: {STRESS_STUDENT_COUNT} students x {STRESS_MENTOR_COUNT} mentors ===\n");

    let mut cohort = generate_cohort(STRESS_STUDENT_COUNT, STRESS_MENTOR_COUNT, 42);

    let start = Instant::now();
    let receipt = MatchingEngine::new().run(&mut cohort).unwrap();
    let elapsed = start.elapsed();

    println!("  Students assigned: {:>10}", receipt.students_assigned);
    println!("  Pairs scored:      {:>10}", receipt.pairs_scored);
    println!("  Elapsed time:      {:>10.2?}", elapsed);
    println!("  State root:        {}", receipt.state_root_hex());

    assert!(
        elapsed.as_secs_f64() <= MAX_TIME_SECONDS,
        "Elapsed time {:.2}s exceeds maximum {:.1}s",
        elapsed.as_secs_f64(),
        MAX_TIME_SECONDS
    );
    assert!(receipt.students_assigned > 0, "Expected some assignments");
    assert_eq!(
        receipt.students_assigned as usize,
        cohort.assignment_count()
    );

    let mut seen = vec![false; STRESS_STUDENT_COUNT];
    for (mentor_id, mentor) in cohort.mentors() {
        for assignment in mentor.students() {
            let student = cohort.student(assignment.student).unwrap();

            // Each student appears at most once after a single run
            assert!(!seen[assignment.student.key()], "{} assigned twice", assignment.student);
            seen[assignment.student.key()] = true;

            // Mutual interest and the recorded score
            let mentor_score = student.score_for(mentor_id);
            let student_score = mentor.score_for(assignment.student);
            assert!(!mentor_score.is_zero() && !student_score.is_zero());
            assert_eq!(assignment.score, combined_score(mentor_score, student_score));

            // Brute force over every mentor agrees on mentor and total
            let (oracle_mentor, oracle_total) = oracle_choice(&cohort, assignment.student)
                .unwrap_or_else(|| panic!("{} has no oracle choice", assignment.student));
            assert_eq!(oracle_mentor, mentor_id, "{}", assignment.student);
            assert_eq!(oracle_total, assignment.score);
        }
    }

    // Unassigned students have no mutually interested mentor
    for (student_id, _) in cohort.students() {
        if !seen[student_id.key()] {
            assert_eq!(oracle_choice(&cohort, student_id), None);
        }
    }

    println!("\n=== STRESS TEST PASSED ===\n");
}

/// Same seed produces the same state root; a different seed does not.
#[test]
fn verify_determinism() {
    const SEED: u64 = 12345;

    let root1 = run_deterministic_sequence(SEED, 500, 50);
    let root2 = run_deterministic_sequence(SEED, 500, 50);
    println!("  Run 1 state root: {}", hex::encode(root1));
    println!("  Run 2 state root: {}", hex::encode(root2));
    assert_eq!(root1, root2, "State roots must match for determinism");

    let root3 = run_deterministic_sequence(SEED + 1, 500, 50);
    println!("  Different seed:   {}", hex::encode(root3));
    assert_ne!(root1, root3, "Different seeds should produce different roots");
}

/// Varying cohort sizes.
#[test]
fn stress_scaling() {
    println!("\n=== SCALING TEST ===\n");
    println!("{:>10} {:>10} {:>12} {:>10}", "Students", "Mentors", "Time", "Assigned");

    for &(students, mentors) in &[(100, 10), (500, 50), (2_000, 100)] {
        let mut cohort = generate_cohort(students, mentors, 7);

        let start = Instant::now();
        let receipt = MatchingEngine::new().run(&mut cohort).unwrap();
        let elapsed = start.elapsed();

        println!(
            "{:>10} {:>10} {:>12.2?} {:>10}",
            students, mentors, elapsed, receipt.students_assigned
        );
        assert_eq!(receipt.students_considered as usize, students);
        assert!(receipt.students_assigned as usize <= students);
    }
}
