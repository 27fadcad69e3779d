//! Mentor Match - demo binary.
//!
//! Builds a small sample cohort, runs one matching round and prints the
//! assignments. Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;

use flexi_logger::Logger;
use mentor_match::types::HasWishList;
use mentor_match::{Cohort, MatchingEngine};

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut cohort = Cohort::with_capacity(8);

    let compilers = cohort.add_team("Compilers", &[])?;
    let ada = cohort.add_student("Ada", Some(compilers))?;
    let alan = cohort.add_student("Alan", Some(compilers))?;
    let barbara = cohort.add_student("Barbara", None)?;

    let grace = cohort.add_mentor("Grace")?;
    let edsger = cohort.add_mentor("Edsger")?;
    let donald = cohort.add_mentor("Donald")?;

    let lexer = cohort.add_task("Lexer")?;
    let parser = cohort.add_task("Parser")?;
    cohort.assign_task(ada, lexer)?;
    cohort.assign_task(compilers, parser)?;
    cohort.set_mark(lexer, 5)?;

    cohort.set_student_wish_list(ada, [grace, edsger])?;
    cohort.set_student_wish_list(alan, [grace, donald])?;
    cohort.set_student_wish_list(barbara, [edsger, donald, grace])?;
    cohort.set_mentor_wish_list(grace, [alan, ada])?;
    cohort.set_mentor_wish_list(edsger, [barbara, ada])?;
    cohort.set_mentor_wish_list(donald, [alan])?;

    println!("===========================================");
    println!("  Mentor Match");
    println!("===========================================");
    println!();

    for (id, student) in cohort.students() {
        let wishes: Vec<&str> = student
            .wish_list()
            .iter()
            .filter_map(|mentor| cohort.mentor(*mentor).ok().map(|m| m.name()))
            .collect();
        println!(
            "  {:<8} tasks: {} ({} done)  wishes: {}",
            student.name(),
            cohort.all_tasks(id)?.len(),
            cohort.completed_tasks(id)?.len(),
            wishes.join(", ")
        );
    }
    println!();

    let receipt = MatchingEngine::new().run(&mut cohort)?;

    for (_, mentor) in cohort.mentors() {
        let assigned: Vec<String> = mentor
            .students()
            .iter()
            .filter_map(|a| {
                cohort
                    .student(a.student)
                    .ok()
                    .map(|s| format!("{} ({})", s.name(), a.score))
            })
            .collect();
        println!("  {:<8} <- {}", mentor.name(), assigned.join(", "));
    }

    println!();
    println!(
        "  Assigned {}/{} students, {} mutual pairs scored",
        receipt.students_assigned, receipt.students_considered, receipt.pairs_scored
    );
    println!("  State root: {}", receipt.state_root_hex());

    Ok(())
}
