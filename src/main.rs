use anyhow::Context;
use log::info;
use school_sim::models::EntityModel;
use school_sim::utils::logging::{init_logging, log_operation_start, log_skipped};
use school_sim::{Scenario, SchoolReport};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging("info");

    // Use the scenario file given on the command line, or the built-in classroom
    let mut scenario = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("Loading scenario from: {}", path.display());
            Scenario::from_json_file(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?
        }
        None => {
            info!("No scenario file given, using the built-in classroom");
            Scenario::classroom()
        }
    };

    // A seed in the environment overrides the scenario's own
    if let Ok(raw) = std::env::var("SCHOOL_SIM_SEED") {
        let seed: u64 = raw
            .parse()
            .with_context(|| format!("SCHOOL_SIM_SEED is not a number: {raw}"))?;
        scenario.config = scenario.config.with_seed(seed);
    }
    info!("Configuration: {}", scenario.config);

    let mut school = scenario.build().context("failed to set up the school")?;

    print!("{}", SchoolReport::excellent_students(&school));
    println!();

    log_operation_start("Conducting", "all lessons");
    for outcome in school.conduct_all_lessons() {
        print!("{}", SchoolReport::lesson(&outcome));
    }
    println!();

    let assigned = scenario.assign_children(&mut school);
    info!("Assigned {assigned} children to their parents");

    print!("{}", SchoolReport::students(&school));
    print!("{}", SchoolReport::excellent_students(&school));
    println!();

    let parents: Vec<String> = school
        .parents()
        .iter()
        .map(|parent| parent.name().to_string())
        .collect();

    for parent in &parents {
        match SchoolReport::children(&school, parent) {
            Ok(report) => print!("{report}"),
            Err(e) => log_skipped("children report", &e),
        }
        match SchoolReport::random_child(&mut school, parent) {
            Ok(report) => print!("{report}"),
            Err(e) => log_skipped("random child report", &e),
        }
        match SchoolReport::parent_summary(&school, parent) {
            Ok(report) => print!("{report}"),
            Err(e) => log_skipped("parent summary", &e),
        }
        println!();
    }

    // Ask every parent about the first enrolled student; only one of them is its parent
    if let Some(first) = school.students().iter().next().map(|s| s.name().to_string()) {
        for parent in &parents {
            match SchoolReport::child(&school, parent, &first) {
                Ok(report) => print!("{report}"),
                Err(e) => println!("{e}"),
            }
        }
        println!();
    }

    // Parents keep snapshots: a repeated lesson only shows up after a refresh
    let first_lesson = school.lessons().iter().next().map(|l| l.name().to_string());
    if let (Some(lesson), Some(parent)) = (first_lesson, parents.first()) {
        match school.conduct_lesson(&lesson) {
            Ok(outcome) => print!("{}", SchoolReport::lesson(&outcome)),
            Err(e) => log_skipped("repeat lesson", &e),
        }
        print!("Before refresh. {}", SchoolReport::children(&school, parent)?);
        let refreshed = school.refresh_children(parent)?;
        info!("Refreshed {refreshed} snapshots for {parent}");
        print!("After refresh. {}", SchoolReport::children(&school, parent)?);
    }

    Ok(())
}
