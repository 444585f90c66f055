use std::path::Path;
use std::process;

use u_timetable::config::SearchConfig;
use u_timetable::ga::{FitnessEvaluator, GaRunner};
use u_timetable::report::{rank_population, render_timetable};

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "timetable.toml".to_string());
    log::info!("Loading configuration from '{}'...", path);

    let config = match SearchConfig::load(Path::new(&path)) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let domain = match config.prepare() {
        Ok(d) => d,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };
    log::info!(
        "Domain ready: {} groups, {} subjects, {} teachers",
        domain.group_count(),
        domain.subject_count(),
        domain.teacher_count()
    );

    let result = match GaRunner::run(&domain, &config.ga) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Search failed: {}", e);
            process::exit(1);
        }
    };

    let ranked = rank_population(&domain, &result.population, config.report.top_k);
    // The run's best-ever timetable may have been bred away from the final population.
    let best = match (&result.best, ranked.first()) {
        (Some(best), Some(top)) if result.best_fitness > top.fitness => best,
        (_, Some(top)) => &top.timetable,
        (Some(best), None) => best,
        (None, None) => {
            log::error!("Search produced no timetables");
            process::exit(1);
        }
    };

    let breakdown = FitnessEvaluator::new(&domain).breakdown(best);
    println!("Solution - Fitness: {:.6} ({})\n", breakdown.fitness(), breakdown);
    print!("{}", render_timetable(&domain, best));
}
