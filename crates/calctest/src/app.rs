//! Application entry point and dispatch.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use calctest_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use calctest_core::interrupt::InterruptSignal;
use calctest_core::registry::{CalculatorFactory, DefaultFactory};
use calctest_orchestration::calculator_selection::get_calculators_to_run;
use calctest_orchestration::interfaces::ResultPresenter;
use calctest_orchestration::orchestrator::TestOrchestrator;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.list {
        for kind in DefaultFactory::new().available() {
            println!("{kind}");
        }
        return Ok(());
    }

    run_tests(config)
}

fn run_tests(config: &AppConfig) -> Result<()> {
    let seed = config.resolve_seed();
    tracing::info!(seed, "seeding equation generator");

    let factory = DefaultFactory::with_seed(seed);
    let calculators = get_calculators_to_run(&config.calculators, &factory)?;

    let orchestrator = TestOrchestrator::builder()
        .test_count(config.tests)
        .operand_range(config.min, config.max)
        .sampler(config.sampler())
        .strategy(config.wait_strategy()?)
        .threads(config.threads)
        .calculators(calculators)
        .build()?;

    let interrupt = InterruptSignal::new();
    interrupt_handler(interrupt.clone());

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let report = orchestrator.run(&mut rng, &interrupt);

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    };
    presenter.present_report(&report);

    Ok(())
}

fn interrupt_handler(interrupt: InterruptSignal) {
    if let Err(e) = ctrlc::set_handler(move || interrupt.raise()) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }
}
