//! calctest: concurrent floating-point calculator test harness.

use calctest_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so `--json` output stays clean
    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
