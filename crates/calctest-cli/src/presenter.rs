//! Result presenters.

use calctest_orchestration::interfaces::{ResultPresenter, TestReport};

use crate::output::{render_report, render_tally};

/// Human-readable console presenter.
pub struct CLIResultPresenter {
    quiet: bool,
    verbose: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { quiet, verbose }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &TestReport) {
        print!("{}", render_report(report, self.quiet));

        if self.verbose {
            print!("{}", render_tally(report));
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

/// Prints the report as pretty JSON on stdout.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn present_report(&self, report: &TestReport) {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize report");
                self.present_error(&e.to_string());
            }
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", serde_json::json!({ "error": error }));
    }
}
