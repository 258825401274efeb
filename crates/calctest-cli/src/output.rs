//! CLI output formatting.

use std::time::Duration;

use calctest_orchestration::interfaces::TestReport;

/// Format a success rate the way the report prints it (`1.0`, `0.85`).
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:?}")
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Render the console report.
///
/// Worker log blocks come first (skipped when `quiet`), each followed by
/// a blank line, then one `<name> Success rate: <rate>` line per
/// calculator, then the `<name> is better` verdict.
#[must_use]
pub fn render_report(report: &TestReport, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        for result in &report.results {
            if result.completed {
                out.push_str(&result.log);
                out.push('\n');
            } else {
                out.push_str(&format!("Calculator {}\n(no result)\n\n", result.calculator));
            }
        }
    }

    for (name, rate) in report.table.iter() {
        out.push_str(&format!("{name} Success rate: {}\n", format_rate(rate)));
    }

    if let Some(best) = &report.best {
        out.push_str(&format!("{best} is better\n"));
    }

    out
}

/// Render the verbose tally: how the wait ended, then one line per worker
/// with its success count and time.
#[must_use]
pub fn render_tally(report: &TestReport) -> String {
    let mut out = format!(
        "\nWait {} after {}\n",
        report.wait,
        format_duration(report.elapsed)
    );
    for result in &report.results {
        out.push_str(&format!(
            "  {:<20} {:>4}/{:<4} {:>10}\n",
            result.calculator,
            result.success_count,
            result.total_tests,
            format_duration(result.duration),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calctest_core::latch::WaitOutcome;
    use calctest_core::worker::WorkerResult;
    use calctest_orchestration::interfaces::ResultTable;

    fn finished(name: &str, rate: f64) -> WorkerResult {
        let mut r = WorkerResult::incomplete(name, 4);
        r.success_rate = rate;
        r.completed = true;
        r.log = format!("Calculator {name}\n1.0 + 2.0 = 3.0{:>25}\n", "(correct)");
        r
    }

    fn report(results: Vec<WorkerResult>, best: &str) -> TestReport {
        let mut table = ResultTable::new();
        for r in &results {
            table.insert(&r.calculator, r.success_rate);
        }
        TestReport {
            results,
            table,
            best: Some(best.to_string()),
            wait: WaitOutcome::Completed,
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(0.85), "0.85");
        assert_eq!(format_rate(0.0), "0.0");
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(3)).ends_with('s'));
    }

    #[test]
    fn report_sections_in_order() {
        let text = render_report(
            &report(vec![finished("Crystal 1", 1.0), finished("Crystal 2", 0.5)], "Crystal 1"),
            false,
        );
        let log = text.find("Calculator Crystal 1").unwrap();
        let rate1 = text.find("Crystal 1 Success rate: 1.0").unwrap();
        let rate2 = text.find("Crystal 2 Success rate: 0.5").unwrap();
        let verdict = text.find("Crystal 1 is better").unwrap();
        assert!(log < rate1 && rate1 < rate2 && rate2 < verdict);
        assert!(text.ends_with("Crystal 1 is better\n"));
    }

    #[test]
    fn quiet_omits_logs() {
        let text = render_report(&report(vec![finished("A", 1.0)], "A"), true);
        assert!(!text.contains("Calculator A"));
        assert_eq!(text, "A Success rate: 1.0\nA is better\n");
    }

    #[test]
    fn incomplete_worker_is_marked() {
        let results = vec![finished("A", 1.0), WorkerResult::incomplete("B", 4)];
        let text = render_report(&report(results, "A"), false);
        assert!(text.contains("Calculator B\n(no result)"));
        assert!(text.contains("B Success rate: 0.0"));
    }

    #[test]
    fn tally_lists_wait_and_counts() {
        let mut partial = finished("Crystal 2", 0.5);
        partial.success_count = 2;
        let mut slow = WorkerResult::incomplete("Crystal 3", 4);
        slow.duration = Duration::from_millis(7);
        let mut r = report(vec![partial, slow], "Crystal 2");
        r.wait = WaitOutcome::TimedOut;

        let text = render_tally(&r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Wait timed out after 3.00ms");
        assert!(lines[2].starts_with("  Crystal 2"));
        assert!(lines[2].contains("   2/4   "));
        assert!(lines[3].contains("   0/4   "));
        assert!(lines[3].ends_with("7.00ms"));
    }
}
