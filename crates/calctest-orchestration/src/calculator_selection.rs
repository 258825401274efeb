//! Calculator selection from `NAME=KIND` specs.

use std::sync::Arc;

use calctest_core::calculator::Calculator;
use calctest_core::constants::DEFAULT_LINEUP;
use calctest_core::error::CalcTestError;
use calctest_core::registry::CalculatorFactory;

/// Split a `NAME=KIND` spec. A bare `KIND` is named after itself.
pub fn parse_calculator_spec(spec: &str) -> Result<(&str, &str), CalcTestError> {
    let (name, kind) = match spec.split_once('=') {
        Some((name, kind)) => (name.trim(), kind.trim()),
        None => (spec.trim(), spec.trim()),
    };
    if name.is_empty() || kind.is_empty() {
        return Err(CalcTestError::Config(format!(
            "malformed calculator spec {spec:?}, expected NAME=KIND"
        )));
    }
    Ok((name, kind))
}

/// Build the calculators to test, in registration order.
///
/// An empty `specs` selects the default five-crystal line-up.
pub fn get_calculators_to_run(
    specs: &[String],
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, CalcTestError> {
    if specs.is_empty() {
        return DEFAULT_LINEUP
            .iter()
            .map(|(name, kind)| factory.create(name, kind))
            .collect();
    }

    specs
        .iter()
        .map(|spec| {
            let (name, kind) = parse_calculator_spec(spec)?;
            factory.create(name, kind)
        })
        .collect()
}
