//! Equation model, reference arithmetic, and the batch generator.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::calculator::Calculator;

/// Arithmetic operator of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Symbol used in worker logs.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Reference result using native IEEE-754 double arithmetic.
    #[inline]
    #[must_use]
    pub fn evaluate(self, first: f64, second: f64) -> f64 {
        match self {
            Self::Add => first + second,
            Self::Subtract => first - second,
        }
    }

    /// Ask `calculator` for the result of this operation.
    #[inline]
    pub fn apply(self, calculator: &dyn Calculator, first: f64, second: f64) -> f64 {
        match self {
            Self::Add => calculator.add(first, second),
            Self::Subtract => calculator.subtract(first, second),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equation {
    pub first: f64,
    pub second: f64,
    pub operator: Operator,
}

impl Equation {
    #[must_use]
    pub fn new(first: f64, second: f64, operator: Operator) -> Self {
        Self {
            first,
            second,
            operator,
        }
    }

    /// The trusted answer every calculator is judged against.
    #[must_use]
    pub fn expected(&self) -> f64 {
        self.operator.evaluate(self.first, self.second)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {:?}", self.first, self.operator, self.second)
    }
}

/// How operands are drawn from the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandSampler {
    /// Uniform in `[min, max]`.
    #[default]
    Uniform,
    /// `u * ((max - min + 1) + min)` with `u` in `[0, 1)`.
    ///
    /// Kept for reproducing historical batches. Does not stay inside
    /// `[min, max]` for general bounds.
    Legacy,
}

impl OperandSampler {
    /// Draw one operand.
    pub fn sample<R: Rng + ?Sized>(self, min: f64, max: f64, rng: &mut R) -> f64 {
        match self {
            Self::Uniform => {
                if min == max {
                    min
                } else {
                    rng.gen_range(min..=max)
                }
            }
            Self::Legacy => {
                let range_multiplier = (max - min + 1.0) + min;
                rng.gen::<f64>() * range_multiplier
            }
        }
    }
}

/// Generate `count` equations with operands drawn by `sampler` and an
/// independent fair coin flip for the operator.
///
/// Operands are drawn before the operator for each slot, so a given seed
/// always produces the same batch.
pub fn generate_equations<R: Rng + ?Sized>(
    count: usize,
    min: f64,
    max: f64,
    sampler: OperandSampler,
    rng: &mut R,
) -> Vec<Equation> {
    (0..count)
        .map(|_| {
            let first = sampler.sample(min, max, rng);
            let second = sampler.sample(min, max, rng);
            let operator = if rng.gen_bool(0.5) {
                Operator::Add
            } else {
                Operator::Subtract
            };
            Equation::new(first, second, operator)
        })
        .collect()
}
