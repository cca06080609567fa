pub mod assignment;
pub mod eval;
pub mod formula;
pub mod input;
mod solver;
mod stats;

#[cfg(test)]
mod brute_force;

use std::fmt::{self, Display, Formatter};

pub use assignment::Assignment;
pub use eval::{evaluate, EvalError};
pub use formula::{Formula, LiteralId, Token};
pub use solver::{SolveError, Solver};
pub use stats::Stats;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }
}

impl Display for SatResult {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            SatResult::Satisfiable(model) => write!(f, "Satisfied with {}", model),
            SatResult::Unsatisfiable => f.write_str("Unstatisfied"),
        }
    }
}

/// A witness assignment: a value for every literal, in registry order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Model {
    names: Vec<String>,
    values: Vec<bool>,
}

impl Model {
    pub fn new(names: Vec<String>, values: Vec<bool>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    pub fn value(&self, name: &str) -> Option<bool> {
        self.names.iter().position(|n| n == name).map(|i| self.values[i])
    }

    pub fn literals(&self) -> impl Iterator<Item = (&str, bool)> {
        self.names.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    /// Evaluates `formula` with each of its literals set to the value this
    /// model gives that name; names the model lacks are false.
    pub fn satisfies(&self, formula: &Formula) -> Result<bool, EvalError> {
        let values = formula
            .literals()
            .names()
            .map(|name| self.value(name).unwrap_or(false))
            .collect();
        evaluate(formula, &Assignment::fixed(values), &mut Stats::default())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for (name, value) in self.literals() {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", name, if value { "True" } else { "False" })?;
        }
        Ok(())
    }
}
