use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::{Proposition, Variable, VariableSet};
use crate::rules::UnaryConnective;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TruthValue(pub bool);

impl TruthValue {
    /// Cell symbol used by the calculator UI (verdadero / falso).
    pub fn symbol(self) -> char {
        if self.0 {
            'V'
        } else {
            'F'
        }
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<Variable, TruthValue>);

impl Interpretation {
    /// All 2^n interpretations over the variable set. The first variable's
    /// true branch entirely precedes its false branch, recursively: the
    /// first interpretation maps every variable to true, the last maps
    /// every variable to false, and the leftmost variable changes slowest.
    pub fn generate_all(variables: VariableSet) -> impl Iterator<Item = Interpretation> {
        let n = variables.0.len();

        (0..(1usize << n)).map(move |index| {
            Interpretation(
                variables
                    .0
                    .iter()
                    .enumerate()
                    .map(|(position, variable)| {
                        let bit = (index >> (n - 1 - position)) & 1;
                        (*variable, TruthValue(bit == 0))
                    })
                    .collect(),
            )
        })
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|(variable, value)| {
                let prefix = if value.0 { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    UnboundVariable(Variable),
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::UnboundVariable(variable) => {
                write!(f, "no truth value assigned to variable '{variable}'")
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

pub trait Evaluate {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluationError>;
}

impl Evaluate for Variable {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluationError> {
        interpretation
            .0
            .get(self)
            .copied()
            .ok_or(EvaluationError::UnboundVariable(*self))
    }
}

impl Evaluate for Proposition {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<TruthValue, EvaluationError> {
        match self {
            Proposition::Atomic(variable) => variable.evaluate(interpretation),
            Proposition::Negation(proposition) => {
                let TruthValue(value) = proposition.evaluate(interpretation)?;
                Ok(TruthValue(UnaryConnective::Negation.apply(value)))
            }
            Proposition::Binary {
                connective,
                left,
                right,
            } => {
                let TruthValue(left) = left.evaluate(interpretation)?;
                let TruthValue(right) = right.evaluate(interpretation)?;
                Ok(TruthValue(connective.apply(left, right)))
            }
        }
    }
}
