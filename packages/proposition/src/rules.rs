use std::fmt::Display;

use strum::{EnumIter, IntoEnumIterator};

use crate::evaluate::TruthValue;

pub const BINARY_LOGICAL_CONNECTIVES: [char; 4] = ['∧', '∨', '→', '↔'];

pub const NEGATION_SYMBOL: char = '¬';

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum UnaryConnective {
    Negation,
}

impl UnaryConnective {
    pub fn symbol(self) -> char {
        match self {
            UnaryConnective::Negation => NEGATION_SYMBOL,
        }
    }

    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryConnective::Negation => !value,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
pub enum BinaryConnective {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl BinaryConnective {
    pub fn symbol(self) -> char {
        match self {
            BinaryConnective::Conjunction => '∧',
            BinaryConnective::Disjunction => '∨',
            BinaryConnective::Implication => '→',
            BinaryConnective::Equivalence => '↔',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '∧' => Some(BinaryConnective::Conjunction),
            '∨' => Some(BinaryConnective::Disjunction),
            '→' => Some(BinaryConnective::Implication),
            '↔' => Some(BinaryConnective::Equivalence),
            _ => None,
        }
    }

    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryConnective::Conjunction => left && right,
            BinaryConnective::Disjunction => left || right,
            BinaryConnective::Implication => !left || right,
            BinaryConnective::Equivalence => left == right,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryConnective::Conjunction => "Conjunction",
            BinaryConnective::Disjunction => "Disjunction",
            BinaryConnective::Implication => "Conditional",
            BinaryConnective::Equivalence => "Biconditional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BinaryConnective::Conjunction => {
                "The conjunction is true only if both operands are true."
            }
            BinaryConnective::Disjunction => {
                "The disjunction is true if at least one operand is true."
            }
            BinaryConnective::Implication => {
                "The conditional is false only if the antecedent is true and the consequent false."
            }
            BinaryConnective::Equivalence => {
                "The biconditional is true if both operands have the same truth value."
            }
        }
    }
}

impl Display for BinaryConnective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A connective's semantic definition, with its reference truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRule {
    pub name: &'static str,
    pub operator: char,
    pub description: &'static str,
    pub rows: Vec<(Vec<TruthValue>, TruthValue)>,
}

/// The five connective rules, negation first. Rows are computed from the
/// truth functions, operands enumerated true-first like truth table rows.
pub fn logical_rules() -> Vec<LogicalRule> {
    let mut rules = vec![LogicalRule {
        name: "Negation",
        operator: UnaryConnective::Negation.symbol(),
        description: "The negation inverts the truth value.",
        rows: [true, false]
            .into_iter()
            .map(|value| {
                (
                    vec![TruthValue(value)],
                    TruthValue(UnaryConnective::Negation.apply(value)),
                )
            })
            .collect(),
    }];

    for connective in BinaryConnective::iter() {
        rules.push(LogicalRule {
            name: connective.name(),
            operator: connective.symbol(),
            description: connective.description(),
            rows: [(true, true), (true, false), (false, true), (false, false)]
                .into_iter()
                .map(|(left, right)| {
                    (
                        vec![TruthValue(left), TruthValue(right)],
                        TruthValue(connective.apply(left, right)),
                    )
                })
                .collect(),
        });
    }

    rules
}
