use std::fmt::Display;

use indexmap::IndexSet;
use serde::Serialize;
use termtree::Tree;

use crate::rules::BinaryConnective;

/// The fixed propositional alphabet.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Variable {
    P,
    Q,
    R,
}

impl Variable {
    pub fn symbol(self) -> char {
        match self {
            Variable::P => 'p',
            Variable::Q => 'q',
            Variable::R => 'r',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(Variable::P),
            'q' => Some(Variable::Q),
            'r' => Some(Variable::R),
            _ => None,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet(pub IndexSet<Variable>);

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|variable| variable.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Proposition {
    Atomic(Variable),
    Negation(Box<Proposition>),
    Binary {
        connective: BinaryConnective,
        left: Box<Proposition>,
        right: Box<Proposition>,
    },
}

impl From<Variable> for Proposition {
    fn from(variable: Variable) -> Self {
        Proposition::Atomic(variable)
    }
}

impl Proposition {
    pub fn binary(connective: BinaryConnective, left: Proposition, right: Proposition) -> Self {
        Proposition::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn symbol(&self) -> String {
        match self {
            Proposition::Atomic(variable) => variable.to_string(),
            Proposition::Negation(_) => '¬'.to_string(),
            Proposition::Binary { connective, .. } => connective.symbol().to_string(),
        }
    }

    pub fn is_compound(&self) -> bool {
        !matches!(self, Proposition::Atomic(_))
    }

    /// Variables in order of first appearance.
    pub fn get_variables(&self) -> VariableSet {
        let mut variables = VariableSet(IndexSet::new());
        self.collect_variables(&mut variables.0);
        variables
    }

    fn collect_variables(&self, variables: &mut IndexSet<Variable>) {
        match self {
            Proposition::Atomic(variable) => {
                variables.insert(*variable);
            }
            Proposition::Negation(proposition) => proposition.collect_variables(variables),
            Proposition::Binary { left, right, .. } => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        match self {
            Proposition::Atomic(_) => Tree::new(self.symbol()),
            Proposition::Negation(proposition) => {
                Tree::new(self.symbol()).with_leaves(vec![proposition.get_tree()])
            }
            Proposition::Binary { left, right, .. } => {
                Tree::new(self.symbol()).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }

    fn fmt_operand(operand: &Proposition) -> String {
        if matches!(operand, Proposition::Binary { .. }) {
            format!("({operand})")
        } else {
            operand.to_string()
        }
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Atomic(variable) => write!(f, "{variable}"),
            Proposition::Negation(proposition) => {
                write!(f, "¬{}", Proposition::fmt_operand(proposition))
            }
            Proposition::Binary {
                connective,
                left,
                right,
            } => write!(
                f,
                "{}{}{}",
                Proposition::fmt_operand(left),
                connective.symbol(),
                Proposition::fmt_operand(right)
            ),
        }
    }
}
