use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    ast::{Proposition, Variable},
    evaluate::{Evaluate, Interpretation, TruthValue},
    extract::Decomposition,
    parser::parse_proposition,
    rules::NEGATION_SYMBOL,
};

/// A named computed quantity displayed as one truth table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Column {
    Variable(Variable),
    Negation(Variable),
    SubExpression(String),
    Expression(String),
}

impl Column {
    pub fn label(&self) -> String {
        match self {
            Column::Variable(variable) => variable.to_string(),
            Column::Negation(variable) => format!("{NEGATION_SYMBOL}{variable}"),
            Column::SubExpression(text) | Column::Expression(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<TruthValue>>,
}

impl TruthTable {
    /// Builds the complete table for a validated expression: one column per
    /// variable, literal negation and first-level sub-expression, plus the
    /// full expression, over all 2^n interpretations. Every column is
    /// evaluated on a syntax tree parsed once up front; if the caller
    /// bypassed validation and something fails to parse or evaluate, the
    /// affected cells degrade to false instead of erroring.
    pub fn build(input: &str) -> TruthTable {
        let text = input
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect::<String>();

        let decomposition = Decomposition::of(&text);

        let mut columns = decomposition
            .variables
            .0
            .iter()
            .map(|&variable| Column::Variable(variable))
            .collect::<Vec<_>>();

        columns.extend(
            decomposition
                .negations
                .iter()
                .map(|&variable| Column::Negation(variable))
                .filter(|column| column.label() != text),
        );

        columns.extend(
            decomposition
                .subexpressions
                .iter()
                .map(|subexpression| Column::SubExpression(subexpression.clone()))
                .filter(|column| column.label() != text),
        );

        columns.push(Column::Expression(text.clone()));

        let trees = columns
            .iter()
            .map(|column| match column {
                Column::SubExpression(text) | Column::Expression(text) => {
                    parse_proposition(text).ok()
                }
                Column::Variable(_) | Column::Negation(_) => None,
            })
            .collect::<Vec<_>>();

        let rows = Interpretation::generate_all(decomposition.variables.clone())
            .map(|interpretation| {
                columns
                    .iter()
                    .zip(&trees)
                    .map(|(column, tree)| {
                        Self::cell_value(column, tree.as_ref(), &interpretation)
                    })
                    .collect()
            })
            .collect();

        TruthTable { columns, rows }
    }

    fn cell_value(
        column: &Column,
        tree: Option<&Proposition>,
        interpretation: &Interpretation,
    ) -> TruthValue {
        let fallback = TruthValue(false);

        match column {
            Column::Variable(variable) => variable.evaluate(interpretation).unwrap_or(fallback),
            Column::Negation(variable) => {
                let TruthValue(value) = variable.evaluate(interpretation).unwrap_or(fallback);
                TruthValue(!value)
            }
            Column::SubExpression(_) | Column::Expression(_) => tree
                .map(|tree| tree.evaluate(interpretation).unwrap_or(fallback))
                .unwrap_or(fallback),
        }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(Column::label).collect()
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for column in &self.columns {
            write!(f, "|{}", column.label().blue())?;
        }
        writeln!(f, "|")?;

        for _ in 0..self.columns.len() {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            writeln!(f, "|{}|", row.iter().map(TruthValue::to_string).join("|"))?;
        }

        Ok(())
    }
}
