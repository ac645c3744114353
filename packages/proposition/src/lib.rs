pub mod ast;
pub mod evaluate;
pub mod extract;
pub mod parser;
pub mod rules;
pub mod table;
pub mod tokenizer;
pub mod validate;

use evaluate::{Evaluate, Interpretation, TruthValue};
use table::TruthTable;
use validate::ValidationError;

/// Accepts or rejects a raw expression. Rejection is a normal return value.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    validate::validate(input)
}

/// Evaluates an already-validated expression under an interpretation.
/// Fail-soft: any parse or evaluation failure (only reachable when
/// validation was bypassed) yields `false` instead of an error.
pub fn evaluate(input: &str, interpretation: &Interpretation) -> bool {
    parser::parse_proposition(input)
        .ok()
        .and_then(|proposition| proposition.evaluate(interpretation).ok())
        .unwrap_or(TruthValue(false))
        .0
}

/// Validates an expression and builds its complete truth table.
pub fn build_truth_table(input: &str) -> Result<TruthTable, ValidationError> {
    validate::validate(input)?;

    Ok(TruthTable::build(input))
}
