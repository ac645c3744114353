use std::fmt::Display;

use crate::ast::Variable;
use crate::rules::{BINARY_LOGICAL_CONNECTIVES, NEGATION_SYMBOL};

/// The reasons a raw expression can be rejected. Rejection is the modeled
/// outcome of validation, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidCharacter(char),
    UnbalancedParentheses,
    AdjacentOperators,
    MissingConnective,
    MisplacedNegation,
    LeadingOrTrailingOperator,
    MisplacedOperatorNearParen,
    SelfComparison,
    NoVariables,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidCharacter(character) => {
                write!(f, "the proposition contains an invalid character: '{character}'")
            }
            ValidationError::UnbalancedParentheses => {
                write!(f, "the parentheses are unbalanced")
            }
            ValidationError::AdjacentOperators => {
                write!(f, "two binary connectives appear next to each other")
            }
            ValidationError::MissingConnective => {
                write!(f, "two operands appear without a connective between them")
            }
            ValidationError::MisplacedNegation => {
                write!(f, "a negation appears where it cannot apply to an operand")
            }
            ValidationError::LeadingOrTrailingOperator => {
                write!(f, "the proposition starts or ends with a connective")
            }
            ValidationError::MisplacedOperatorNearParen => {
                write!(f, "a connective next to a parenthesis is missing an operand")
            }
            ValidationError::SelfComparison => {
                write!(f, "a binary connective compares a variable with itself")
            }
            ValidationError::NoVariables => {
                write!(f, "the proposition contains no variables")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn is_variable(character: char) -> bool {
    Variable::from_symbol(character).is_some()
}

fn is_binary(character: char) -> bool {
    BINARY_LOGICAL_CONNECTIVES.contains(&character)
}

/// Accepts or rejects a raw expression, running the named checks in order
/// and short-circuiting on the first failure.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    check_charset(input)?;

    let characters = input
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect::<Vec<_>>();

    check_balance(&characters)?;
    check_adjacent_operators(&characters)?;
    check_missing_connectives(&characters)?;
    check_negation_placement(&characters)?;
    check_leading_trailing(&characters)?;
    check_operators_near_parens(&characters)?;
    check_self_comparison(&characters)?;
    check_has_variables(&characters)?;

    Ok(())
}

fn check_charset(input: &str) -> Result<(), ValidationError> {
    for character in input.chars() {
        let allowed = character.is_whitespace()
            || character == '('
            || character == ')'
            || character == NEGATION_SYMBOL
            || is_variable(character)
            || is_binary(character);

        if !allowed {
            return Err(ValidationError::InvalidCharacter(character));
        }
    }

    Ok(())
}

fn check_balance(characters: &[char]) -> Result<(), ValidationError> {
    let mut depth = 0i32;

    for &character in characters {
        match character {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }

        if depth < 0 {
            return Err(ValidationError::UnbalancedParentheses);
        }
    }

    if depth != 0 {
        return Err(ValidationError::UnbalancedParentheses);
    }

    Ok(())
}

fn check_adjacent_operators(characters: &[char]) -> Result<(), ValidationError> {
    for pair in characters.windows(2) {
        if is_binary(pair[0]) && is_binary(pair[1]) {
            return Err(ValidationError::AdjacentOperators);
        }
    }

    Ok(())
}

fn check_missing_connectives(characters: &[char]) -> Result<(), ValidationError> {
    for pair in characters.windows(2) {
        let missing = (is_variable(pair[0]) && is_variable(pair[1]))
            || (is_variable(pair[0]) && pair[1] == '(')
            || (pair[0] == ')' && is_variable(pair[1]))
            || (pair[0] == ')' && pair[1] == '(');

        if missing {
            return Err(ValidationError::MissingConnective);
        }
    }

    Ok(())
}

fn check_negation_placement(characters: &[char]) -> Result<(), ValidationError> {
    for pair in characters.windows(2) {
        let misplaced = (pair[0] == NEGATION_SYMBOL && is_binary(pair[1]))
            || (is_variable(pair[0]) && pair[1] == NEGATION_SYMBOL)
            || (pair[0] == ')' && pair[1] == NEGATION_SYMBOL);

        if misplaced {
            return Err(ValidationError::MisplacedNegation);
        }
    }

    Ok(())
}

fn check_leading_trailing(characters: &[char]) -> Result<(), ValidationError> {
    if let Some(&first) = characters.first() {
        // Starting with a negation is fine, starting with a binary
        // connective is not.
        if is_binary(first) {
            return Err(ValidationError::LeadingOrTrailingOperator);
        }
    }

    if let Some(&last) = characters.last() {
        if is_binary(last) || last == NEGATION_SYMBOL {
            return Err(ValidationError::LeadingOrTrailingOperator);
        }
    }

    Ok(())
}

fn check_operators_near_parens(characters: &[char]) -> Result<(), ValidationError> {
    for pair in characters.windows(2) {
        let dangling = (pair[0] == '(' && is_binary(pair[1]))
            || (is_binary(pair[0]) && pair[1] == ')')
            || (pair[0] == NEGATION_SYMBOL && pair[1] == ')');

        if dangling {
            return Err(ValidationError::MisplacedOperatorNearParen);
        }
    }

    // An empty group next to a connective leaves that connective without an
    // operand. A bare "()" is left for the variable check instead.
    for (index, pair) in characters.windows(2).enumerate() {
        if pair[0] == '(' && pair[1] == ')' {
            let before = index.checked_sub(1).map(|i| characters[i]);
            let after = characters.get(index + 2).copied();

            let adjacent_to_connective = before
                .is_some_and(|character| is_binary(character) || character == NEGATION_SYMBOL)
                || after.is_some_and(is_binary);

            if adjacent_to_connective {
                return Err(ValidationError::MisplacedOperatorNearParen);
            }
        }
    }

    Ok(())
}

fn check_self_comparison(characters: &[char]) -> Result<(), ValidationError> {
    for triple in characters.windows(3) {
        if is_variable(triple[0]) && is_binary(triple[1]) && triple[0] == triple[2] {
            return Err(ValidationError::SelfComparison);
        }
    }

    Ok(())
}

fn check_has_variables(characters: &[char]) -> Result<(), ValidationError> {
    if characters.iter().copied().any(is_variable) {
        Ok(())
    } else {
        Err(ValidationError::NoVariables)
    }
}
