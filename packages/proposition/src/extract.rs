use indexmap::IndexSet;

use crate::ast::{Variable, VariableSet};
use crate::rules::NEGATION_SYMBOL;

/// The display-worthy pieces of a validated expression: its variables in
/// first-occurrence order, the variables that occur literally negated as
/// `¬v`, and the first-level parenthesized sub-expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
    pub variables: VariableSet,
    pub negations: Vec<Variable>,
    pub subexpressions: Vec<String>,
}

impl Decomposition {
    pub fn of(input: &str) -> Self {
        let characters = input
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect::<Vec<_>>();

        Decomposition {
            variables: extract_variables(&characters),
            negations: extract_negations(&characters),
            subexpressions: extract_subexpressions(&characters),
        }
    }
}

fn extract_variables(characters: &[char]) -> VariableSet {
    VariableSet(
        characters
            .iter()
            .filter_map(|&character| Variable::from_symbol(character))
            .collect(),
    )
}

// One negation per variable that occurs literally as ¬v, in the variable
// list's first-occurrence order.
fn extract_negations(characters: &[char]) -> Vec<Variable> {
    extract_variables(characters)
        .0
        .into_iter()
        .filter(|&variable| {
            characters.windows(2).any(|pair| {
                pair[0] == NEGATION_SYMBOL && Variable::from_symbol(pair[1]) == Some(variable)
            })
        })
        .collect()
}

/// Captures each outermost parenthesized group, one nesting level only:
/// parentheses inside a captured group stay part of its text and are not
/// extracted separately.
fn extract_subexpressions(characters: &[char]) -> Vec<String> {
    let mut subexpressions = IndexSet::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, &character) in characters.iter().enumerate() {
        match character {
            '(' => {
                if depth == 0 {
                    start = index + 1;
                }
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && start < index {
                    subexpressions.insert(characters[start..index].iter().collect::<String>());
                }
            }
            _ => {}
        }
    }

    let variables = extract_variables(characters);
    let negations = extract_negations(characters);

    // Drop groups whose text is already shown by a variable or negation
    // column, e.g. "(p)" or "(¬q)".
    subexpressions
        .into_iter()
        .filter(|text| {
            let duplicate_variable = variables
                .0
                .iter()
                .any(|variable| text == &variable.to_string());
            let duplicate_negation = negations
                .iter()
                .any(|variable| text == &format!("{NEGATION_SYMBOL}{variable}"));

            !(duplicate_variable || duplicate_negation)
        })
        .collect()
}
