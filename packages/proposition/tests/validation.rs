use proposition::validate::{validate, ValidationError};

#[test]
fn accepts_well_formed_propositions() {
    let test_cases = [
        "p",
        "¬p",
        "¬¬p",
        "p∧q",
        "p ∧ q",
        "(p∨q)∧r",
        "¬(p∧q)",
        "p→q↔r",
        "(p)",
        "¬p∨¬q",
        "((p∧q)∨r)",
    ];

    for input in test_cases {
        assert_eq!(validate(input), Ok(()), "expected \"{input}\" to be valid");
    }
}

#[test]
fn rejects_malformed_propositions() {
    let test_cases = [
        ("s∧q", ValidationError::InvalidCharacter('s')),
        ("p & q", ValidationError::InvalidCharacter('&')),
        ("(p∧q", ValidationError::UnbalancedParentheses),
        ("p)q(", ValidationError::UnbalancedParentheses),
        ("p∧∧q", ValidationError::AdjacentOperators),
        ("p∨→q", ValidationError::AdjacentOperators),
        ("pq", ValidationError::MissingConnective),
        ("(p)(q)", ValidationError::MissingConnective),
        ("p(q∨r)", ValidationError::MissingConnective),
        ("(p∨q)r", ValidationError::MissingConnective),
        ("¬∧p", ValidationError::MisplacedNegation),
        ("p¬q", ValidationError::MisplacedNegation),
        ("(p)¬q", ValidationError::MisplacedNegation),
        ("→p", ValidationError::LeadingOrTrailingOperator),
        ("p∧", ValidationError::LeadingOrTrailingOperator),
        ("¬", ValidationError::LeadingOrTrailingOperator),
        ("(∧p)", ValidationError::MisplacedOperatorNearParen),
        ("(p∧)", ValidationError::MisplacedOperatorNearParen),
        ("(¬)", ValidationError::MisplacedOperatorNearParen),
        ("p∧()", ValidationError::MisplacedOperatorNearParen),
        ("()∨q", ValidationError::MisplacedOperatorNearParen),
        ("p∧p", ValidationError::SelfComparison),
        ("r∧(q∨q)", ValidationError::SelfComparison),
        ("", ValidationError::NoVariables),
        ("()", ValidationError::NoVariables),
        ("(())", ValidationError::NoVariables),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            validate(input),
            Err(expected),
            "unexpected result for \"{input}\""
        );
    }
}

#[test]
fn errors_carry_readable_messages() {
    assert_eq!(
        ValidationError::InvalidCharacter('x').to_string(),
        "the proposition contains an invalid character: 'x'"
    );
    assert_eq!(
        ValidationError::NoVariables.to_string(),
        "the proposition contains no variables"
    );
}
