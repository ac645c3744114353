use indexmap::indexmap;
use proposition::{
    ast::{Proposition, Variable, VariableSet},
    evaluate::{Interpretation, TruthValue},
    parser::parse_proposition,
    rules::{logical_rules, BinaryConnective},
};

fn over_p(p: bool) -> Interpretation {
    Interpretation(indexmap! { Variable::P => TruthValue(p) })
}

fn over_pq(p: bool, q: bool) -> Interpretation {
    Interpretation(indexmap! {
        Variable::P => TruthValue(p),
        Variable::Q => TruthValue(q),
    })
}

#[test]
fn double_negation_is_identity() {
    for p in [true, false] {
        assert_eq!(proposition::evaluate("¬¬p", &over_p(p)), p);
    }
}

#[test]
fn implication_matches_its_classical_identity() {
    for p in [true, false] {
        for q in [true, false] {
            let interpretation = over_pq(p, q);

            assert_eq!(
                proposition::evaluate("p→q", &interpretation),
                proposition::evaluate("¬p∨q", &interpretation),
            );
            assert_eq!(proposition::evaluate("p→q", &interpretation), !p || q);
        }
    }
}

#[test]
fn equivalence_is_true_iff_operands_agree() {
    for p in [true, false] {
        for q in [true, false] {
            assert_eq!(proposition::evaluate("p↔q", &over_pq(p, q)), p == q);
        }
    }
}

#[test]
fn evaluation_fails_soft_to_false() {
    // Truncated input never parses; an unbound variable never evaluates.
    // Both degrade to false instead of erroring.
    assert!(!proposition::evaluate("p∧", &over_p(true)));
    assert!(!proposition::evaluate("p∧q", &over_p(true)));
    assert!(!proposition::evaluate("", &over_p(true)));
}

#[test]
fn connective_tiers_and_associativity() {
    // ∧ and → bind tighter than ∨ and ↔, all left-associative.
    let test_cases = [
        (
            "p∨q∧r",
            Proposition::binary(
                BinaryConnective::Disjunction,
                Variable::P.into(),
                Proposition::binary(
                    BinaryConnective::Conjunction,
                    Variable::Q.into(),
                    Variable::R.into(),
                ),
            ),
        ),
        (
            "p→q∨r",
            Proposition::binary(
                BinaryConnective::Disjunction,
                Proposition::binary(
                    BinaryConnective::Implication,
                    Variable::P.into(),
                    Variable::Q.into(),
                ),
                Variable::R.into(),
            ),
        ),
        (
            "p→q→r",
            Proposition::binary(
                BinaryConnective::Implication,
                Proposition::binary(
                    BinaryConnective::Implication,
                    Variable::P.into(),
                    Variable::Q.into(),
                ),
                Variable::R.into(),
            ),
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_proposition(input), Ok(expected), "for \"{input}\"");
    }
}

#[test]
fn interpretations_enumerate_true_branch_first() {
    let variables = VariableSet([Variable::P, Variable::Q].into_iter().collect());

    let interpretations = Interpretation::generate_all(variables).collect::<Vec<_>>();

    let expected = [(true, true), (true, false), (false, true), (false, false)];
    assert_eq!(interpretations.len(), expected.len());

    for (interpretation, (p, q)) in interpretations.iter().zip(expected) {
        assert_eq!(interpretation.0[&Variable::P], TruthValue(p));
        assert_eq!(interpretation.0[&Variable::Q], TruthValue(q));
    }
}

#[test]
fn rule_catalog_lists_the_five_connectives() {
    let rules = logical_rules();

    assert_eq!(
        rules.iter().map(|rule| rule.operator).collect::<Vec<_>>(),
        vec!['¬', '∧', '∨', '→', '↔'],
    );

    let conditional = &rules[3];
    assert_eq!(conditional.name, "Conditional");
    assert_eq!(
        conditional.rows[1],
        (vec![TruthValue(true), TruthValue(false)], TruthValue(false)),
    );

    let negation = &rules[0];
    assert_eq!(negation.rows, vec![
        (vec![TruthValue(true)], TruthValue(false)),
        (vec![TruthValue(false)], TruthValue(true)),
    ]);
}
