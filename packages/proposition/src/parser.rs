use as_variant::as_variant;
use winnow::{
    combinator::{alt, delimited, eof, preceded, separated_foldl1, terminated},
    error::ContextError,
    token::{any, one_of},
    PResult, Parser,
};

use crate::{
    ast::Proposition,
    rules::BinaryConnective,
    tokenizer::{tokenize, Token},
};

type Input<'a> = &'a [Token];

/// Parses an expression into its syntax tree. The whole token stream must
/// be consumed; a validated expression always parses.
pub fn parse_proposition(input: &str) -> Result<Proposition, String> {
    let tokens = tokenize(input);
    let mut stream: Input = tokens.as_slice();

    let result = terminated(proposition, eof)
        .parse_next(&mut stream)
        .map_err(|_| format!("Failed to parse proposition: \"{input}\""));

    result
}

fn proposition(input: &mut Input) -> PResult<Proposition> {
    disjunction_or_equivalence.parse_next(input)
}

// Two binary tiers: ∨ and ↔ bind loosest, ∧ and → bind tighter, both
// left-associative, negation tightest. Note this is not the conventional
// ¬ > ∧ > ∨ > → > ↔ ordering.
fn disjunction_or_equivalence(input: &mut Input) -> PResult<Proposition> {
    separated_foldl1(
        conjunction_or_implication,
        connective_in(&[BinaryConnective::Disjunction, BinaryConnective::Equivalence]),
        |left, connective, right| Proposition::binary(connective, left, right),
    )
    .parse_next(input)
}

fn conjunction_or_implication(input: &mut Input) -> PResult<Proposition> {
    separated_foldl1(
        base_expression,
        connective_in(&[BinaryConnective::Conjunction, BinaryConnective::Implication]),
        |left, connective, right| Proposition::binary(connective, left, right),
    )
    .parse_next(input)
}

fn base_expression(input: &mut Input) -> PResult<Proposition> {
    alt((negation, parenthesized_expression, propositional_variable)).parse_next(input)
}

fn negation(input: &mut Input) -> PResult<Proposition> {
    preceded(one_of(|token| token == Token::Negation), base_expression)
        .map(|proposition| Proposition::Negation(Box::new(proposition)))
        .parse_next(input)
}

fn parenthesized_expression(input: &mut Input) -> PResult<Proposition> {
    delimited(
        one_of(|token| token == Token::LeftParen),
        proposition,
        one_of(|token| token == Token::RightParen),
    )
    .parse_next(input)
}

fn propositional_variable(input: &mut Input) -> PResult<Proposition> {
    any.verify_map(|token| as_variant!(token, Token::Variable).map(Proposition::Atomic))
        .parse_next(input)
}

fn connective_in<'a>(
    connectives: &'static [BinaryConnective],
) -> impl Parser<Input<'a>, BinaryConnective, ContextError> {
    any.verify_map(move |token| {
        as_variant!(token, Token::Connective).filter(|connective| connectives.contains(connective))
    })
}
