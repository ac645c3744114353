use crate::ast::Variable;
use crate::rules::{BinaryConnective, NEGATION_SYMBOL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Variable(Variable),
    Negation,
    Connective(BinaryConnective),
    LeftParen,
    RightParen,
}

/// Turns an expression into its token stream, skipping whitespace. A
/// validated expression contains nothing else, so the function is total;
/// anything unrecognized is dropped and left for the parser to reject.
pub fn tokenize(input: &str) -> Vec<Token> {
    input
        .chars()
        .filter_map(|character| match character {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            NEGATION_SYMBOL => Some(Token::Negation),
            _ => Variable::from_symbol(character)
                .map(Token::Variable)
                .or_else(|| BinaryConnective::from_symbol(character).map(Token::Connective)),
        })
        .collect()
}
