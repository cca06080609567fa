//! Direct interpretation of a token stream, without building a tree.
//!
//! ```text
//! expr   := clause ( ('&' | '|') clause )*
//! clause := '~' clause | literal | '(' expr ')'
//! ```
//!
//! Operators chain strictly left to right with no precedence, so `a & b | c`
//! is `(a & b) | c`, and both operands are always evaluated. The interpreter
//! keeps its pending work on a heap stack, so deeply nested input cannot
//! overflow the native call stack.

use crate::assignment::Assignment;
use crate::formula::{Formula, Token};
use crate::stats::Stats;
use log::trace;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum EvalError {
    #[error("A clause cannot begin with an &")]
    ClauseStartsWithAnd,
    #[error("A clause cannot begin with an |")]
    ClauseStartsWithOr,
    #[error("Encountered Unknown token")]
    UnknownToken,
    #[error("Expected something after a Not")]
    ExpectedAfterNot,
    #[error("Expected something after an Open Bracket")]
    ExpectedAfterOpenBracket,
    #[error("Expected Close Bracket")]
    ExpectedCloseBracket,
    #[error("Expected something after an And/Or")]
    ExpectedAfterOperator,
    #[error("Unexpected Close Bracket")]
    UnexpectedCloseBracket,
    #[error("Unexpected {0} -- Only And/Or can connect clauses")]
    UnexpectedToken(String),
    #[error("Unknown Literal {0}")]
    UnknownLiteral(String),
    #[error("Unexpected Eof")]
    UnexpectedEof,
    #[error("Internal error in evaluator")]
    Internal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Op {
    And,
    Or,
}

impl Op {
    fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Op::And => left & right,
            Op::Or => left | right,
        }
    }
}

/// Pending work. A frame corresponds to one activation of the recursive
/// grammar above; it reads the shared cursor when it is popped.
#[derive(Clone, Copy, Debug)]
enum Frame {
    Expr,
    Clause,
    /// After a clause: look for an operator, or end the expression.
    Chain,
    Combine(Op),
    Negate,
    /// Consume the `)` matching the `(` at the given position.
    CloseBracket { open: usize },
}

/// Evaluates the whole formula under `assignment`.
///
/// A `)` left over after the top-level expression has no bracket to close
/// and is reported as unexpected.
pub fn evaluate(formula: &Formula, assignment: &Assignment, stats: &mut Stats) -> Result<bool, EvalError> {
    stats.evaluations += 1;
    let tokens = formula.tokens();
    let (value, end) = evaluate_expr(tokens, 0, assignment, stats)?;
    match tokens.get(end) {
        None => Ok(value),
        Some(Token::CloseParen) => Err(EvalError::UnexpectedCloseBracket),
        Some(_) => Err(EvalError::Internal),
    }
}

/// Evaluates one `expr` starting at `start`. Returns its value and the
/// position of the first token it did not consume: the end of the stream,
/// or the `)` that ends this sub-expression.
pub fn evaluate_expr(
    tokens: &[Token],
    start: usize,
    assignment: &Assignment,
    stats: &mut Stats,
) -> Result<(bool, usize), EvalError> {
    let mut pos = start;
    let mut frames = vec![Frame::Expr];
    let mut values: Vec<bool> = vec![];

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Expr => {
                frames.push(Frame::Chain);
                frames.push(Frame::Clause);
            }
            Frame::Clause => match tokens.get(pos) {
                Some(Token::Not) => {
                    pos += 1;
                    if pos >= tokens.len() {
                        return Err(EvalError::ExpectedAfterNot);
                    }
                    frames.push(Frame::Negate);
                    frames.push(Frame::Clause);
                }
                Some(Token::Literal { name, id }) => {
                    stats.lookups += 1;
                    let value = id
                        .and_then(|id| assignment.value(id))
                        .ok_or_else(|| EvalError::UnknownLiteral(name.clone()))?;
                    values.push(value);
                    pos += 1;
                }
                Some(Token::OpenParen) => {
                    let open = pos;
                    pos += 1;
                    if pos >= tokens.len() {
                        return Err(EvalError::ExpectedAfterOpenBracket);
                    }
                    frames.push(Frame::CloseBracket { open });
                    frames.push(Frame::Expr);
                }
                Some(Token::And) => return Err(EvalError::ClauseStartsWithAnd),
                Some(Token::Or) => return Err(EvalError::ClauseStartsWithOr),
                Some(Token::Unknown) => return Err(EvalError::UnknownToken),
                Some(Token::CloseParen) => return Err(EvalError::UnexpectedCloseBracket),
                Some(Token::Eof) | None => return Err(EvalError::UnexpectedEof),
            },
            Frame::Chain => {
                let op = match tokens.get(pos) {
                    // the end of this expression; a `)` stays for the enclosing bracket
                    None | Some(Token::CloseParen) => continue,
                    Some(Token::And) => Op::And,
                    Some(Token::Or) => Op::Or,
                    Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
                };
                pos += 1;
                if pos >= tokens.len() {
                    return Err(EvalError::ExpectedAfterOperator);
                }
                frames.push(Frame::Chain);
                frames.push(Frame::Combine(op));
                frames.push(Frame::Clause);
            }
            Frame::Combine(op) => {
                let right = values.pop().ok_or(EvalError::Internal)?;
                let left = values.pop().ok_or(EvalError::Internal)?;
                values.push(op.apply(left, right));
            }
            Frame::Negate => {
                let value = values.pop().ok_or(EvalError::Internal)?;
                values.push(!value);
            }
            Frame::CloseBracket { open } => match tokens.get(pos) {
                Some(Token::CloseParen) => pos += 1,
                _ => {
                    trace!("bracket opened at token {} is never closed", open);
                    return Err(EvalError::ExpectedCloseBracket);
                }
            },
        }
    }

    match (values.pop(), values.is_empty()) {
        (Some(value), true) => Ok((value, pos)),
        _ => Err(EvalError::Internal),
    }
}
