use thiserror::Error;

use crate::cmd::node::{CommandNode, Node, RedirectNode};

use super::token::Token;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    EmptyCommand,
    #[error("missing command before pipe")]
    MissingCommandBeforePipe,
    #[error("missing command after pipe")]
    MissingCommandAfterPipe,
    #[error("missing filename after redirect")]
    MissingRedirectTarget,
    #[error("command must start with a word, found {0}")]
    LeadingOperator(String),
    #[error("unexpected {0} in command arguments")]
    UnexpectedToken(String),
}

/// Build an execution tree from a token sequence.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    parse_pipeline(tokens)
}

/// Pipes bind loosest: split at the rightmost one and recurse on both sides.
fn parse_pipeline(tokens: &[Token]) -> Result<Node, ParseError> {
    let Some(split) = tokens.iter().rposition(|t| *t == Token::Pipe) else {
        return parse_redirected(tokens);
    };

    let left = &tokens[..split];
    let right = &tokens[split + 1..];

    if left.is_empty() {
        return Err(ParseError::MissingCommandBeforePipe);
    }
    if right.is_empty() {
        return Err(ParseError::MissingCommandAfterPipe);
    }

    Ok(Node::Pipe(
        Box::new(parse_pipeline(left)?),
        Box::new(parse_pipeline(right)?),
    ))
}

/// Collect the command's words and its redirects, then wrap the command in
/// one Redirect node per redirect, in the order they appeared.
fn parse_redirected(tokens: &[Token]) -> Result<Node, ParseError> {
    let mut command = Vec::new();
    let mut redirects = Vec::new();

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if let Token::Redirect(kind) = token {
            match iter.next() {
                Some(Token::Word(target)) => redirects.push((*kind, target.clone())),
                _ => return Err(ParseError::MissingRedirectTarget),
            }
        } else {
            command.push(token);
        }
    }

    let mut node = parse_command(&command)?;
    for (kind, filename) in redirects {
        node = Node::Redirect(RedirectNode {
            child: Box::new(node),
            kind,
            filename,
        });
    }

    Ok(node)
}

fn parse_command(tokens: &[&Token]) -> Result<Node, ParseError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(ParseError::EmptyCommand);
    };
    let Token::Word(name) = first else {
        return Err(ParseError::LeadingOperator(first.to_string()));
    };

    let mut args = Vec::with_capacity(rest.len());
    for token in rest {
        let Token::Word(arg) = token else {
            return Err(ParseError::UnexpectedToken(token.to_string()));
        };
        args.push(arg.clone());
    }

    Ok(Node::Command(CommandNode::new(name.clone(), args)))
}
