use std::fmt;

use super::lexer::Field;

/// A lexed field with its syntactic classification.
///
/// Classification happens on whole fields only, so `file>` is a word; fields
/// with quoted or escaped content never classify as operators at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Pipe,
    Redirect(RedirectKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// `<`
    In,
    /// `>`
    Out,
    /// `1>`
    OutFd,
    /// `>>`
    Append,
    /// `1>>`
    AppendFd,
    /// `2>`
    Err,
    /// `2>>`
    ErrAppend,
    /// `&>`
    ErrOut,
}

impl Token {
    /// Classify a single field.
    pub fn classify(field: Field) -> Self {
        if field.quoted {
            return Token::Word(field.text);
        }
        match field.text.as_str() {
            "|" => Token::Pipe,
            "<" => Token::Redirect(RedirectKind::In),
            ">" => Token::Redirect(RedirectKind::Out),
            "1>" => Token::Redirect(RedirectKind::OutFd),
            ">>" => Token::Redirect(RedirectKind::Append),
            "1>>" => Token::Redirect(RedirectKind::AppendFd),
            "2>" => Token::Redirect(RedirectKind::Err),
            "2>>" => Token::Redirect(RedirectKind::ErrAppend),
            "&>" => Token::Redirect(RedirectKind::ErrOut),
            _ => Token::Word(field.text),
        }
    }
}

/// Classify every field of a line.
pub fn tokenize(fields: Vec<Field>) -> Vec<Token> {
    fields.into_iter().map(Token::classify).collect()
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sigil = match self {
            RedirectKind::In => "<",
            RedirectKind::Out => ">",
            RedirectKind::OutFd => "1>",
            RedirectKind::Append => ">>",
            RedirectKind::AppendFd => "1>>",
            RedirectKind::Err => "2>",
            RedirectKind::ErrAppend => "2>>",
            RedirectKind::ErrOut => "&>",
        };
        f.write_str(sigil)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{word:?}"),
            Token::Pipe => f.write_str("|"),
            Token::Redirect(kind) => kind.fmt(f),
        }
    }
}
