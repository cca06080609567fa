use std::fmt::{self, Display, Formatter};
use std::iter::Peekable;
use std::str::Chars;

/// Index of a literal in its formula's registry.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct LiteralId(pub usize);

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    And,
    Or,
    Not,
    OpenParen,
    CloseParen,
    /// A named literal. `id` is `None` until the registry has resolved it.
    Literal { name: String, id: Option<LiteralId> },
    Unknown,
    Eof,
}

impl Token {
    pub fn literal(name: impl Into<String>) -> Self {
        Token::Literal {
            name: name.into(),
            id: None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Token::And => f.write_str("&"),
            Token::Or => f.write_str("|"),
            Token::Not => f.write_str("~"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::Literal { name, .. } => f.write_str(name),
            Token::Unknown => f.write_str("Unknown"),
            Token::Eof => f.write_str("Eof"),
        }
    }
}

/// Scans formula text one token at a time. Never fails: characters outside
/// the grammar come out as [`Token::Unknown`].
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let c = match self.chars.next() {
                None => return Token::Eof,
                Some(c) => c,
            };
            return match c {
                c if c.is_whitespace() => continue,
                '&' => Token::And,
                '|' => Token::Or,
                '~' => Token::Not,
                '(' => Token::OpenParen,
                ')' => Token::CloseParen,
                c if c.is_ascii_alphabetic() => {
                    let mut name = c.to_string();
                    while let Some(&c) = self.chars.peek() {
                        if !c.is_ascii_alphanumeric() {
                            break;
                        }
                        name.push(c);
                        self.chars.next();
                    }
                    Token::literal(name)
                }
                _ => Token::Unknown,
            };
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}

/// Splits `text` into tokens, stopping at (and dropping) the end marker.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).collect()
}
