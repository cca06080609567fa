pub mod registry;
pub mod token;

use std::fmt::{self, Display, Formatter};

pub use registry::LiteralRegistry;
pub use token::{tokenize, LiteralId, Token, Tokenizer};

/// A tokenized formula together with its literal registry. Every literal
/// token is resolved against the registry when the formula is built, and
/// neither changes afterwards.
#[derive(Clone, Debug)]
pub struct Formula {
    tokens: Vec<Token>,
    literals: LiteralRegistry,
}

impl Formula {
    pub fn parse(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    pub fn new(mut tokens: Vec<Token>) -> Self {
        let literals = LiteralRegistry::resolve(&mut tokens);
        Self { tokens, literals }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn literals(&self) -> &LiteralRegistry {
        &self.literals
    }

    pub fn num_literals(&self) -> usize {
        self.literals.len()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for token in &self.tokens {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
