use crate::formula::token::{LiteralId, Token};
use std::collections::HashMap;

/// The distinct literal names of a formula, in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiteralRegistry {
    names: Vec<String>,
    ids: HashMap<String, LiteralId>,
}

impl LiteralRegistry {
    /// Collects the literal names of `tokens` and rewrites every literal
    /// token to carry the index of its name.
    pub fn resolve(tokens: &mut [Token]) -> Self {
        let mut registry = Self::default();
        for token in tokens.iter_mut() {
            if let Token::Literal { name, id } = token {
                *id = Some(registry.intern(name));
            }
        }
        registry
    }

    fn intern(&mut self, name: &str) -> LiteralId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = LiteralId(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<LiteralId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: LiteralId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
