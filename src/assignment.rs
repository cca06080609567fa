use crate::formula::LiteralId;

/// Truth values for every literal of a formula, indexed by registry order.
///
/// The first `frozen` values are fixed for the current search branch. The
/// rest are thawed and hold their default, `false`, until the search commits
/// them one at a time from the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
    frozen: usize,
}

impl Assignment {
    /// Every literal thawed.
    pub fn thawed(num_literals: usize) -> Self {
        Self {
            values: vec![false; num_literals],
            frozen: 0,
        }
    }

    /// An assignment with every value frozen as given.
    pub fn fixed(values: Vec<bool>) -> Self {
        let frozen = values.len();
        Self { values, frozen }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn num_frozen(&self) -> usize {
        self.frozen
    }

    pub fn num_thawed(&self) -> usize {
        self.values.len() - self.frozen
    }

    /// The literal the next branch commits, if any is still thawed.
    pub fn next_thawed(&self) -> Option<LiteralId> {
        if self.frozen < self.values.len() {
            Some(LiteralId(self.frozen))
        } else {
            None
        }
    }

    pub fn value(&self, id: LiteralId) -> Option<bool> {
        self.values.get(id.0).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// A copy of this assignment with the first thawed literal frozen to
    /// `value`. Returns `None` once nothing is left to thaw.
    pub fn branch(&self, value: bool) -> Option<Self> {
        let id = self.next_thawed()?;
        let mut child = self.clone();
        child.values[id.0] = value;
        child.frozen += 1;
        Some(child)
    }

    pub fn into_values(self) -> Vec<bool> {
        self.values
    }
}
