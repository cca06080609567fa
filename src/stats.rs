use std::fmt::{self, Display, Formatter};

/// Counters collected while solving. They are reported, never acted on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Full passes of the evaluator over the formula.
    pub evaluations: usize,
    /// Literal values read from an assignment.
    pub lookups: usize,
    /// Search nodes visited, including the root.
    pub nodes: usize,
    /// Search nodes reached with every literal frozen.
    pub leaves: usize,
    /// Deepest search node, counted in frozen literals.
    pub max_depth: usize,
}

impl Stats {
    pub(crate) fn visit(&mut self, depth: usize, is_leaf: bool) {
        self.nodes += 1;
        if is_leaf {
            self.leaves += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "Number of Evals: {}", self.evaluations)?;
        writeln!(f, "Number of Lookups: {}", self.lookups)?;
        writeln!(f, "Number of Nodes: {}", self.nodes)?;
        write!(f, "Max Depth: {}", self.max_depth)
    }
}
