use crate::assignment::Assignment;
use crate::eval::{evaluate, EvalError};
use crate::formula::Formula;
use crate::stats::Stats;
use crate::{Model, SatResult};
use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum SolveError {
    #[error("Contents is empty -- cannot solve")]
    Empty,
    #[error("Formula has invalid syntax -- {0}")]
    Syntax(#[from] EvalError),
}

/// Depth-first search over assignments to the formula's literals.
///
/// Literals are committed one at a time in registry order, `true` before
/// `false`. Every search node evaluates the whole formula with its thawed
/// literals at `false`, and stops as soon as that comes out `true`, so a
/// satisfying assignment can be found without deciding every literal.
pub struct Solver {
    formula: Formula,
    stats: Stats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            stats: Stats::default(),
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn solve(&mut self) -> Result<SatResult, SolveError> {
        if self.formula.tokens().is_empty() {
            return Err(SolveError::Empty);
        }
        // a formula without literals never gets past this check
        self.check_syntax()?;

        let result = self.search()?;
        debug!(
            "{} after {} evaluations over {} nodes",
            result, self.stats.evaluations, self.stats.nodes
        );
        Ok(result)
    }

    /// One evaluation with every literal thawed. Grammar errors do not
    /// depend on the assignment, so this reports them before any search.
    fn check_syntax(&mut self) -> Result<(), EvalError> {
        let assignment = Assignment::thawed(self.formula.num_literals());
        let value = evaluate(&self.formula, &assignment, &mut self.stats)?;
        debug!("syntax ok, formula is {} with every literal false", value);
        Ok(())
    }

    fn search(&mut self) -> Result<SatResult, EvalError> {
        // The stack holds the nodes still to visit. The `false` child is
        // pushed beneath the `true` child, which reproduces the recursive
        // visiting order.
        let mut stack = vec![Assignment::thawed(self.formula.num_literals())];

        while let Some(assignment) = stack.pop() {
            let depth = assignment.num_frozen();
            self.stats.visit(depth, assignment.num_thawed() == 0);

            if evaluate(&self.formula, &assignment, &mut self.stats)? {
                trace!("satisfied at depth {}", depth);
                return Ok(SatResult::Satisfiable(self.model(assignment)));
            }

            match (assignment.next_thawed(), assignment.branch(false), assignment.branch(true)) {
                (Some(id), Some(on_false), Some(on_true)) => {
                    trace!(
                        "decision {} at depth {}",
                        self.formula.literals().name(id).unwrap_or("?"),
                        depth + 1
                    );
                    stack.push(on_false);
                    stack.push(on_true);
                }
                _ => trace!("dead end at depth {}", depth),
            }
        }

        Ok(SatResult::Unsatisfiable)
    }

    fn model(&self, assignment: Assignment) -> Model {
        Model::new(
            self.formula.literals().names().map(String::from).collect(),
            assignment.into_values(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force::solve_brute_force;
    use crate::formula::strategy::expr_strategy;
    use proptest::prelude::*;
    use test_env_log::test;

    fn solve(text: &str) -> Result<SatResult, SolveError> {
        Solver::new(Formula::parse(text)).solve()
    }

    fn model(text: &str) -> Model {
        match solve(text) {
            Ok(SatResult::Satisfiable(model)) => model,
            other => panic!("expected {:?} to be satisfiable, got {:?}", text, other),
        }
    }

    #[test]
    fn solve_negated_literal() {
        let m = model("a & ~b");
        assert_eq!(m.value("a"), Some(true));
        assert_eq!(m.value("b"), Some(false));
        assert_eq!(m.to_string(), "a=True b=False");
        assert_eq!(solve("a & ~b").unwrap().to_string(), "Satisfied with a=True b=False");
    }

    #[test]
    fn solve_contradiction() {
        assert_eq!(solve("x & ~x"), Ok(SatResult::Unsatisfiable));
        assert_eq!(solve("x & ~x").unwrap().to_string(), "Unstatisfied");
        assert_eq!(solve("(a | b) & ~a & ~b"), Ok(SatResult::Unsatisfiable));
    }

    #[test]
    fn solve_tautology() {
        let mut solver = Solver::new(Formula::parse("x | ~x"));
        let result = solver.solve().unwrap();
        assert_eq!(result.to_string(), "Satisfied with x=False");
        // true with x still thawed, so no literal is ever committed
        assert_eq!(solver.stats().max_depth, 0);
    }

    #[test]
    fn solve_without_branching() {
        let mut solver = Solver::new(Formula::parse("~(mike & sally) | ~peter100"));
        let result = solver.solve().unwrap();
        assert_eq!(
            result.to_string(),
            "Satisfied with mike=False sally=False peter100=False"
        );
        // the syntax check and the root node
        assert_eq!(solver.stats().evaluations, 2);
        assert_eq!(solver.stats().nodes, 1);
        assert_eq!(solver.stats().max_depth, 0);
    }

    #[test]
    fn solve_mixed_chain() {
        let f = Formula::parse("mike & sally | ~peter");
        let m = model("mike & sally | ~peter");
        assert_eq!(m.literals().map(|(name, _)| name).collect::<Vec<_>>(), vec!["mike", "sally", "peter"]);
        assert_eq!(m.satisfies(&f), Ok(true));
    }

    #[test]
    fn solve_trial_order() {
        // true is tried before false, first literal first
        assert_eq!(model("a & b").to_string(), "a=True b=True");
        assert_eq!(model("~a & b").to_string(), "a=False b=True");
        assert_eq!(model("a | b").to_string(), "a=True b=False");
        assert_eq!(model("~a & ~b & c").to_string(), "a=False b=False c=True");
    }

    #[test]
    fn solve_repeatable() {
        let text = "(p | q) & (~p | r) & (~q | ~r) & (s | ~s) & ~(p & q)";
        let first = solve(text);
        assert!(matches!(first, Ok(SatResult::Satisfiable(_))));
        for _ in 0..3 {
            assert_eq!(solve(text), first);
        }
    }

    #[test]
    fn solve_syntax_errors() {
        assert_eq!(solve("a & b &"), Err(SolveError::Syntax(EvalError::ExpectedAfterOperator)));
        assert_eq!(solve(") a"), Err(SolveError::Syntax(EvalError::UnexpectedCloseBracket)));
        assert_eq!(
            solve(")").unwrap_err().to_string(),
            "Formula has invalid syntax -- Unexpected Close Bracket"
        );
        assert_eq!(
            solve("a & b &").unwrap_err().to_string(),
            "Formula has invalid syntax -- Expected something after an And/Or"
        );
        assert_eq!(solve(""), Err(SolveError::Empty));
        assert_eq!(solve(" \n "), Err(SolveError::Empty));
        assert_eq!(solve("( ~ )"), Err(SolveError::Syntax(EvalError::UnexpectedCloseBracket)));
        assert_eq!(solve("~"), Err(SolveError::Syntax(EvalError::ExpectedAfterNot)));
    }

    #[test]
    fn solve_syntax_error_stops_early() {
        let mut solver = Solver::new(Formula::parse("a & (b | c"));
        assert!(solver.solve().is_err());
        assert_eq!(solver.stats().evaluations, 1);
        assert_eq!(solver.stats().nodes, 0);
    }

    #[test]
    fn solve_unsat_visits_every_leaf() {
        let mut solver = Solver::new(Formula::parse("a & ~a & b & c"));
        assert_eq!(solver.solve(), Ok(SatResult::Unsatisfiable));
        // 2^3 leaves, 2^4 - 1 nodes in the full tree
        assert_eq!(solver.stats().leaves, 8);
        assert_eq!(solver.stats().nodes, 15);
        assert_eq!(solver.stats().max_depth, 3);
    }

    #[test]
    fn solve_many_literals() {
        let n = 2000;
        let text = (0..n).map(|i| format!("v{}", i)).collect::<Vec<_>>().join(" & ");
        let mut solver = Solver::new(Formula::parse(&text));
        let m = match solver.solve() {
            Ok(SatResult::Satisfiable(m)) => m,
            other => panic!("unexpected {:?}", other),
        };
        assert!(m.literals().all(|(_, value)| value));
        assert_eq!(solver.stats().max_depth, n);
    }

    proptest! {
        #[test]
        fn proptest_solve(e in expr_strategy()) {
            let f = Formula::parse(&e.to_string());
            let brute_force = solve_brute_force(&f);
            let mut solver = Solver::new(f.clone());
            let result = solver.solve();
            log::trace!("result = {:?}", result);

            match result {
                Ok(SatResult::Satisfiable(m)) => {
                    prop_assert!(brute_force);
                    prop_assert_eq!(m.satisfies(&f), Ok(true));
                }
                Ok(SatResult::Unsatisfiable) => prop_assert!(!brute_force),
                Err(e) => prop_assert!(false, "solver failed: {}", e),
            }
            prop_assert!(solver.stats().leaves <= 1 << f.num_literals());
        }

        #[test]
        fn proptest_excluded_middle(name in "[a-zA-Z][a-zA-Z0-9]{0,8}") {
            let contradiction = format!("{} & ~{}", name, name);
            prop_assert_eq!(solve(&contradiction), Ok(SatResult::Unsatisfiable));
            let tautology = format!("{} | ~{}", name, name);
            prop_assert!(matches!(solve(&tautology), Ok(SatResult::Satisfiable(_))));
        }
    }
}
