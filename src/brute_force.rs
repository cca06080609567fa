use crate::*;

// Exhaustive enumeration for use as a proptest oracle
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> bool {
    let num_literals = f.num_literals();
    assert!(num_literals <= 15); // just for safety

    fn assignment_for(assignment: u32, x: usize) -> bool {
        assignment & (1 << x) != 0
    }

    for assignment in 0..2u32.pow(num_literals as u32) {
        let values = (0..num_literals).map(|x| assignment_for(assignment, x)).collect();
        let value = evaluate(f, &Assignment::fixed(values), &mut Stats::default())
            .expect("brute force needs a well-formed formula");
        if value {
            return true;
        }
    }
    // no assignment is valid
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_sat() {
        assert!(solve_brute_force(&Formula::parse("a & ~b")));
        assert!(solve_brute_force(&Formula::parse("(a | b) & ~a")));
        assert!(solve_brute_force(&Formula::parse("a & b & c & d")));
    }

    #[test]
    fn brute_force_unsat() {
        assert!(!solve_brute_force(&Formula::parse("x & ~x")));
        assert!(!solve_brute_force(&Formula::parse("(a | b) & ~a & ~b")));
    }

    #[test]
    fn brute_force_agrees_with_solver() {
        for text in &["a & ~b", "x & ~x", "mike & sally | ~peter", "(p | q) & ~p & ~q"] {
            let f = Formula::parse(text);
            let solved = Solver::new(f.clone()).solve().unwrap();
            assert_eq!(solved.is_satisfiable(), solve_brute_force(&f));
        }
    }
}
