use stable_groups::protocol::{format_output, parse_input};
use stable_groups::{
    solve_exhaustive, solve_greedy, ExhaustiveSolver, GreedySolver, GroupSolver, GroupingError,
};

const SEQ: [i64; 5] = [1, 3, 20, 21, 40];

fn check(seq: &[i64], k: i64, x: i64, expected: usize) {
    assert_eq!(solve_greedy(seq, k, x).unwrap(), expected, "greedy");
    assert_eq!(solve_exhaustive(seq, k, x).unwrap(), expected, "exhaustive");
}

#[test]
fn single_element() {
    check(&[7], 5, 3, 1);
}

#[test]
fn zero_budget_two_big_gaps() {
    check(&SEQ, 0, 5, 3);
}

#[test]
fn budget_bridges_one_of_two_tied_gaps() {
    check(&SEQ, 3, 5, 2);
    check(&SEQ, 5, 5, 2);
}

#[test]
fn budget_bridges_both_gaps() {
    check(&SEQ, 6, 5, 1);
    check(&SEQ, 1_000, 5, 1);
}

#[test]
fn duplicates_never_split() {
    check(&[1, 1, 1], 100, 1, 1);
}

#[test]
fn empty_sequence() {
    check(&[], 0, 1, 1);
}

#[test]
fn rejects_invalid_arguments() {
    for (k, x) in [(0, 0), (0, -3), (-1, 5)] {
        assert!(matches!(
            solve_greedy(&SEQ, k, x),
            Err(GroupingError::InvalidArgument(_))
        ));
        assert!(matches!(
            solve_exhaustive(&SEQ, k, x),
            Err(GroupingError::InvalidArgument(_))
        ));
    }
}

#[test]
fn exhaustive_ceiling_only_limits_exhaustive() {
    let seq: Vec<i64> = (0..40).map(|i| i * 3).collect();
    assert_eq!(solve_greedy(&seq, 0, 1).unwrap(), 40);
    assert_eq!(
        solve_exhaustive(&seq, 0, 1),
        Err(GroupingError::GapLimitExceeded { gaps: 39, limit: 24 })
    );
}

#[test]
fn protocol_end_to_end() {
    let text = "5 3 5\n40 21 1 20 3\n";
    let instance = parse_input(text).unwrap().into_instance().unwrap();
    let greedy = GreedySolver.min_groups(&instance).unwrap();
    let exhaustive = ExhaustiveSolver::default().min_groups(&instance).unwrap();
    assert_eq!(greedy, exhaustive);
    assert_eq!(format_output(greedy), "2\n");
}
