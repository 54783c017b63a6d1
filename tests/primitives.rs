use push_swap::{Op, Stacks, UnknownOp};

fn a_of(s: &Stacks) -> Vec<i32> {
    s.a().iter().copied().collect()
}

fn b_of(s: &Stacks) -> Vec<i32> {
    s.b().iter().copied().collect()
}

#[test]
fn test_op_names_parse_back() {
    let names: Vec<&str> = Op::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(
        names,
        ["sa", "sb", "ss", "pa", "pb", "ra", "rb", "rr", "rra", "rrb", "rrr"]
    );
    for op in Op::ALL {
        assert_eq!(op.name().parse::<Op>(), Ok(op));
        assert_eq!(op.to_string(), op.name());
    }
}

#[test]
fn test_op_parse_is_strict() {
    for bad in ["", "SA", " sa", "sa ", "rrrr", "p a", "pa\n"] {
        assert_eq!(bad.parse::<Op>(), Err(UnknownOp(bad.to_owned())));
    }
}

#[test]
fn test_single_stack_primitives() {
    let mut s = Stacks::new(&[1, 2, 3, 4]);
    s.sa();
    assert_eq!(a_of(&s), [2, 1, 3, 4]);
    s.ra();
    assert_eq!(a_of(&s), [1, 3, 4, 2]);
    s.rra();
    assert_eq!(a_of(&s), [2, 1, 3, 4]);
    s.pb();
    s.pb();
    assert_eq!(a_of(&s), [3, 4]);
    // B's top is the last element pushed
    assert_eq!(b_of(&s), [1, 2]);
    s.sb();
    assert_eq!(b_of(&s), [2, 1]);
    s.rb();
    assert_eq!(b_of(&s), [1, 2]);
    s.rrb();
    assert_eq!(b_of(&s), [2, 1]);
    s.pa();
    assert_eq!(a_of(&s), [2, 3, 4]);
    assert_eq!(b_of(&s), [1]);
    assert_eq!(s.len(), 4);
    assert_eq!(
        s.log(),
        [
            Op::Sa, Op::Ra, Op::Rra, Op::Pb, Op::Pb, Op::Sb, Op::Rb, Op::Rrb, Op::Pa
        ]
    );
}

#[test]
fn test_combined_primitives_log_once() {
    let mut s = Stacks::new(&[1, 2, 3, 4, 5, 6]);
    s.pb();
    s.pb();
    s.pb();
    // A = 4 5 6, B = 3 2 1
    s.ss();
    assert_eq!(a_of(&s), [5, 4, 6]);
    assert_eq!(b_of(&s), [2, 3, 1]);
    s.rr();
    assert_eq!(a_of(&s), [4, 6, 5]);
    assert_eq!(b_of(&s), [3, 1, 2]);
    s.rrr();
    assert_eq!(a_of(&s), [5, 4, 6]);
    assert_eq!(b_of(&s), [2, 3, 1]);
    assert_eq!(s.log(), [Op::Pb, Op::Pb, Op::Pb, Op::Ss, Op::Rr, Op::Rrr]);
}

#[test]
fn test_guarded_noops_still_log() {
    let mut s = Stacks::new(&[42]);
    for op in [Op::Sa, Op::Ra, Op::Rra, Op::Sb, Op::Rb, Op::Rrb, Op::Ss, Op::Rr, Op::Rrr, Op::Pa] {
        s.apply(op);
        assert_eq!(a_of(&s), [42], "{op} changed A");
        assert!(s.b().is_empty(), "{op} changed B");
    }
    assert_eq!(s.log().len(), 10);

    let mut empty = Stacks::new(&[]);
    empty.pb();
    empty.pa();
    empty.sa();
    assert!(empty.is_empty());
    assert_eq!(empty.log(), [Op::Pb, Op::Pa, Op::Sa]);
}

#[test]
fn test_combined_with_one_side_guarded() {
    let mut s = Stacks::new(&[3, 1, 2]);
    s.pb();
    // B has one element: only A moves
    s.ss();
    assert_eq!(a_of(&s), [2, 1]);
    assert_eq!(b_of(&s), [3]);
    s.rr();
    assert_eq!(a_of(&s), [1, 2]);
    assert_eq!(b_of(&s), [3]);
    assert_eq!(s.log().len(), 3);
}

#[test]
fn test_sortedness() {
    assert!(Stacks::new(&[]).is_a_sorted());
    assert!(Stacks::new(&[7]).is_solved());
    assert!(Stacks::new(&[-3, 0, 9]).is_solved());
    assert!(!Stacks::new(&[0, -3, 9]).is_a_sorted());

    let mut s = Stacks::new(&[1, 2, 3]);
    s.pb();
    assert!(s.is_a_sorted());
    assert!(!s.is_solved());
}
