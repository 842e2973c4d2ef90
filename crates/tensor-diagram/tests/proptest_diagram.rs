//! Property tests over randomly built diagrams.

use std::collections::HashSet;

use proptest::prelude::*;

use tensor_diagram::{
    Diagram, IndexSides, Placement, TensorOpts,
    geometry::{GridPoint, Position},
    identifier::Id,
};

// ===================
// Strategies
// ===================

/// Index names drawn from a small alphabet so names collide across tensors.
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]", 0..4)
}

fn sides_strategy() -> impl Strategy<Value = [Vec<String>; 4]> {
    (
        names_strategy(),
        names_strategy(),
        names_strategy(),
        names_strategy(),
    )
        .prop_map(|(left, right, up, down)| [left, right, up, down])
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Right),
        Just(Placement::Down),
        (-5i32..5, -5i32..5).prop_map(|(x, y)| Placement::At(GridPoint::new(x, y))),
    ]
}

fn build(sides: &[[Vec<String>; 4]], placements: &[Placement]) -> Diagram {
    let mut diagram = Diagram::new();
    for (i, [left, right, up, down]) in sides.iter().enumerate() {
        let placement = if i == 0 {
            Placement::Start
        } else {
            placements[i % placements.len()]
        };
        let sides = IndexSides::new()
            .left(left.iter().map(String::as_str))
            .right(right.iter().map(String::as_str))
            .up(up.iter().map(String::as_str))
            .down(down.iter().map(String::as_str));
        diagram
            .add_tensor(format!("T{i}"), placement, sides, TensorOpts::default())
            .expect("first tensor is placed at the start");
    }
    diagram
}

/// Sums over every distinct name, giving dots a fixed cell when needed.
fn sum_everything(diagram: &mut Diagram) {
    let mut names = Vec::new();
    for tensor in diagram.tensors() {
        for index in tensor.indices() {
            if !names.contains(&index.name()) {
                names.push(index.name());
            }
        }
    }
    for name in names {
        // Names renamed by an earlier star summation may no longer exist
        let _ = diagram.add_summation(name, Some(GridPoint::new(0, 5)));
    }
}

fn all_names(diagram: &Diagram) -> HashSet<Id> {
    diagram
        .tensors()
        .iter()
        .flat_map(|tensor| tensor.indices().iter().map(|index| index.name()))
        .collect()
}

// ===================
// Property Test Functions
// ===================

/// Every side of every tensor has orders exactly 0..count.
fn check_side_orders_are_dense(diagram: &Diagram) -> Result<(), TestCaseError> {
    for tensor in diagram.tensors() {
        for side in Position::ALL {
            let orders: Vec<usize> = tensor.indices_on(side).map(|index| index.order()).collect();
            let expected: Vec<usize> = (0..orders.len()).collect();
            prop_assert_eq!(orders, expected, "tensor {} side {}", tensor.name(), side);
        }
    }
    Ok(())
}

/// Indices are stored as the left block, then right, up and down.
fn check_side_blocks_in_order(
    diagram: &Diagram,
    sides: &[[Vec<String>; 4]],
) -> Result<(), TestCaseError> {
    for (tensor, names) in diagram.tensors().iter().zip(sides) {
        let expected: Vec<(String, Position)> = Position::ALL
            .into_iter()
            .zip(names)
            .flat_map(|(side, names)| names.iter().map(move |name| (name.clone(), side)))
            .collect();
        let actual: Vec<(String, Position)> = tensor
            .indices()
            .iter()
            .map(|index| (index.name().to_string(), index.pos()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
    Ok(())
}

/// Relative placements land one cell right of or below the previous tensor.
fn check_relative_placement(
    diagram: &Diagram,
    placements: &[Placement],
) -> Result<(), TestCaseError> {
    let tensors = diagram.tensors();
    for i in 1..tensors.len() {
        let previous = tensors[i - 1].position();
        let expected = match placements[i % placements.len()] {
            Placement::Right => previous.offset(1, 0).unwrap(),
            Placement::Down => previous.offset(0, 1).unwrap(),
            Placement::At(point) => point,
            Placement::Start => GridPoint::default(),
        };
        prop_assert_eq!(tensors[i].position(), expected);
    }
    Ok(())
}

/// Loose names never include a contracted name, and together the two
/// cover every index name of the diagram.
fn check_loose_and_contracted_partition(diagram: &Diagram) -> Result<(), TestCaseError> {
    let contracted: HashSet<Id> = diagram
        .contractions()
        .iter()
        .map(|contraction| contraction.name())
        .collect();
    let loose: HashSet<Id> = diagram
        .loose_indices()
        .iter()
        .flatten()
        .map(|index| index.name())
        .collect();

    prop_assert!(loose.is_disjoint(&contracted));

    let names = all_names(diagram);
    let covered: HashSet<Id> = loose.union(&contracted).copied().collect();
    prop_assert!(names.is_subset(&covered));
    Ok(())
}

fn check_reads_are_idempotent(diagram: &Diagram) -> Result<(), TestCaseError> {
    prop_assert_eq!(diagram.to_formula_einsum(), diagram.to_formula_einsum());
    prop_assert_eq!(diagram.to_formula_latex(), diagram.to_formula_latex());
    prop_assert_eq!(diagram.loose_indices(), diagram.loose_indices());
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn side_orders_are_dense(
        sides in prop::collection::vec(sides_strategy(), 1..6),
        placements in prop::collection::vec(placement_strategy(), 1..6),
    ) {
        let mut diagram = build(&sides, &placements);
        check_side_orders_are_dense(&diagram)?;
        sum_everything(&mut diagram);
        check_side_orders_are_dense(&diagram)?;
    }

    #[test]
    fn side_blocks_in_order(
        sides in prop::collection::vec(sides_strategy(), 1..6),
        placements in prop::collection::vec(placement_strategy(), 1..6),
    ) {
        let diagram = build(&sides, &placements);
        check_side_blocks_in_order(&diagram, &sides)?;
    }

    #[test]
    fn relative_placement(
        sides in prop::collection::vec(sides_strategy(), 1..6),
        placements in prop::collection::vec(placement_strategy(), 1..6),
    ) {
        let diagram = build(&sides, &placements);
        check_relative_placement(&diagram, &placements)?;
    }

    #[test]
    fn loose_and_contracted_partition(
        sides in prop::collection::vec(sides_strategy(), 1..6),
        placements in prop::collection::vec(placement_strategy(), 1..6),
    ) {
        let mut diagram = build(&sides, &placements);
        check_loose_and_contracted_partition(&diagram)?;
        sum_everything(&mut diagram);
        check_loose_and_contracted_partition(&diagram)?;
        check_reads_are_idempotent(&diagram)?;
    }
}
