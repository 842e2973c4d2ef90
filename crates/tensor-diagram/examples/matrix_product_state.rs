//! Example: Building a diagram with the builder API
//!
//! Builds the norm of a three-site matrix product state, then prints the
//! formulas and the layout a renderer would read.

use tensor_diagram::{
    Diagram, IndexSides, Placement, TensorOpts,
    geometry::{GridPoint, Position},
    semantic::Line,
    shape::Shape,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = Diagram::new();

    // Ket row
    let ket = TensorOpts::default();
    diagram
        .add_tensor(
            "A",
            Placement::Start,
            IndexSides::new().right(["a"]).down(["s1"]),
            ket,
        )?
        .add_tensor(
            "B",
            Placement::Right,
            IndexSides::new().left(["a"]).right(["b"]).down(["s2"]),
            ket,
        )?
        .add_tensor(
            "C",
            Placement::Right,
            IndexSides::new().left(["b"]).down(["s3"]),
            ket,
        )?;

    // Bra row, mirrored below
    let bra = TensorOpts::new().with_label_pos(Position::Down);
    diagram
        .add_tensor("A*", (0, 2), IndexSides::new().up(["s1"]).right(["c"]), bra)?
        .add_tensor(
            "B*",
            Placement::Right,
            IndexSides::new().up(["s2"]).left(["c"]).right(["d"]),
            bra,
        )?
        .add_tensor(
            "C*",
            Placement::Right,
            IndexSides::new().up(["s3"]).left(["d"]),
            bra,
        )?;

    for bond in ["a", "b", "c", "d", "s1", "s2", "s3"] {
        diagram.add_summation(bond, None)?;
    }

    // A cut between the first and second site
    diagram
        .add_line(Line::new(GridPoint::new(0, -1), GridPoint::new(0, 3)).with_label("cut"))
        .set_size(360.0, 240.0);

    println!("einsum: {}", diagram.to_formula_einsum());
    println!("LaTeX:  {}", diagram.to_formula_latex());

    println!("\nTensors:");
    for tensor in diagram.tensors() {
        let shape = if tensor.shape() == Shape::Rectangle {
            format!("{} (height {})", tensor.shape(), tensor.rect_height())
        } else {
            tensor.shape().to_string()
        };
        println!(
            "  {:>3} at ({}, {}) {}",
            tensor.name(),
            tensor.x(),
            tensor.y(),
            shape
        );
    }

    println!("\nContractions:");
    for contraction in diagram.contractions() {
        if let Some((source, target)) = diagram.contraction_endpoints(contraction) {
            println!(
                "  {} -- {} over {}",
                source.name(),
                target.name(),
                contraction.name()
            );
        }
    }

    Ok(())
}
