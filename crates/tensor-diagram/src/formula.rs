//! Formula derivation.
//!
//! Read-only views of a diagram as formulas. The einsum string and the LaTeX
//! string are consumed by other tools, so their grammar is fixed:
//!
//! ```text
//! einsum('<operands>-><free>', <tensor names>)
//! \sum_{<contracted names>} <Name_{indices}> ...
//! ```
//!
//! Names are emitted verbatim.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::trace;

use tensor_diagram_core::{identifier::Id, semantic::Index};

use crate::Diagram;

impl Diagram {
    /// Names appearing in any recorded contraction.
    fn contracted_names(&self) -> HashSet<Id> {
        self.contractions()
            .iter()
            .map(|contraction| contraction.name())
            .collect()
    }

    /// Uncontracted indices of every tensor, in diagram order.
    ///
    /// An index is loose when its name appears in no contraction. Each inner
    /// list keeps its tensor's index order.
    pub fn loose_indices(&self) -> Vec<Vec<Index>> {
        let contracted = self.contracted_names();
        self.tensors()
            .iter()
            .map(|tensor| {
                tensor
                    .indices()
                    .iter()
                    .filter(|index| !contracted.contains(&index.name()))
                    .copied()
                    .collect()
            })
            .collect()
    }

    /// Einsum notation for the whole diagram.
    ///
    /// Operands are the concatenated index names of each tensor. The output
    /// lists every uncontracted name once, in first-encounter order across
    /// the diagram.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tensor_diagram::{Diagram, IndexSides, Placement, TensorOpts};
    /// let mut diagram = Diagram::new();
    /// diagram
    ///     .add_tensor("A", Placement::Start, IndexSides::new().left(["i"]), TensorOpts::default())
    ///     .unwrap();
    ///
    /// assert_eq!(diagram.to_formula_einsum(), "einsum('i->i', A)");
    /// ```
    pub fn to_formula_einsum(&self) -> String {
        let contracted = self.contracted_names();

        let mut free = IndexSet::new();
        let mut operands = Vec::with_capacity(self.tensors().len());
        for tensor in self.tensors() {
            let mut operand = String::new();
            for index in tensor.indices() {
                operand.push_str(&index.name().to_string());
                if !contracted.contains(&index.name()) {
                    free.insert(index.name());
                }
            }
            operands.push(operand);
        }

        let output: String = free.iter().map(Id::to_string).collect();
        let names: Vec<String> = self
            .tensors()
            .iter()
            .map(|tensor| tensor.name().to_string())
            .collect();

        let formula = format!(
            "einsum('{}->{}', {})",
            operands.join(","),
            output,
            names.join(", ")
        );
        trace!(formula; "Derived einsum formula");
        formula
    }

    /// LaTeX summation formula for the whole diagram.
    ///
    /// The summation subscript concatenates contraction names in recording
    /// order, followed by one `Name_{indices}` factor per tensor.
    pub fn to_formula_latex(&self) -> String {
        let summed: String = self
            .contractions()
            .iter()
            .map(|contraction| contraction.name().to_string())
            .collect();

        let factors: Vec<String> = self
            .tensors()
            .iter()
            .map(|tensor| {
                let indices: String = tensor
                    .indices()
                    .iter()
                    .map(|index| index.name().to_string())
                    .collect();
                format!("{}_{{{}}}", tensor.name(), indices)
            })
            .collect();

        let formula = format!("\\sum_{{{}}} {}", summed, factors.join(" "));
        trace!(formula; "Derived LaTeX formula");
        formula
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexSides, Placement, TensorOpts, geometry::GridPoint};

    fn matrix_product() -> Diagram {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor(
                "A",
                Placement::Start,
                IndexSides::new().left(["i"]).right(["j"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_tensor(
                "B",
                Placement::Right,
                IndexSides::new().left(["j"]).right(["k"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_summation("j", None)
            .unwrap();
        diagram
    }

    fn names(indices: &[Index]) -> Vec<String> {
        indices.iter().map(|index| index.name().to_string()).collect()
    }

    #[test]
    fn test_einsum_matrix_product() {
        assert_eq!(
            matrix_product().to_formula_einsum(),
            "einsum('ij,jk->ik', A, B)"
        );
    }

    #[test]
    fn test_latex_matrix_product() {
        assert_eq!(
            matrix_product().to_formula_latex(),
            r"\sum_{j} A_{ij} B_{jk}"
        );
    }

    #[test]
    fn test_loose_indices_matrix_product() {
        let loose = matrix_product().loose_indices();

        assert_eq!(loose.len(), 2);
        assert_eq!(names(&loose[0]), vec!["i"]);
        assert_eq!(names(&loose[1]), vec!["k"]);
    }

    #[test]
    fn test_einsum_free_names_are_deduplicated_across_tensors() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor(
                "A",
                Placement::Start,
                IndexSides::new().up(["b", "a"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_tensor(
                "B",
                Placement::Right,
                IndexSides::new().up(["a", "c"]),
                TensorOpts::default(),
            )
            .unwrap();

        assert_eq!(diagram.to_formula_einsum(), "einsum('ba,ac->bac', A, B)");
        assert_eq!(diagram.to_formula_latex(), r"\sum_{} A_{ba} B_{ac}");
    }

    #[test]
    fn test_formulas_of_empty_diagram() {
        let diagram = Diagram::new();

        assert_eq!(diagram.to_formula_einsum(), "einsum('->', )");
        assert_eq!(diagram.to_formula_latex(), r"\sum_{} ");
        assert!(diagram.loose_indices().is_empty());
    }

    #[test]
    fn test_trace_formulas() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor(
                "M",
                Placement::Start,
                IndexSides::new().up(["i"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_summation("i", None)
            .unwrap();

        assert_eq!(diagram.to_formula_einsum(), "einsum('i,i->', M, )");
        assert_eq!(diagram.to_formula_latex(), r"\sum_{i} M_{i} _{i}");
    }

    #[test]
    fn test_star_formulas_use_renamed_indices() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor(
                "A",
                Placement::Start,
                IndexSides::new().left(["a"]).right(["k"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_tensor(
                "B",
                Placement::Right,
                IndexSides::new().left(["k"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_tensor(
                "C",
                Placement::Down,
                IndexSides::new().up(["k"]),
                TensorOpts::default(),
            )
            .unwrap()
            .add_summation("k", Some(GridPoint::new(1, 1)))
            .unwrap();

        assert_eq!(
            diagram.to_formula_einsum(),
            "einsum('ak0,k1,k2,k0k1k2->a', A, B, C, )"
        );
        assert_eq!(names(&diagram.loose_indices()[0]), vec!["a"]);
        assert!(diagram.loose_indices()[3].is_empty());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let diagram = matrix_product();

        assert_eq!(diagram.to_formula_einsum(), diagram.to_formula_einsum());
        assert_eq!(diagram.to_formula_latex(), diagram.to_formula_latex());
        assert_eq!(diagram.loose_indices(), diagram.loose_indices());
    }
}
