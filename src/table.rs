//! # Multiplication Tables
//!
//! Rendering of the composition table of a [`PermutationGroup`], as a padded
//! text grid or as a LaTeX `tabular`. Presentation only: the table holds the
//! rendered strings of the products, not the group itself.

use std::fmt;

use crate::group::PermutationGroup;

/// The composition table of a finite permutation group.
///
/// Rows and columns run over the members in discovery order. The cell at
/// `(row, column)` holds `row ∘ column`, the column element being applied
/// first, matching [`Permutation::compose`](crate::permutation::Permutation::compose).
#[derive(Debug, Clone)]
pub struct MultiplicationTable {
    labels: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl MultiplicationTable {
    /// Builds the table of `group`.
    pub fn new(group: &PermutationGroup) -> Self {
        let labels: Vec<String> = group.iter().map(|member| member.to_string()).collect();
        let cells = group
            .iter()
            .map(|row| {
                group
                    .iter()
                    .map(|column| row.compose_unchecked(column).to_string())
                    .collect()
            })
            .collect();
        MultiplicationTable { labels, cells }
    }

    /// The number of rows (and columns): the order of the group.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// The row and column labels in discovery order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The rendered product at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    /// Renders the table as a LaTeX `tabular` with the column labels above a
    /// `\cline` rule.
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        out.push_str("\\noindent\\begin{tabular}{c |");
        for _ in &self.labels {
            out.push_str(" c");
        }
        out.push_str("}\n");
        out.push_str(&format!(" & {} \\\\\n", self.labels.join(" & ")));
        out.push_str(&format!("\\cline{{1-{}}}\n", self.size() + 1));
        for (label, row) in self.labels.iter().zip(&self.cells) {
            out.push_str(&format!("{label} & {} \\\\\n", row.join(" & ")));
        }
        out.push_str("\\end{tabular}");
        out
    }
}

impl fmt::Display for MultiplicationTable {
    /// Writes the padded text grid: a header row of column labels, a rule,
    /// then one row per member.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .chain(self.cells.iter().flatten())
            .map(String::len)
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(self.size() + 2);
        let mut header = format!("{:width$} |", "");
        for label in &self.labels {
            header.push(' ');
            header.push_str(&format!("{label:width$}"));
        }
        lines.push(header.trim_end().to_owned());
        lines.push(format!(
            "{}-+{}",
            "-".repeat(width),
            "-".repeat((width + 1) * self.size())
        ));
        for (label, row) in self.labels.iter().zip(&self.cells) {
            let mut line = format!("{label:width$} |");
            for cell in row {
                line.push(' ');
                line.push_str(&format!("{cell:width$}"));
            }
            lines.push(line.trim_end().to_owned());
        }
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic_group_of_order_three() -> PermutationGroup {
        PermutationGroup::generate_from_notation(&["(1 2 3)"]).unwrap()
    }

    #[test]
    fn test_text_table() {
        let table = MultiplicationTable::new(&cyclic_group_of_order_three());
        insta::assert_snapshot!(table, @r"
                  | (1 2 3)   (1 3 2)   (1)(2)(3)
        ----------+------------------------------
        (1 2 3)   | (1 3 2)   (1)(2)(3) (1 2 3)
        (1 3 2)   | (1)(2)(3) (1 2 3)   (1 3 2)
        (1)(2)(3) | (1 2 3)   (1 3 2)   (1)(2)(3)
        ");
    }

    #[test]
    fn test_latex_table() {
        let table = MultiplicationTable::new(&cyclic_group_of_order_three());
        insta::assert_snapshot!(table.to_latex(), @r"
        \noindent\begin{tabular}{c | c c c}
         & (1 2 3) & (1 3 2) & (1)(2)(3) \\
        \cline{1-4}
        (1 2 3) & (1 3 2) & (1)(2)(3) & (1 2 3) \\
        (1 3 2) & (1)(2)(3) & (1 2 3) & (1 3 2) \\
        (1)(2)(3) & (1 2 3) & (1 3 2) & (1)(2)(3) \\
        \end{tabular}
        ");
    }

    #[test]
    fn test_identity_row_and_column() {
        let table = MultiplicationTable::new(&cyclic_group_of_order_three());
        // The identity is the last member discovered; its row and column
        // just repeat the labels.
        assert_eq!(table.cells[2], table.labels);
        for (row, label) in table.cells.iter().zip(&table.labels) {
            assert_eq!(&row[2], label);
        }
        assert_eq!(table.cell(0, 0), Some("(1 3 2)"));
        assert_eq!(table.cell(3, 0), None);
    }

    #[test]
    fn test_dihedral_table_is_a_latin_square() {
        let d5 =
            PermutationGroup::generate_from_notation(&["(1 2 3 4 5)", "(1)(2 5)(3 4)"]).unwrap();
        let table = MultiplicationTable::new(&d5);
        assert_eq!(table.size(), 10);

        let mut expected = table.labels.clone();
        expected.sort();
        for row in &table.cells {
            let mut sorted = row.clone();
            sorted.sort();
            assert_eq!(sorted, expected);
        }
        for column in 0..table.size() {
            let mut sorted: Vec<String> =
                table.cells.iter().map(|row| row[column].clone()).collect();
            sorted.sort();
            assert_eq!(sorted, expected);
        }
    }
}
