//! Plain-text and LaTeX renderings of term tables.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::term::{TermSymbol, TermTable};

/// Enumerated type for the renderings of a [`TermTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermTableStyle {
    /// Right-aligned columns of raw counts.
    #[default]
    Plain,

    /// A LaTeX `tabular` with one term symbol per nonzero cell.
    Latex,

    /// A LaTeX `tabular` with each term symbol wrapped in the `\O` degeneracy mark.
    LatexCrossed,
}

impl fmt::Display for TermTableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermTableStyle::Plain => write!(f, "plain"),
            TermTableStyle::Latex => write!(f, "latex"),
            TermTableStyle::LatexCrossed => write!(f, "latex-crossed"),
        }
    }
}

impl FromStr for TermTableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "table" => Ok(TermTableStyle::Plain),
            "latex" => Ok(TermTableStyle::Latex),
            "latex-crossed" => Ok(TermTableStyle::LatexCrossed),
            _ => Err(format!("Unknown term table style `{s}`.")),
        }
    }
}

impl TermTable {
    /// Renders the table, highest multiplicity first.
    ///
    /// # Arguments
    ///
    /// * `style` - The rendering style.
    pub fn format(&self, style: TermTableStyle) -> String {
        match style {
            TermTableStyle::Plain => self.format_plain(),
            TermTableStyle::Latex => self.format_latex(false),
            TermTableStyle::LatexCrossed => self.format_latex(true),
        }
    }

    /// Lists the terms of the table on one line, *e.g.* `3P, 1D, 1S` or `4F, 4P, 2H, ..., 2×2D`.
    pub fn format_terms(&self) -> String {
        self.terms()
            .iter()
            .map(|(term, count)| {
                if *count == 1 {
                    term.to_string()
                } else {
                    format!("{count}×{term}")
                }
            })
            .join(", ")
    }

    fn format_plain(&self) -> String {
        let header = format!(
            "M\\L{}",
            (0..self.width()).map(|am| format!("{am:>5}")).join("")
        );
        let rows = self.multiplicities().map(|mult| {
            let counts = (0..=self.max_am())
                .map(|am| format!("{:>5}", self.get(mult, am)))
                .join("");
            format!("{mult:>3}{counts}")
        });
        std::iter::once(header).chain(rows).join("\n")
    }

    fn format_latex(&self, crossed: bool) -> String {
        let mut out = format!("\\begin{{tabular}}{{ r | {}}} \n", "c ".repeat(self.width()));
        out += &format!(
            "M\\L & {} \\hl \n",
            (0..self.width()).map(|am| format!("{am:>10}")).join(" & ")
        );
        for mult in self.multiplicities() {
            let cells = (0..=self.max_am())
                .map(|am| {
                    let term = TermSymbol::new(
                        self.kind(),
                        mult,
                        i32::try_from(am).expect("Unable to convert an angular momentum to `i32`."),
                    );
                    let cell = latex_cell(&term, self.get(mult, am), crossed);
                    format!("{cell:>10}")
                })
                .join(" & ");
            out += &format!("{mult:>3} & {cells} \\\\ \n");
        }
        out += "\\end{tabular}";
        out
    }
}

/// Renders one LaTeX cell: empty for a zero count, the term symbol for a count of one, and the
/// term symbol prefixed by its count otherwise.
fn latex_cell(term: &TermSymbol, count: i64, crossed: bool) -> String {
    let text = match count {
        0 => return String::new(),
        1 => term.latex(),
        _ => format!("{count}{}", term.latex()),
    };
    if crossed {
        format!("\\O{{{text}}}")
    } else {
        text
    }
}
