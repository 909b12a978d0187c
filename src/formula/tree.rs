use std::fmt;

use crate::formula::error::FormulaError;

/// A structural formula split at its parentheses.
///
/// `CH3C(CH2CH3)CH3` becomes
/// `Branch[Leaf("CH3C"), Branch[Leaf("CH2CH3")], Leaf("CH3")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaTree {
    Leaf(String),
    Branch(Vec<FormulaTree>),
}

impl FormulaTree {
    /// Leaf segments in reading order, ignoring nesting.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            FormulaTree::Leaf(text) => out.push(text),
            FormulaTree::Branch(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Deepest bracket nesting below this node.
    pub fn depth(&self) -> usize {
        match self {
            FormulaTree::Leaf(_) => 0,
            FormulaTree::Branch(children) => {
                1 + children.iter().map(FormulaTree::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Renders the bracketed form; the root branch carries no brackets.
impl fmt::Display for FormulaTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_children(children: &[FormulaTree], f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for child in children {
                match child {
                    FormulaTree::Leaf(text) => f.write_str(text)?,
                    FormulaTree::Branch(inner) => {
                        f.write_str("(")?;
                        write_children(inner, f)?;
                        f.write_str(")")?;
                    }
                }
            }
            Ok(())
        }

        match self {
            FormulaTree::Leaf(text) => f.write_str(text),
            FormulaTree::Branch(children) => write_children(children, f),
        }
    }
}

/// Parse a structural formula with parenthesized branches into a tree.
///
/// Text between brackets becomes leaves; empty stretches produce none.
pub fn parse_structural_formula_tree(input: &str) -> Result<FormulaTree, FormulaError> {
    let mut stack: Vec<(Vec<FormulaTree>, usize)> = Vec::new();
    let mut current: Vec<FormulaTree> = Vec::new();
    let mut text = String::new();

    for (pos, ch) in input.char_indices() {
        match ch {
            '(' => {
                flush_leaf(&mut current, &mut text);
                stack.push((std::mem::take(&mut current), pos));
            }
            ')' => {
                flush_leaf(&mut current, &mut text);
                let (mut parent, _) = stack.pop().ok_or(FormulaError::UnbalancedBrackets { pos })?;
                parent.push(FormulaTree::Branch(std::mem::take(&mut current)));
                current = parent;
            }
            _ => text.push(ch),
        }
    }
    flush_leaf(&mut current, &mut text);

    if let Some((_, pos)) = stack.pop() {
        return Err(FormulaError::UnbalancedBrackets { pos });
    }

    Ok(FormulaTree::Branch(current))
}

fn flush_leaf(segment: &mut Vec<FormulaTree>, text: &mut String) {
    if !text.is_empty() {
        segment.push(FormulaTree::Leaf(std::mem::take(text)));
    }
}
