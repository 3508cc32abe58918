//! Static taxonomy trees: integer codes at each level mapped to names.
//!
//! A [`Taxonomy`] is a forest of [`TaxonNode`]s whose depth equals the number
//! of classification fields of its format. Trees are `static` items built
//! from `const fn` constructors and `&'static` slices, so there is no way to
//! mutate one after the program starts.
//!
//! Two read operations are provided:
//!
//! - [`Taxonomy::resolve`] searches for one classification, level by level,
//!   by exact integer match.
//! - [`Taxonomy::leaves`] walks every node and yields each full-depth path.

use std::collections::HashSet;

/// Rendered name of a classification that has no taxonomy entry.
pub const INVALID_NAME: &str = "invalid";

/// Separator between level names in a rendered path.
pub const PATH_SEPARATOR: &str = ".";

/// One named code at one level of a taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonNode {
    pub value: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub children: &'static [TaxonNode],
}

impl TaxonNode {
    /// A node at the last level.
    pub const fn leaf(value: u32, name: &'static str, description: &'static str) -> Self {
        Self {
            value,
            name,
            description,
            children: &[],
        }
    }

    /// A node with children at the next level.
    pub const fn branch(
        value: u32,
        name: &'static str,
        description: &'static str,
        children: &'static [TaxonNode],
    ) -> Self {
        Self {
            value,
            name,
            description,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A per-format taxonomy forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxonomy {
    /// Level names, root level first (e.g. `["Class", "ErrorType"]`).
    pub levels: &'static [&'static str],
    pub roots: &'static [TaxonNode],
}

/// A root-to-leaf path through a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonPath {
    pub nodes: Vec<&'static TaxonNode>,
}

impl TaxonPath {
    /// Integer codes along the path: the classification's field tuple.
    pub fn values(&self) -> Vec<u32> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|n| n.name).collect()
    }

    /// Dotted name, e.g. `backend.handler.users.validation_error`.
    pub fn name(&self) -> String {
        self.names().join(PATH_SEPARATOR)
    }

    /// Description of the deepest node.
    pub fn description(&self) -> &'static str {
        self.nodes.last().map_or("", |n| n.description)
    }
}

impl Taxonomy {
    /// Number of levels; equals the field count of the owning format.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Find the node chain matching `path` exactly, one level at a time.
    ///
    /// Returns `None` as soon as a level has no match, and for paths whose
    /// length is not the taxonomy depth.
    pub fn resolve(&self, path: &[u32]) -> Option<TaxonPath> {
        if path.len() != self.depth() {
            return None;
        }
        let mut siblings = self.roots;
        let mut nodes = Vec::with_capacity(path.len());
        for &value in path {
            let node = siblings.iter().find(|n| n.value == value)?;
            nodes.push(node);
            siblings = node.children;
        }
        Some(TaxonPath { nodes })
    }

    /// Dotted name of `path`, or [`INVALID_NAME`] when it does not resolve.
    pub fn render_name(&self, path: &[u32]) -> String {
        self.resolve(path)
            .map(|p| p.name())
            .unwrap_or_else(|| INVALID_NAME.to_string())
    }

    /// Every full-depth path, in depth-first tree order.
    pub fn leaves(&self) -> Vec<TaxonPath> {
        let mut out = Vec::new();
        let mut stack = Vec::with_capacity(self.depth());
        self.walk(self.roots, &mut stack, &mut out);
        out
    }

    fn walk(
        &self,
        siblings: &'static [TaxonNode],
        stack: &mut Vec<&'static TaxonNode>,
        out: &mut Vec<TaxonPath>,
    ) {
        for node in siblings {
            stack.push(node);
            if stack.len() == self.depth() {
                out.push(TaxonPath {
                    nodes: stack.clone(),
                });
            } else {
                self.walk(node.children, stack, out);
            }
            stack.pop();
        }
    }

    /// Authoring defects: sibling nodes sharing a code, and branches that
    /// stop short of (or extend past) the taxonomy depth.
    pub fn defects(&self) -> Vec<String> {
        let mut defects = Vec::new();
        let mut prefix = Vec::new();
        self.inspect(self.roots, &mut prefix, &mut defects);
        defects
    }

    fn inspect(
        &self,
        siblings: &'static [TaxonNode],
        prefix: &mut Vec<&'static str>,
        defects: &mut Vec<String>,
    ) {
        let level = prefix.len();
        let mut seen = HashSet::new();
        for node in siblings {
            prefix.push(node.name);
            let at = prefix.join(PATH_SEPARATOR);
            if !seen.insert(node.value) {
                defects.push(format!("{at}: duplicate {} code {}", self.levels[level], node.value));
            }
            let last_level = level + 1 == self.depth();
            if last_level && !node.is_leaf() {
                defects.push(format!("{at}: children below the last level"));
            } else if !last_level && node.is_leaf() {
                defects.push(format!("{at}: branch ends at level {}", self.levels[level]));
            } else if !last_level {
                self.inspect(node.children, prefix, defects);
            }
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FRUIT: Taxonomy = Taxonomy {
        levels: &["Kind", "Variety"],
        roots: &[
            TaxonNode::branch(
                1,
                "apple",
                "Apples",
                &[
                    TaxonNode::leaf(1, "fuji", "Fuji apple"),
                    TaxonNode::leaf(2, "gala", "Gala apple"),
                ],
            ),
            TaxonNode::branch(3, "pear", "Pears", &[TaxonNode::leaf(7, "bosc", "Bosc pear")]),
        ],
    };

    #[test]
    fn resolve_exact_path() {
        let path = FRUIT.resolve(&[1, 2]).unwrap();
        assert_eq!(path.name(), "apple.gala");
        assert_eq!(path.description(), "Gala apple");
        assert_eq!(path.values(), vec![1, 2]);
    }

    #[test]
    fn resolve_rejects_partial_and_mismatched_paths() {
        assert!(FRUIT.resolve(&[1]).is_none());
        assert!(FRUIT.resolve(&[1, 2, 3]).is_none());
        assert!(FRUIT.resolve(&[3, 1]).is_none());
        assert!(FRUIT.resolve(&[2, 1]).is_none());
    }

    #[test]
    fn render_name_falls_back_to_sentinel() {
        assert_eq!(FRUIT.render_name(&[3, 7]), "pear.bosc");
        assert_eq!(FRUIT.render_name(&[1, 7]), INVALID_NAME);
        assert_eq!(FRUIT.render_name(&[]), INVALID_NAME);
    }

    #[test]
    fn leaves_in_tree_order() {
        let names: Vec<String> = FRUIT.leaves().iter().map(TaxonPath::name).collect();
        assert_eq!(names, ["apple.fuji", "apple.gala", "pear.bosc"]);
    }

    #[test]
    fn well_formed_tree_has_no_defects() {
        assert!(FRUIT.defects().is_empty());
    }

    #[test]
    fn defects_are_reported() {
        static BROKEN: Taxonomy = Taxonomy {
            levels: &["Kind", "Variety"],
            roots: &[
                TaxonNode::branch(1, "apple", "", &[TaxonNode::leaf(1, "fuji", "")]),
                TaxonNode::leaf(1, "plum", ""),
            ],
        };
        let defects = BROKEN.defects();
        assert_eq!(defects.len(), 2, "{defects:?}");
        assert!(defects[0].contains("duplicate Kind code 1"));
        assert!(defects[1].contains("branch ends"));
        // The short branch contributes no classification.
        assert_eq!(BROKEN.leaves().len(), 1);
    }
}
