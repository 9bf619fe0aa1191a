//! Split tree schema, leaf counting, and element range mapping.
//!
//! A [`SplitNode`] with no children is a leaf and hosts exactly one
//! element. A node with children contributes no slot of its own; its
//! weight is the sum of its children's leaf counts. Leaves are matched to
//! elements in depth-first, left-to-right order, so every child of a node
//! owns a contiguous run of that node's elements.
//!
//! Nodes own their children outright, so a tree built as a value can
//! never contain a cycle. [`SplitTree`] adds the one check that is left:
//! a depth limit that bounds recursion in the solver.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Current split tree snapshot schema version.
pub const SPLIT_TREE_SCHEMA_VERSION: u16 = 1;

/// Depth limit applied by [`SplitTree::new`].
pub const DEFAULT_MAX_SPLIT_DEPTH: usize = 64;

/// One node of a split tree.
///
/// Serializes as `{"children": [...]}`; leaves serialize as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SplitNode {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SplitNode>,
}

impl SplitNode {
    /// A terminal slot for one element.
    #[must_use]
    pub const fn leaf() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// An internal node with the given children, in order.
    ///
    /// An empty iterator yields a leaf.
    #[must_use]
    pub fn split(children: impl IntoIterator<Item = SplitNode>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// A node with `count` leaf children (`count == 0` yields a leaf).
    #[must_use]
    pub fn even(count: usize) -> Self {
        Self::split((0..count).map(|_| Self::leaf()))
    }

    /// The seven-slot demo arrangement:
    ///
    /// ```text
    /// root
    /// ├── [leaf, [leaf, leaf]]
    /// ├── [[leaf, leaf], leaf]
    /// └── leaf
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        Self::split([
            Self::split([Self::leaf(), Self::even(2)]),
            Self::split([Self::even(2), Self::leaf()]),
            Self::leaf(),
        ])
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SplitNode] {
        &self.children
    }

    /// Number of terminal slots in this subtree (always >= 1).
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut count = 0usize;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count = count.saturating_add(1);
            } else {
                stack.extend(node.children.iter());
            }
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path (a lone leaf is 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0usize;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Element ranges owned by each child, relative to this node's first element.
    ///
    /// Consecutive ranges are adjacent: each starts where the previous one
    /// ends, and the last one ends at `self.leaf_count()`. A leaf yields
    /// no ranges.
    pub fn child_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.children.iter().scan(0usize, |start, child| {
            let begin = *start;
            *start = begin.saturating_add(child.leaf_count());
            Some(begin..*start)
        })
    }

    /// Element range owned by child `index`, or `None` if there is no such child.
    #[must_use]
    pub fn child_range(&self, index: usize) -> Option<Range<usize>> {
        self.child_ranges().nth(index)
    }

    /// Find the first subtree deeper than `max_depth`, without recursing.
    fn check_depth(&self, max_depth: usize) -> Result<usize, SplitModelError> {
        let mut deepest = 0usize;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            if level > max_depth {
                return Err(SplitModelError::DepthExceeded {
                    depth: level,
                    max_depth,
                });
            }
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        Ok(deepest)
    }
}

/// Canonical serialized split tree shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitTreeSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    pub root: SplitNode,
    /// Forward-compatible extension bag.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

fn default_schema_version() -> u16 {
    SPLIT_TREE_SCHEMA_VERSION
}

impl SplitTreeSnapshot {
    /// Snapshot of `root` at the current schema version.
    #[must_use]
    pub fn new(root: SplitNode) -> Self {
        Self {
            schema_version: SPLIT_TREE_SCHEMA_VERSION,
            root,
            extensions: BTreeMap::new(),
        }
    }
}

/// A validated split tree with cached leaf count and depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTree {
    root: SplitNode,
    leaf_count: usize,
    depth: usize,
    extensions: BTreeMap<String, String>,
}

impl SplitTree {
    /// Validate `root` against [`DEFAULT_MAX_SPLIT_DEPTH`].
    pub fn new(root: SplitNode) -> Result<Self, SplitModelError> {
        Self::with_max_depth(root, DEFAULT_MAX_SPLIT_DEPTH)
    }

    /// Validate `root` against an explicit depth limit.
    pub fn with_max_depth(root: SplitNode, max_depth: usize) -> Result<Self, SplitModelError> {
        let depth = root.check_depth(max_depth)?;
        let leaf_count = root.leaf_count();
        Ok(Self {
            root,
            leaf_count,
            depth,
            extensions: BTreeMap::new(),
        })
    }

    /// A tree with a single slot.
    #[must_use]
    pub fn single() -> Self {
        Self {
            root: SplitNode::leaf(),
            leaf_count: 1,
            depth: 1,
            extensions: BTreeMap::new(),
        }
    }

    /// Build from a serialized snapshot, rejecting unknown schema versions.
    pub fn from_snapshot(snapshot: SplitTreeSnapshot) -> Result<Self, SplitModelError> {
        if snapshot.schema_version != SPLIT_TREE_SCHEMA_VERSION {
            return Err(SplitModelError::UnsupportedSchemaVersion {
                version: snapshot.schema_version,
            });
        }
        let mut tree = Self::new(snapshot.root)?;
        tree.extensions = snapshot.extensions;
        Ok(tree)
    }

    #[must_use]
    pub fn to_snapshot(&self) -> SplitTreeSnapshot {
        SplitTreeSnapshot {
            schema_version: SPLIT_TREE_SCHEMA_VERSION,
            root: self.root.clone(),
            extensions: self.extensions.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &SplitNode {
        &self.root
    }

    /// Total slots; cached at construction.
    #[inline]
    #[must_use]
    pub const fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn into_root(self) -> SplitNode {
        self.root
    }
}

impl Default for SplitTree {
    fn default() -> Self {
        Self::single()
    }
}

impl TryFrom<SplitNode> for SplitTree {
    type Error = SplitModelError;

    fn try_from(root: SplitNode) -> Result<Self, Self::Error> {
        Self::new(root)
    }
}

/// Construction-time failures for split trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitModelError {
    UnsupportedSchemaVersion { version: u16 },
    DepthExceeded { depth: usize, max_depth: usize },
}

impl fmt::Display for SplitModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSchemaVersion { version } => write!(
                f,
                "unsupported split tree schema version {version} (expected {SPLIT_TREE_SCHEMA_VERSION})"
            ),
            Self::DepthExceeded { depth, max_depth } => write!(
                f,
                "split tree depth {depth} exceeds limit {max_depth}"
            ),
        }
    }
}

impl std::error::Error for SplitModelError {}
