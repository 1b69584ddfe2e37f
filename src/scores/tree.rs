use crate::Score;

/// One slot in the arena. Children are arena indices rather than
/// heap pointers, so the whole tree frees in a single Vec drop.
#[derive(Debug, Clone, Copy)]
struct Node {
    score: Score,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree of round scores, arena-backed. Duplicate scores
/// are dropped on insert, so each score appears at most once and the
/// inorder walk is strictly ascending.
#[derive(Debug, Default, Clone)]
pub struct ScoreTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl ScoreTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// insert a score, keeping the tree unchanged if it is already present
    pub fn insert(&mut self, score: Score) {
        let Some(mut at) = self.root else {
            self.root = Some(self.alloc(score));
            return;
        };
        loop {
            match score.cmp(&self.nodes[at].score) {
                std::cmp::Ordering::Equal => return,
                std::cmp::Ordering::Less => match self.nodes[at].left {
                    Some(next) => at = next,
                    None => {
                        let leaf = self.alloc(score);
                        self.nodes[at].left = Some(leaf);
                        return;
                    }
                },
                std::cmp::Ordering::Greater => match self.nodes[at].right {
                    Some(next) => at = next,
                    None => {
                        let leaf = self.alloc(score);
                        self.nodes[at].right = Some(leaf);
                        return;
                    }
                },
            }
        }
    }

    /// walk the scores smallest to largest
    pub fn inorder(&self) -> InOrder<'_> {
        InOrder::from(self)
    }

    fn alloc(&mut self, score: Score) -> usize {
        self.nodes.push(Node {
            score,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

/// Lazy inorder traversal. The stack holds the path of nodes whose
/// left subtrees are already spent, so next() is amortized O(1).
pub struct InOrder<'a> {
    tree: &'a ScoreTree,
    stack: Vec<usize>,
}

impl<'a> InOrder<'a> {
    fn dive(&mut self, mut node: Option<usize>) {
        while let Some(index) = node {
            self.stack.push(index);
            node = self.tree.nodes[index].left;
        }
    }
}

impl<'a> From<&'a ScoreTree> for InOrder<'a> {
    fn from(tree: &'a ScoreTree) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.dive(tree.root);
        walk
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = Score;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let Node { score, right, .. } = self.tree.nodes[index];
        self.dive(right);
        Some(score)
    }
}

impl std::fmt::Display for ScoreTree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, score) in self.inorder().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", score)?;
        }
        Ok(())
    }
}
