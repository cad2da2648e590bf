//! Per-leaf decision chains.

/// What to do once the runtime tag is known.
///
/// One chain is compiled per leaf of the union from the arms covering that
/// leaf, in declaration order. Unguarded arms end the chain; arms listed after
/// them for the same leaf are unreachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DecisionTree {
    /// Run the arm's handler.
    Leaf { arm_index: usize },
    /// Run the arm's handler if its guard holds, otherwise continue with
    /// `on_fail`.
    Guard {
        arm_index: usize,
        on_fail: Box<DecisionTree>,
    },
    /// Run the table's fallback handler.
    Fallback,
    /// Nothing matched.
    Fail,
}

impl DecisionTree {
    /// Compile the chain for one leaf.
    ///
    /// `covering` lists the indices of the arms covering the leaf, in
    /// declaration order; `is_guarded` tells whether an arm carries a guard.
    pub(crate) fn compile(
        covering: &[usize],
        is_guarded: impl Fn(usize) -> bool,
        has_fallback: bool,
    ) -> DecisionTree {
        let mut tree = if has_fallback {
            DecisionTree::Fallback
        } else {
            DecisionTree::Fail
        };
        for &arm_index in covering.iter().rev() {
            tree = if is_guarded(arm_index) {
                DecisionTree::Guard {
                    arm_index,
                    on_fail: Box::new(tree),
                }
            } else {
                DecisionTree::Leaf { arm_index }
            };
        }
        tree
    }

    /// Number of nodes along the chain, for trace output.
    pub(crate) fn depth(&self) -> usize {
        match self {
            DecisionTree::Guard { on_fail, .. } => 1 + on_fail.depth(),
            DecisionTree::Leaf { .. } | DecisionTree::Fallback | DecisionTree::Fail => 1,
        }
    }
}
