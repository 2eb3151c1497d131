use crate::tensor::{NodeId, Tensor};
use std::collections::HashSet;

/// Returns every node reachable from `root`, children before parents.
///
/// Depth-first: a node's children are visited before the node itself is
/// appended, first child first. Nodes are deduplicated by identity, so a node
/// reached through several parents appears exactly once. The traversal keeps
/// its own stack, so graph depth is bounded by memory rather than by the
/// thread's call stack.
pub fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, children already scheduled)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let children = node.children();
        stack.push((node, true));
        for child in children.into_iter().rev() {
            if !visited.contains(&child.node_id()) {
                stack.push((child, false));
            }
        }
    }
    sorted
}
