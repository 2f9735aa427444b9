//! Depth-first traversal over constructed trees.

use crate::node::Node;

/// Visit `node` and every descendant in pre-order.
///
/// The visitor receives each node with its depth; the root is depth 0.
pub fn walk<F: FnMut(&Node, usize)>(node: &Node, mut visit: F) {
    walk_at(node, 0, &mut visit);
}

fn walk_at<F: FnMut(&Node, usize)>(node: &Node, depth: usize, visit: &mut F) {
    visit(node, depth);
    for child in node.children() {
        walk_at(child, depth + 1, visit);
    }
}

/// Find a node by id anywhere in the tree.
pub fn find(node: &Node, id: u64) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children().iter().find_map(|child| find(child, id))
}

/// Total number of nodes in the tree, the root included.
pub fn size(node: &Node) -> usize {
    1 + node.children().iter().map(size).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;
    use crate::types::Child;

    fn sample() -> Node {
        let em = build("em", (), "deep").unwrap();
        build("div", (), vec![Child::from("a"), Child::from(em)]).unwrap()
    }

    #[test]
    fn test_walk_preorder_with_depth() {
        let root = sample();
        let mut visited = Vec::new();
        walk(&root, |node, depth| {
            visited.push((node.id(), depth));
        });

        assert_eq!(visited.len(), 4);
        // Root first, then its children in order, descending before
        // moving to the next sibling.
        assert_eq!(visited[0], (root.id(), 0));
        assert_eq!(visited[1], (root.children()[0].id(), 1));
        assert_eq!(visited[2], (root.children()[1].id(), 1));
        assert_eq!(visited[3], (root.children()[1].children()[0].id(), 2));
    }

    #[test]
    fn test_find_by_id() {
        let root = sample();
        let deep = root.children()[1].children()[0].id();
        assert_eq!(find(&root, deep).unwrap().text(), Some("deep"));
        assert_eq!(find(&root, root.id()).unwrap().id(), root.id());
        assert!(find(&root, u64::MAX).is_none());
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&sample()), 4);
        assert_eq!(size(&build("div", (), ()).unwrap()), 1);
    }
}
