use super::{Left, Link, Right, Tree};

/// An in-order walk over a tree that follows neighbor links instead of keeping a stack.
pub struct Iter<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    front: Link,
    back: Link,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a Tree<K, V>) -> Iter<'a, K, V> {
        Iter {
            tree: tree,
            front: tree.root().map(|root| tree.extremum::<Left>(root)),
            back: tree.root().map(|root| tree.extremum::<Right>(root)),
            size: tree.len(),
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter { tree: self.tree, front: self.front, back: self.back, size: self.size }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.size == 0 { return None; }
        let tree = self.tree;
        let id = self.front?;
        self.size -= 1;
        self.front = tree.neighbor::<Right>(id);
        let node = &tree[id];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.size == 0 { return None; }
        let tree = self.tree;
        let id = self.back?;
        self.size -= 1;
        self.back = tree.neighbor::<Left>(id);
        let node = &tree[id];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
