mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::ops::{Index, IndexMut};

pub use self::iter::Iter;

/// The position of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

pub type Link = Option<NodeId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link,
    right: Link,
    parent: Link,
    color: Color,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Link) -> Self {
        Node { left: None, right: None, parent: parent, color: Color::Red, key: key, value: value }
    }
}

/// A red-black tree whose nodes live in a single arena.
///
/// Nodes are never freed, so a `NodeId` stays valid for the lifetime of the tree. Parent links
/// are plain indices and carry no ownership.
#[derive(Clone)]
pub struct Tree<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Link,
}

impl<K, V> Index<NodeId> for Tree<K, V> {
    type Output = Node<K, V>;
    fn index(&self, id: NodeId) -> &Node<K, V> { &self.nodes[id.0] }
}

impl<K, V> IndexMut<NodeId> for Tree<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> { &mut self.nodes[id.0] }
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self { Tree { nodes: vec![], root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn root(&self) -> Link { self.root }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, K> {
        let mut link = self.root;

        while let Some(id) = link {
            let node = &self[id];
            link = match cmp.compare(key, &node.key) {
                Equal => return link,
                Less => node.left,
                Greater => node.right,
            };
        }

        None
    }

    /// Inserts a new red node and rebalances, handing the entry back if its key is present.
    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> Result<NodeId, (K, V)>
        where C: Compare<K> {

        let mut parent = None;
        let mut link = self.root;
        let mut left = false;

        while let Some(id) = link {
            let node = &self[id];
            parent = link;
            link = match cmp.compare(&key, &node.key) {
                Equal => return Err((key, value)),
                Less => { left = true; node.left }
                Greater => { left = false; node.right }
            };
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key, value, parent));

        match parent {
            None => self.root = Some(id),
            Some(parent) if left => self[parent].left = Some(id),
            Some(parent) => self[parent].right = Some(id),
        }

        self.fix_insert(id);
        Ok(id)
    }

    pub fn extremum<D: Dir>(&self, mut id: NodeId) -> NodeId {
        while let Some(next) = D::forward(&self[id]) { id = next; }
        id
    }

    /// Returns the in-order neighbor of `id` on the `D` side: `Left` gives the predecessor,
    /// `Right` the successor.
    pub fn neighbor<D: Dir>(&self, mut id: NodeId) -> Link {
        if let Some(child) = D::forward(&self[id]) {
            return Some(self.extremum::<D::Opposite>(child));
        }

        let mut parent = self[id].parent;

        while let Some(p) = parent {
            if D::forward(&self[p]) != Some(id) { break; }
            id = p;
            parent = self[p].parent;
        }

        parent
    }

    // Moves `x` down to its `D` side, lifting its child from the opposite side into its place.
    fn rotate<D: Dir>(&mut self, x: NodeId) {
        let y = match D::Opposite::forward(&self[x]) {
            Some(y) => y,
            None => { debug_assert!(false, "rotation without a child to lift"); return; }
        };

        trace!("rotating {:?} {}", x, D::NAME);

        let inner = D::forward(&self[y]);
        *D::Opposite::forward_mut(&mut self[x]) = inner;
        if let Some(inner) = inner { self[inner].parent = Some(x); }

        let parent = self[x].parent;
        self[y].parent = parent;

        match parent {
            None => self.root = Some(y),
            Some(p) if self[p].left == Some(x) => self[p].left = Some(y),
            Some(p) => self[p].right = Some(y),
        }

        *D::forward_mut(&mut self[y]) = Some(x);
        self[x].parent = Some(y);
    }

    fn fix_insert(&mut self, mut id: NodeId) {
        while let Some(parent) = self[id].parent.filter(|&p| self[p].color == Color::Red) {
            // a red node is never the root
            let grandparent = match self[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            id = if self[grandparent].left == Some(parent) {
                self.fix_insert_under::<Left>(id, parent, grandparent)
            } else {
                self.fix_insert_under::<Right>(id, parent, grandparent)
            };
        }

        if let Some(root) = self.root { self[root].color = Color::Black; }
    }

    // `parent` is the `D` child of `grandparent`; returns the node the fixup continues from.
    fn fix_insert_under<D: Dir>(&mut self, id: NodeId, parent: NodeId, grandparent: NodeId)
        -> NodeId {

        let uncle = D::Opposite::forward(&self[grandparent]);

        if let Some(uncle) = uncle.filter(|&u| self[u].color == Color::Red) {
            trace!("red uncle {:?}, recoloring {:?}", uncle, grandparent);
            self[parent].color = Color::Black;
            self[uncle].color = Color::Black;
            self[grandparent].color = Color::Red;
            return grandparent;
        }

        let (id, parent) = if D::Opposite::forward(&self[parent]) == Some(id) {
            self.rotate::<D>(parent);
            (parent, id)
        } else {
            (id, parent)
        };

        trace!("black uncle, lifting {:?} over {:?}", parent, grandparent);
        self[parent].color = Color::Black;
        self[grandparent].color = Color::Red;
        self.rotate::<D::Opposite>(grandparent);
        id
    }
}

/// A side of a node, used to write each mirrored tree operation once.
pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    const NAME: &'static str;

    fn forward<K, V>(node: &Node<K, V>) -> Link;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    const NAME: &'static str = "left";

    fn forward<K, V>(node: &Node<K, V>) -> Link { node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    const NAME: &'static str = "right";

    fn forward<K, V>(node: &Node<K, V>) -> Link { node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link { &mut node.right }
}
