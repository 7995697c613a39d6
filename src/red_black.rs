//! A Red-Black Tree. Every node carries a color tag and the tree restores
//! the coloring rules on the way back up from each insertion, which keeps the
//! height within `2 * lg(N + 1)` no matter what order keys arrive in.
//!
//! Insertion is the only mutating operation. Keys that compare equal to an
//! existing key are kept and inserted to its right, though later rotations
//! may lift the newer copy above the older one.
//!
//! # Examples
//!
//! ```
//! use rbtree::red_black::{Color, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert_all(vec![19, 20, 25, 12, 17, 23, 24]);
//!
//! let keys: Vec<_> = tree.in_order().into_iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, [12, 17, 19, 20, 23, 24, 25]);
//!
//! // The root is always black once an insertion completes.
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), &20);
//! assert_eq!(root.color(), Color::Black);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

/// The color tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node. Its parent, if any, must be black once an insertion completes.
    Red,
    /// A black node. Every path from a node down to an empty slot passes the
    /// same number of these.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.pad("R"),
            Self::Black => f.pad("B"),
        }
    }
}

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// Whether the subtree in this slot is present and red. An empty slot is never red.
fn is_red<K>(link: &Link<K>) -> bool {
    matches!(link, Some(node) if node.color == Color::Red)
}

/// A self-balancing Binary Search Tree that keeps itself balanced with a
/// color bit per node.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given key into the tree. The root is recolored black
    /// afterwards so the tree satisfies every red-black invariant when this
    /// returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::{Color, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut root = insert(self.root.take(), key);
        root.color = Color::Black;
        self.root = Some(root);
        self.len += 1;
    }

    /// Inserts each key in order. Every key goes through [`Tree::insert`] on its
    /// own, so the root is recolored black after each one rather than once at
    /// the end.
    pub fn insert_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Finds the highest node holding a key equal to `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.key()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Whether any node holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Keys and colors in sorted order (left, root, right).
    pub fn in_order(&self) -> Vec<(&K, Color)> {
        let mut visited = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.in_order(&mut visited);
        }
        visited
    }

    /// Keys and colors with every node ahead of its subtrees (root, left, right).
    pub fn pre_order(&self) -> Vec<(&K, Color)> {
        let mut visited = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.pre_order(&mut visited);
        }
        visited
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys inserted, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.insert_all(keys);
    }
}

impl<K> std::iter::FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(keys);
        tree
    }
}

/// A single entry of a [`Tree`]. Each node exclusively owns its children.
pub struct Node<K> {
    key: K,
    color: Color,
    left: Link<K>,
    right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("color", &self.color)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// Renders as `(<key><color>)`, e.g. `(19R)`.
impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.key, self.color)
    }
}

impl<K> Node<K> {
    /// New nodes always start out red.
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The root of the left subtree. No key in it is greater than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. No key in it is less than this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        left.max(right) + 1
    }

    fn has_two_red_children(&self) -> bool {
        is_red(&self.left) && is_red(&self.right)
    }

    /// Whether a red child of this node has a red child of its own.
    fn has_red_red_below(&self) -> bool {
        self.left()
            .into_iter()
            .chain(self.right())
            .filter(|child| child.color == Color::Red)
            .any(|child| is_red(&child.left) || is_red(&child.right))
    }

    /// Moves the blackness of both red children up into this node. The black
    /// height of the subtree doesn't change but the children now have room
    /// for a red node beneath them.
    fn push_blackness_down(&mut self) {
        self.color = Color::Red;
        if let Some(left) = self.left.as_mut() {
            left.color = Color::Black;
        }
        if let Some(right) = self.right.as_mut() {
            right.color = Color::Black;
        }
    }

    fn in_order<'a>(&'a self, visited: &mut Vec<(&'a K, Color)>) {
        if let Some(left) = self.left() {
            left.in_order(visited);
        }
        visited.push((&self.key, self.color));
        if let Some(right) = self.right() {
            right.in_order(visited);
        }
    }

    fn pre_order<'a>(&'a self, visited: &mut Vec<(&'a K, Color)>) {
        visited.push((&self.key, self.color));
        if let Some(left) = self.left() {
            left.pre_order(visited);
        }
        if let Some(right) = self.right() {
            right.pre_order(visited);
        }
    }
}

/// Inserts `key` into the subtree in `link` and returns the new root of that
/// subtree. The returned root may be red with a red child; the caller one
/// level up resolves that.
fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut node = match link {
        None => return Node::new_boxed(key),
        Some(node) => node,
    };

    if node.has_two_red_children() {
        trace!("pushing blackness down below a node with two red children");
        node.push_blackness_down();
    }

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    rebalance(node)
}

/// Where two consecutive red nodes sit beneath a node, if anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    /// Red left child with a red left child.
    LeftLeft,
    /// Red left child with a red right child.
    LeftRight,
    /// Red right child with a red right child.
    RightRight,
    /// Red right child with a red left child.
    RightLeft,
    /// No red child has a red child.
    Balanced,
}

impl Shape {
    /// Classifies `node`. Shapes are checked in declaration order and the
    /// first match wins.
    fn of<K>(node: &Node<K>) -> Self {
        let red_left = node.left().filter(|left| left.color == Color::Red);
        let red_right = node.right().filter(|right| right.color == Color::Red);

        match (red_left, red_right) {
            (Some(left), _) if is_red(&left.left) => Self::LeftLeft,
            (Some(left), _) if is_red(&left.right) => Self::LeftRight,
            (_, Some(right)) if is_red(&right.right) => Self::RightRight,
            (_, Some(right)) if is_red(&right.left) => Self::RightLeft,
            _ => Self::Balanced,
        }
    }
}

/// Resolves a red-red violation between the children and grandchildren of
/// `node` and returns the root of the resulting subtree.
fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let shape = Shape::of(&node);
    let root = match shape {
        Shape::Balanced => node,
        Shape::LeftLeft => rotate_right(node),
        Shape::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Shape::RightRight => rotate_left(node),
        Shape::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    };

    if shape != Shape::Balanced {
        trace!("rotated a {:?} subtree", shape);
    }

    // Whatever is left for the caller sits between the root and its children.
    if cfg!(debug_assertions) {
        assert!(
            !root.has_red_red_below(),
            "{:?} rebalance left two reds below the subtree root",
            shape
        );
    }
    root
}

/// Rotates `grand` to the right. Its left child moves up to become the black
/// root of the subtree and `grand` becomes its red right child.
///
/// # Diagram
///
/// ```text
///       grand              parent
///       /   \              /    \
///   parent   z  rotate -> x    grand
///    /  \                      /   \
///   x    y                    y     z
/// ```
///
/// ## Panics
///
/// When `grand` has no left child.
fn rotate_right<K>(mut grand: Box<Node<K>>) -> Box<Node<K>> {
    let mut parent = grand.left.take().expect("Rotate right => left child");
    grand.left = parent.right.take();

    grand.color = Color::Red;
    parent.color = Color::Black;
    parent.right = Some(grand);
    parent
}

/// Mirror of [`rotate_right`]: the right child of `grand` moves up.
///
/// ## Panics
///
/// When `grand` has no right child.
fn rotate_left<K>(mut grand: Box<Node<K>>) -> Box<Node<K>> {
    let mut parent = grand.right.take().expect("Rotate left => right child");
    grand.right = parent.left.take();

    grand.color = Color::Red;
    parent.color = Color::Black;
    parent.left = Some(grand);
    parent
}
