//! An undirected graph of people who appeared in the same movie.
//!
//! # Examples
//!
//! ```
//! use rbtree::graph::Graph;
//!
//! let casts = vec![
//!     vec!["Ann".to_string(), "Bob".to_string()],
//!     vec!["Bob".to_string(), "Cy".to_string()],
//! ];
//! let graph = Graph::new(&casts);
//!
//! assert_eq!(graph.degree_of("Bob"), Ok(2));
//! assert_eq!(graph.bfs("Ann").unwrap().to_string(), "Queue: [Ann, Bob, Cy]");
//! ```

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use log::debug;
use thiserror::Error;

/// Errors from querying a [`Graph`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Nobody by this name is in the graph.
    #[error("no vertex named {0:?}")]
    UnknownVertex(String),
}

/// Every person keyed by name, with everyone they share a movie with.
/// Vertices iterate in name order.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    vertices: BTreeMap<String, Vec<String>>,
}

impl Graph {
    /// Builds the graph from a list of casts. Everyone in a cast is linked to
    /// everyone else in it. Adjacency lists keep the order people were first
    /// seen in and never repeat a name.
    pub fn new(casts: &[Vec<String>]) -> Self {
        let mut vertices: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for cast in casts {
            for member in cast {
                let adjacent = vertices.entry(member.clone()).or_default();
                for costar in cast {
                    if costar != member && !adjacent.contains(costar) {
                        adjacent.push(costar.clone());
                    }
                }
            }
        }

        debug!(
            "built graph with {} vertices from {} casts",
            vertices.len(),
            casts.len()
        );
        Self { vertices }
    }

    /// How many people are in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Everyone `name` shares a movie with.
    pub fn adjacent(&self, name: &str) -> Result<&[String], GraphError> {
        self.vertices
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_owned()))
    }

    /// The number of edges touching `name`.
    pub fn degree_of(&self, name: &str) -> Result<usize, GraphError> {
        self.adjacent(name).map(<[String]>::len)
    }

    /// Everyone tied for the highest degree, or `None` for an empty graph.
    pub fn max_degree(&self) -> Option<MaxDegree> {
        let degree = self.vertices.values().map(Vec::len).max()?;
        let names = self
            .vertices
            .iter()
            .filter(|(_, adjacent)| adjacent.len() == degree)
            .map(|(name, _)| name.clone())
            .collect();

        Some(MaxDegree { names, degree })
    }

    /// Breadth-first search from `start`. Neighbours are queued in the order
    /// they appear in each adjacency list.
    pub fn bfs(&self, start: &str) -> Result<Visit, GraphError> {
        let (start, _) = self
            .vertices
            .get_key_value(start)
            .ok_or_else(|| GraphError::UnknownVertex(start.to_owned()))?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start.as_str());
        queue.push_back(start.as_str());
        while let Some(current) = queue.pop_front() {
            order.push(current.to_owned());

            for next in self.vertices.get(current).into_iter().flatten() {
                if visited.insert(next.as_str()) {
                    queue.push_back(next.as_str());
                }
            }
        }

        Ok(Visit { order })
    }
}

/// Lists every vertex and its neighbours, numbered from 1.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (count, (name, adjacent)) in self.vertices.iter().enumerate() {
            writeln!(f, "{}. {}: [{}]", count + 1, name, adjacent.join(", "))?;
        }
        Ok(())
    }
}

/// The result of [`Graph::max_degree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxDegree {
    /// Everyone with the highest degree, in name order.
    pub names: Vec<String>,
    /// The highest degree.
    pub degree: usize,
}

impl fmt::Display for MaxDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The max degree is ")?;
        match self.names.as_slice() {
            [name] => f.write_str(name)?,
            names => write!(f, "a tie between [{}]", names.join(", "))?,
        }
        write!(f, " with a degree of {}", self.degree)
    }
}

/// The order a [`Graph::bfs`] visited vertices in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    order: Vec<String>,
}

impl Visit {
    /// The visited names, starting vertex first.
    pub fn order(&self) -> &[String] {
        &self.order
    }
}

/// Renders as `Queue: [a, b, c]`.
impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: [{}]", self.order.join(", "))
    }
}
