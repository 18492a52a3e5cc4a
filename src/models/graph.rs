//! Work graph model.
//!
//! A directed acyclic graph of work units with parent → child precedence
//! edges. The graph is built once by the caller and read-only afterwards;
//! structural validation (cycles, dangling edges) is the caller's
//! responsibility — consumers here assume a well-formed DAG.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{AgentCounts, WorkUnit};

/// A precedence DAG of work units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkGraph {
    nodes: Vec<WorkUnit>,
    /// parent id → child ids.
    children: HashMap<String, Vec<String>>,
    /// child id → parent ids.
    parents: HashMap<String, Vec<String>>,
}

impl WorkGraph {
    /// Creates a graph from its work units, with no edges yet.
    pub fn new(nodes: Vec<WorkUnit>) -> Self {
        Self {
            nodes,
            children: HashMap::new(),
            parents: HashMap::new(),
        }
    }

    /// Adds a precedence edge: `parent` must finish before `child` starts.
    pub fn with_edge(mut self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.add_edge(parent, child);
        self
    }

    /// Adds a precedence edge in place.
    pub fn add_edge(&mut self, parent: impl Into<String>, child: impl Into<String>) {
        let parent = parent.into();
        let child = child.into();
        self.children
            .entry(parent.clone())
            .or_default()
            .push(child.clone());
        self.parents.entry(child).or_default().push(parent);
    }

    /// All work units, in insertion order.
    pub fn nodes(&self) -> &[WorkUnit] {
        &self.nodes
    }

    /// Number of work units.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no work units.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a work unit by ID.
    pub fn node(&self, id: &str) -> Option<&WorkUnit> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Parent IDs of a work unit (empty for roots).
    pub fn parents_of(&self, id: &str) -> &[String] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Child IDs of a work unit (empty for sinks).
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Work units in a topological order (parents before children).
    ///
    /// Kahn's algorithm over the precedence edges. Assumes the graph is
    /// acyclic, as guaranteed by the caller at construction time.
    pub fn topological_order(&self) -> Vec<&WorkUnit> {
        let index: HashMap<&str, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();
        let mut in_degree: Vec<usize> = self
            .nodes
            .iter()
            .map(|n| self.parents_of(&n.id).len())
            .collect();

        let mut queue: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(i) = queue.pop() {
            order.push(&self.nodes[i]);
            for child in self.children_of(&self.nodes[i].id) {
                if let Some(&j) = index.get(child.as_str()) {
                    in_degree[j] -= 1;
                    if in_degree[j] == 0 {
                        queue.push(j);
                    }
                }
            }
        }

        debug_assert_eq!(order.len(), self.nodes.len(), "work graph must be acyclic");
        order
    }

    /// Largest `max_count` over all requirements, per resource kind.
    ///
    /// This is the derived upper bound of the resource search space: no
    /// single work unit accepts a bigger crew of that kind.
    pub fn aggregate_max_counts(&self) -> AgentCounts {
        let mut counts = BTreeMap::new();
        for req in self.nodes.iter().flat_map(|n| &n.worker_reqs) {
            let entry = counts.entry(req.kind.clone()).or_insert(0);
            *entry = (*entry).max(req.max_count);
        }
        counts
    }

    /// Largest `min_count` over all requirements, per resource kind.
    ///
    /// Any contractor below this per-kind floor leaves some work unit
    /// unstartable.
    pub fn aggregate_min_counts(&self) -> AgentCounts {
        let mut counts = BTreeMap::new();
        for req in self.nodes.iter().flat_map(|n| &n.worker_reqs) {
            let entry = counts.entry(req.kind.clone()).or_insert(0);
            *entry = (*entry).max(req.min_count);
        }
        counts
    }
}
