//! Dependency graph implementation using petgraph.
//!
//! Provides the directed graph structure for modeling installed packages
//! and their declared dependencies, including root classification.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// A single declared dependency: a target package name plus its version
/// constraint tokens.
///
/// The target may or may not exist as a package in the graph; the manifest
/// can reference packages outside the installed set, and such dangling
/// requirements are preserved so that statement generation still emits a
/// relationship for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Name of the required package.
    pub target: String,
    /// Opaque constraint tokens (e.g. `">=1.0"`). May be empty.
    pub constraints: Vec<String>,
}

impl Requirement {
    /// Creates a new requirement.
    pub fn new(target: impl Into<String>, constraints: Vec<String>) -> Self {
        Self {
            target: target.into(),
            constraints,
        }
    }
}

/// Represents a node in the dependency graph: one installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    /// Package name, unique within the graph.
    pub name: String,
    /// Installed version, kept verbatim.
    pub version: String,
    /// Declared dependencies in manifest order, dangling targets included.
    pub requirements: Vec<Requirement>,
}

impl PackageNode {
    /// Creates a new package node with no requirements.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            requirements: Vec::new(),
        }
    }
}

/// Represents an edge in the dependency graph.
///
/// Edges exist only for requirements whose target is itself a package in
/// the graph; they point from the dependent package to its dependency and
/// carry the constraint tokens of that requirement.
#[derive(Debug, Clone, Default)]
pub struct RequirementEdge {
    /// Constraint tokens copied from the originating requirement.
    pub constraints: Vec<String>,
}

/// A directed graph of installed packages and their dependencies.
///
/// The graph uses petgraph's `DiGraph` internally, with a name-to-index
/// map for O(1) lookup. Node order is insertion order, which follows the
/// manifest's enumeration order, so iteration is deterministic for a given
/// input. The graph is built once per run and read-only afterwards.
///
/// # Example
///
/// ```
/// use deps2neo::graph::{DependencyGraph, Requirement};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_package("my-app", "1.0.0");
/// graph.add_package("numpy", "1.26.4");
/// graph.add_requirement("my-app", Requirement::new("numpy", vec![">=1.0".to_string()]));
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.roots().contains("my-app"));
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<PackageNode, RequirementEdge>,
    /// Maps package names to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Expected number of packages
    /// * `edges` - Expected number of resolved requirements
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a package to the graph.
    ///
    /// If a package with the same name already exists, returns its existing
    /// node index without modification.
    ///
    /// # Returns
    ///
    /// The `NodeIndex` of the added or existing node.
    pub fn add_package(&mut self, name: &str, version: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(PackageNode::new(name, version));
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Records a declared dependency of `from`.
    ///
    /// The requirement is appended to the owning node's requirement list
    /// regardless of whether its target exists; an edge is materialized
    /// only when the target is itself a package in the graph. Call this
    /// after every package has been inserted so that resolvable targets
    /// actually link.
    ///
    /// # Returns
    ///
    /// `true` if the requirement was recorded, `false` if `from` is not a
    /// package in the graph.
    pub fn add_requirement(&mut self, from: &str, requirement: Requirement) -> bool {
        let Some(&from_idx) = self.node_indices.get(from) else {
            return false;
        };

        if let Some(&to_idx) = self.node_indices.get(&requirement.target) {
            self.graph.add_edge(
                from_idx,
                to_idx,
                RequirementEdge {
                    constraints: requirement.constraints.clone(),
                },
            );
        }

        self.graph[from_idx].requirements.push(requirement);
        true
    }

    /// Gets a reference to a package node by name.
    pub fn get_node(&self, name: &str) -> Option<&PackageNode> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Iterates over all package nodes in insertion order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageNode> {
        self.graph.node_weights()
    }

    /// Classifies root packages: packages that no other package depends on.
    ///
    /// A package is a root exactly when its name never appears as a
    /// dependency target in any node's requirement list. Dangling targets
    /// cannot affect the result since they are not graph keys, so this
    /// reduces to collecting every node without incoming edges. A package
    /// whose own requirements all point outside the graph is still a root
    /// as long as nothing references it.
    ///
    /// # Example
    ///
    /// ```
    /// use deps2neo::graph::{DependencyGraph, Requirement};
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_package("a", "1.0");
    /// graph.add_package("b", "1.0");
    /// graph.add_requirement("a", Requirement::new("b", vec![]));
    ///
    /// let roots = graph.roots();
    /// assert!(roots.contains("a"));
    /// assert!(!roots.contains("b"));
    /// ```
    pub fn roots(&self) -> HashSet<String> {
        self.graph
            .externals(Direction::Incoming)
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|node| node.name.clone())
            .collect()
    }

    /// Gets the resolved dependencies of a package (outgoing edges).
    ///
    /// Dangling requirements have no edge and do not appear here; consult
    /// the node's `requirements` list for the full declared set.
    pub fn dependencies_of(&self, name: &str) -> Vec<&PackageNode> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter_map(|edge| self.graph.node_weight(edge.target()))
            .collect()
    }

    /// Gets the packages that depend on a package (incoming edges).
    pub fn dependents_of(&self, name: &str) -> Vec<&PackageNode> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|edge| self.graph.node_weight(edge.source()))
            .collect()
    }

    /// Returns the number of packages in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of resolved requirement edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the total number of declared requirements, dangling ones
    /// included.
    pub fn requirement_count(&self) -> usize {
        self.packages().map(|node| node.requirements.len()).sum()
    }
}
