//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`DependencyGraph`] struct for building the
//! canonical in-memory representation of an installed-package manifest,
//! including root classification.
//!
//! # Example
//!
//! ```
//! use deps2neo::graph::{DependencyGraph, Requirement};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_package("pandas", "2.2.0");
//! graph.add_package("numpy", "1.26.4");
//! graph.add_requirement("pandas", Requirement::new("numpy", vec![">=1.22.4".to_string()]));
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod dependency_graph;

pub use dependency_graph::{DependencyGraph, PackageNode, Requirement, RequirementEdge};
