//! deps2neo - Export installed package dependency graphs to Neo4j
//!
//! This crate converts a package manager's installed-package manifest into
//! a directed dependency graph, then serializes that graph as an ordered
//! sequence of Cypher statements that recreate it in a graph database.

pub mod cypher;
pub mod graph;
pub mod parser;
pub mod sink;
