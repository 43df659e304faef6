//! Parsing of installed-package manifests.
//!
//! This module handles the raw side of the pipeline: deserializing the
//! package manager's JSON manifest and splitting dependency specifiers,
//! producing the canonical [`DependencyGraph`](crate::graph::DependencyGraph).
//!
//! # Example
//!
//! ```
//! use deps2neo::parser::{build_graph, parse_str, SpecifierFormat};
//!
//! let json = r#"{
//!     "a-1.0": {"name": "a", "version": "1.0", "depends": ["b >=1.0"]},
//!     "b-1.0": {"name": "b", "version": "1.0", "depends": []}
//! }"#;
//!
//! let manifest = parse_str(json).unwrap();
//! let graph = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();
//! assert_eq!(graph.node_count(), 2);
//! ```

pub mod manifest;
pub mod specifier;
pub mod types;

pub use manifest::{build_graph, parse_file, parse_str, ManifestError, ManifestResult};
pub use specifier::SpecifierFormat;
pub use types::{Manifest, ManifestEntry};
