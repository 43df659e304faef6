//! Shared types for manifest parsing.
//!
//! This module defines the data structures used to represent a package
//! manager's installed-package manifest before it is turned into a graph.

use serde::{Deserialize, Serialize};

/// A single installed package as reported by the package manager.
///
/// Each entry records the package's canonical name, its installed version,
/// and the raw dependency specifiers declared against it. Specifiers are
/// kept as opaque strings here; splitting them into a target name and
/// constraint tokens happens later via
/// [`SpecifierFormat`](super::SpecifierFormat).
///
/// # Example
///
/// ```
/// use deps2neo::parser::ManifestEntry;
///
/// let json = r#"{"name": "numpy", "version": "1.26.4", "depends": ["python >=3.9"]}"#;
/// let entry: ManifestEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.name, "numpy");
/// assert_eq!(entry.depends.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// The canonical package name.
    pub name: String,

    /// The installed version. Informational only; no semver comparison
    /// is ever performed on it.
    pub version: String,

    /// Raw dependency specifiers in the manager's textual format,
    /// e.g. `"numpy >=1.0,<2.0"`.
    #[serde(default)]
    pub depends: Vec<String>,
}

/// An installed-package manifest: an ordered list of `(key, entry)` pairs.
///
/// The key is the package manager's own identifier for the entry (often a
/// build-qualified name); the graph is keyed by `entry.name` instead. Order
/// follows the manifest's own enumeration order so that graph construction
/// and statement generation are deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, ManifestEntry)>,
}

impl Manifest {
    /// Creates a manifest from already-ordered entries.
    pub fn from_entries(entries: Vec<(String, ManifestEntry)>) -> Self {
        Self { entries }
    }

    /// Returns the number of packages in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the manifest contains no packages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, entry)` pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, ManifestEntry)> {
        self.entries.iter()
    }

    /// Fails with [`ManifestError::EmptyManifest`] if the manifest has no
    /// entries.
    ///
    /// The core pipeline accepts an empty manifest (it degenerates to zero
    /// statements); callers that require a populated environment, such as
    /// the CLI, invoke this check before building the graph.
    ///
    /// [`ManifestError::EmptyManifest`]: super::ManifestError::EmptyManifest
    pub fn ensure_non_empty(&self) -> Result<(), super::ManifestError> {
        if self.is_empty() {
            return Err(super::ManifestError::EmptyManifest);
        }
        Ok(())
    }
}
