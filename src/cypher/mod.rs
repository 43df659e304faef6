//! Cypher statement generation.
//!
//! This module turns a finished [`DependencyGraph`](crate::graph::DependencyGraph)
//! into an ordered sequence of Cypher statements that recreate the graph
//! as nodes and relationships.

mod generator;

pub use generator::build_statements;

use crate::parser::SpecifierFormat;

/// A single fully-formed Cypher statement.
///
/// Statements are opaque text once emitted; they carry no structured
/// fields and are the output artifact of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(String);

impl Statement {
    /// Creates a statement from its final text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the statement text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How version constraints are encoded on relationship statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintEncoding {
    /// Explicit list property: `requires:['>=1.0','<2.0']`.
    List,
    /// Single concatenated string property: `required:'>=1.0<2.0'`.
    Joined,
}

impl ConstraintEncoding {
    /// Returns the encoding that historically accompanied a specifier
    /// format, used when no encoding is chosen explicitly.
    pub fn default_for(format: SpecifierFormat) -> Self {
        match format {
            SpecifierFormat::CommaSeparated => ConstraintEncoding::List,
            SpecifierFormat::WhitespaceSeparated => ConstraintEncoding::Joined,
        }
    }

    /// Renders the relationship property payload for a constraint set.
    pub(crate) fn encode(&self, constraints: &[String]) -> String {
        match self {
            ConstraintEncoding::List => {
                let quoted: Vec<String> =
                    constraints.iter().map(|c| format!("'{}'", c)).collect();
                format!("requires:[{}]", quoted.join(","))
            }
            ConstraintEncoding::Joined => format!("required:'{}'", constraints.concat()),
        }
    }
}

impl std::str::FromStr for ConstraintEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ConstraintEncoding::List),
            "joined" => Ok(ConstraintEncoding::Joined),
            _ => Err(format!(
                "Unknown constraint encoding: '{}'. Valid encodings: list, joined",
                s
            )),
        }
    }
}

impl std::fmt::Display for ConstraintEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintEncoding::List => write!(f, "list"),
            ConstraintEncoding::Joined => write!(f, "joined"),
        }
    }
}
