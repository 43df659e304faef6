//! Neo4j execution sink.
//!
//! Submits the generated statements to a Neo4j instance over bolt, one
//! statement at a time, in order. The connection lives for the duration of
//! one submission batch and is dropped on every exit path.

use neo4rs::{query, Graph};
use tracing::{debug, info};

use crate::cypher::Statement;

/// Errors raised while talking to Neo4j.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Could not establish a connection to the target instance.
    #[error("Failed to connect to Neo4j at {uri}: {source}")]
    Connect {
        uri: String,
        source: neo4rs::Error,
    },

    /// An individual statement submission failed. The batch is aborted at
    /// the first failure; no retry is attempted.
    #[error("Statement {index} of {total} failed: {source}")]
    Submit {
        index: usize,
        total: usize,
        source: neo4rs::Error,
    },
}

/// A scoped Neo4j connection used to submit one statement batch.
pub struct Neo4jSink {
    graph: Graph,
}

impl Neo4jSink {
    /// Connects to a Neo4j instance.
    ///
    /// # Arguments
    ///
    /// * `uri` - Bolt URI, e.g. `neo4j+s://xxxx.databases.neo4j.io`
    /// * `user` - Database user
    /// * `password` - Database password
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, SinkError> {
        let graph = Graph::new(uri, user, password)
            .await
            .map_err(|source| SinkError::Connect {
                uri: uri.to_string(),
                source,
            })?;
        Ok(Self { graph })
    }

    /// Submits every statement, one at a time, in the given order.
    ///
    /// Ordering matters: relationship statements match destination nodes
    /// created by earlier node statements, so the sink never reorders or
    /// batches across the sequence.
    pub async fn submit(&self, statements: &[Statement]) -> Result<(), SinkError> {
        let total = statements.len();
        for (i, statement) in statements.iter().enumerate() {
            self.graph
                .run(query(statement.as_str()))
                .await
                .map_err(|source| SinkError::Submit {
                    index: i + 1,
                    total,
                    source,
                })?;
            debug!(statement = i + 1, total, "submitted");
        }
        info!(total, "all statements submitted");
        Ok(())
    }
}
