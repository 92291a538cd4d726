//! Database health use case

use std::sync::Arc;

use tracing::warn;

use crate::health::DbHealthPort;

/// Outcome of a store probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbHealth {
    Connected { count: u64 },
    Disconnected { error: String },
}

#[derive(Clone)]
pub struct DbHealthUseCase {
    port: Arc<dyn DbHealthPort>,
}

impl DbHealthUseCase {
    pub fn new(port: Arc<dyn DbHealthPort>) -> Self {
        Self { port }
    }

    /// Never fails; a store error becomes [`DbHealth::Disconnected`].
    pub async fn execute(&self) -> DbHealth {
        match self.port.count().await {
            Ok(count) => DbHealth::Connected { count },
            Err(e) => {
                warn!("Database health check failed: {}", e);
                DbHealth::Disconnected { error: e.to_string() }
            }
        }
    }
}
