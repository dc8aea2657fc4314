//! Storage backend selection

use serde::Deserialize;

/// Which adapter set backs the ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx (requires `database.url`)
    #[default]
    Postgres,
    /// Process-local stores; contents are lost on exit
    Memory,
}

impl StorageBackend {
    pub fn requires_database(&self) -> bool {
        matches!(self, StorageBackend::Postgres)
    }
}
