use async_trait::async_trait;

use crate::error::Result;
use crate::statement::Statement;
use crate::types::RowSet;

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Connecting to the database
/// - Converting SqlValue parameters to native types
/// - Executing statements and converting results to RowSet
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Execute a statement built by [`crate::statement::build`].
    /// Parameters use PostgreSQL-style placeholders ($1, $2, etc.)
    async fn execute(&self, statement: &Statement) -> Result<RowSet>;
}
