use async_trait::async_trait;
use tokio_postgres::{types::ToSql, Client, NoTls};

use crate::error::{Result, SiteCheckError};
use crate::statement::Statement;
use crate::traits::DatabaseDriver;
use crate::types::{RowSet, SqlValue};

/// PostgreSQL driver implementation using tokio-postgres.
///
/// The connection is opened once at startup and owned by the driver for its
/// whole lifetime; it is released when the driver is dropped, not after each
/// statement.
pub struct TokioPostgresDriver {
    client: Client,
}

impl TokioPostgresDriver {
    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| SiteCheckError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "PostgreSQL connection error");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn execute(&self, statement: &Statement) -> Result<RowSet> {
        // Convert SqlValue params to tokio-postgres compatible types
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            statement.params.iter().map(sql_value_to_tosql).collect();

        let param_refs: Vec<&(dyn ToSql + Sync)> = converted_params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(&statement.text, &param_refs)
            .await
            .map_err(|e| SiteCheckError::ExecutionFailed(e.to_string()))?;

        // Extract column names
        let columns: Vec<String> = if rows.is_empty() {
            Vec::new()
        } else {
            rows[0]
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        };

        // Convert rows to string values
        let result_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                (0..row.columns().len())
                    .map(|i| row_value_to_string(row, i))
                    .collect()
            })
            .collect();

        Ok(RowSet::new(columns, result_rows))
    }
}

/// Convert a SqlValue to a boxed ToSql trait object.
fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Float64(f) => Box::new(*f),
        SqlValue::Bool(b) => Box::new(*b),
    }
}

/// Convert a row value at a given index to a string.
fn row_value_to_string(row: &tokio_postgres::Row, index: usize) -> String {
    // Try common types and convert to string
    if let Ok(val) = row.try_get::<_, i32>(index) {
        return val.to_string();
    }

    if let Ok(val) = row.try_get::<_, i64>(index) {
        return val.to_string();
    }

    if let Ok(val) = row.try_get::<_, String>(index) {
        return val;
    }

    if let Ok(val) = row.try_get::<_, bool>(index) {
        return val.to_string();
    }

    if let Ok(val) = row.try_get::<_, f64>(index) {
        return val.to_string();
    }

    // Option<String> for NULL handling
    if let Ok(val) = row.try_get::<_, Option<String>>(index) {
        return val.unwrap_or_else(|| "NULL".to_string());
    }

    "UNKNOWN".to_string()
}
