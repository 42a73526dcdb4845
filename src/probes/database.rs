use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::statement;
use crate::traits::{DatabaseDriver, Probe};

/// Statement used to verify database reachability. Counting the user tables
/// is cheap and requires no schema of our own to exist.
const CONNECTIVITY_QUERY: &str = "SELECT COUNT(*) FROM pg_stat_user_tables";

/// Probe that checks the configured database answers a trivial statement.
///
/// Holds a handle to the shared driver; the connection itself is owned by
/// the driver and stays open across checks.
pub struct DatabaseProbe {
    driver: Arc<dyn DatabaseDriver>,
}

impl DatabaseProbe {
    pub fn new(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl Probe for DatabaseProbe {
    async fn check(&self) -> Result<()> {
        let stmt = statement::build(&[CONNECTIVITY_QUERY], vec![])?;
        self.driver.execute(&stmt).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::InMemoryTestDriver;
    use crate::error::SiteCheckError;

    #[tokio::test]
    async fn test_check_executes_connectivity_statement() {
        let driver = Arc::new(InMemoryTestDriver::new());
        let probe = DatabaseProbe::new(Arc::clone(&driver) as Arc<dyn DatabaseDriver>);

        probe.check().await.unwrap();

        driver.assert_last_statement("SELECT COUNT(*) FROM pg_stat_user_tables", &[]);
        driver.assert_statement_count(1);
    }

    #[tokio::test]
    async fn test_check_propagates_execution_failure() {
        let driver = Arc::new(
            InMemoryTestDriver::new()
                .with_error(SiteCheckError::ExecutionFailed("no pg_stat access".to_string())),
        );
        let probe = DatabaseProbe::new(Arc::clone(&driver) as Arc<dyn DatabaseDriver>);

        let err = probe.check().await.unwrap_err();
        assert!(matches!(err, SiteCheckError::ExecutionFailed(_)));
    }

    #[tokio::test]
    async fn test_check_reuses_driver_across_calls() {
        let driver = Arc::new(InMemoryTestDriver::new());
        let probe = DatabaseProbe::new(Arc::clone(&driver) as Arc<dyn DatabaseDriver>);

        probe.check().await.unwrap();
        probe.check().await.unwrap();

        driver.assert_statement_count(2);
    }
}
