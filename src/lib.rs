//! sitecheck - parameterized statements and concurrent connection checks
//!
//! Two independent pieces, composed at the call site: a statement builder
//! that turns literal fragments plus values into an injection-safe
//! `$1, $2, ...` statement, and a prober that fans out one health check per
//! configured backend and folds the settled results into a single status.
//!
//! # Example
//! ```ignore
//! use sitecheck::{
//!     probe_set_for_config, test_all, BackendProbes, ProviderConfig, SiteCheckClient,
//! };
//!
//! let client = SiteCheckClient::connect("postgres://localhost/mydb").await?;
//!
//! let config = ProviderConfig { has_database: true, ..Default::default() };
//! let probes = probe_set_for_config(&config, BackendProbes {
//!     database: Some(client.database_probe()),
//!     ..Default::default()
//! });
//!
//! let status = test_all(&probes, None).await;
//! println!("{}", serde_json::to_string(&status)?);
//! ```

pub mod config;
pub mod drivers;
pub mod error;
pub mod probes;
pub mod statement;
pub mod status;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use client::SiteCheckClient;
pub use config::{ProviderConfig, StorageBackend};
pub use error::{Result, SiteCheckError};
pub use probes::{probe_set_for_config, BackendProbes, DatabaseProbe, FnProbe};
pub use statement::{array_to_sql_literal, build, ArrayFormat, Statement};
pub use status::{test_all, AggregateStatus, ConnectionError, ProbeOutcome, ProbeSet};
pub use traits::{DatabaseDriver, Probe};
pub use types::{RowSet, SqlValue};
