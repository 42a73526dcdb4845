mod database;
mod fn_probe;

use std::sync::Arc;

use crate::config::{ProviderConfig, PROVIDER_AI, PROVIDER_DATABASE, PROVIDER_KV};
use crate::status::ProbeSet;
use crate::traits::Probe;

pub use database::DatabaseProbe;
pub use fn_probe::FnProbe;

/// Connectivity checks supplied by the backend integrations.
/// Each field covers one provider slot; a `None` means the integration is
/// not wired up in this process.
#[derive(Default)]
pub struct BackendProbes {
    pub database: Option<Arc<dyn Probe>>,
    pub storage: Option<Arc<dyn Probe>>,
    pub kv: Option<Arc<dyn Probe>>,
    pub ai: Option<Arc<dyn Probe>>,
}

/// Derives the probe set from resolved configuration, once, before any
/// probe runs.
///
/// Only configured providers are registered — an unconfigured provider
/// never appears in the resulting aggregate, so "off" stays distinct from
/// "broken". A provider that is configured but has no wired-up probe is
/// skipped with a warning; its connectivity is simply not determined.
pub fn probe_set_for_config(config: &ProviderConfig, backends: BackendProbes) -> ProbeSet {
    let mut set = ProbeSet::new();

    if config.has_database {
        match backends.database {
            Some(probe) => set = set.register(PROVIDER_DATABASE, probe),
            None => tracing::warn!(provider = PROVIDER_DATABASE, "configured but no probe wired"),
        }
    }
    if let Some(storage) = config.storage {
        match backends.storage {
            Some(probe) => set = set.register(storage.provider_name(), probe),
            None => {
                tracing::warn!(provider = %storage.provider_name(), "configured but no probe wired")
            }
        }
    }
    if config.has_kv {
        match backends.kv {
            Some(probe) => set = set.register(PROVIDER_KV, probe),
            None => tracing::warn!(provider = PROVIDER_KV, "configured but no probe wired"),
        }
    }
    if config.has_ai {
        match backends.ai {
            Some(probe) => set = set.register(PROVIDER_AI, probe),
            None => tracing::warn!(provider = PROVIDER_AI, "configured but no probe wired"),
        }
    }

    set
}
