use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tokio_util::sync::CancellationToken;

use crate::traits::Probe;

/// A single provider's connection failure.
/// Produced only by a failed probe; by the time it reaches a caller it is
/// data, not an error to propagate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionError {
    pub provider: String,
    pub message: String,
}

/// Outcome of one provider probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The backend answered.
    Ok,
    /// The backend is unreachable or misconfigured.
    Failed(ConnectionError),
    /// The probe was abandoned by a cancellation signal before it settled.
    /// Distinct from [`ProbeOutcome::Failed`]: the backend's state is
    /// undetermined, not known-bad.
    Cancelled,
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok)
    }

    /// The connection error, if this outcome is a failure.
    pub fn error(&self) -> Option<&ConnectionError> {
        match self {
            ProbeOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Serialize for ProbeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ProbeOutcome::Ok => {
                map.serialize_entry("ok", &true)?;
            }
            ProbeOutcome::Failed(err) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", &err.message)?;
            }
            ProbeOutcome::Cancelled => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("cancelled", &true)?;
            }
        }
        map.end()
    }
}

/// The merged result of running all configured probes.
///
/// Exactly one entry per probed provider; a provider that was never
/// configured is absent, never present with a synthetic success. The status
/// is an immutable snapshot: it is assembled once all probes have settled
/// and never mutated afterwards.
///
/// Serializes to `{ "<provider>": { "ok": bool, "error"?: string } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateStatus {
    entries: BTreeMap<String, ProbeOutcome>,
}

impl AggregateStatus {
    /// The outcome for a provider, or `None` if it was not probed.
    pub fn get(&self, provider: &str) -> Option<&ProbeOutcome> {
        self.entries.get(provider)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by provider name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ProbeOutcome)> {
        self.entries.iter()
    }

    /// All connection errors, ordered by provider name.
    pub fn errors(&self) -> Vec<&ConnectionError> {
        self.entries.values().filter_map(|o| o.error()).collect()
    }
}

/// The set of probes to run, keyed by provider name.
///
/// Registration order is preserved for execution; the aggregate is keyed by
/// name, so ordering never affects the result. The set is assembled once,
/// from configuration, before any probe executes.
#[derive(Default)]
pub struct ProbeSet {
    probes: Vec<(String, Arc<dyn Probe>)>,
}

impl ProbeSet {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Register a probe under a provider name.
    /// Registering the same name twice replaces the earlier probe.
    pub fn register(mut self, provider: impl Into<String>, probe: Arc<dyn Probe>) -> Self {
        let provider = provider.into();
        if let Some(existing) = self.probes.iter_mut().find(|(name, _)| *name == provider) {
            existing.1 = probe;
        } else {
            self.probes.push((provider, probe));
        }
        self
    }

    /// Registered provider names, in registration order.
    pub fn providers(&self) -> Vec<&str> {
        self.probes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

/// Runs every probe in the set concurrently and waits for all of them to
/// settle before producing the aggregate — no probe blocks another, and a
/// failure never short-circuits its siblings.
///
/// This function itself has no failure mode: "everything failed" is an
/// [`AggregateStatus`] where every entry is an error, not an `Err`. A probe
/// that panics is isolated by its task boundary and recorded as failed.
///
/// Cancellation is cooperative: when `cancel` fires, still-pending probes
/// are abandoned and recorded as [`ProbeOutcome::Cancelled`]; probes that
/// have already settled keep their real outcome.
pub async fn test_all(probes: &ProbeSet, cancel: Option<&CancellationToken>) -> AggregateStatus {
    // Snapshot the probe set up front; later registrations are not observed.
    let handles: Vec<_> = probes
        .probes
        .iter()
        .map(|(name, probe)| {
            let handle = tokio::spawn(run_probe(
                name.clone(),
                Arc::clone(probe),
                cancel.cloned(),
            ));
            (name.clone(), handle)
        })
        .collect();

    let settled = join_all(handles.into_iter().map(|(name, handle)| async move {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => {
                tracing::error!(provider = %name, "probe panicked");
                ProbeOutcome::Failed(ConnectionError {
                    provider: name.clone(),
                    message: "probe panicked".to_string(),
                })
            }
            Err(_) => ProbeOutcome::Cancelled,
        };
        (name, outcome)
    }))
    .await;

    AggregateStatus {
        entries: settled.into_iter().collect(),
    }
}

async fn run_probe(
    provider: String,
    probe: Arc<dyn Probe>,
    cancel: Option<CancellationToken>,
) -> ProbeOutcome {
    let result = match cancel {
        Some(token) => tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(provider = %provider, "probe abandoned by cancellation");
                return ProbeOutcome::Cancelled;
            }
            result = probe.check() => result,
        },
        None => probe.check().await,
    };

    match result {
        Ok(()) => {
            tracing::debug!(provider = %provider, "probe ok");
            ProbeOutcome::Ok
        }
        Err(e) => {
            tracing::debug!(provider = %provider, error = %e, "probe failed");
            ProbeOutcome::Failed(ConnectionError {
                provider,
                message: e.to_string(),
            })
        }
    }
}
