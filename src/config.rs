use serde::Deserialize;

/// Provider name for the database probe.
pub const PROVIDER_DATABASE: &str = "database";
/// Provider name for the key-value cache probe.
pub const PROVIDER_KV: &str = "kv";
/// Provider name for the AI provider probe.
pub const PROVIDER_AI: &str = "ai";

/// Configured blob storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    VercelBlob,
    CloudflareR2,
    AwsS3,
}

impl StorageBackend {
    /// Short label used in provider names and UI rows.
    pub fn label(&self) -> &'static str {
        match self {
            StorageBackend::VercelBlob => "vercel-blob",
            StorageBackend::CloudflareR2 => "cloudflare-r2",
            StorageBackend::AwsS3 => "aws-s3",
        }
    }

    /// Provider name as it appears in an aggregate status, e.g.
    /// `storage:vercel-blob`.
    pub fn provider_name(&self) -> String {
        format!("storage:{}", self.label())
    }
}

/// Resolved provider configuration.
///
/// This is plain data handed in by an external configuration layer (an
/// environment-variable loader or similar) — the crate never reads raw
/// environment strings itself. A provider absent here is simply not probed;
/// it never shows up in an aggregate status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub has_database: bool,
    #[serde(default)]
    pub storage: Option<StorageBackend>,
    #[serde(default)]
    pub has_kv: bool,
    #[serde(default)]
    pub has_ai: bool,
}

impl ProviderConfig {
    /// Names of all configured providers, in checklist order.
    pub fn configured_providers(&self) -> Vec<String> {
        let mut providers = Vec::new();
        if self.has_database {
            providers.push(PROVIDER_DATABASE.to_string());
        }
        if let Some(storage) = self.storage {
            providers.push(storage.provider_name());
        }
        if self.has_kv {
            providers.push(PROVIDER_KV.to_string());
        }
        if self.has_ai {
            providers.push(PROVIDER_AI.to_string());
        }
        providers
    }
}
