//! Supabase project configuration from environment variables.

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    pub anon_key: String,
    /// Privileged key. Enables compensating account deletes and is used for the
    /// profile insert when present.
    pub service_role_key: Option<String>,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            service_role_key: None,
        }
    }

    /// Builder method to set the service-role key.
    pub fn with_service_role_key(mut self, key: impl Into<String>) -> Self {
        self.service_role_key = Some(key.into());
        self
    }

    /// Create config from `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the optional
    /// `SUPABASE_SERVICE_ROLE_KEY`.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let url = std::env::var("SUPABASE_URL").map_err(|_| "SUPABASE_URL not set")?;
        let anon_key =
            std::env::var("SUPABASE_ANON_KEY").map_err(|_| "SUPABASE_ANON_KEY not set")?;
        let service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let mut config = Self::new(url, anon_key);
        config.service_role_key = service_role_key;
        Ok(config)
    }

    /// Bearer token for table writes made without a user session.
    pub fn write_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or(&self.anon_key)
    }
}
