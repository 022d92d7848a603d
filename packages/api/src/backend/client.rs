//! Process-wide Supabase client using the OnceCell pattern.

use tokio::sync::OnceCell;

use super::{SupabaseClient, SupabaseConfig};

static CLIENT: OnceCell<SupabaseClient> = OnceCell::const_new();

/// Get or initialize the shared Supabase client.
/// Reads its settings with [`SupabaseConfig::from_env`] on first use.
pub async fn get_client() -> Result<&'static SupabaseClient, String> {
    CLIENT
        .get_or_try_init(|| async {
            let config = SupabaseConfig::from_env()?;
            tracing::info!(
                url = %config.url,
                compensation = config.service_role_key.is_some(),
                "Supabase client configured"
            );
            Ok::<_, String>(SupabaseClient::new(config))
        })
        .await
}
