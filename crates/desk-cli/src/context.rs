use anyhow::Context;
use desk_api::ApiClient;
use desk_auth::Session;
use desk_config::DeskConfig;
use desk_view::Formatter;

/// Shared resources for one command invocation.
pub struct AppContext {
    pub config: DeskConfig,
    pub api: ApiClient,
    pub session: Session,
    pub formatter: Formatter,
}

impl AppContext {
    /// Build the API client and pick up the stored session, if any.
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config.api).context("failed to build API client")?;
        let session = desk_auth::resolve_session();
        tracing::debug!(
            base_url = api.base_url(),
            signed_in = session.has_token(),
            role = ?session.role(),
            "context ready"
        );
        let formatter = Formatter::from_config(&config.display);
        Ok(Self {
            config,
            api,
            session,
            formatter,
        })
    }
}
