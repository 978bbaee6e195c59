//! Runtime settings of the web client.

/// Deployment URL of the script backend, baked in at build time.
/// When unset the page is assumed to be served by the script itself.
pub const BACKEND_URL: Option<&str> = option_env!("FMS_BACKEND_URL");

/// localStorage key of the saved session
pub const SESSION_STORAGE_KEY: &str = "fms_user";

/// Background refresh period of the data store
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Delay before the "not confirmed" notice after a write
pub const UNCONFIRMED_NOTICE_DELAY_MS: u32 = 1_500;

/// Query parameter mirroring the active view
pub const VIEW_QUERY_PARAM: &str = "view";
