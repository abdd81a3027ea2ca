#[derive(Clone, Copy, Debug)]
pub struct UiConfig {
    /// Window property holding the hosted auth client.
    pub store_global: &'static str,
    /// `localStorage` key for the last opened view.
    pub preference_key: &'static str,
    pub log_level: log::Level,
}

impl UiConfig {
    pub fn load() -> Self {
        Self {
            store_global: option_env!("CRM_STORE_GLOBAL").unwrap_or("__CRM_STORE__"),
            preference_key: "crm.lastView",
            log_level: option_env!("CRM_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::Level::Info),
        }
    }
}
