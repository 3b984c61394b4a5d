use contracts::shared::page_config::LoanPageConfig;
use web_sys::Document;

/// Id тега `<script type="application/json">` с настройками страницы
pub const CONFIG_SCRIPT_ID: &str = "loan-page-config";

/// Load page configuration
///
/// Search order:
/// 1. JSON inside `<script id="loan-page-config">` rendered by the server
/// 2. Falls back to embedded default config
pub fn load_config(document: &Document) -> LoanPageConfig {
    let script_text = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    resolve_config(script_text.as_deref())
}

pub fn resolve_config(script_text: Option<&str>) -> LoanPageConfig {
    if let Some(text) = script_text.filter(|t| !t.trim().is_empty()) {
        match LoanPageConfig::from_json(text) {
            Ok(config) => {
                log::info!("Loaded page config from #{}", CONFIG_SCRIPT_ID);
                return config;
            }
            Err(e) => log::warn!("{}, using defaults", e),
        }
    }

    log::debug!("Using default embedded configuration");
    LoanPageConfig::embedded().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page_config::{FilterSelectionPolicy, SelectionMode};

    #[test]
    fn test_script_config_is_used() {
        let config = resolve_config(Some(r#"{"selection_mode": "multi", "filter_policy": "preserve"}"#));
        assert_eq!(config.selection_mode, SelectionMode::Multi);
        assert_eq!(config.filter_policy, FilterSelectionPolicy::Preserve);
    }

    #[test]
    fn test_missing_or_broken_config_falls_back() {
        assert_eq!(resolve_config(None), LoanPageConfig::default());
        assert_eq!(resolve_config(Some("   ")), LoanPageConfig::default());
        assert_eq!(resolve_config(Some("{not json")), LoanPageConfig::default());
    }
}
