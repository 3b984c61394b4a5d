use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Режим выбора строк в таблице устройств
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

/// Что происходит с выбором при смене фильтра категорий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelectionPolicy {
    /// Смена фильтра сбрасывает выбор
    #[default]
    Clear,
    /// Выбор сохраняется, скрытые строки остаются выбранными
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanPageConfig {
    pub selection_mode: SelectionMode,
    pub filter_policy: FilterSelectionPolicy,
    /// Разделитель идентификаторов в скрытом поле
    pub delimiter: String,
}

impl Default for LoanPageConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            filter_policy: FilterSelectionPolicy::Clear,
            delimiter: ",".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page config delimiter must not be empty")]
    EmptyDelimiter,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
{
    "selection_mode": "single",
    "filter_policy": "clear",
    "delimiter": ","
}
"#;

impl LoanPageConfig {
    /// Разбор JSON-конфигурации страницы. Отсутствующие поля берутся по умолчанию.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LoanPageConfig = serde_json::from_str(json)?;
        if config.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(config)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }
}
