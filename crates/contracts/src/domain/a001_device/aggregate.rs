use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор устройства так, как его отдаёт сервер в `data-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub String);

impl DeviceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Table row
// ============================================================================

/// Строка таблицы устройств. Рендерится сервером, на клиенте меняется
/// только её видимость и отметка выбора.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRow {
    pub id: DeviceId,
    pub name: String,
    pub category: String,
    pub rubric: String,
    pub suffix: String,
}

impl DeviceRow {
    /// Собрать строку из атрибутов `data-*`. Пустое имя заменяется
    /// rubric-кодом, а затем идентификатором.
    pub fn from_attributes(
        id: &str,
        name: Option<&str>,
        category: Option<&str>,
        rubric: Option<&str>,
        suffix: Option<&str>,
    ) -> Self {
        let rubric = rubric.unwrap_or_default().to_string();
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| Some(rubric.clone()).filter(|r| !r.is_empty()))
            .unwrap_or_else(|| id.to_string());

        Self {
            id: DeviceId::new(id),
            name,
            category: category.unwrap_or_default().to_string(),
            rubric,
            suffix: suffix.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallbacks() {
        let row = DeviceRow::from_attributes("7", Some("Dell XPS"), Some("Laptop"), Some("SHC-LQ-7"), None);
        assert_eq!(row.name, "Dell XPS");

        let row = DeviceRow::from_attributes("7", Some("  "), Some("Laptop"), Some("SHC-LQ-7"), None);
        assert_eq!(row.name, "SHC-LQ-7");

        let row = DeviceRow::from_attributes("7", None, None, None, None);
        assert_eq!(row.name, "7");
        assert_eq!(row.category, "");
    }
}
