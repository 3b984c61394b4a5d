use serde::{Deserialize, Serialize};

/// Префикс по умолчанию для категорий без сопоставления.
/// Пустая строка: выбор плейсхолдера в списке очищает поле.
pub const DEFAULT_RUBRIC_PREFIX: &str = "";

/// Категории устройств, выдаваемых во временное пользование
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    Laptop,
    Charger,
    #[serde(rename = "iPad")]
    IPad,
    Headphones,
    Other,
}

impl DeviceCategory {
    /// Метка категории так, как она приходит из выпадающего списка
    pub fn label(&self) -> &'static str {
        match self {
            DeviceCategory::Laptop => "Laptop",
            DeviceCategory::Charger => "Charger",
            DeviceCategory::IPad => "iPad",
            DeviceCategory::Headphones => "Headphones",
            DeviceCategory::Other => "Other",
        }
    }

    /// Префикс Rubric ID для категории
    pub fn rubric_prefix(&self) -> &'static str {
        match self {
            DeviceCategory::Laptop => "SHC-LQ-",
            DeviceCategory::Charger => "SHC-LP-",
            DeviceCategory::IPad => "SHC-IQ-",
            DeviceCategory::Headphones => "SHC-HP-",
            DeviceCategory::Other => "SHC-",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<DeviceCategory> {
        vec![
            DeviceCategory::Laptop,
            DeviceCategory::Charger,
            DeviceCategory::IPad,
            DeviceCategory::Headphones,
            DeviceCategory::Other,
        ]
    }

    /// Парсинг из метки (точное совпадение, с учётом регистра)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Laptop" => Some(DeviceCategory::Laptop),
            "Charger" => Some(DeviceCategory::Charger),
            "iPad" => Some(DeviceCategory::IPad),
            "Headphones" => Some(DeviceCategory::Headphones),
            "Other" => Some(DeviceCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Префикс для значения из выпадающего списка; несопоставленные значения
/// получают [`DEFAULT_RUBRIC_PREFIX`].
pub fn rubric_prefix_for(label: &str) -> &'static str {
    DeviceCategory::from_label(label)
        .map(|category| category.rubric_prefix())
        .unwrap_or(DEFAULT_RUBRIC_PREFIX)
}

/// Полный Rubric ID: префикс категории + введённый суффикс
pub fn compose_rubric_id(prefix: &str, suffix: &str) -> String {
    format!("{}{}", prefix, suffix.trim())
}
