/// Метка кнопки, показывающей все строки
pub const ALL_CATEGORIES: &str = "All";

/// Активный фильтр категорий над таблицей устройств
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Разбор атрибута кнопки фильтра; пустое значение и "All" означают все строки
    pub fn from_attr(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// Значение атрибута, соответствующее фильтру
    pub fn as_attr(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, row_category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => category == row_category,
        }
    }
}
