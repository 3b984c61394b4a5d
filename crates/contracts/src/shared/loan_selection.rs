//! Выбор устройств для выдачи и фильтр по категориям.
//!
//! Всё, что фронтенд показывает пользователю (скрытое поле, строка
//! статуса, кнопка), вычисляется из [`LoanSelection`], поэтому отметки
//! строк и значение поля не могут разойтись.

use crate::domain::a001_device::{DeviceId, DeviceRow};
use crate::shared::category_filter::CategoryFilter;
use crate::shared::page_config::{FilterSelectionPolicy, LoanPageConfig, SelectionMode};

pub const SUBMIT_LABEL: &str = "Loan Device";
pub const EMPTY_SINGLE_STATUS: &str = "No device selected";

/// Снимок того, что нужно отразить в DOM после изменения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub hidden_value: String,
    pub status_text: String,
    pub submit_enabled: bool,
    pub submit_label: String,
}

#[derive(Debug, Clone)]
pub struct LoanSelection {
    rows: Vec<DeviceRow>,
    config: LoanPageConfig,
    selected: Vec<DeviceId>,
    filter: CategoryFilter,
}

impl LoanSelection {
    /// Начальное состояние: ничего не выбрано, фильтр "All"
    pub fn new(rows: Vec<DeviceRow>, config: LoanPageConfig) -> Self {
        Self {
            rows,
            config,
            selected: Vec::new(),
            filter: CategoryFilter::All,
        }
    }

    pub fn rows(&self) -> &[DeviceRow] {
        &self.rows
    }

    pub fn mode(&self) -> SelectionMode {
        self.config.selection_mode
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Выбранные идентификаторы в порядке выбора
    pub fn selected(&self) -> &[DeviceId] {
        &self.selected
    }

    pub fn is_selected(&self, id: &DeviceId) -> bool {
        self.selected.contains(id)
    }

    pub fn is_visible(&self, row: &DeviceRow) -> bool {
        self.filter.matches(&row.category)
    }

    /// Строки, которые проходят текущий фильтр, в порядке таблицы
    pub fn visible_ids(&self) -> Vec<&DeviceId> {
        self.rows
            .iter()
            .filter(|row| self.is_visible(row))
            .map(|row| &row.id)
            .collect()
    }

    fn row(&self, id: &DeviceId) -> Option<&DeviceRow> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Клик по строке. Возвращает `false`, если строки с таким id нет.
    pub fn toggle(&mut self, id: &DeviceId) -> bool {
        if self.row(id).is_none() {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            return true;
        }
        match self.config.selection_mode {
            SelectionMode::Single => self.selected = vec![id.clone()],
            SelectionMode::Multi => self.selected.push(id.clone()),
        }
        true
    }

    /// Смена фильтра. Возвращает `true`, если при этом был сброшен выбор.
    pub fn apply_filter(&mut self, filter: CategoryFilter) -> bool {
        self.filter = filter;
        match self.config.filter_policy {
            FilterSelectionPolicy::Clear if !self.selected.is_empty() => {
                self.selected.clear();
                true
            }
            _ => false,
        }
    }

    pub fn hidden_value(&self) -> String {
        self.selected
            .iter()
            .map(DeviceId::as_str)
            .collect::<Vec<_>>()
            .join(self.config.delimiter.as_str())
    }

    pub fn status_text(&self) -> String {
        match self.config.selection_mode {
            SelectionMode::Multi => format!("({} selected)", self.selected.len()),
            SelectionMode::Single => match self.selected.first() {
                Some(id) => {
                    let name = self.row(id).map(|row| row.name.as_str()).unwrap_or(id.as_str());
                    format!("Selected Device: {} (ID: {})", name, id)
                }
                None => EMPTY_SINGLE_STATUS.to_string(),
            },
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn submit_label(&self) -> String {
        match (self.config.selection_mode, self.selected.len()) {
            (SelectionMode::Single, _) | (SelectionMode::Multi, 0) => SUBMIT_LABEL.to_string(),
            (SelectionMode::Multi, 1) => "Loan 1 Device".to_string(),
            (SelectionMode::Multi, n) => format!("Loan {} Devices", n),
        }
    }

    pub fn view(&self) -> SelectionView {
        SelectionView {
            hidden_value: self.hidden_value(),
            status_text: self.status_text(),
            submit_enabled: self.submit_enabled(),
            submit_label: self.submit_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<DeviceRow> {
        vec![
            DeviceRow::from_attributes("A", Some("Dell XPS"), Some("Laptop"), Some("SHC-LQ-1"), Some("1")),
            DeviceRow::from_attributes("B", Some("Lenovo T14"), Some("Laptop"), Some("SHC-LQ-2"), Some("2")),
            DeviceRow::from_attributes("C", Some("USB-C 65W"), Some("Charger"), Some("SHC-LP-1"), Some("1")),
        ]
    }

    fn selection(mode: SelectionMode, policy: FilterSelectionPolicy) -> LoanSelection {
        let config = LoanPageConfig {
            selection_mode: mode,
            filter_policy: policy,
            ..LoanPageConfig::default()
        };
        LoanSelection::new(rows(), config)
    }

    fn id(value: &str) -> DeviceId {
        DeviceId::new(value)
    }

    #[test]
    fn test_initial_state() {
        let s = selection(SelectionMode::Single, FilterSelectionPolicy::Clear);
        assert!(s.selected().is_empty());
        assert_eq!(s.filter(), &CategoryFilter::All);
        assert_eq!(
            s.view(),
            SelectionView {
                hidden_value: String::new(),
                status_text: EMPTY_SINGLE_STATUS.to_string(),
                submit_enabled: false,
                submit_label: SUBMIT_LABEL.to_string(),
            }
        );
    }

    #[test]
    fn test_single_mode_replaces_previous_row() {
        let mut s = selection(SelectionMode::Single, FilterSelectionPolicy::Clear);
        assert!(s.toggle(&id("A")));
        assert!(s.toggle(&id("B")));
        assert_eq!(s.selected(), &[id("B")]);
        assert!(!s.is_selected(&id("A")));
        assert_eq!(s.hidden_value(), "B");
        assert_eq!(s.status_text(), "Selected Device: Lenovo T14 (ID: B)");
        assert!(s.submit_enabled());
    }

    #[test]
    fn test_single_mode_click_again_deselects() {
        let mut s = selection(SelectionMode::Single, FilterSelectionPolicy::Clear);
        s.toggle(&id("A"));
        s.toggle(&id("A"));
        assert!(s.selected().is_empty());
        assert_eq!(s.hidden_value(), "");
        assert!(!s.submit_enabled());
    }

    #[test]
    fn test_multi_mode_keeps_selection_order() {
        let mut s = selection(SelectionMode::Multi, FilterSelectionPolicy::Clear);
        s.toggle(&id("A"));
        s.toggle(&id("B"));
        assert_eq!(s.hidden_value(), "A,B");
        assert_eq!(s.status_text(), "(2 selected)");
        assert_eq!(s.submit_label(), "Loan 2 Devices");

        s.toggle(&id("A"));
        assert_eq!(s.hidden_value(), "B");
        assert_eq!(s.submit_label(), "Loan 1 Device");

        s.toggle(&id("B"));
        assert_eq!(s.status_text(), "(0 selected)");
        assert_eq!(s.submit_label(), SUBMIT_LABEL);
        assert!(!s.submit_enabled());
    }

    #[test]
    fn test_unknown_row_is_ignored() {
        let mut s = selection(SelectionMode::Multi, FilterSelectionPolicy::Clear);
        assert!(!s.toggle(&id("Z")));
        assert!(s.selected().is_empty());
    }

    #[test]
    fn test_filter_shows_matching_rows() {
        let mut s = selection(SelectionMode::Single, FilterSelectionPolicy::Clear);
        s.apply_filter(CategoryFilter::from_attr("Laptop"));
        assert_eq!(s.visible_ids(), vec![&id("A"), &id("B")]);
        s.apply_filter(CategoryFilter::from_attr("All"));
        assert_eq!(s.visible_ids().len(), 3);
    }

    #[test]
    fn test_filter_clears_selection() {
        let mut s = selection(SelectionMode::Multi, FilterSelectionPolicy::Clear);
        s.toggle(&id("A"));
        assert!(s.apply_filter(CategoryFilter::from_attr("Charger")));
        assert!(s.selected().is_empty());
        assert!(!s.apply_filter(CategoryFilter::All));
    }

    #[test]
    fn test_filter_preserves_hidden_selection() {
        let mut s = selection(SelectionMode::Single, FilterSelectionPolicy::Preserve);
        s.toggle(&id("A"));
        assert!(!s.apply_filter(CategoryFilter::from_attr("Charger")));
        assert_eq!(s.hidden_value(), "A");
        assert_eq!(s.visible_ids(), vec![&id("C")]);
        assert!(s.is_selected(&id("A")));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoanPageConfig {
            selection_mode: SelectionMode::Multi,
            delimiter: ";".to_string(),
            ..LoanPageConfig::default()
        };
        let mut s = LoanSelection::new(rows(), config);
        s.toggle(&id("C"));
        s.toggle(&id("A"));
        assert_eq!(s.hidden_value(), "C;A");
    }
}
