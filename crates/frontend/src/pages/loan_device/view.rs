use crate::shared::dom;
use contracts::domain::a001_device::{DeviceId, DeviceRow};
use contracts::shared::category_filter::CategoryFilter;
use contracts::shared::loan_selection::LoanSelection;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

pub const SELECTED_ROW_CLASS: &str = "selected-row";
pub const ACTIVE_FILTER_CLASS: &str = "active-filter";

/// Атрибуты строки с идентификатором, по порядку предпочтения
pub const ROW_ID_ATTRIBUTES: &[&str] = &["data-id", "data-device-id"];
/// Дочерний элемент кнопки выдачи для текста, чтобы не стирать иконку
pub const SUBMIT_LABEL_SELECTOR: &str = ".loan-button-label";

/// Атрибуты кнопки фильтра с категорией
pub const FILTER_ATTRIBUTES: &[&str] = &["data-filter", "data-category"];

/// Элементы страницы выдачи, в которые отражается состояние выбора
pub struct LoanDeviceDom {
    pub rows: Vec<(DeviceId, HtmlElement)>,
    pub filter_buttons: Vec<Element>,
    pub hidden: HtmlInputElement,
    pub submit: HtmlButtonElement,
    /// Куда писать подпись кнопки, см. [`submit_label_slot`]
    pub submit_label: Element,
    pub status: Option<Element>,
}

impl LoanDeviceDom {
    /// Полная перерисовка из состояния: отметки строк, видимость,
    /// активный фильтр, скрытое поле, статус и кнопка.
    pub fn render(&self, selection: &LoanSelection) {
        let visible = selection.visible_ids();
        for (id, row) in &self.rows {
            dom::set_class(row, SELECTED_ROW_CLASS, selection.is_selected(id));
            dom::set_shown(row, visible.contains(&id));
        }

        for button in &self.filter_buttons {
            let filter = button_filter(button);
            dom::set_class(button, ACTIVE_FILTER_CLASS, &filter == selection.filter());
        }

        let view = selection.view();
        self.hidden.set_value(&view.hidden_value);
        self.submit.set_disabled(!view.submit_enabled);
        self.submit_label.set_text_content(Some(view.submit_label.as_str()));
        if let Some(status) = &self.status {
            status.set_text_content(Some(view.status_text.as_str()));
        }
    }
}

/// Элемент для подписи: `.loan-button-label` внутри кнопки, если он есть,
/// иначе сама кнопка.
pub fn submit_label_slot(submit: &HtmlButtonElement) -> Element {
    let child = submit.query_selector(SUBMIT_LABEL_SELECTOR).ok().flatten();
    label_or_owner(child, submit.clone().into())
}

fn label_or_owner<T>(child: Option<T>, owner: T) -> T {
    child.unwrap_or(owner)
}

pub fn button_filter(button: &Element) -> CategoryFilter {
    CategoryFilter::from_attr(&dom::first_attribute(button, FILTER_ATTRIBUTES).unwrap_or_default())
}

/// Снимок строк таблицы. Строки без идентификатора пропускаются.
pub fn read_rows(rows: Vec<HtmlElement>) -> (Vec<DeviceRow>, Vec<(DeviceId, HtmlElement)>) {
    let mut device_rows = Vec::with_capacity(rows.len());
    let mut elements = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(id) = dom::first_attribute(&row, ROW_ID_ATTRIBUTES) else {
            log::warn!("device row without data-id skipped");
            continue;
        };
        let device = DeviceRow::from_attributes(
            &id,
            row.get_attribute("data-name").as_deref(),
            row.get_attribute("data-category").as_deref(),
            row.get_attribute("data-rubric").as_deref(),
            row.get_attribute("data-suffix").as_deref(),
        );
        elements.push((device.id.clone(), row));
        device_rows.push(device);
    }
    (device_rows, elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_goes_to_child_when_present() {
        assert_eq!(label_or_owner(Some("span"), "button"), "span");
        assert_eq!(label_or_owner(None, "button"), "button");
    }
}
