//! Страница выдачи устройства: выбор строк таблицы и фильтр по категориям.
//!
//! Режим выбора (одна строка / несколько) и поведение выбора при смене
//! фильтра задаются конфигурацией страницы.

pub mod state;
pub mod view;

use crate::shared::dom::{self, BindError};
use contracts::domain::a001_device::DeviceId;
use contracts::shared::page_config::LoanPageConfig;
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

pub const DEVICES_TABLE_ID: &str = "devices-table";
pub const CATEGORY_FILTERS_ID: &str = "category-filters";
pub const SELECTED_FIELD_ID: &str = "selected_device_id";
pub const LOAN_BUTTON_ID: &str = "loan-button";
pub const SELECTION_STATUS_ID: &str = "selection-status";

pub const ROW_SELECTOR: &str = ".device-row";
pub const FILTER_SELECTOR: &str = ".filter-btn";

pub fn init(document: &Document, config: &LoanPageConfig) -> Result<(), BindError> {
    let table: Element = dom::by_id(document, DEVICES_TABLE_ID)?;
    let filters: Option<Element> = dom::optional_by_id(document, CATEGORY_FILTERS_ID);

    let submit: HtmlButtonElement = dom::by_id(document, LOAN_BUTTON_ID)?;
    let (device_rows, row_elements) = view::read_rows(dom::query_all::<HtmlElement>(&table, ROW_SELECTOR));
    let ui = Rc::new(view::LoanDeviceDom {
        rows: row_elements,
        filter_buttons: filters
            .as_ref()
            .map(|f| dom::query_all::<Element>(f, FILTER_SELECTOR))
            .unwrap_or_default(),
        hidden: dom::by_id(document, SELECTED_FIELD_ID)?,
        submit_label: view::submit_label_slot(&submit),
        submit,
        status: dom::optional_by_id(document, SELECTION_STATUS_ID),
    });

    let state = state::create_state(device_rows, config.clone());
    state.with_value(|s| {
        log::debug!("loan page: {} rows, {:?} selection", s.rows().len(), s.mode());
        ui.render(s);
    });

    let on_row = Rc::clone(&ui);
    dom::delegate(&table, "click", ROW_SELECTOR, move |row, _| {
        let Some(id) = dom::first_attribute(&row, view::ROW_ID_ATTRIBUTES) else {
            return;
        };
        let changed = state
            .try_update_value(|s| s.toggle(&DeviceId::new(id)))
            .unwrap_or(false);
        if changed {
            state.with_value(|s| {
                on_row.render(s);
                log::debug!("selected devices: {:?}", s.hidden_value());
            });
        }
    })?;

    if let Some(filters) = filters {
        let on_filter = Rc::clone(&ui);
        dom::delegate(&filters, "click", FILTER_SELECTOR, move |button, _| {
            let filter = view::button_filter(&button);
            let cleared = state
                .try_update_value(|s| s.apply_filter(filter))
                .unwrap_or(false);
            if cleared {
                log::debug!("selection cleared by filter change");
            }
            state.with_value(|s| on_filter.render(s));
        })?;
    } else {
        log::warn!("{}", BindError::Missing(CATEGORY_FILTERS_ID.to_string()));
    }

    Ok(())
}
