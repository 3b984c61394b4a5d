//! Сортировка строк таблицы на клиенте.
//!
//! # Использование
//!
//! В HTML таблицы:
//! ```html
//! <table id="devices-table" data-sortable>
//!     <thead>
//!         <tr>
//!             <th data-sort-type="string">Rubric ID <span class="sort-indicator"></span></th>
//!             <th data-sort-type="number">Price <span class="sort-indicator"></span></th>
//!         </tr>
//!     </thead>
//!     <tbody>...</tbody>
//! </table>
//! ```
//!
//! Клик по заголовку сортирует по этой колонке, повторный клик меняет
//! направление. Строки переставляются прямо в `<tbody>`.

use crate::shared::dom::{self, BindError};
use crate::shared::intl_collator::IntlCollator;
use contracts::shared::table_sort::{indicator_for, sort_order, SortDirection, SortIndicator, SortKind, SortState};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTableCellElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

/// Селектор таблиц, которые получают сортировку по клику на заголовок
pub const SORTABLE_TABLES: &str = "table[data-sortable]";

/// Сортировщик таблиц страницы. Направления хранит сам, общий на все таблицы.
#[derive(Clone)]
pub struct TableSorter {
    state: StoredValue<SortState>,
    collator: Rc<IntlCollator>,
}

impl TableSorter {
    pub fn new() -> Self {
        Self {
            state: StoredValue::new(SortState::new()),
            collator: Rc::new(IntlCollator::new()),
        }
    }

    /// Отсортировать таблицу `table_id` по колонке `column`.
    /// Возвращает направление, в котором таблица теперь отсортирована.
    pub fn sort(
        &self,
        document: &Document,
        table_id: &str,
        column: usize,
        kind: SortKind,
    ) -> Result<SortDirection, BindError> {
        let table: HtmlTableElement = dom::by_id(document, table_id)?;
        Ok(self.sort_table(&table, table_id, column, kind))
    }

    fn sort_table(&self, table: &HtmlTableElement, table_id: &str, column: usize, kind: SortKind) -> SortDirection {
        let direction = self
            .state
            .try_update_value(|state| state.next(table_id, column))
            .unwrap_or(SortDirection::Ascending);

        if let Some(body) = table
            .t_bodies()
            .item(0)
            .and_then(|b| b.dyn_into::<HtmlTableSectionElement>().ok())
        {
            let rows = body_rows(&body);
            let cells: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();
            let order = sort_order(&cells, kind, direction, &*self.collator);
            for index in order {
                let _ = body.append_child(&rows[index]);
            }
            log::debug!(
                "#{}: sorted {} rows by column {} ({:?}, {:?})",
                table_id,
                rows.len(),
                column,
                kind,
                direction
            );
        }

        update_indicators(table, column, direction);
        direction
    }

    /// Клики по `th[data-sort-type]` таблицы запускают сортировку
    pub fn bind(&self, document: &Document, table: &HtmlTableElement) -> Result<(), BindError> {
        let table_id = table.id();
        if table_id.is_empty() {
            return Err(BindError::Missing("<sortable table id>".to_string()));
        }

        let sorter = self.clone();
        let document = document.clone();
        dom::delegate(table, "click", "th[data-sort-type]", move |header: Element, _| {
            let Ok(header) = header.dyn_into::<HtmlTableCellElement>() else {
                return;
            };
            let Ok(column) = usize::try_from(header.cell_index()) else {
                return;
            };
            let kind = SortKind::from_attr(&header.get_attribute("data-sort-type").unwrap_or_default());
            if let Err(e) = sorter.sort(&document, &table_id, column, kind) {
                log::warn!("sort failed: {}", e);
            }
        })
    }
}

impl Default for TableSorter {
    fn default() -> Self {
        Self::new()
    }
}

fn body_rows(body: &HtmlTableSectionElement) -> Vec<HtmlTableRowElement> {
    let rows = body.rows();
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|row| row.dyn_into::<HtmlTableRowElement>().ok())
        .collect()
}

fn cell_text(row: &HtmlTableRowElement, column: usize) -> String {
    u32::try_from(column)
        .ok()
        .and_then(|c| row.cells().item(c))
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Сортируемой колонке ставим ▲/▼, остальным нейтральный индикатор
fn update_indicators(table: &HtmlTableElement, column: usize, direction: SortDirection) {
    for header in dom::query_all::<HtmlTableCellElement>(table, "thead th") {
        let Ok(index) = usize::try_from(header.cell_index()) else {
            continue;
        };
        let indicator = indicator_for(index, column, direction);
        for class in SortIndicator::all_classes() {
            dom::set_class(&header, class, class == indicator.css_class());
        }
        if let Ok(Some(glyph)) = header.query_selector(".sort-indicator") {
            glyph.set_text_content(Some(indicator.glyph()));
        }
    }
}

/// Привязать сортировку ко всем таблицам `table[data-sortable]` на странице
pub fn init(document: &Document, sorter: &TableSorter) -> usize {
    let tables = dom::query_document::<HtmlTableElement>(document, SORTABLE_TABLES);
    let mut bound = 0;
    for table in &tables {
        match sorter.bind(document, table) {
            Ok(()) => bound += 1,
            Err(e) => log::warn!("sortable table skipped: {}", e),
        }
    }
    bound
}
