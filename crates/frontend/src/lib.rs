pub mod pages;
pub mod shared;

use pages::{admin_devices, loan_device};
use shared::dom::{self, BindError};
use shared::table_sort::{self, TableSorter};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Привязывает все компоненты к странице. Компонент, которому не хватает
/// элементов, пропускается, остальные продолжают работать.
pub fn bind_page(document: &Document) {
    let config = shared::config::load_config(document);

    report("rubric prefix", admin_devices::rubric_prefix::init(document));
    report(
        "delete confirmation",
        admin_devices::delete_confirm::init(document)
            .map(|forms| log::debug!("delete confirmation: {} forms", forms)),
    );
    report("import confirmation", admin_devices::import_confirm::init(document));

    let sorter = TableSorter::new();
    let tables = table_sort::init(document, &sorter);
    log::debug!("table sort: {} tables", tables);

    report("loan selection", loan_device::init(document, &config));
}

fn report(component: &str, result: Result<(), BindError>) {
    match result {
        Ok(()) => log::debug!("{}: bound", component),
        // На странице просто нет этого компонента
        Err(e @ BindError::Missing(_)) => log::info!("{}: skipped, {}", component, e),
        Err(e) => log::warn!("{}: skipped, {}", component, e),
    }
}

/// `document.readyState` пока страница ещё разбирается
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Ok(document) = dom::document() else {
        return;
    };

    if is_loading(&document.ready_state()) {
        let ready = document.clone();
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_| bind_page(&ready)) {
            log::warn!("page binding not scheduled: {}", e);
        }
    } else {
        bind_page(&document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_waits_only_while_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
