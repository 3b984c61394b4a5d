//! Подтверждение массового импорта через модальное окно.
//!
//! Выбор файла открывает окно. "Отмена" очищает выбранный файл и закрывает
//! окно, "Подтвердить" закрывает окно и отправляет форму.

use crate::shared::dom::{self, BindError};
use contracts::shared::confirmation::{ImportAction, ImportDialog};
use leptos::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

pub const IMPORT_FORM_ID: &str = "import-form";
pub const IMPORT_FILE_ID: &str = "import-file";
pub const IMPORT_MODAL_ID: &str = "import-modal";
pub const IMPORT_CANCEL_ID: &str = "import-cancel";
pub const IMPORT_CONFIRM_ID: &str = "import-confirm";
pub const IMPORT_FILE_NAME_ID: &str = "import-file-name";
/// Класс открытого окна, для оформления
pub const MODAL_OPEN_CLASS: &str = "modal-open";

/// Окно на странице обычно скрыто классом `.modal`, поэтому при открытии
/// `display` задаётся явно.
fn modal_display(open: bool) -> &'static str {
    if open {
        "block"
    } else {
        "none"
    }
}

#[derive(Clone)]
struct ImportDom {
    form: HtmlFormElement,
    file: HtmlInputElement,
    modal: HtmlElement,
    file_name: Option<Element>,
}

impl ImportDom {
    fn render(&self, dialog: &ImportDialog) {
        let open = dialog.is_open();
        dom::set_display(&self.modal, modal_display(open));
        dom::set_class(&self.modal, MODAL_OPEN_CLASS, open);
        if let Some(label) = &self.file_name {
            label.set_text_content(dialog.prompt().as_deref());
        }
    }
}

pub fn init(document: &Document) -> Result<(), BindError> {
    let ui = ImportDom {
        form: dom::by_id(document, IMPORT_FORM_ID)?,
        file: dom::by_id(document, IMPORT_FILE_ID)?,
        modal: dom::by_id(document, IMPORT_MODAL_ID)?,
        file_name: dom::optional_by_id(document, IMPORT_FILE_NAME_ID),
    };
    let cancel: Element = dom::by_id(document, IMPORT_CANCEL_ID)?;
    let confirm: Element = dom::by_id(document, IMPORT_CONFIRM_ID)?;

    let dialog = StoredValue::new(ImportDialog::default());
    dialog.with_value(|d| ui.render(d));

    let on_change = ui.clone();
    dom::listen(&ui.file, "change", move |_| {
        let file_name = on_change
            .file
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        dialog.update_value(|d| d.file_chosen(file_name));
        dialog.with_value(|d| on_change.render(d));
    })?;

    let on_cancel = ui.clone();
    dom::listen(&cancel, "click", move |event: Event| {
        event.prevent_default();
        if dialog.try_update_value(|d| d.cancel()) == Some(ImportAction::ClearFile) {
            on_cancel.file.set_value("");
        }
        dialog.with_value(|d| on_cancel.render(d));
    })?;

    let on_confirm = ui;
    dom::listen(&confirm, "click", move |event: Event| {
        event.prevent_default();
        let action = dialog.try_update_value(|d| d.confirm());
        dialog.with_value(|d| on_confirm.render(d));
        if action == Some(ImportAction::Submit) {
            log::debug!("submitting import form");
            if let Err(e) = on_confirm.form.submit() {
                log::warn!("import submit failed: {}", BindError::from(e));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_modal_gets_explicit_display() {
        let mut dialog = ImportDialog::default();
        assert_eq!(modal_display(dialog.is_open()), "none");

        dialog.file_chosen(Some("devices.csv".to_string()));
        assert_eq!(modal_display(dialog.is_open()), "block");

        dialog.cancel();
        assert_eq!(modal_display(dialog.is_open()), "none");
    }
}
