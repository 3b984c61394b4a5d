use crate::shared::dom::{self, BindError};
use contracts::shared::confirmation::{delete_prompt, SubmitDecision};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

pub const DELETE_FORMS: &str = r#"form[name="delete-form"]"#;
const DELETE_ID_FIELD: &str = r#"input[name="delete_id"]"#;

/// Перед отправкой каждой формы удаления спрашиваем подтверждение.
/// Отказ отменяет отправку, запрос на сервер не уходит.
pub fn init(document: &Document) -> Result<usize, BindError> {
    let forms = dom::query_document::<HtmlFormElement>(document, DELETE_FORMS);
    for form in &forms {
        let form_for_submit = form.clone();
        dom::listen(form, "submit", move |event: Event| {
            let device_id = delete_id(&form_for_submit);
            let answer = web_sys::window()
                .and_then(|w| w.confirm_with_message(&delete_prompt(&device_id)).ok());

            if SubmitDecision::from_answer(answer) == SubmitDecision::Cancel {
                event.prevent_default();
                log::debug!("delete of device {} cancelled", device_id);
            }
        })?;
    }
    Ok(forms.len())
}

fn delete_id(form: &HtmlFormElement) -> String {
    form.query_selector(DELETE_ID_FIELD)
        .ok()
        .flatten()
        .and_then(|field| field.dyn_into::<HtmlInputElement>().ok())
        .map(|field| field.value())
        .unwrap_or_default()
}
