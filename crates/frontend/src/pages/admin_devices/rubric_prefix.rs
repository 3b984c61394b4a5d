use crate::shared::dom::{self, BindError};
use contracts::enums::{compose_rubric_id, rubric_prefix_for};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

pub const CATEGORY_SELECT_ID: &str = "device_category";
pub const RUBRIC_INPUT_ID: &str = "rubric_id_input";
pub const SUFFIX_INPUT_ID: &str = "suffix_id_input";
pub const RUBRIC_PREVIEW_ID: &str = "rubric_id_preview";

/// Смена категории перезаписывает поле Rubric ID префиксом категории
/// и переводит фокус на поле суффикса.
pub fn init(document: &Document) -> Result<(), BindError> {
    let select: HtmlSelectElement = dom::by_id(document, CATEGORY_SELECT_ID)?;
    let rubric: HtmlInputElement = dom::by_id(document, RUBRIC_INPUT_ID)?;
    let suffix: Option<HtmlInputElement> = dom::optional_by_id(document, SUFFIX_INPUT_ID);
    let preview: Option<Element> = dom::optional_by_id(document, RUBRIC_PREVIEW_ID);

    let select_for_change = select.clone();
    let rubric_for_change = rubric.clone();
    let suffix_for_change = suffix.clone();
    let preview_for_change = preview.clone();
    dom::listen(&select, "change", move |_| {
        let category = select_for_change.value();
        let prefix = rubric_prefix_for(&category);
        rubric_for_change.set_value(prefix);
        log::debug!("category {:?} -> rubric prefix {:?}", category, prefix);

        let suffix_value = suffix_for_change.as_ref().map(HtmlInputElement::value);
        update_preview(preview_for_change.as_ref(), &preview_text(prefix, suffix_value.as_deref()));
        if let Some(suffix) = &suffix_for_change {
            let _ = suffix.focus();
        }
    })?;

    // Превью полного Rubric ID, если на странице есть куда его вывести
    if let (Some(suffix), Some(preview)) = (suffix, preview) {
        let suffix_for_input = suffix.clone();
        dom::listen(&suffix, "input", move |_| {
            let text = preview_text(&rubric.value(), Some(&suffix_for_input.value()));
            update_preview(Some(&preview), &text);
        })?;
    }
    Ok(())
}

/// Без поля суффикса превью показывает один префикс
fn preview_text(prefix: &str, suffix: Option<&str>) -> String {
    compose_rubric_id(prefix, suffix.unwrap_or_default())
}

fn update_preview(preview: Option<&Element>, text: &str) {
    if let Some(preview) = preview {
        preview.set_text_content(Some(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_follows_category_without_suffix_field() {
        assert_eq!(preview_text(rubric_prefix_for("Laptop"), None), "SHC-LQ-");
        assert_eq!(preview_text(rubric_prefix_for("Charger"), None), "SHC-LP-");
        assert_eq!(preview_text(rubric_prefix_for(""), None), "");
    }

    #[test]
    fn test_preview_with_suffix() {
        assert_eq!(preview_text(rubric_prefix_for("iPad"), Some(" 042 ")), "SHC-IQ-042");
    }
}
