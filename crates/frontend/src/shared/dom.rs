//! Привязка к DOM страницы, которую отрендерил сервер.
//!
//! Элементы ищутся по известным идентификаторам. Если элемента нет или он
//! другого типа, возвращается [`BindError`], и компонент пропускается.
//!
//! # Пример
//!
//! ```rust,ignore
//! let table: Element = by_id(&document, "devices-table")?;
//! delegate(&table, "click", ".device-row", move |row, _event| {
//!     log::debug!("row clicked: {:?}", row.get_attribute("data-id"));
//! })?;
//! ```

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Ошибки привязки компонента к странице
#[derive(Debug, Error)]
pub enum BindError {
    #[error("element #{0} not found")]
    Missing(String),

    #[error("element #{id} is not {expected}")]
    WrongType { id: String, expected: &'static str },

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn document() -> Result<Document, BindError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BindError::Missing("document".to_string()))
}

/// Элемент по id, приведённый к нужному типу
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::Missing(id.to_string()))?;
    element.dyn_into::<T>().map_err(|_| BindError::WrongType {
        id: id.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

/// Необязательный элемент: отсутствие не ошибка
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Все элементы внутри `root`, подходящие под селектор и нужного типа
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// То же, что [`query_all`], но от корня документа
pub fn query_document<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Подписка на событие. Замыкание живёт до закрытия страницы.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Элемент под селектором, ближайший к цели события, но только внутри `container`
pub fn matched_target(container: &Element, event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let matched = target.closest(selector).ok()??;
    container.contains(Some(matched.as_ref())).then_some(matched)
}

/// Делегирование: один обработчик на контейнере, вызывается с элементом,
/// который совпал с селектором. Клики мимо совпадений игнорируются.
pub fn delegate<F>(container: &Element, event: &str, selector: &'static str, mut handler: F) -> Result<(), BindError>
where
    F: FnMut(Element, Event) + 'static,
{
    let scope = container.clone();
    listen(container, event, move |e: Event| {
        if let Some(matched) = matched_target(&scope, &e, selector) {
            handler(matched, e);
        }
    })
}

/// Показ через снятие inline `display`: элемент возвращается к своему
/// стилю из таблицы стилей. Подходит для строк таблицы.
pub fn set_shown(element: &HtmlElement, shown: bool) {
    let style = element.style();
    let _ = if shown {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}

/// Явное значение inline `display`, перебивает `display: none` из таблицы стилей
pub fn set_display(element: &HtmlElement, display: &str) {
    let _ = element.style().set_property("display", display);
}

/// Добавить или убрать класс
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Первый непустой атрибут из списка
pub fn first_attribute(element: &Element, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| element.get_attribute(name))
        .find(|value| !value.is_empty())
}
