use contracts::shared::table_sort::{NaturalCollator, TextCollator};
use js_sys::{Array, Function, Intl, Object, Reflect};
use std::cmp::Ordering;
use wasm_bindgen::JsValue;

/// Сравнение строк через `Intl.Collator` браузера: локаль пользователя,
/// без учёта регистра, числа внутри строк сравниваются как числа.
/// Если Intl недоступен, используется [`NaturalCollator`].
pub struct IntlCollator {
    compare: Option<Function>,
}

impl IntlCollator {
    pub fn new() -> Self {
        let options = Object::new();
        let _ = Reflect::set(&options, &"numeric".into(), &JsValue::TRUE);
        let _ = Reflect::set(&options, &"sensitivity".into(), &"base".into());
        let collator = Intl::Collator::new(&Array::new(), &options);
        let compare = Some(collator.compare()).filter(|f| f.is_function());
        if compare.is_none() {
            log::warn!("Intl.Collator unavailable, falling back to natural order");
        }
        Self { compare }
    }
}

impl Default for IntlCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCollator for IntlCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let Some(compare) = &self.compare else {
            return NaturalCollator.compare(a, b);
        };
        match compare
            .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|v| v.as_f64())
        {
            Some(n) if n < 0.0 => Ordering::Less,
            Some(n) if n > 0.0 => Ordering::Greater,
            Some(_) => Ordering::Equal,
            None => NaturalCollator.compare(a, b),
        }
    }
}
