//! Общие типы и правила страницы выдачи устройств.
//!
//! Крейт не зависит от браузера: фронтенд передаёт сюда тексты ячеек и
//! атрибуты строк, а обратно получает то, что нужно отразить в DOM.

pub mod domain;
pub mod enums;
pub mod shared;
