//! Общая доменная часть сайта BEN FARES: каталог, языки, ссылки для заказа.
//!
//! Крейт не зависит от браузера и тестируется нативно.

pub mod catalog;
pub mod domain;
pub mod enums;
pub mod order;
pub mod shared;
