pub mod catalog;
pub mod components;
pub mod head;
pub mod icons;
pub mod locale;
pub mod storage;
pub mod theme;
