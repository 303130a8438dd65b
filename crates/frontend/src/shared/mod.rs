pub mod api_utils;
pub mod components;
pub mod content;
pub mod icons;
pub mod language;
pub mod storage;
pub mod theme;
