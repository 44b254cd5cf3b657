pub mod browser;
pub mod classes;
pub mod debounce;
pub mod id;
pub mod motion;
pub mod storage;
pub mod style;
pub mod text;
pub mod theme;
