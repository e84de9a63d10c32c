pub mod cookies;
pub mod navigation;
pub mod time;
