pub mod app;
pub mod settings_panel;
pub mod swipe_log;
pub mod swipe_pad;
