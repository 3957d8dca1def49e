#[cfg(target_os = "windows")]
pub(crate) mod host_window_handler;
pub mod listbox_handler;
