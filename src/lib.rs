/*
 * Provides the public entry point for the controlhost crate, which embeds a
 * native Win32 list box inside a window tree owned by another GUI framework.
 * `NativeControlHost` creates a static host window under the framework's
 * parent, places the list box inside it, exposes both handles, routes host
 * messages through an injectable `MessageHandler`, and tears the pair down.
 *
 * The lifecycle logic is written against the `NativeWindowing` trait and only
 * uses platform-agnostic types, so it compiles and tests on every platform.
 * The Win32 implementation of that trait is compiled on Windows only.
 */
pub mod config;
pub mod controls;
pub mod error;
pub mod host;
pub mod message;
pub mod native;
pub mod types;
#[cfg(target_os = "windows")]
pub(crate) mod window_common;

pub use config::{HOST_CONTROL_ID, HostConfig, HostDimensions, LISTBOX_CONTROL_ID};
pub use controls::listbox_handler::{
    ListBoxNotification, ListBoxNotificationHandler, ListBoxNotificationKind,
    decode_listbox_notification,
};
pub use error::{PlatformError, Result as PlatformResult};
pub use host::{HostState, NativeControlHost};
pub use message::{MessageHandler, PassThrough};
pub use native::NativeWindowing;
pub use types::{ControlId, MessageOutcome, StyleFlags, WindowClass, WindowHandle, WindowRequest};
#[cfg(target_os = "windows")]
pub use window_common::Win32Windowing;
