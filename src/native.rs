/*
 * The slice of the native windowing layer the host consumes. The Win32
 * implementation lives in `window_common`; tests use the in-memory handle
 * table in `fake`, which models parenting, sizes and transitive destruction.
 */

use crate::message::MessageHandler;
use crate::types::{WindowHandle, WindowRequest};

use std::rc::Rc;

pub trait NativeWindowing {
    /// Creates a window, returning `WindowHandle::INVALID` on failure.
    fn create_window(&self, request: &WindowRequest) -> WindowHandle;

    /// Destroys a window and, natively, all of its descendants.
    fn destroy_window(&self, hwnd: WindowHandle) -> bool;

    /// Routes messages arriving at `hwnd` through `handler` before default handling.
    fn route_messages(&self, _hwnd: WindowHandle, _handler: Rc<dyn MessageHandler>) {}
}
