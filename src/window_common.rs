/*
 * Win32 implementation of `NativeWindowing`. Window creation goes through
 * `CreateWindowExW` with the control id in the menu slot, as Win32 expects for
 * child windows, and failures are mapped to the invalid handle. Destruction
 * calls `DestroyWindow`, which also destroys every child of the window.
 */

use crate::controls::host_window_handler;
use crate::message::MessageHandler;
use crate::native::NativeWindowing;
use crate::types::{WindowClass, WindowHandle, WindowRequest};

use std::ffi::c_void;
use std::rc::Rc;
use windows::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, HMENU, WINDOW_EX_STYLE, WINDOW_STYLE,
    },
};
use windows::core::{PCWSTR, w};

// Common control class names
pub(crate) const WC_STATIC: PCWSTR = w!("STATIC");
pub(crate) const WC_LISTBOX: PCWSTR = w!("LISTBOX");

pub(crate) fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

pub(crate) fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

fn class_name(class: WindowClass) -> PCWSTR {
    match class {
        WindowClass::Static => WC_STATIC,
        WindowClass::ListBox => WC_LISTBOX,
    }
}

/// Native windowing on the calling UI thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Windowing;

impl NativeWindowing for Win32Windowing {
    fn create_window(&self, request: &WindowRequest) -> WindowHandle {
        let created = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                class_name(request.class),
                w!(""),
                WINDOW_STYLE(request.style.bits()),
                request.x,
                request.y,
                request.width,
                request.height,
                Some(to_hwnd(request.parent)),
                Some(HMENU(request.control_id.raw() as isize as *mut c_void)),
                None,
                None,
            )
        };

        match created {
            Ok(hwnd) => {
                log::debug!(
                    "Win32Windowing: created '{}' HWND {hwnd:?} (ControlID {}) under {:?}",
                    request.class.class_name(),
                    request.control_id.raw(),
                    request.parent
                );
                from_hwnd(hwnd)
            }
            Err(err) => {
                log::error!(
                    "Win32Windowing: CreateWindowExW for '{}' under {:?} failed: {err:?}",
                    request.class.class_name(),
                    request.parent
                );
                WindowHandle::INVALID
            }
        }
    }

    fn destroy_window(&self, hwnd: WindowHandle) -> bool {
        match unsafe { DestroyWindow(to_hwnd(hwnd)) } {
            Ok(()) => {
                log::debug!("Win32Windowing: DestroyWindow initiated for {hwnd:?}");
                true
            }
            Err(err) => {
                log::error!("Win32Windowing: DestroyWindow for {hwnd:?} failed: {err:?}");
                false
            }
        }
    }

    fn route_messages(&self, hwnd: WindowHandle, handler: Rc<dyn MessageHandler>) {
        host_window_handler::install_message_route(to_hwnd(hwnd), handler);
    }
}
