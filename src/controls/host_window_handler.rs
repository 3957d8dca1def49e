/*
 * Win32 message routing for the host window. The static host is subclassed
 * with a window procedure that offers every message to the injected
 * `MessageHandler` first and falls back to the original STATIC procedure when
 * the handler declines. The subclass state lives behind GWLP_USERDATA and is
 * released on WM_NCDESTROY.
 */

use crate::message::MessageHandler;
use crate::types::WindowHandle;

use std::rc::Rc;
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        CallWindowProcW, DefWindowProcW, GWLP_USERDATA, GWLP_WNDPROC, GetWindowLongPtrW,
        SetWindowLongPtrW, WM_NCDESTROY, WNDPROC,
    },
};

struct RouteContext {
    previous_proc: isize,
    handler: Rc<dyn MessageHandler>,
}

/*
 * Installs the routing procedure on `hwnd`. The original procedure is read
 * before the swap so the context is complete before any message can reach
 * `routing_host_proc`.
 */
pub(crate) fn install_message_route(hwnd: HWND, handler: Rc<dyn MessageHandler>) {
    if hwnd.is_invalid() {
        log::warn!("HostWindowHandler: refusing to route messages for an invalid HWND");
        return;
    }

    unsafe {
        let previous_proc = GetWindowLongPtrW(hwnd, GWLP_WNDPROC);
        if previous_proc == 0 {
            log::warn!("HostWindowHandler: HWND {hwnd:?} has no window procedure to chain to");
            return;
        }

        let context_ptr = Box::into_raw(Box::new(RouteContext {
            previous_proc,
            handler,
        }));
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, context_ptr as isize);
        #[allow(clippy::fn_to_numeric_cast)]
        SetWindowLongPtrW(hwnd, GWLP_WNDPROC, routing_host_proc as isize);
    }
    log::debug!("HostWindowHandler: routing messages for HWND {hwnd:?}");
}

unsafe fn call_previous(
    previous_proc: isize,
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe {
        let prev: WNDPROC = std::mem::transmute(previous_proc);
        CallWindowProcW(prev, hwnd, msg, wparam, lparam)
    }
}

unsafe extern "system" fn routing_host_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe {
        let context_ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut RouteContext;
        if context_ptr.is_null() {
            return DefWindowProcW(hwnd, msg, wparam, lparam);
        }
        let previous_proc = (*context_ptr).previous_proc;

        if msg == WM_NCDESTROY {
            SetWindowLongPtrW(hwnd, GWLP_WNDPROC, previous_proc);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            drop(Box::from_raw(context_ptr));
            return call_previous(previous_proc, hwnd, msg, wparam, lparam);
        }

        // Hold our own reference; the handler may destroy the window re-entrantly.
        let handler = Rc::clone(&(*context_ptr).handler);
        let outcome =
            handler.handle_message(WindowHandle(hwnd.0 as isize), msg, wparam.0, lparam.0);
        if outcome.handled {
            return LRESULT(outcome.result);
        }
        call_previous(previous_proc, hwnd, msg, wparam, lparam)
    }
}
