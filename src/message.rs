/*
 * The message routing hook. The embedding framework (or the Win32 subclass
 * installed on the host window) offers every message targeting the host to a
 * `MessageHandler`. Anything a handler does not explicitly process must come
 * back as `MessageOutcome::NOT_HANDLED` so default platform handling runs.
 */

use crate::types::{MessageOutcome, WindowHandle};

pub trait MessageHandler {
    fn handle_message(
        &self,
        _hwnd: WindowHandle,
        _msg: u32,
        _wparam: usize,
        _lparam: isize,
    ) -> MessageOutcome {
        MessageOutcome::NOT_HANDLED
    }
}

/// Handler that intercepts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl MessageHandler for PassThrough {}

#[inline]
pub(crate) fn loword_from_wparam(wparam: usize) -> i32 {
    (wparam & 0xFFFF) as i32
}

/// High word, sign-extended so negative notification codes survive.
#[inline]
pub(crate) fn hiword_from_wparam(wparam: usize) -> i32 {
    ((wparam >> 16) & 0xFFFF) as u16 as i16 as i32
}
