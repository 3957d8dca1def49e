/*
 * List box notifications arrive at the host window as WM_COMMAND, with the
 * control id in the low word of wParam, the notification code in the high
 * word and the list box handle in lParam. This module decodes them and
 * provides a `MessageHandler` that forwards them to a callback, leaving every
 * other message to default handling.
 */

use crate::message::{MessageHandler, hiword_from_wparam, loword_from_wparam};
use crate::types::{ControlId, MessageOutcome, WindowHandle};

pub const WM_COMMAND: u32 = 0x0111;

// List box notification codes
const LBN_ERRSPACE: i32 = -2;
const LBN_SELCHANGE: i32 = 1;
const LBN_DBLCLK: i32 = 2;
const LBN_SELCANCEL: i32 = 3;
const LBN_SETFOCUS: i32 = 4;
const LBN_KILLFOCUS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBoxNotificationKind {
    SelectionChanged,
    DoubleClicked,
    SelectionCancelled,
    FocusGained,
    FocusLost,
    OutOfMemory,
}

impl ListBoxNotificationKind {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            LBN_SELCHANGE => Some(Self::SelectionChanged),
            LBN_DBLCLK => Some(Self::DoubleClicked),
            LBN_SELCANCEL => Some(Self::SelectionCancelled),
            LBN_SETFOCUS => Some(Self::FocusGained),
            LBN_KILLFOCUS => Some(Self::FocusLost),
            LBN_ERRSPACE => Some(Self::OutOfMemory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBoxNotification {
    pub control_id: ControlId,
    pub kind: ListBoxNotificationKind,
    pub hwnd_listbox: WindowHandle,
}

/// Decodes a list box notification; `None` for anything else.
pub fn decode_listbox_notification(
    msg: u32,
    wparam: usize,
    lparam: isize,
) -> Option<ListBoxNotification> {
    // Menu and accelerator commands carry no control handle.
    if msg != WM_COMMAND || lparam == 0 {
        return None;
    }
    let kind = ListBoxNotificationKind::from_code(hiword_from_wparam(wparam))?;
    Some(ListBoxNotification {
        control_id: ControlId::new(loword_from_wparam(wparam)),
        kind,
        hwnd_listbox: WindowHandle(lparam),
    })
}

/*
 * Hands notifications from one list box to `on_notification` and reports
 * them handled. Notifications from other controls and all other messages fall
 * through untouched.
 */
pub struct ListBoxNotificationHandler<F>
where
    F: Fn(ListBoxNotification),
{
    control_id: ControlId,
    on_notification: F,
}

impl<F> ListBoxNotificationHandler<F>
where
    F: Fn(ListBoxNotification),
{
    pub fn new(control_id: ControlId, on_notification: F) -> Self {
        Self {
            control_id,
            on_notification,
        }
    }
}

impl<F> MessageHandler for ListBoxNotificationHandler<F>
where
    F: Fn(ListBoxNotification),
{
    fn handle_message(
        &self,
        _hwnd: WindowHandle,
        msg: u32,
        wparam: usize,
        lparam: isize,
    ) -> MessageOutcome {
        match decode_listbox_notification(msg, wparam, lparam) {
            Some(notification) if notification.control_id == self.control_id => {
                log::debug!(
                    "ListBoxHandler: {:?} from ControlID {}",
                    notification.kind,
                    notification.control_id.raw()
                );
                (self.on_notification)(notification);
                MessageOutcome::handled(0)
            }
            _ => MessageOutcome::NOT_HANDLED,
        }
    }
}
