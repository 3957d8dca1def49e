/*
 * Platform-agnostic types shared by the host, the native windowing contract and
 * the message routing hook. Nothing here touches Win32, so the lifecycle logic
 * built on top of these types compiles and tests on every platform.
 */

use std::ops::BitOr;

/*
 * Opaque reference to a native window. The handle is only meaningful while the
 * native resource exists; the windowing subsystem owns it, callers merely
 * refer to it. The zero value is the null handle returned by failed creation.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const INVALID: WindowHandle = WindowHandle(0);

    pub fn is_invalid(self) -> bool {
        self.0 == 0
    }
}

impl Default for WindowHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Identifies a child window among its siblings for notification routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(i32);

impl ControlId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }
}

/*
 * Creation-time window style bits. The values match the native constants so
 * the Win32 backend can pass them through untouched. Styles are fixed once a
 * window exists; changing them means destroying and recreating the window.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleFlags(u32);

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags(0);
    /// Child of its parent rather than a top-level window.
    pub const CHILD: StyleFlags = StyleFlags(0x4000_0000);
    /// Shown immediately after creation.
    pub const VISIBLE: StyleFlags = StyleFlags(0x1000_0000);
    /// List box sends interaction notifications to its parent.
    pub const NOTIFY: StyleFlags = StyleFlags(0x0000_0001);
    pub const VSCROLL: StyleFlags = StyleFlags(0x0020_0000);
    pub const BORDER: StyleFlags = StyleFlags(0x0080_0000);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: StyleFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for StyleFlags {
    type Output = StyleFlags;

    fn bitor(self, rhs: StyleFlags) -> StyleFlags {
        StyleFlags(self.0 | rhs.0)
    }
}

/// Native window classes the host creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowClass {
    /// Plain container surface used as the host.
    Static,
    /// Scrollable, selectable list surface used as the hosted control.
    ListBox,
}

impl WindowClass {
    pub fn class_name(self) -> &'static str {
        match self {
            WindowClass::Static => "static",
            WindowClass::ListBox => "listbox",
        }
    }
}

/// Everything a single native window creation call needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRequest {
    pub class: WindowClass,
    pub style: StyleFlags,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub parent: WindowHandle,
    pub control_id: ControlId,
}

/*
 * Result of offering a window message to a `MessageHandler`. When `handled` is
 * false the message continues to the default platform handling and `result`
 * is ignored.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageOutcome {
    pub handled: bool,
    pub result: isize,
}

impl MessageOutcome {
    pub const NOT_HANDLED: MessageOutcome = MessageOutcome {
        handled: false,
        result: 0,
    };

    pub const fn handled(result: isize) -> Self {
        Self {
            handled: true,
            result,
        }
    }
}
