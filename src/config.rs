/*
 * Immutable creation-time configuration for the hosted windows: the style
 * bits, control identifiers and window classes for the host and its list box,
 * plus the pixel dimensions shared by both.
 */

use crate::types::{ControlId, StyleFlags, WindowClass};

pub const HOST_CONTROL_ID: ControlId = ControlId::new(2);
pub const LISTBOX_CONTROL_ID: ControlId = ControlId::new(1);

/*
 * Native pixel size of the hosted region. Framework units are fractional;
 * they are truncated toward zero. Zero and negative values are kept as-is and
 * handed to the native layer, which decides what a degenerate window means.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostDimensions {
    pub width: i32,
    pub height: i32,
}

impl HostDimensions {
    pub fn from_framework_units(height: f64, width: f64) -> Self {
        // `as` truncates toward zero and saturates; NaN becomes 0.
        Self {
            width: width as i32,
            height: height as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub host_class: WindowClass,
    pub host_style: StyleFlags,
    pub host_id: ControlId,
    pub child_class: WindowClass,
    pub child_style: StyleFlags,
    pub child_id: ControlId,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host_class: WindowClass::Static,
            host_style: StyleFlags::CHILD | StyleFlags::VISIBLE,
            host_id: HOST_CONTROL_ID,
            child_class: WindowClass::ListBox,
            child_style: StyleFlags::CHILD
                | StyleFlags::VISIBLE
                | StyleFlags::NOTIFY
                | StyleFlags::VSCROLL
                | StyleFlags::BORDER,
            child_id: LISTBOX_CONTROL_ID,
        }
    }
}
