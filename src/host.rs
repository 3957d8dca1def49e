/*
 * `NativeControlHost` bridges a foreign window tree and a native list box. It
 * creates a static host window under a framework-supplied parent, creates the
 * list box inside that host, hands both handles out, routes host messages to
 * an injected `MessageHandler`, and destroys the pair through the host handle.
 *
 * All calls must happen on the UI thread that owns the framework's message
 * loop. The injected handler is held in an `Rc`, which keeps the host `!Send`.
 */

use crate::config::{HostConfig, HostDimensions};
use crate::error::{PlatformError, Result as PlatformResult};
use crate::message::{MessageHandler, PassThrough};
use crate::native::NativeWindowing;
use crate::types::{MessageOutcome, WindowHandle, WindowRequest};

use std::rc::Rc;

/// Lifecycle of the hosted window pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Unbuilt,
    Building,
    Built,
    Destroyed,
}

pub struct NativeControlHost<W: NativeWindowing> {
    windowing: W,
    config: HostConfig,
    dimensions: HostDimensions,
    handler: Rc<dyn MessageHandler>,
    state: HostState,
    hwnd_host: WindowHandle,
    hwnd_listbox: WindowHandle,
}

impl<W: NativeWindowing> NativeControlHost<W> {
    /// Dimensions are framework units and get truncated to whole pixels.
    pub fn new(height: f64, width: f64, windowing: W) -> Self {
        Self::with_config(height, width, windowing, HostConfig::default())
    }

    pub fn with_config(height: f64, width: f64, windowing: W, config: HostConfig) -> Self {
        Self {
            windowing,
            config,
            dimensions: HostDimensions::from_framework_units(height, width),
            handler: Rc::new(PassThrough),
            state: HostState::Unbuilt,
            hwnd_host: WindowHandle::INVALID,
            hwnd_listbox: WindowHandle::INVALID,
        }
    }

    /// Replaces the pass-through hook. Takes effect for the next build.
    pub fn with_message_handler(mut self, handler: Rc<dyn MessageHandler>) -> Self {
        self.handler = handler;
        self
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn dimensions(&self) -> HostDimensions {
        self.dimensions
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn windowing(&self) -> &W {
        &self.windowing
    }

    /// The host window handle; invalid unless the host is built.
    pub fn host_handle(&self) -> WindowHandle {
        self.hwnd_host
    }

    /*
     * The list box handle, for callers that populate or query the control
     * directly. Invalid unless built, and also invalid when the host was
     * created but the list box was not.
     */
    pub fn child_handle(&self) -> WindowHandle {
        self.hwnd_listbox
    }

    /*
     * Creates the host under `hwnd_parent`, then the list box inside the host,
     * and returns the host handle for the framework to adopt. A failed native
     * creation is reported only through an invalid handle: a failed host leaves
     * the component unbuilt, a failed list box still leaves a built host.
     * Building is allowed from `Unbuilt` and `Destroyed`; a rebuild always
     * produces a fresh pair.
     */
    pub fn build_host(&mut self, hwnd_parent: WindowHandle) -> PlatformResult<WindowHandle> {
        match self.state {
            HostState::Unbuilt | HostState::Destroyed => {}
            state => {
                log::warn!("ControlHost: build_host rejected in state {state:?}");
                return Err(PlatformError::InvalidState {
                    operation: "build_host",
                    state,
                });
            }
        }

        log::debug!(
            "ControlHost: building {}x{} host under parent {hwnd_parent:?}",
            self.dimensions.width,
            self.dimensions.height
        );
        self.state = HostState::Building;
        self.hwnd_host = WindowHandle::INVALID;
        self.hwnd_listbox = WindowHandle::INVALID;

        let hwnd_host = self.windowing.create_window(&WindowRequest {
            class: self.config.host_class,
            style: self.config.host_style,
            x: 0,
            y: 0,
            width: self.dimensions.width,
            height: self.dimensions.height,
            parent: hwnd_parent,
            control_id: self.config.host_id,
        });
        if hwnd_host.is_invalid() {
            log::warn!("ControlHost: host window creation failed under parent {hwnd_parent:?}");
            self.state = HostState::Unbuilt;
            return Ok(WindowHandle::INVALID);
        }
        self.hwnd_host = hwnd_host;
        self.windowing
            .route_messages(hwnd_host, Rc::clone(&self.handler));

        let hwnd_listbox = self.windowing.create_window(&WindowRequest {
            class: self.config.child_class,
            style: self.config.child_style,
            x: 0,
            y: 0,
            width: self.dimensions.width,
            height: self.dimensions.height,
            parent: hwnd_host,
            control_id: self.config.child_id,
        });
        if hwnd_listbox.is_invalid() {
            log::warn!("ControlHost: list box creation failed inside host {hwnd_host:?}");
        }
        self.hwnd_listbox = hwnd_listbox;
        self.state = HostState::Built;

        log::debug!("ControlHost: built host {hwnd_host:?} with list box {hwnd_listbox:?}");
        Ok(hwnd_host)
    }

    /// Offers a message to the injected handler.
    pub fn handle_message(
        &self,
        hwnd: WindowHandle,
        msg: u32,
        wparam: usize,
        lparam: isize,
    ) -> MessageOutcome {
        self.handler.handle_message(hwnd, msg, wparam, lparam)
    }

    /*
     * Destroys the built host; the native layer takes the list box down with
     * it. Only the handle returned by the current build is accepted. A native
     * destruction failure is logged and otherwise ignored.
     */
    pub fn destroy(&mut self, hwnd: WindowHandle) -> PlatformResult<()> {
        if self.state != HostState::Built || hwnd != self.hwnd_host {
            log::warn!(
                "ControlHost: destroy of {hwnd:?} rejected in state {:?} (host {:?})",
                self.state,
                self.hwnd_host
            );
            return Err(PlatformError::InvalidState {
                operation: "destroy",
                state: self.state,
            });
        }

        if !self.windowing.destroy_window(hwnd) {
            log::error!("ControlHost: DestroyWindow failed for host {hwnd:?}");
        }
        self.hwnd_host = WindowHandle::INVALID;
        self.hwnd_listbox = WindowHandle::INVALID;
        self.state = HostState::Destroyed;
        log::debug!("ControlHost: destroyed host {hwnd:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fake::FakeWindowing;
    use crate::types::{ControlId, StyleFlags, WindowClass};

    use std::cell::RefCell;

    fn built_host(height: f64, width: f64) -> (NativeControlHost<FakeWindowing>, WindowHandle) {
        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        let mut host = NativeControlHost::new(height, width, fake);
        host.build_host(parent).expect("build from Unbuilt");
        (host, parent)
    }

    #[test]
    fn build_creates_host_under_parent_and_listbox_under_host() {
        // Arrange
        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        let mut host = NativeControlHost::new(100.0, 200.0, fake);

        // Act
        let hwnd_host = host.build_host(parent).expect("build");

        // Assert
        assert!(!hwnd_host.is_invalid());
        assert_eq!(host.state(), HostState::Built);
        assert_eq!(host.host_handle(), hwnd_host);

        let fake = host.windowing();
        let host_window = fake.window(hwnd_host).expect("host exists");
        assert_eq!(host_window.request.parent, parent);
        assert_eq!(host_window.request.class, WindowClass::Static);
        assert_eq!(host_window.request.control_id, ControlId::new(2));
        assert_eq!(
            host_window.request.style,
            StyleFlags::CHILD | StyleFlags::VISIBLE
        );
        assert_eq!((host_window.request.width, host_window.request.height), (200, 100));

        let hwnd_listbox = host.child_handle();
        assert!(!hwnd_listbox.is_invalid());
        let listbox = fake.window(hwnd_listbox).expect("list box exists");
        assert_eq!(listbox.request.parent, hwnd_host);
        assert_eq!(listbox.request.class, WindowClass::ListBox);
        assert_eq!(listbox.request.control_id, ControlId::new(1));
        assert_eq!(listbox.request.style.bits(), 0x50A0_0001);
        assert_eq!((listbox.request.x, listbox.request.y), (0, 0));
        assert_eq!((listbox.request.width, listbox.request.height), (200, 100));
    }

    #[test]
    fn positive_dimensions_always_yield_matching_pair() {
        for (height, width) in [(1.0, 1.0), (37.5, 12.9), (480.0, 640.0), (4096.2, 1.7)] {
            let (host, _) = built_host(height, width);
            let fake = host.windowing();
            let expected = (width as i32, height as i32);
            let h = fake.window(host.host_handle()).expect("host");
            let c = fake.window(host.child_handle()).expect("child");
            assert_eq!((h.request.width, h.request.height), expected);
            assert_eq!((c.request.width, c.request.height), expected);
            assert_eq!(c.request.parent, host.host_handle());
        }
    }

    #[test]
    fn host_is_created_before_listbox() {
        let (host, parent) = built_host(10.0, 10.0);
        let created = host.windowing().created();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].class, WindowClass::Static);
        assert_eq!(created[0].parent, parent);
        assert_eq!(created[1].class, WindowClass::ListBox);
        assert_eq!(created[1].parent, host.host_handle());
    }

    #[test]
    fn child_handle_is_invalid_until_built() {
        let fake = FakeWindowing::new();
        let host = NativeControlHost::new(10.0, 10.0, fake);
        assert_eq!(host.state(), HostState::Unbuilt);
        assert!(host.host_handle().is_invalid());
        assert!(host.child_handle().is_invalid());
    }

    #[test]
    fn host_messages_are_routed_through_injected_handler() {
        struct Probe {
            seen: RefCell<Vec<WindowHandle>>,
        }
        impl MessageHandler for Probe {
            fn handle_message(
                &self,
                hwnd: WindowHandle,
                _msg: u32,
                _wparam: usize,
                _lparam: isize,
            ) -> MessageOutcome {
                self.seen.borrow_mut().push(hwnd);
                MessageOutcome::NOT_HANDLED
            }
        }

        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        let probe = Rc::new(Probe {
            seen: RefCell::new(Vec::new()),
        });
        let mut host = NativeControlHost::new(10.0, 10.0, fake)
            .with_message_handler(probe.clone());
        let hwnd_host = host.build_host(parent).expect("build");

        assert!(host.windowing().has_route(hwnd_host));
        host.windowing().dispatch(hwnd_host, 0x0111, 0, 0);
        assert_eq!(*probe.seen.borrow(), vec![hwnd_host]);
    }

    #[test]
    fn destroy_takes_listbox_down_with_host() {
        // Arrange
        let (mut host, parent) = built_host(100.0, 200.0);
        let hwnd_host = host.host_handle();
        let hwnd_listbox = host.child_handle();

        // Act
        host.destroy(hwnd_host).expect("destroy built host");

        // Assert
        let fake = host.windowing();
        assert!(!fake.is_window(hwnd_host));
        assert!(!fake.is_window(hwnd_listbox));
        assert!(fake.is_window(parent));
        assert_eq!(fake.destroy_calls(), vec![hwnd_host]);
        assert_eq!(host.state(), HostState::Destroyed);
        assert!(host.host_handle().is_invalid());
        assert!(host.child_handle().is_invalid());
    }

    #[test]
    fn double_destroy_is_rejected_without_native_call() {
        let (mut host, _) = built_host(10.0, 10.0);
        let hwnd_host = host.host_handle();
        host.destroy(hwnd_host).expect("first destroy");

        let err = host.destroy(hwnd_host).expect_err("second destroy");
        assert_eq!(
            err,
            PlatformError::InvalidState {
                operation: "destroy",
                state: HostState::Destroyed,
            }
        );
        assert_eq!(host.windowing().destroy_calls().len(), 1);
    }

    #[test]
    fn destroy_before_build_is_rejected() {
        let fake = FakeWindowing::new();
        let mut host = NativeControlHost::new(10.0, 10.0, fake);
        let err = host.destroy(WindowHandle(0x1000)).expect_err("unbuilt");
        assert_eq!(
            err,
            PlatformError::InvalidState {
                operation: "destroy",
                state: HostState::Unbuilt,
            }
        );
        assert!(host.windowing().destroy_calls().is_empty());
    }

    #[test]
    fn destroy_of_foreign_handle_is_rejected() {
        let (mut host, parent) = built_host(10.0, 10.0);
        assert!(host.destroy(parent).is_err());
        assert!(host.destroy(WindowHandle::INVALID).is_err());
        assert_eq!(host.state(), HostState::Built);
        assert!(host.windowing().is_window(parent));
        assert!(host.windowing().destroy_calls().is_empty());
    }

    #[test]
    fn building_twice_is_rejected() {
        let (mut host, parent) = built_host(10.0, 10.0);
        let before = host.host_handle();
        let err = host.build_host(parent).expect_err("already built");
        assert_eq!(
            err,
            PlatformError::InvalidState {
                operation: "build_host",
                state: HostState::Built,
            }
        );
        assert_eq!(host.host_handle(), before);
        assert_eq!(host.windowing().created().len(), 2);
    }

    #[test]
    fn zero_dimensions_build_without_error() {
        let (host, _) = built_host(0.0, 0.0);
        assert_eq!(host.state(), HostState::Built);
        let window = host.windowing().window(host.host_handle()).expect("host");
        assert_eq!((window.request.width, window.request.height), (0, 0));
    }

    #[test]
    fn negative_dimensions_are_passed_through() {
        let (host, _) = built_host(-5.5, -1.0);
        let created = host.windowing().created();
        assert_eq!((created[0].width, created[0].height), (-1, -5));
    }

    #[test]
    fn rebuild_after_destroy_yields_fresh_handles() {
        let (mut host, parent) = built_host(10.0, 20.0);
        let first_host = host.host_handle();
        let first_listbox = host.child_handle();
        host.destroy(first_host).expect("destroy");

        let second_host = host.build_host(parent).expect("rebuild");
        let second_listbox = host.child_handle();

        assert_eq!(host.state(), HostState::Built);
        for fresh in [second_host, second_listbox] {
            assert!(!fresh.is_invalid());
            assert_ne!(fresh, first_host);
            assert_ne!(fresh, first_listbox);
        }
        assert!(!host.windowing().is_window(first_host));
    }

    #[test]
    fn failed_host_creation_returns_invalid_handle_and_stays_unbuilt() {
        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        fake.fail_class(WindowClass::Static);
        let mut host = NativeControlHost::new(10.0, 10.0, fake);

        let hwnd_host = host.build_host(parent).expect("failure is not an error");

        assert!(hwnd_host.is_invalid());
        assert!(host.child_handle().is_invalid());
        assert_eq!(host.state(), HostState::Unbuilt);
        // The list box is never attempted without a host.
        assert_eq!(host.windowing().created().len(), 1);
        assert!(host.destroy(hwnd_host).is_err());
    }

    #[test]
    fn invalid_parent_fails_like_native_layer() {
        let fake = FakeWindowing::new();
        let mut host = NativeControlHost::new(10.0, 10.0, fake);
        let hwnd_host = host.build_host(WindowHandle::INVALID).expect("no error");
        assert!(hwnd_host.is_invalid());
        assert_eq!(host.state(), HostState::Unbuilt);
    }

    #[test]
    fn failed_listbox_creation_keeps_usable_host() {
        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        fake.fail_class(WindowClass::ListBox);
        let mut host = NativeControlHost::new(10.0, 10.0, fake);

        let hwnd_host = host.build_host(parent).expect("build");

        assert!(!hwnd_host.is_invalid());
        assert!(host.child_handle().is_invalid());
        assert_eq!(host.state(), HostState::Built);
        host.destroy(hwnd_host).expect("host still destroyable");
        assert!(!host.windowing().is_window(hwnd_host));
    }

    #[test]
    fn default_hook_reports_not_handled() {
        let (host, _) = built_host(10.0, 10.0);
        let hwnd_host = host.host_handle();
        for msg in [0x0001_u32, 0x000F, 0x0111, 0x0200, 0x8000, u32::MAX] {
            assert_eq!(
                host.handle_message(hwnd_host, msg, 42, -42),
                MessageOutcome::NOT_HANDLED
            );
            assert_eq!(
                host.windowing().dispatch(hwnd_host, msg, 42, -42),
                MessageOutcome::NOT_HANDLED
            );
        }
    }

    #[test]
    fn custom_config_is_used_for_creation() {
        let config = HostConfig {
            child_style: StyleFlags::CHILD | StyleFlags::VISIBLE,
            child_id: ControlId::new(7),
            ..HostConfig::default()
        };
        let fake = FakeWindowing::new();
        let parent = fake.add_framework_window();
        let mut host = NativeControlHost::with_config(10.0, 10.0, fake, config);
        host.build_host(parent).expect("build");

        let listbox = host.windowing().window(host.child_handle()).expect("child");
        assert_eq!(listbox.request.control_id, ControlId::new(7));
        assert!(!listbox.request.style.contains(StyleFlags::VSCROLL));
        assert_eq!(host.config().child_id, ControlId::new(7));
    }
}
