//! DOM host built on `web-sys`.
//!
//! Geometry comes from `getBoundingClientRect`, position and presentation
//! hints are inline style properties, mirrored values go into `<input>`
//! elements looked up by id. Listeners and animation frames call back into
//! the manager through a shared event sink that `attach` installs once the
//! manager exists.

use super::{AreaHost, Axis, EventKind, FrameToken, ListenerHandle, ListenerTarget, Role};
use crate::constants::{DRAG_TRANSITION, DRAG_WILL_CHANGE};
use crate::geometry::{Bounds, Point, point};
use crate::input::{InputEvent, InputPhase, MouseButton, TouchPoint};
use crate::manager::{AreaPositionManager, ManagerBuilder};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, HtmlInputElement, MouseEvent,
    TouchEvent, TouchList, Window,
};

/// Something the page wants the manager to handle
#[derive(Debug, Clone)]
pub enum HostEvent {
    Input(InputEvent),
    Frame { token: FrameToken, timestamp_ms: f64 },
}

/// Returns true when the event was consumed
type EventSink = Rc<RefCell<Option<Box<dyn FnMut(HostEvent) -> bool>>>>;

/// Outstanding frames: token -> `requestAnimationFrame` id and the callback it runs
type FrameTable = Rc<RefCell<HashMap<FrameToken, (i32, Closure<dyn FnMut(f64)>)>>>;

struct Listener {
    target: EventTarget,
    kind: EventKind,
    callback: Closure<dyn FnMut(Event)>,
}

pub struct DomHost {
    window: Option<Window>,
    document: Option<Document>,
    container: Option<HtmlElement>,
    element: Option<HtmlElement>,
    sink: EventSink,
    listeners: HashMap<ListenerHandle, Listener>,
    next_listener: u64,
    frames: FrameTable,
    next_frame: u64,
}

impl DomHost {
    pub fn new(container: Option<HtmlElement>, element: Option<HtmlElement>) -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(Window::document);
        Self {
            window,
            document,
            container,
            element,
            sink: Rc::new(RefCell::new(None)),
            listeners: HashMap::new(),
            next_listener: 0,
            frames: Rc::new(RefCell::new(HashMap::new())),
            next_frame: 0,
        }
    }

    /// Look both elements up by id; missing ones stay `None`
    pub fn from_ids(container_id: &str, element_id: &str) -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let lookup = |id: &str| {
            document
                .as_ref()
                .and_then(|d| d.get_element_by_id(id))
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        };
        Self::new(lookup(container_id), lookup(element_id))
    }

    fn sink(&self) -> EventSink {
        Rc::clone(&self.sink)
    }

    fn dispatch(sink: &EventSink, event: HostEvent) -> bool {
        // A dispatch raised from inside another one (e.g. by the update
        // callback) is dropped rather than re-borrowing the manager.
        match sink.try_borrow_mut() {
            Ok(mut sink) => sink.as_mut().is_some_and(|handler| handler(event)),
            Err(_) => false,
        }
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            warn!(property, ?err, "failed to set style");
        }
    }

    fn remove_style(element: &HtmlElement, property: &str) {
        if let Err(err) = element.style().remove_property(property) {
            warn!(property, ?err, "failed to remove style");
        }
    }
}

fn bounds_of(element: &HtmlElement) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::from_xywh(rect.left(), rect.top(), rect.width(), rect.height())
}

fn phase_of(kind: EventKind) -> InputPhase {
    match kind {
        EventKind::MouseDown | EventKind::TouchStart => InputPhase::Start,
        EventKind::MouseMove | EventKind::TouchMove => InputPhase::Move,
        EventKind::MouseUp | EventKind::TouchEnd => InputPhase::End,
        EventKind::TouchCancel => InputPhase::Cancel,
    }
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.identifier(), f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

fn translate(kind: EventKind, event: &Event) -> Option<InputEvent> {
    let phase = phase_of(kind);
    match kind {
        EventKind::MouseDown | EventKind::MouseMove | EventKind::MouseUp => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::Mouse {
                phase,
                button: MouseButton::from_dom(mouse.button()),
                position: point(f64::from(mouse.client_x()), f64::from(mouse.client_y())),
            })
        }
        EventKind::TouchStart | EventKind::TouchMove | EventKind::TouchEnd | EventKind::TouchCancel => {
            let touch = event.dyn_ref::<TouchEvent>()?;
            Some(InputEvent::Touch {
                phase,
                touches: touch_points(&touch.touches()),
                changed: touch_points(&touch.changed_touches()),
            })
        }
    }
}

impl AreaHost for DomHost {
    fn bounds(&self, role: Role) -> Option<Bounds> {
        match role {
            Role::Container => self.container.as_ref().map(bounds_of),
            Role::Element => self.element.as_ref().map(bounds_of),
        }
    }

    fn set_element_position(&mut self, position: Point) {
        let Some(element) = self.element.as_ref() else { return };
        Self::set_style(element, "left", &format!("{}px", position.x));
        Self::set_style(element, "top", &format!("{}px", position.y));
    }

    fn set_drag_hints(&mut self, dragging: bool) {
        let Some(element) = self.element.as_ref() else { return };
        if dragging {
            Self::set_style(element, "transition", DRAG_TRANSITION);
            Self::set_style(element, "will-change", DRAG_WILL_CHANGE);
        } else {
            Self::remove_style(element, "transition");
            Self::remove_style(element, "will-change");
        }
    }

    fn write_field(&mut self, _axis: Axis, field_id: &str, text: &str) -> bool {
        let input = self
            .document
            .as_ref()
            .and_then(|d| d.get_element_by_id(field_id))
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        match input {
            Some(input) => {
                input.set_value(text);
                true
            }
            None => false,
        }
    }

    fn request_frame(&mut self) -> FrameToken {
        self.next_frame += 1;
        let token = FrameToken(self.next_frame);

        let Some(window) = self.window.as_ref() else {
            warn!("no window, animation frame will never fire");
            return token;
        };

        let sink = self.sink();
        let frames = Rc::clone(&self.frames);
        let callback = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            // Releases this closure; wasm-bindgen frees it once the call returns
            let fired = frames.borrow_mut().remove(&token);
            DomHost::dispatch(&sink, HostEvent::Frame { token, timestamp_ms });
            drop(fired);
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.frames.borrow_mut().insert(token, (id, callback));
            }
            Err(err) => warn!(?err, "requestAnimationFrame failed"),
        }
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let Some((id, _callback)) = self.frames.borrow_mut().remove(&token) else { return };
        if let Some(window) = self.window.as_ref() {
            if let Err(err) = window.cancel_animation_frame(id) {
                warn!(?err, "cancelAnimationFrame failed");
            }
        }
    }

    fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerHandle {
        self.next_listener += 1;
        let handle = ListenerHandle(self.next_listener);

        let event_target = match target {
            ListenerTarget::Element => self.element.clone().map(EventTarget::from),
            ListenerTarget::Document => self.document.clone().map(EventTarget::from),
        };
        let Some(event_target) = event_target else {
            warn!(?target, event = kind.dom_name(), "listener target missing");
            return handle;
        };

        let sink = self.sink();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(input) = translate(kind, &event) else { return };
            if DomHost::dispatch(&sink, HostEvent::Input(input)) && event.cancelable() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        // Non-passive so touchmove can suppress page scrolling mid-drag
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let added = event_target.add_event_listener_with_callback_and_add_event_listener_options(
            kind.dom_name(),
            callback.as_ref().unchecked_ref(),
            &options,
        );
        if let Err(err) = added {
            warn!(?err, event = kind.dom_name(), "addEventListener failed");
            return handle;
        }

        self.listeners.insert(
            handle,
            Listener {
                target: event_target,
                kind,
                callback,
            },
        );
        handle
    }

    fn unlisten(&mut self, handle: ListenerHandle) {
        let Some(listener) = self.listeners.remove(&handle) else { return };
        let removed = listener.target.remove_event_listener_with_callback(
            listener.kind.dom_name(),
            listener.callback.as_ref().unchecked_ref(),
        );
        if let Err(err) = removed {
            warn!(?err, event = listener.kind.dom_name(), "removeEventListener failed");
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        // Frame callbacks hold the frame table; cancelling breaks that cycle
        let tokens: Vec<FrameToken> = self.frames.borrow().keys().copied().collect();
        for token in tokens {
            self.cancel_frame(token);
        }
        let handles: Vec<ListenerHandle> = self.listeners.keys().copied().collect();
        for handle in handles {
            self.unlisten(handle);
        }
    }
}

/// A manager bound to live DOM elements.
///
/// Dropping the last handle tears the manager down and detaches its
/// listeners.
#[derive(Clone)]
pub struct WebAreaManager {
    inner: Rc<RefCell<AreaPositionManager<DomHost>>>,
}

impl WebAreaManager {
    /// Run `f` against the manager (e.g. `set_position` from a form handler).
    ///
    /// Returns `None` while the manager is busy handling an event, which is
    /// the case inside the update callback; read the applied position there
    /// from the callback's own state instead.
    pub fn with<R>(&self, f: impl FnOnce(&mut AreaPositionManager<DomHost>) -> R) -> Option<R> {
        match self.inner.try_borrow_mut() {
            Ok(mut manager) => Some(f(&mut manager)),
            Err(_) => {
                warn!("area manager is busy, call skipped");
                None
            }
        }
    }

    /// Returns false if the manager was busy and nothing was torn down
    pub fn teardown(&self) -> bool {
        self.with(|manager| manager.teardown()).is_some()
    }
}

/// Bind a manager to the elements with the given ids.
///
/// `configure` adds config, formatter, scale provider and update callback
/// to the builder. Missing elements give back a disabled manager.
pub fn attach(
    container_id: &str,
    element_id: &str,
    configure: impl FnOnce(ManagerBuilder<DomHost>) -> ManagerBuilder<DomHost>,
) -> WebAreaManager {
    let host = DomHost::from_ids(container_id, element_id);
    let sink = host.sink();
    let manager = configure(AreaPositionManager::builder(host)).initialize();
    let inner = Rc::new(RefCell::new(manager));

    let weak = Rc::downgrade(&inner);
    *sink.borrow_mut() = Some(Box::new(move |event| {
        let Some(manager) = weak.upgrade() else {
            return false;
        };
        let Ok(mut manager) = manager.try_borrow_mut() else {
            return false;
        };
        match event {
            HostEvent::Input(input) => manager.handle_input(&input),
            HostEvent::Frame { token, timestamp_ms } => manager.on_frame(token, timestamp_ms),
        }
    }));

    debug!(container_id, element_id, "area manager attached");
    WebAreaManager { inner }
}
