use crate::slider::geometry::Bounds;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, TouchEvent};

/// An event listener that is removed again when dropped. Meant to be
/// returned from `use_effect_with_deps` destructors.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: Fn(Event) + 'static,
    {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                log::error!("Failed to listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to stop listening for {}: {:?}", self.event, e);
        }
    }
}

/// Listens on `document`.
pub fn listen_document<F>(event: &'static str, handler: F) -> Option<Listener>
where
    F: Fn(Event) + 'static,
{
    let document = web_sys::window()?.document()?;
    Listener::new(document.as_ref(), event, handler)
}

/// Listens on `window`.
pub fn listen_window<F>(event: &'static str, handler: F) -> Option<Listener>
where
    F: Fn(Event) + 'static,
{
    let window = web_sys::window()?;
    Listener::new(window.as_ref(), event, handler)
}

/// `clientX` of a mouse event, or of the first touch point of a touch event.
pub fn pointer_client_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(mouse.client_x() as f64);
    }
    let touch = event.dyn_ref::<TouchEvent>()?;
    touch.touches().get(0).map(|t| t.client_x() as f64)
}

pub fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.width())
}

pub fn scroll_into_view_smooth(element: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_id(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        scroll_into_view_smooth(&element);
    }
}
