use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;
use yew::prelude::*;

/// Background shift for a given vertical scroll position: half the scroll, rounded down.
pub fn background_offset(scroll_y: f64) -> i64 {
    (scroll_y.max(0.0) / 2.0).floor() as i64
}

pub fn background_style(offset: i64) -> String {
    format!("background-position: center -{}px", offset)
}

/// Current scroll position, taking whichever of the three browser sources is set.
pub fn scroll_top() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let document = window.document();
    let root = document
        .as_ref()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_top() as f64)
        .unwrap_or(0.0);
    let body = document
        .as_ref()
        .and_then(|d| d.body())
        .map(|b| b.scroll_top() as f64)
        .unwrap_or(0.0);
    page_offset.max(root).max(body)
}

/// Something handlers can be attached to and detached from by event name.
pub trait EventSource {
    type Listener;

    fn listen(&self, event: &'static str, handler: Box<dyn FnMut()>) -> Option<Self::Listener>;
    fn unlisten(&self, event: &'static str, listener: &Self::Listener);
}

impl EventSource for EventTarget {
    type Listener = Closure<dyn FnMut()>;

    fn listen(&self, event: &'static str, handler: Box<dyn FnMut()>) -> Option<Self::Listener> {
        let callback = Closure::wrap(handler);
        match self.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(callback),
            Err(e) => {
                log::warn!("Could not add {} listener: {:?}", event, e);
                None
            }
        }
    }

    fn unlisten(&self, event: &'static str, listener: &Self::Listener) {
        if let Err(e) = self.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            log::warn!("Could not remove {} listener: {:?}", event, e);
        }
    }
}

/// A listener registration that lives exactly as long as this value.
pub struct Subscription<S: EventSource> {
    source: S,
    event: &'static str,
    listener: Option<S::Listener>,
}

impl<S: EventSource> Subscription<S> {
    pub fn new(source: S, event: &'static str, handler: impl FnMut() + 'static) -> Self {
        let listener = source.listen(event, Box::new(handler));
        Self {
            source,
            event,
            listener,
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl<S: EventSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.unlisten(self.event, &listener);
        }
    }
}

/// Background offset of the about section, recomputed on every document scroll while mounted.
#[hook]
pub fn use_parallax_offset() -> i64 {
    let offset = use_state_eq(|| 0_i64);
    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        let target: EventTarget = document.into();
                        Subscription::new(target, "scroll", move || {
                            offset.set(background_offset(scroll_top()));
                        })
                    });
                move || drop(subscription)
            },
            (),
        );
    }
    *offset
}
