use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

pub const SCROLL_DURATION_MS: f64 = 600.0;
const FRAME_MS: u32 = 16;

/// Named sections the footer navigation can jump to.
pub const ANCHORS: [(&str, &str); 4] = [
    ("top", "TOP"),
    ("gallery", "GALLERY"),
    ("about", "ABOUT"),
    ("contact", "CONTACT"),
];

pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Vertical position `elapsed_ms` into an animation from `start` to `target`.
pub fn position_at(start: f64, target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    start + (target - start) * ease_in_out_quart(elapsed_ms / duration_ms)
}

/// One scroll animation, timed against a wall clock in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub start: f64,
    pub target: f64,
    pub started_at: f64,
}

impl ScrollAnimation {
    /// Where the viewport belongs at `now`, and whether that is the last frame.
    pub fn frame(&self, now: f64) -> (f64, bool) {
        let elapsed = (now - self.started_at).max(0.0);
        (
            position_at(self.start, self.target, elapsed, SCROLL_DURATION_MS),
            elapsed >= SCROLL_DURATION_MS,
        )
    }
}

fn now_ms(window: &web_sys::Window) -> Option<f64> {
    window.performance().map(|p| p.now())
}

/// Animates the window to the element with the given id over `SCROLL_DURATION_MS`.
pub fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("No section with id {}", id);
        return;
    };

    let start = window.scroll_y().unwrap_or(0.0);
    let target = (element.get_bounding_client_rect().top() + start).max(0.0);

    // Without a clock there is nothing to animate against.
    let Some(started_at) = now_ms(&window) else {
        window.scroll_to_with_x_and_y(0.0, target);
        return;
    };
    let animation = ScrollAnimation {
        start,
        target,
        started_at,
    };

    spawn_local(async move {
        loop {
            TimeoutFuture::new(FRAME_MS).await;
            let now = now_ms(&window).unwrap_or(f64::INFINITY);
            let (y, done) = animation.frame(now);
            window.scroll_to_with_x_and_y(0.0, y);
            if done {
                break;
            }
        }
    });
}
