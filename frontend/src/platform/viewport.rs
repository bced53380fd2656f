use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animation::reveal::IntersectionSample;
use crate::error::PlatformError;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` watching a single element. The
/// observation is disconnected when this value is dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// Starts observing `element` at `threshold`. `on_sample` returns `true`
    /// once it needs no further notifications, which disconnects the observer
    /// right away.
    pub fn observe<F>(element: &Element, threshold: f64, mut on_sample: F) -> Result<Self, PlatformError>
    where
        F: FnMut(IntersectionSample) -> bool + 'static,
    {
        let callback = EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if on_sample(sample) {
                    observer.disconnect();
                    break;
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
