use web_sys::Element;
use yew::prelude::*;

use crate::animation::reveal::{IntersectionSample, RevealAction, RevealController};
use crate::platform::viewport::ViewportObserver;

/// Returns `true` from the first time `node` is at least `threshold` visible
/// until the calling component unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let reveal = use_reducer(|| RevealController::new(threshold));

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        dispatcher.dispatch(RevealAction::Observe);
                        let on_sample = {
                            let dispatcher = dispatcher.clone();
                            move |sample: IntersectionSample| {
                                dispatcher.dispatch(RevealAction::Intersect(sample));
                                sample.crosses(threshold)
                            }
                        };
                        match ViewportObserver::observe(&element, threshold, on_sample) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                log::warn!("cannot observe section, showing it now: {}", e);
                                dispatcher.dispatch(RevealAction::Force);
                                None
                            }
                        }
                    }
                    None => {
                        log::warn!("reveal target not mounted, showing it now");
                        dispatcher.dispatch(RevealAction::Force);
                        None
                    }
                };

                move || {
                    drop(observer);
                    dispatcher.dispatch(RevealAction::Release);
                }
            },
            node,
        );
    }

    reveal.is_visible()
}
