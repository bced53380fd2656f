use std::rc::Rc;
use yew::prelude::*;

/// Lifecycle of a section's enter animation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Observing,
    Revealed,
}

/// One notification from the viewport observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    /// The observer also reports partial overlap below the configured
    /// threshold (always on the first notification), so the ratio is checked
    /// here as well.
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

pub enum RevealAction {
    Observe,
    Intersect(IntersectionSample),
    /// The observation was torn down (unmount) before or after reveal.
    Release,
    /// Used when the platform cannot observe the element at all, so the
    /// content is shown instead of staying hidden forever.
    Force,
}

/// One-shot visibility gate shared by every page section.
///
/// `visible` only ever goes from false to true, and only on a sample whose
/// intersection ratio has reached `threshold`.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealController {
    phase: RevealPhase,
    threshold: f64,
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: RevealPhase::Unobserved,
            threshold,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    fn next_phase(&self, action: &RevealAction) -> RevealPhase {
        match (self.phase, action) {
            (RevealPhase::Revealed, _) => RevealPhase::Revealed,
            (_, RevealAction::Force) => RevealPhase::Revealed,
            (RevealPhase::Unobserved, RevealAction::Observe) => RevealPhase::Observing,
            (RevealPhase::Observing, RevealAction::Intersect(sample)) if sample.crosses(self.threshold) => {
                RevealPhase::Revealed
            }
            (RevealPhase::Observing, RevealAction::Release) => RevealPhase::Unobserved,
            (phase, _) => phase,
        }
    }
}

impl Reducible for RevealController {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let phase = self.next_phase(&action);
        if phase == self.phase {
            return self;
        }
        log::debug!("reveal {:?} -> {:?}", self.phase, phase);
        Rc::new(Self {
            phase,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: f64 = 0.2;

    fn sample(is_intersecting: bool) -> RevealAction {
        RevealAction::Intersect(IntersectionSample {
            is_intersecting,
            ratio: if is_intersecting { 0.5 } else { 0.0 },
        })
    }

    fn partial(ratio: f64) -> RevealAction {
        RevealAction::Intersect(IntersectionSample {
            is_intersecting: ratio > 0.0,
            ratio,
        })
    }

    fn run(actions: Vec<RevealAction>) -> Rc<RevealController> {
        actions
            .into_iter()
            .fold(Rc::new(RevealController::new(THRESHOLD)), |state, action| state.reduce(action))
    }

    #[test]
    fn walks_unobserved_observing_revealed() {
        let state = Rc::new(RevealController::new(THRESHOLD));
        assert_eq!(state.phase(), RevealPhase::Unobserved);

        let state = state.reduce(RevealAction::Observe);
        assert_eq!(state.phase(), RevealPhase::Observing);
        assert!(!state.is_visible());

        let state = state.reduce(sample(true));
        assert_eq!(state.phase(), RevealPhase::Revealed);
        assert!(state.is_visible());
    }

    #[test]
    fn overlap_below_threshold_stays_hidden() {
        let state = run(vec![RevealAction::Observe, partial(0.05)]);
        assert_eq!(state.phase(), RevealPhase::Observing);
        assert!(!state.is_visible());

        let state = state.reduce(partial(0.2));
        assert!(state.is_visible());
    }

    #[test]
    fn ignores_intersections_before_observing() {
        let state = run(vec![sample(true)]);
        assert_eq!(state.phase(), RevealPhase::Unobserved);
    }

    #[test]
    fn release_before_reveal_never_shows() {
        let state = run(vec![RevealAction::Observe, sample(false), RevealAction::Release]);
        assert_eq!(state.phase(), RevealPhase::Unobserved);
        assert!(!state.is_visible());
    }

    #[test]
    fn stays_revealed_after_leaving_and_release() {
        let state = run(vec![
            RevealAction::Observe,
            sample(true),
            sample(false),
            RevealAction::Release,
            RevealAction::Observe,
        ]);
        assert!(state.is_visible());
    }

    #[test]
    fn force_reveals_from_any_phase() {
        assert!(run(vec![RevealAction::Force]).is_visible());
        assert!(run(vec![RevealAction::Observe, RevealAction::Force]).is_visible());
    }

    #[test]
    fn repeated_intersections_are_no_ops() {
        let state = run(vec![RevealAction::Observe, sample(true)]);
        let again = Rc::clone(&state).reduce(sample(true));
        assert!(Rc::ptr_eq(&state, &again));
    }

    proptest! {
        #[test]
        fn visible_is_monotonic(events in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut state = Rc::new(RevealController::new(THRESHOLD)).reduce(RevealAction::Observe);
            let mut seen_intersecting = false;
            for is_intersecting in events {
                state = state.reduce(sample(is_intersecting));
                seen_intersecting |= is_intersecting;
                prop_assert_eq!(state.is_visible(), seen_intersecting);
            }
        }
    }
}
