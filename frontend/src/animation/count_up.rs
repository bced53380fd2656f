use std::rc::Rc;
use yew::prelude::*;

pub enum CountUpAction {
    /// Advance the animation clock by this many milliseconds.
    Frame(u32),
}

/// Numeric display animating from 0 to `target` over `duration_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn count(&self) -> u32 {
        if self.duration_ms == 0 || self.elapsed_ms >= self.duration_ms {
            return self.target;
        }
        (u64::from(self.target) * u64::from(self.elapsed_ms) / u64::from(self.duration_ms)) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.count() == self.target
    }
}

impl Reducible for CountUp {
    type Action = CountUpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountUpAction::Frame(_) if self.is_complete() => self,
            CountUpAction::Frame(step) => Rc::new(Self {
                elapsed_ms: self.elapsed_ms.saturating_add(step).min(self.duration_ms),
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reaches_target_exactly_at_duration() {
        let mut state = Rc::new(CountUp::new(95, 1500));
        for _ in 0..93 {
            state = state.reduce(CountUpAction::Frame(16));
        }
        // 93 frames = 1488ms
        assert!(state.count() < 95);
        state = state.reduce(CountUpAction::Frame(16));
        assert_eq!(state.count(), 95);
        assert!(state.is_complete());
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(CountUp::new(88, 1500).count(), 0);
    }

    #[test]
    fn zero_target_is_complete() {
        assert!(CountUp::new(0, 1500).is_complete());
    }

    proptest! {
        #[test]
        fn monotonic_and_bounded(
            target in 0u32..10_000,
            duration in 1u32..5_000,
            frames in proptest::collection::vec(1u32..100, 0..400),
        ) {
            let mut state = Rc::new(CountUp::new(target, duration));
            let mut previous = state.count();
            for step in frames {
                state = state.reduce(CountUpAction::Frame(step));
                prop_assert!(state.count() >= previous);
                prop_assert!(state.count() <= target);
                previous = state.count();
            }
            let state = state.reduce(CountUpAction::Frame(duration));
            prop_assert_eq!(state.count(), target);
        }
    }
}
