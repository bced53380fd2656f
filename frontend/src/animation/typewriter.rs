use std::rc::Rc;
use yew::prelude::*;

pub enum TypewriterAction {
    Tick,
}

/// Reveals `target` one character per tick. Terminal once complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    target: Rc<str>,
    shown_chars: usize,
    total_chars: usize,
}

impl Typewriter {
    pub fn new(target: &str) -> Self {
        Self {
            target: Rc::from(target),
            shown_chars: 0,
            total_chars: target.chars().count(),
        }
    }

    pub fn display_text(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.shown_chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    pub fn is_complete(&self) -> bool {
        self.shown_chars == self.total_chars
    }
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Tick if self.is_complete() => self,
            TypewriterAction::Tick => Rc::new(Self {
                shown_chars: self.shown_chars + 1,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Number of ticks that have fired `elapsed_ms` after mount when ticking
    /// starts after `delay_ms` and repeats every `interval_ms`.
    fn ticks_elapsed(elapsed_ms: u32, delay_ms: u32, interval_ms: u32) -> u32 {
        match elapsed_ms.checked_sub(delay_ms) {
            Some(since_start) if interval_ms > 0 => since_start / interval_ms,
            _ => 0,
        }
    }

    fn at(target: &str, elapsed_ms: u32) -> Rc<Typewriter> {
        (0..ticks_elapsed(elapsed_ms, 500, 80))
            .fold(Rc::new(Typewriter::new(target)), |state, _| state.reduce(TypewriterAction::Tick))
    }

    #[test]
    fn hero_name_timeline() {
        let name = "Truong Nguyen";
        assert_eq!(at(name, 0).display_text(), "");
        assert_eq!(at(name, 499).display_text(), "");
        assert_eq!(at(name, 500).display_text(), "");
        assert_eq!(at(name, 579).display_text(), "");
        assert_eq!(at(name, 580).display_text(), "T");
        assert_eq!(at(name, 660).display_text(), "Tr");
        assert!(!at(name, 1539).is_complete());
        assert_eq!(at(name, 1540).display_text(), name);
        assert!(at(name, 1540).is_complete());
        assert_eq!(at(name, 10_000).display_text(), name);
        assert!(at(name, 10_000).is_complete());
    }

    #[test]
    fn complete_typewriter_ignores_ticks() {
        let state = Rc::new(Typewriter::new("ab"))
            .reduce(TypewriterAction::Tick)
            .reduce(TypewriterAction::Tick);
        let again = Rc::clone(&state).reduce(TypewriterAction::Tick);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn empty_target_starts_complete() {
        let state = Typewriter::new("");
        assert!(state.is_complete());
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn slices_on_character_boundaries() {
        let state = Rc::new(Typewriter::new("Trương"));
        let state = (0..4).fold(state, |s, _| s.reduce(TypewriterAction::Tick));
        assert_eq!(state.display_text(), "Trươ");
    }

    proptest! {
        #[test]
        fn grows_one_char_per_tick(target in "\\PC{0,24}", extra in 0usize..5) {
            let total = target.chars().count();
            let mut state = Rc::new(Typewriter::new(&target));
            let mut previous = 0;
            for _ in 0..total + extra {
                state = state.reduce(TypewriterAction::Tick);
                let len = state.display_text().chars().count();
                prop_assert!(len == previous + 1 || (len == total && previous == total));
                prop_assert!(len <= total);
                prop_assert!(target.starts_with(state.display_text()));
                previous = len;
            }
            prop_assert_eq!(state.display_text(), target.as_str());
            prop_assert!(state.is_complete());
        }
    }
}
