use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::prelude::*;

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    /// Timer driven advance; skipped while a transition is running.
    AutoAdvance,
    ReleaseLock,
}

/// Cyclic slide index with a transition lock.
///
/// Every index-changing action takes the lock; the owner releases it once the
/// slide transition has finished. While the lock is held all navigation is
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    current_index: usize,
    is_animating: bool,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            current_index: 0,
            is_animating: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    fn shifted(&self, forward: bool) -> usize {
        let len = self.len.get();
        if forward {
            (self.current_index + 1) % len
        } else {
            (self.current_index + len - 1) % len
        }
    }

    fn locked_at(&self, index: usize) -> Self {
        Self {
            len: self.len,
            current_index: index,
            is_animating: true,
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::ReleaseLock if self.is_animating => Rc::new(Self {
                is_animating: false,
                ..(*self).clone()
            }),
            CarouselAction::ReleaseLock => self,
            _ if self.is_animating => self,
            CarouselAction::Next | CarouselAction::AutoAdvance => {
                Rc::new(self.locked_at(self.shifted(true)))
            }
            CarouselAction::Prev => Rc::new(self.locked_at(self.shifted(false))),
            CarouselAction::GoTo(index) if index == self.current_index || index >= self.len() => {
                self
            }
            CarouselAction::GoTo(index) => {
                log::debug!("carousel jump {} -> {}", self.current_index, index);
                Rc::new(self.locked_at(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(len: usize) -> Rc<Carousel> {
        Rc::new(Carousel::new(NonZeroUsize::new(len).unwrap()))
    }

    /// Applies an action and lets the transition finish.
    fn settle(state: Rc<Carousel>, action: CarouselAction) -> Rc<Carousel> {
        state.reduce(action).reduce(CarouselAction::ReleaseLock)
    }

    fn at(len: usize, index: usize) -> Rc<Carousel> {
        settle(carousel(len), CarouselAction::GoTo(index))
    }

    #[test]
    fn three_items_wrap_both_ways() {
        let state = carousel(3);
        let state = settle(state, CarouselAction::Next);
        assert_eq!(state.current_index(), 1);
        let state = settle(state, CarouselAction::Next);
        assert_eq!(state.current_index(), 2);
        let state = settle(state, CarouselAction::Next);
        assert_eq!(state.current_index(), 0);

        let state = settle(state, CarouselAction::Prev);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn navigation_takes_the_lock() {
        let state = carousel(3).reduce(CarouselAction::Next);
        assert!(state.is_animating());
        let state = state.reduce(CarouselAction::ReleaseLock);
        assert!(!state.is_animating());
    }

    #[test]
    fn locked_carousel_ignores_navigation() {
        let state = carousel(3).reduce(CarouselAction::Next);
        for action in [
            CarouselAction::Next,
            CarouselAction::Prev,
            CarouselAction::GoTo(0),
            CarouselAction::AutoAdvance,
        ] {
            let after = Rc::clone(&state).reduce(action);
            assert_eq!(after.current_index(), 1);
            assert!(after.is_animating());
        }
    }

    #[test]
    fn dot_jumps_are_ignored_during_a_transition() {
        let state = carousel(3).reduce(CarouselAction::GoTo(2));
        assert!(state.is_animating());
        for index in 0..state.len() {
            let after = Rc::clone(&state).reduce(CarouselAction::GoTo(index));
            assert!(Rc::ptr_eq(&state, &after));
        }
        let state = settle(state, CarouselAction::GoTo(0));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn go_to_current_or_out_of_range_is_a_no_op() {
        let state = carousel(3);
        let same = Rc::clone(&state).reduce(CarouselAction::GoTo(0));
        assert!(!same.is_animating());
        let outside = state.reduce(CarouselAction::GoTo(3));
        assert_eq!(outside.current_index(), 0);
        assert!(!outside.is_animating());
    }

    #[test]
    fn single_item_still_cycles_the_lock() {
        let state = carousel(1).reduce(CarouselAction::Next);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_animating());
        let state = settle(state.reduce(CarouselAction::ReleaseLock), CarouselAction::Prev);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn auto_advance_behaves_like_next() {
        let state = settle(carousel(2), CarouselAction::AutoAdvance);
        assert_eq!(state.current_index(), 1);
    }

    proptest! {
        #[test]
        fn next_len_times_is_identity(len in 1usize..12, start in 0usize..12) {
            let start = start % len;
            let mut state = at(len, start);
            for _ in 0..len {
                state = settle(state, CarouselAction::Next);
            }
            prop_assert_eq!(state.current_index(), start);
        }

        #[test]
        fn prev_inverts_next(len in 1usize..12, start in 0usize..12) {
            let start = start % len;
            let state = settle(settle(at(len, start), CarouselAction::Next), CarouselAction::Prev);
            prop_assert_eq!(state.current_index(), start);
            let state = settle(settle(at(len, start), CarouselAction::Prev), CarouselAction::Next);
            prop_assert_eq!(state.current_index(), start);
        }

        #[test]
        fn index_stays_in_range(len in 1usize..8, moves in proptest::collection::vec(0u8..4, 0..30)) {
            let mut state = carousel(len);
            for m in moves {
                let action = match m {
                    0 => CarouselAction::Next,
                    1 => CarouselAction::Prev,
                    2 => CarouselAction::GoTo(state.current_index().wrapping_add(m as usize) % (len + 1)),
                    _ => CarouselAction::ReleaseLock,
                };
                state = state.reduce(action);
                prop_assert!(state.current_index() < len);
            }
        }
    }
}
