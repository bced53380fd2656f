use yew::prelude::*;

use crate::animation::count_up::{CountUp, CountUpAction};
use crate::animation::typewriter::{Typewriter, TypewriterAction};
use crate::platform::scheduler::{ScheduledTask, TaskSlot};

/// `false` on mount, `true` once `delay_ms` has elapsed.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let flag = use_state(|| false);
    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |_| {
                let task = ScheduledTask::once(delay_ms, move || flag.set(true));
                move || task.cancel()
            },
            (),
        );
    }
    *flag
}

/// Ticking runs from the start signal until the machine completes. A machine
/// that is complete from the outset never schedules anything.
fn ticker_running(started: bool, is_complete: bool) -> bool {
    started && !is_complete
}

/// Starts a repeating task `delay_ms` after `running` turns true. Both
/// timers are cleared as soon as `running` turns false again, or on unmount.
#[hook]
fn use_delayed_ticker<F: Fn() + 'static>(running: bool, delay_ms: u32, interval_ms: u32, on_tick: F) {
    use_effect_with_deps(
        move |running: &bool| {
            let delay_slot = TaskSlot::default();
            let tick_slot = TaskSlot::default();
            if *running {
                let ticks = tick_slot.clone();
                delay_slot.schedule(ScheduledTask::once(delay_ms, move || {
                    ticks.schedule(ScheduledTask::every(interval_ms, on_tick));
                }));
            }
            move || {
                delay_slot.cancel();
                tick_slot.cancel();
            }
        },
        running,
    );
}

pub struct TypewriterHandle {
    pub display_text: String,
    pub is_complete: bool,
}

#[hook]
pub fn use_typewriter(target: &'static str, interval_ms: u32, delay_ms: u32) -> TypewriterHandle {
    let typewriter = use_reducer(|| Typewriter::new(target));

    let on_tick = {
        let dispatcher = typewriter.dispatcher();
        move || dispatcher.dispatch(TypewriterAction::Tick)
    };
    use_delayed_ticker(ticker_running(true, typewriter.is_complete()), delay_ms, interval_ms, on_tick);

    TypewriterHandle {
        display_text: typewriter.display_text().to_string(),
        is_complete: typewriter.is_complete(),
    }
}

/// Counts from 0 to `target` over `duration_ms`, starting `delay_ms` after
/// `start` first becomes true.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, delay_ms: u32, frame_ms: u32, start: bool) -> u32 {
    let count_up = use_reducer(|| CountUp::new(target, duration_ms));

    let on_frame = {
        let dispatcher = count_up.dispatcher();
        move || dispatcher.dispatch(CountUpAction::Frame(frame_ms))
    };
    use_delayed_ticker(ticker_running(start, count_up.is_complete()), delay_ms, frame_ms, on_frame);

    count_up.count()
}

/// Releases a transition lock `duration_ms` after it was taken.
#[hook]
pub fn use_lock_release(is_locked: bool, duration_ms: u32, release: Callback<()>) {
    use_effect_with_deps(
        move |is_locked: &bool| {
            let task = is_locked.then(|| ScheduledTask::once(duration_ms, move || release.emit(())));
            move || {
                if let Some(task) = task {
                    task.cancel();
                }
            }
        },
        is_locked,
    );
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn already_complete_machines_never_tick() {
        assert!(!ticker_running(true, Typewriter::new("").is_complete()));
        assert!(!ticker_running(true, CountUp::new(0, 1_500).is_complete()));
        assert!(!ticker_running(true, CountUp::new(95, 0).is_complete()));
    }

    #[test]
    fn ticking_waits_for_start_and_stops_on_completion() {
        let count_up = Rc::new(CountUp::new(95, 1_500));
        assert!(!ticker_running(false, count_up.is_complete()));
        assert!(ticker_running(true, count_up.is_complete()));

        let done = count_up.reduce(CountUpAction::Frame(1_500));
        assert!(!ticker_running(true, done.is_complete()));

        let typewriter = Rc::new(Typewriter::new("ab"));
        assert!(ticker_running(true, typewriter.is_complete()));
        let typed = typewriter
            .reduce(TypewriterAction::Tick)
            .reduce(TypewriterAction::Tick);
        assert!(!ticker_running(true, typed.is_complete()));
    }
}
