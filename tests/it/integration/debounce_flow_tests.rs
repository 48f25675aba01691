//! Debounced work driven by virtual time and pointer input.

use crate::helpers::{hover, scrolling_panel_unifier};
use pointerkit::{DebounceScheduler, InputSettings, TimerQueue};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_last_call_wins_after_quiet_period() {
    let queue = Rc::new(TimerQueue::new());
    let scheduler = DebounceScheduler::new(queue.clone(), 50);
    let ran = Rc::new(RefCell::new(Vec::new()));

    let r = ran.clone();
    scheduler.run(move || r.borrow_mut().push("first"));
    queue.advance(ms(10));
    let r = ran.clone();
    scheduler.run(move || r.borrow_mut().push("second"));

    queue.advance(ms(49));
    assert!(ran.borrow().is_empty());
    assert!(scheduler.is_pending());

    queue.advance(ms(1));
    assert_eq!(*ran.borrow(), vec!["second"]);
    assert_eq!(queue.now(), ms(60));
    assert!(!scheduler.is_pending());

    queue.run_until_idle();
    assert_eq!(ran.borrow().len(), 1);
}

#[test]
fn test_move_burst_coalesces() {
    let queue = Rc::new(TimerQueue::new());
    let settings = InputSettings {
        debounce_delay_ms: 16,
        ..Default::default()
    };
    let scheduler = Rc::new(DebounceScheduler::from_settings(queue.clone(), &settings));
    let unifier = scrolling_panel_unifier();
    let latest = Rc::new(Cell::new(None));
    let renders = Rc::new(Cell::new(0));

    {
        let (scheduler, latest, renders) = (scheduler.clone(), latest.clone(), renders.clone());
        unifier.on_primary_move(move |_, ev| {
            latest.set(Some(ev.position));
            let renders = renders.clone();
            scheduler.run(move || renders.set(renders.get() + 1));
        });
    }

    for step in 0..10 {
        unifier.handle_mouse(&hover(100.0 + step as f32, 60.0));
        queue.advance(ms(4));
    }
    assert_eq!(renders.get(), 0);

    queue.advance(ms(16));
    assert_eq!(renders.get(), 1);
    assert_eq!(latest.get().map(|p| p.x), Some(109.0));
}

#[test]
fn test_maybe_run_throttles() {
    let queue = Rc::new(TimerQueue::new());
    let scheduler = DebounceScheduler::new(queue.clone(), 20);
    let hits = Rc::new(Cell::new(0));

    for _ in 0..5 {
        let h = hits.clone();
        scheduler.maybe_run(move || h.set(h.get() + 1));
        queue.advance(ms(5));
    }
    // Calls at 5, 10 and 15ms were rejected; the one at 20ms came after
    // the first fire and is still waiting.
    assert_eq!(hits.get(), 1);
    assert!(scheduler.is_pending());

    let h = hits.clone();
    assert!(!scheduler.maybe_run(move || h.set(h.get() + 100)));
    queue.run_until_idle();
    assert_eq!(hits.get(), 2);
    assert_eq!(queue.now(), ms(40));
}

#[test]
fn test_negative_delay_runs_next_tick() {
    let queue = Rc::new(TimerQueue::new());
    let scheduler = DebounceScheduler::new(queue.clone(), -30);
    let hit = Rc::new(Cell::new(false));

    assert_eq!(scheduler.delay(), 0);
    let h = hit.clone();
    scheduler.run(move || h.set(true));
    assert!(!hit.get());

    queue.advance(Duration::ZERO);
    assert!(hit.get());
}
