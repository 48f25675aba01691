//! Unit tests for the event registry.

use pointerkit::{Callback, EventRegistry, callback};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

fn named(log: &Log, name: &'static str) -> Callback<(), ()> {
    let log = log.clone();
    callback(move |_: &(), _: &()| log.borrow_mut().push(name))
}

#[test]
fn test_runs_in_registration_order() {
    let registry: EventRegistry<(), ()> = EventRegistry::new(());
    let log: Log = Rc::default();

    registry
        .add("update", named(&log, "a"))
        .add("update", named(&log, "b"))
        .add("update", named(&log, "c"));
    registry.run("update", &());

    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn test_invocations_track_current_registrations() {
    let registry: EventRegistry<(), ()> = EventRegistry::new(());
    let log: Log = Rc::default();
    let a = named(&log, "a");
    let b = named(&log, "b");

    registry.add("x", a.clone()).add("x", b.clone()).add("x", a.clone());
    registry.run("x", &());
    assert_eq!(*log.borrow(), vec!["a", "b", "a"]);

    // Only the first `a` goes; order of the rest is kept.
    log.borrow_mut().clear();
    registry.remove("x", &a);
    registry.run("x", &());
    assert_eq!(*log.borrow(), vec!["b", "a"]);

    log.borrow_mut().clear();
    registry.remove("x", &a).remove("x", &a).remove("x", &b);
    registry.run("x", &());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_removal_during_run_uses_snapshot() {
    let registry: Rc<EventRegistry<(), ()>> = Rc::new(EventRegistry::new(()));
    let log: Log = Rc::default();
    let second = named(&log, "second");

    let remover = {
        let registry = Rc::downgrade(&registry);
        let second = second.clone();
        let log = log.clone();
        callback(move |_: &(), _: &()| {
            log.borrow_mut().push("remover");
            if let Some(registry) = registry.upgrade() {
                registry.remove("tick", &second);
            }
        })
    };

    registry.add("tick", remover).add("tick", second);

    registry.run("tick", &());
    assert_eq!(*log.borrow(), vec!["remover", "second"]);

    registry.run("tick", &());
    assert_eq!(*log.borrow(), vec!["remover", "second", "remover"]);
}

#[test]
fn test_addition_during_run_waits_for_next_pass() {
    let registry: Rc<EventRegistry<(), ()>> = Rc::new(EventRegistry::new(()));
    let log: Log = Rc::default();
    let late = named(&log, "late");
    let added = Rc::new(RefCell::new(false));

    let adder = {
        let registry = Rc::downgrade(&registry);
        let late = late.clone();
        let log = log.clone();
        callback(move |_: &(), _: &()| {
            log.borrow_mut().push("adder");
            if !*added.borrow() {
                *added.borrow_mut() = true;
                if let Some(registry) = registry.upgrade() {
                    registry.add("tick", late.clone());
                }
            }
        })
    };
    registry.add("tick", adder);

    registry.run("tick", &());
    assert_eq!(*log.borrow(), vec!["adder"]);

    registry.run("tick", &());
    assert_eq!(*log.borrow(), vec!["adder", "adder", "late"]);
}

#[test]
fn test_context_override_and_setter() {
    let registry: EventRegistry<String, u32> = EventRegistry::new("app".to_string());
    let seen: Rc<RefCell<Vec<(String, u32)>>> = Rc::default();
    let s = seen.clone();
    registry.add(
        "save",
        callback(move |ctx: &String, n: &u32| s.borrow_mut().push((ctx.clone(), *n))),
    );

    registry.run("save", &1);
    registry.run_with_context("save", &"dialog".to_string(), &2);
    assert_eq!(registry.context(), "app");

    registry.set_context("editor".to_string());
    registry.run("save", &3);

    assert_eq!(
        *seen.borrow(),
        vec![
            ("app".to_string(), 1),
            ("dialog".to_string(), 2),
            ("editor".to_string(), 3),
        ]
    );
}

#[test]
fn test_forward_to_other_registry() {
    let source: EventRegistry<&'static str, u32> = EventRegistry::new("source");
    let sink: Rc<EventRegistry<&'static str, u32>> = Rc::new(EventRegistry::new("sink"));
    let seen: Rc<RefCell<Vec<(&'static str, u32)>>> = Rc::default();
    let s = seen.clone();
    sink.add("resize", callback(move |ctx: &&'static str, n: &u32| s.borrow_mut().push((*ctx, *n))));

    let relay = source.forward_to("resize", &sink);
    source.run("resize", &5);
    assert_eq!(*seen.borrow(), vec![("sink", 5)]);

    source.remove("resize", &relay);
    source.run("resize", &6);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_clear_channel() {
    let registry: EventRegistry<(), ()> = EventRegistry::default();
    let log: Log = Rc::default();
    registry.add("a", named(&log, "a")).add("b", named(&log, "b"));

    registry.clear("a");
    registry.run("a", &()).run("b", &());

    assert_eq!(*log.borrow(), vec!["b"]);
    assert!(!registry.has_listeners("a"));
    assert_eq!(registry.listener_count("b"), 1);
}
