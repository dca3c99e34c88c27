//! Tests for breakpoint resolution and the breakpoint signal.
use flexpop::breakpoint::{Breakpoint, BreakpointResolver, BreakpointSignal};
use flexpop::subscription::SubscriberId;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_width_maps_to_tightest_threshold() {
    for bp in Breakpoint::THRESHOLDS.iter().rev() {
        let max = bp.max_width().unwrap();
        assert_eq!(BreakpointResolver::resolve(Some(max), None), *bp);
        assert_eq!(BreakpointResolver::resolve(Some(max - 1), None), *bp);
    }
}

#[test]
fn test_threshold_edges() {
    assert_eq!(BreakpointResolver::resolve(Some(0), None), Breakpoint::MaxSm);
    assert_eq!(BreakpointResolver::resolve(Some(639), None), Breakpoint::MaxSm);
    assert_eq!(BreakpointResolver::resolve(Some(640), None), Breakpoint::MaxMd);
    assert_eq!(BreakpointResolver::resolve(Some(767), None), Breakpoint::MaxMd);
    assert_eq!(BreakpointResolver::resolve(Some(768), None), Breakpoint::MaxLg);
    assert_eq!(BreakpointResolver::resolve(Some(1024), None), Breakpoint::MaxXl);
    assert_eq!(BreakpointResolver::resolve(Some(1280), None), Breakpoint::Max2xl);
    assert_eq!(BreakpointResolver::resolve(Some(1535), None), Breakpoint::Max2xl);
}

#[test]
fn test_wide_or_unknown_width_is_default() {
    assert_eq!(BreakpointResolver::resolve(Some(1536), None), Breakpoint::Default);
    assert_eq!(BreakpointResolver::resolve(Some(4000), None), Breakpoint::Default);
    assert_eq!(BreakpointResolver::resolve(None, None), Breakpoint::Default);
}

#[test]
fn test_override_always_wins() {
    for bp in Breakpoint::ALL {
        for width in [None, Some(320), Some(700), Some(1400), Some(3000)] {
            assert_eq!(BreakpointResolver::resolve(width, Some(bp)), bp);
        }
    }
}

#[test]
fn test_parse_and_display() {
    for bp in Breakpoint::ALL {
        assert_eq!(bp.to_string().parse::<Breakpoint>().unwrap(), bp);
    }
    let err = "max-xs".parse::<Breakpoint>().unwrap_err();
    assert!(err.to_string().contains("max-xs"));
    assert_eq!(
        Breakpoint::MaxSm.media_query().as_deref(),
        Some("@media (max-width: 639px)")
    );
    assert_eq!(Breakpoint::Default.media_query(), None);
}

#[test]
fn test_signal_notifies_only_on_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut signal = BreakpointSignal::new(Some(1200), None);
    assert_eq!(signal.current(), Breakpoint::MaxXl);

    let sink = Rc::clone(&seen);
    signal.subscribe(SubscriberId(1), move |bp| sink.borrow_mut().push(*bp));

    signal.set_width(1100); // still max-xl
    signal.set_width(600);
    signal.set_width(500);
    signal.set_override(Breakpoint::Default);
    signal.set_width(300); // override pins default
    signal.clear_override();

    assert_eq!(
        *seen.borrow(),
        vec![Breakpoint::MaxSm, Breakpoint::Default, Breakpoint::MaxSm]
    );
}

#[test]
fn test_signal_subscription_dedup_and_teardown() {
    let count = Rc::new(RefCell::new(0));
    let mut signal = BreakpointSignal::new(None, None);

    for _ in 0..3 {
        let c = Rc::clone(&count);
        signal.subscribe(SubscriberId(9), move |_| *c.borrow_mut() += 1);
    }
    assert_eq!(signal.subscriber_count(), 1);

    signal.set_width(320);
    assert_eq!(*count.borrow(), 1);

    assert!(signal.unsubscribe(SubscriberId(9)));
    assert!(!signal.unsubscribe(SubscriberId(9)));
    signal.set_width(2000);
    assert_eq!(*count.borrow(), 1);
}
