use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn tracked(count: usize, page_width: u32) -> (Controller<u64>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let cb_calls = Arc::clone(&calls);
    let cb_last = Arc::clone(&last);
    let controller = Controller::new(
        carousel::CarouselOptions::new(count, page_width).with_on_index_change(Some(
            move |index| {
                cb_calls.fetch_add(1, Ordering::SeqCst);
                cb_last.store(index, Ordering::SeqCst);
            },
        )),
    );
    (controller, calls, last)
}

#[test]
fn tween_drives_offset_to_target_and_settles_silently() {
    let (mut c, calls, _) = tracked(5, 300);

    let target = c.request_index(3, 0);
    assert_eq!(target, Some(900));
    assert!(c.is_animating());

    let mut prev = 0u64;
    for now_ms in [0u64, 50, 100, 150, 200, 250, 300] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= prev);
            prev = off;
        }
    }

    assert!(!c.is_animating());
    assert_eq!(c.offset(), 900);
    assert_eq!(c.carousel().settled_index(), 3);
    // A programmatic scroll never notifies.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn retarget_supersedes_inflight_scroll() {
    let (mut c, calls, _) = tracked(5, 300);

    c.request_index(4, 0);
    c.tick(100);
    // Superseded mid-flight: glide to the new target from wherever we are.
    let target = c.request_index(1, 100);
    assert_eq!(target, Some(300));

    for now_ms in [150u64, 250, 350, 400] {
        c.tick(now_ms);
    }

    assert!(!c.is_animating());
    assert_eq!(c.offset(), 300);
    assert_eq!(c.carousel().settled_index(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn user_scroll_cancels_animation() {
    let (mut c, calls, _) = tracked(5, 300);

    c.request_index(4, 0);
    c.tick(100);
    assert!(c.is_animating());

    c.on_user_scroll(320);
    assert!(!c.is_animating());
    assert_eq!(c.offset(), 320);
    assert_eq!(c.tick(150), None);

    // The settle after an interrupted programmatic scroll trusts the
    // physical outcome and stays silent.
    c.on_user_scroll_settled(310);
    assert_eq!(c.carousel().settled_index(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn momentum_settle_notifies_once() {
    let (mut c, calls, last) = tracked(5, 300);

    c.on_user_scroll(250);
    c.on_user_scroll_settled(305);
    assert_eq!(c.offset(), 305);
    assert_eq!(c.carousel().settled_index(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(last.load(Ordering::SeqCst), 1);

    // Settling on the same page again is a no-op.
    c.on_user_scroll_settled(300);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn arrow_taps_are_guarded_at_the_edges() {
    let (mut c, calls, _) = tracked(3, 300);

    assert_eq!(c.prev(0), None);
    assert!(!c.is_animating());

    assert_eq!(c.next(0), Some(300));
    for now_ms in [0u64, 125, 250, 300] {
        c.tick(now_ms);
    }
    assert_eq!(c.carousel().settled_index(), 1);

    assert_eq!(c.next(300), Some(600));
    for now_ms in [350u64, 500, 600] {
        c.tick(now_ms);
    }
    assert_eq!(c.carousel().settled_index(), 2);
    assert_eq!(c.next(600), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn controller_starts_at_initial_index_offset() {
    let c: Controller<u64> =
        Controller::new(carousel::CarouselOptions::new(5, 300).with_initial_index(2));
    assert_eq!(c.offset(), 600);
    assert!(!c.is_animating());
}

#[test]
fn scroll_duration_is_configurable() {
    let (mut c, _, _) = tracked(5, 300);
    c.set_scroll_duration_ms(100);
    c.set_easing(Easing::Linear);

    c.request_index(1, 0);
    assert_eq!(c.tick(50), Some(150));
    assert_eq!(c.tick(100), Some(300));
    assert!(!c.is_animating());
}

#[test]
fn tween_retarget_glides_from_current_position() {
    let mut tween = ScrollTween::new(0, 1000, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(50), 500);

    tween.retarget(50, 0, 100);
    assert_eq!(tween.origin(), 500);
    assert_eq!(tween.target(), 0);
    assert!(tween.sample(100) < 500);
    assert_eq!(tween.sample(150), 0);
}
