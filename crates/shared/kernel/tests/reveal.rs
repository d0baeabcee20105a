use folio_kernel::motion::testing::FakeViewport;
use folio_kernel::motion::{RevealConfig, RevealController, RevealPhase};
use proptest::prelude::*;
use std::time::Duration;

fn mount(viewport: &FakeViewport, children: usize, step_ms: u64) -> RevealController<FakeViewport> {
    RevealController::mount(
        viewport.clone(),
        RevealConfig::new("projects", children).step(Duration::from_millis(step_ms)),
    )
}

#[test]
fn mount_and_unmount_leaves_nothing_behind() {
    let viewport = FakeViewport::new();

    for children in [0, 1, 7] {
        let reveal = mount(&viewport, children, 150);
        drop(reveal);
    }

    let mut reveal = mount(&viewport, 5, 150);
    let watch = viewport.watch_for("projects").expect("watch acquired");
    assert!(reveal.on_intersection(watch, true, 0.4));
    assert_eq!(viewport.timer_count(), 5);
    drop(reveal);

    assert_eq!(viewport.watcher_count(), 0);
    assert_eq!(viewport.timer_count(), 0);
}

#[test]
fn already_visible_at_mount_fires_once() {
    let viewport = FakeViewport::new();
    let mut reveal = mount(&viewport, 3, 100);
    let watch = reveal.watch().expect("armed");

    // The observer reports the initial state right after observation starts.
    assert!(reveal.on_intersection(watch, true, 1.0));
    assert!(!reveal.on_intersection(watch, true, 1.0));
    assert_eq!(viewport.scheduled_total(), 3);
}

#[test]
fn scroll_out_and_back_in_never_retriggers() {
    let viewport = FakeViewport::new();
    let mut reveal = mount(&viewport, 2, 200);
    let watch = reveal.watch().expect("armed");

    assert!(reveal.on_intersection(watch, true, 0.3));
    assert_eq!(viewport.watcher_count(), 0, "watch released on activation");
    while let Some((_, timer)) = viewport.fire_next() {
        reveal.on_timer(timer);
    }
    assert_eq!(reveal.phase(), RevealPhase::Complete);

    assert!(!reveal.on_intersection(watch, false, 0.0));
    assert!(!reveal.on_intersection(watch, true, 0.9));
    assert_eq!(viewport.scheduled_total(), 2);
}

#[test]
fn timers_firing_after_teardown_are_ignored() {
    let viewport = FakeViewport::new();
    let mut reveal = mount(&viewport, 4, 100);
    let watch = reveal.watch().expect("armed");
    reveal.on_intersection(watch, true, 1.0);

    let first = viewport.fire_next().expect("child 0 due").1;
    assert_eq!(reveal.on_timer(first), Some(0));

    let raced = reveal.pending_timers();
    reveal.teardown();
    for timer in raced {
        assert_eq!(reveal.on_timer(timer), None);
    }
    assert_eq!(reveal.revealed_count(), 1);
    assert!(reveal.is_revealed(0));
    assert!(!reveal.is_revealed(1));
}

#[test]
fn nothing_is_revealed_before_its_delay() {
    let viewport = FakeViewport::new();
    let mut reveal = mount(&viewport, 3, 150);
    let watch = reveal.watch().expect("armed");
    reveal.on_intersection(watch, true, 1.0);

    for timer in viewport.advance(Duration::ZERO) {
        reveal.on_timer(timer);
    }
    assert_eq!(reveal.revealed_count(), 1);

    for timer in viewport.advance(Duration::from_millis(149)) {
        reveal.on_timer(timer);
    }
    assert!(!reveal.is_revealed(1));

    for timer in viewport.advance(Duration::from_millis(1)) {
        reveal.on_timer(timer);
    }
    assert!(reveal.is_revealed(1));
    assert!(!reveal.is_revealed(2));
}

proptest! {
    #[test]
    fn each_child_fires_once_at_its_stagger(children in 0usize..24, step_ms in 1u64..400) {
        let viewport = FakeViewport::new();
        let mut reveal = mount(&viewport, children, step_ms);

        if let Some(watch) = reveal.watch() {
            prop_assert!(reveal.on_intersection(watch, true, 0.5));
        }

        let mut fired = Vec::new();
        while let Some((at, timer)) = viewport.fire_next() {
            if let Some(index) = reveal.on_timer(timer) {
                fired.push((index, at));
            }
            prop_assert_eq!(reveal.on_timer(timer), None, "a timer reveals at most once");
        }

        prop_assert_eq!(fired.len(), children);
        for (order, (index, at)) in fired.iter().enumerate() {
            prop_assert_eq!(*index, order);
            prop_assert_eq!(*at, Duration::from_millis(step_ms) * u32::try_from(*index).unwrap());
        }
        prop_assert_eq!(reveal.revealed_count(), children);
        prop_assert_eq!(viewport.watcher_count(), 0);
    }
}
