use std::sync::{Arc, Mutex};
use std::time::Duration;

use stepwise_core::{
    Carousel, CarouselConfig, CarouselKey, CarouselRegistry, ChipEmphasis,
    Direction, IgnoreReason, ManualClock, Navigation, Slot, WrapMode,
    slide_offset,
};

const WINDOW: Duration = Duration::from_millis(350);

fn insight_carousel(
    len: usize,
    initial: usize,
) -> (Carousel<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let carousel = Carousel::with_clock(
        len,
        initial,
        CarouselConfig::insight_defaults().with_transition(WINDOW),
        clock.clone(),
    )
    .expect("initial index in range");
    (carousel, clock)
}

fn record(carousel: &mut Carousel<ManualClock>) -> Arc<Mutex<Vec<usize>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    carousel.on_index_changed(move |i| sink.lock().unwrap().push(i));
    seen
}

#[test]
fn create_four_start_two_walks_and_wraps() {
    let (mut c, clock) = insight_carousel(4, 2);
    let seen = record(&mut c);
    assert_eq!(c.active_index(), Some(2));

    c.go_to_next();
    assert_eq!(c.active_index(), Some(3));
    assert_eq!(c.direction(), Direction::Forward);
    assert!(c.is_transitioning());
    assert_eq!(*seen.lock().unwrap(), vec![3]);

    clock.advance(WINDOW);
    assert!(!c.is_transitioning());

    c.go_to_next();
    assert_eq!(c.active_index(), Some(0));
    assert_eq!(*seen.lock().unwrap(), vec![3, 0]);
}

#[test]
fn create_four_start_zero_wraps_backward() {
    let (mut c, _clock) = insight_carousel(4, 0);
    c.go_to_previous();
    assert_eq!(c.active_index(), Some(3));
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn notification_fires_before_animation_finishes() {
    let (mut c, _clock) = insight_carousel(3, 0);
    let locked_during_callback = Arc::new(Mutex::new(None));
    let probe = Arc::clone(&locked_during_callback);
    // The observer cannot see the carousel, but it runs synchronously inside
    // go_to_next, so the lock must already be held when control returns.
    c.on_index_changed(move |i| *probe.lock().unwrap() = Some(i));
    c.go_to_next();
    assert_eq!(*locked_during_callback.lock().unwrap(), Some(1));
    assert!(c.is_transitioning());
}

#[test]
fn rapid_clicks_are_dropped_not_queued() {
    let (mut c, clock) = insight_carousel(6, 0);
    let seen = record(&mut c);
    for _ in 0..5 {
        c.go_to_next();
    }
    assert_eq!(c.active_index(), Some(1));

    clock.advance(WINDOW);
    // Nothing was queued: no catch-up moves after the lock releases.
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[test]
fn last_to_first_jump_is_backward() {
    let (mut c, _clock) = insight_carousel(4, 3);
    let nav = c.go_to_index(0).unwrap();
    let Navigation::Moved(t) = nav else {
        panic!("jump should be accepted: {nav:?}");
    };
    assert_eq!((t.from, t.to), (3, 0));
    assert_eq!(t.direction, Direction::Backward);
}

#[test]
fn every_reachable_index_is_in_bounds() {
    for len in 1..=5 {
        let (mut c, clock) = insight_carousel(len, 0);
        for round in 0..(len * 3) {
            if round % 2 == 0 {
                c.go_to_next();
            } else {
                c.go_to_previous();
                c.go_to_previous();
            }
            clock.advance(WINDOW);
            let active = c.active_index().unwrap();
            assert!(active < len, "len={len} active={active}");
        }
    }
}

#[test]
fn empty_sequence_never_notifies() {
    let (mut c, clock) = insight_carousel(0, 0);
    let seen = record(&mut c);
    c.go_to_next();
    c.go_to_previous();
    clock.advance(WINDOW);
    assert_eq!(
        c.go_to_index(2).unwrap(),
        Navigation::Ignored(IgnoreReason::Empty)
    );
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(c.snapshot().active_index, None);
}

#[test]
fn card_front_end_renders_from_peek() {
    let insights = ["Gas is low", "ETH staking yield", "New airdrop"];
    let (mut c, clock) = insight_carousel(insights.len(), 1);

    let peek = c.peek().unwrap();
    let cards = peek.resolve(&insights).unwrap();
    assert_eq!(cards.previous, Some(&"Gas is low"));
    assert_eq!(*cards.active, "ETH staking yield");
    assert_eq!(cards.next, Some(&"New airdrop"));

    c.go_to_next();
    clock.advance(WINDOW / 2);
    let peek = c.peek().unwrap();
    let offset = slide_offset(
        Slot::of(2, &peek),
        c.direction(),
        c.eased_progress(),
        320.0,
    )
    .unwrap();
    // Mid-slide: the new active card is between the right slot and centre.
    assert!(offset > 0.0 && offset < 320.0, "offset={offset}");
}

#[test]
fn chip_row_shares_the_same_engine() {
    let clock = ManualClock::new();
    let mut registry = CarouselRegistry::with_clock(clock.clone());
    let chips = registry.ensure(
        CarouselKey::Categories,
        5,
        CarouselConfig::chip_defaults(),
    );
    assert_eq!(chips.active_index(), Some(2));
    chips.go_to_index(4).unwrap();

    let chips = registry.get(&CarouselKey::Categories).unwrap();
    let t = chips.transition();
    assert_eq!(ChipEmphasis::of(4, 4, t.as_ref()), ChipEmphasis::Entering);
    assert_eq!(ChipEmphasis::of(2, 4, t.as_ref()), ChipEmphasis::Leaving);

    clock.advance(CarouselConfig::chip_defaults().transition);
    assert_eq!(registry.settle_all(), vec![CarouselKey::Categories]);
    let chips = registry.get(&CarouselKey::Categories).unwrap();
    assert_eq!(
        ChipEmphasis::of(4, 4, chips.transition().as_ref()),
        ChipEmphasis::Active
    );
}

#[test]
fn clamped_mode_is_linear() {
    let clock = ManualClock::new();
    let config = CarouselConfig::default()
        .with_transition(WINDOW)
        .with_wrap_mode(WrapMode::Clamped);
    let mut c = Carousel::with_clock(3, 0, config, clock.clone()).unwrap();
    assert_eq!(
        c.go_to_previous(),
        Navigation::Ignored(IgnoreReason::AtBoundary)
    );
    c.go_to_next();
    clock.advance(WINDOW);
    c.go_to_next();
    clock.advance(WINDOW);
    assert_eq!(c.active_index(), Some(2));
    assert_eq!(
        c.go_to_next(),
        Navigation::Ignored(IgnoreReason::AtBoundary)
    );
    assert_eq!(c.peek().unwrap().next, None);
}
