//! Carousel Engine - circular navigation over a fixed set of cards.
//!
//! Each carousel owns its cards, its dots and an autoplay timer. Every state
//! change recomputes the slot of every card and the active dot, then
//! publishes the result as one write to the `view` signal so presentation
//! effects run once per operation.
//!
//! # Slots
//!
//! For card `i` with `N` cards and current index `c`:
//!
//! ```text
//! relative = (i - c + N) mod N
//! slot     = N if relative == 1 else relative
//! style    = POSITIONS[slot]  (hidden when slot >= 5)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::engine::Carousel;
//! use spark_carousel::state::clock::ManualClock;
//! use spark_carousel::{CarouselConfig, ContainerSpec};
//! use std::rc::Rc;
//!
//! let spec = ContainerSpec::new("web", "web-next").with_cards(5);
//! let mut carousel = Carousel::new(spec, Rc::new(ManualClock::new()), &CarouselConfig::default());
//!
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! ```

use std::rc::Rc;
use std::time::Duration;

use spark_signals::{signal, Signal};
use tracing::{debug, warn};

use super::indicators::{DotIndicator, IndicatorSync};
use super::positions::{style_for_slot, PositionStyle};
use crate::config::CarouselConfig;
use crate::state::autoplay::AutoplayTimer;
use crate::state::clock::Clock;
use crate::types::{ContainerId, ContainerSpec, ElementId};

// =============================================================================
// SLOT MATH
// =============================================================================

/// Circular distance of card `index` ahead of `current`.
pub fn relative_offset(index: usize, current: usize, total: usize) -> usize {
    (index + total - current) % total
}

/// Visual slot of card `index`. The card right after the current one is
/// pushed to slot `total`.
pub fn slot_for(index: usize, current: usize, total: usize) -> usize {
    match relative_offset(index, current, total) {
        1 => total,
        relative => relative,
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Where one card sits after the latest update.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlacement {
    pub card: ElementId,
    /// Position in discovery order. Never changes.
    pub absolute_index: usize,
    pub relative: usize,
    pub slot: usize,
    /// `None` means the card is hidden.
    pub style: Option<PositionStyle>,
}

impl CardPlacement {
    pub fn is_hidden(&self) -> bool {
        self.style.is_none()
    }
}

/// Presentation output, published through the view signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselView {
    pub current_index: usize,
    pub placements: Vec<CardPlacement>,
    /// Active flag per dot, empty when the container has no indicators.
    pub dots: Vec<bool>,
}

/// Mutable per-instance state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub total_cards: usize,
    pub current_index: usize,
    pub autoplay: AutoplayTimer,
}

impl CarouselState {
    pub fn is_inert(&self) -> bool {
        self.total_cards == 0
    }
}

// =============================================================================
// CAROUSEL
// =============================================================================

pub struct Carousel {
    id: ContainerId,
    cards: Vec<ElementId>,
    next_control: ElementId,
    state: CarouselState,
    indicators: IndicatorSync,
    placements: Vec<CardPlacement>,
    view: Signal<CarouselView>,
    clock: Rc<dyn Clock>,
    autoplay_delay: Duration,
}

impl Carousel {
    /// Build a carousel from a discovered container.
    ///
    /// A container without cards yields an inert carousel: no dots, no
    /// placements, and every operation is a no-op.
    pub fn new(spec: ContainerSpec, clock: Rc<dyn Clock>, config: &CarouselConfig) -> Self {
        let ContainerSpec {
            id,
            cards,
            indicators,
            next,
        } = spec;
        let total_cards = cards.len();

        let indicators = if total_cards == 0 {
            IndicatorSync::default()
        } else {
            IndicatorSync::generate(&id, indicators.as_ref(), total_cards)
        };

        let mut carousel = Self {
            id,
            cards,
            next_control: next,
            state: CarouselState {
                total_cards,
                current_index: 0,
                autoplay: AutoplayTimer::new(),
            },
            indicators,
            placements: Vec::new(),
            view: signal(CarouselView::default()),
            clock,
            autoplay_delay: config.autoplay_delay,
        };

        if !carousel.is_inert() {
            carousel.update_positions();
        }
        carousel
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn next(&mut self) {
        if self.is_inert() {
            return;
        }
        self.state.current_index = (self.state.current_index + 1) % self.state.total_cards;
        self.update_positions();
    }

    pub fn prev(&mut self) {
        if self.is_inert() {
            return;
        }
        let total = self.state.total_cards;
        self.state.current_index = (self.state.current_index + total - 1) % total;
        self.update_positions();
    }

    /// Jump to `index`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.state.total_cards {
            return;
        }
        self.state.current_index = index;
        self.update_positions();
    }

    // -------------------------------------------------------------------------
    // Autoplay
    // -------------------------------------------------------------------------

    /// Start autoplay with the configured delay.
    pub fn start_autoplay(&mut self) {
        self.start_autoplay_with(self.autoplay_delay);
    }

    /// Start autoplay with an explicit delay, replacing any running timer.
    pub fn start_autoplay_with(&mut self, delay: Duration) {
        if self.is_inert() {
            return;
        }
        let now = self.clock.now();
        if !self.state.autoplay.start(delay, now) {
            warn!(container = %self.id, ?delay, "ignoring unusable autoplay delay");
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.state.autoplay.cancel();
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.autoplay.is_running()
    }

    /// Fire every autoplay interval that has elapsed. Returns the number of
    /// intervals; the carousel advances by that many cards in one update.
    pub fn tick(&mut self) -> u32 {
        let fired = self.state.autoplay.poll(self.clock.now());
        if fired > 0 && !self.is_inert() {
            let total = self.state.total_cards;
            let steps = (fired as usize) % total;
            self.state.current_index = (self.state.current_index + steps) % total;
            self.update_positions();
        }
        fired
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    pub fn next_control(&self) -> &ElementId {
        &self.next_control
    }

    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn total_cards(&self) -> usize {
        self.state.total_cards
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_inert(&self) -> bool {
        self.state.is_inert()
    }

    pub fn placements(&self) -> &[CardPlacement] {
        &self.placements
    }

    pub fn dots(&self) -> &[DotIndicator] {
        self.indicators.dots()
    }

    /// Reactive view. Subscribe with `spark_signals::effect`.
    pub fn view_signal(&self) -> Signal<CarouselView> {
        self.view.clone()
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    fn update_positions(&mut self) {
        let total = self.state.total_cards;
        let current = self.state.current_index;

        self.placements = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let slot = slot_for(i, current, total);
                CardPlacement {
                    card: card.clone(),
                    absolute_index: i,
                    relative: relative_offset(i, current, total),
                    slot,
                    style: style_for_slot(slot).copied(),
                }
            })
            .collect();

        self.indicators.sync(current);

        debug!(container = %self.id, index = current, "carousel moved");

        self.view.set(CarouselView {
            current_index: current,
            placements: self.placements.clone(),
            dots: self.indicators.active_flags(),
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::positions::POSITIONS;
    use crate::state::clock::ManualClock;
    use spark_signals::effect;
    use std::cell::Cell;

    const DELAY: Duration = Duration::from_millis(15_000);

    fn setup(cards: usize) -> (Carousel, ManualClock) {
        let clock = ManualClock::new();
        let spec = ContainerSpec::new("svc", "svc-next")
            .with_cards(cards)
            .with_indicators("svc-dots");
        let carousel = Carousel::new(spec, Rc::new(clock.clone()), &CarouselConfig::default());
        (carousel, clock)
    }

    #[test]
    fn test_slot_formula() {
        for total in 1..9 {
            for current in 0..total {
                assert_eq!(slot_for(current, current, total), 0);
                for i in 0..total {
                    let relative = (i + total - current) % total;
                    let expected = if relative == 1 { total } else { relative };
                    assert_eq!(slot_for(i, current, total), expected);
                }
            }
        }
    }

    #[test]
    fn test_initial_layout() {
        let (carousel, _) = setup(5);
        assert_eq!(carousel.current_index(), 0);

        let slots: Vec<usize> = carousel.placements().iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 5, 2, 3, 4]);
        assert_eq!(carousel.placements()[0].style, Some(POSITIONS[0]));
        assert!(carousel.placements()[1].is_hidden());
        assert!(carousel.dots()[0].active);
    }

    #[test]
    fn test_next_from_zero_with_five_cards() {
        let (mut carousel, _) = setup(5);
        carousel.next();

        assert_eq!(carousel.current_index(), 1);
        let card0 = &carousel.placements()[0];
        assert_eq!(card0.relative, 4);
        assert_eq!(card0.slot, 4);
        let card1 = &carousel.placements()[1];
        assert_eq!(card1.relative, 0);
        assert_eq!(card1.slot, 0);
        assert_eq!(card1.style, Some(POSITIONS[0]));
    }

    #[test]
    fn test_prev_wraps() {
        let (mut carousel, _) = setup(3);
        carousel.go_to(2);
        carousel.prev();
        assert_eq!(carousel.current_index(), 1);

        carousel.go_to(0);
        carousel.prev();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_next_prev_round_trip_stays_in_range() {
        let (mut carousel, _) = setup(4);
        let moves = [true, true, false, true, true, true, false, false, true, true, true];
        for forward in moves {
            let before = carousel.current_index();
            if forward {
                carousel.next();
                assert!(carousel.current_index() < 4);
                carousel.prev();
            } else {
                carousel.prev();
                assert!(carousel.current_index() < 4);
                carousel.next();
            }
            assert_eq!(carousel.current_index(), before);

            if forward {
                carousel.next();
            } else {
                carousel.prev();
            }
            assert!(carousel.current_index() < 4);
        }
    }

    #[test]
    fn test_go_to_range() {
        let (mut carousel, _) = setup(4);
        carousel.go_to(3);
        assert_eq!(carousel.current_index(), 3);

        carousel.go_to(4);
        assert_eq!(carousel.current_index(), 3);
        carousel.go_to(usize::MAX);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_dots_follow_current_index() {
        let (mut carousel, _) = setup(4);
        carousel.go_to(2);
        let active: Vec<bool> = carousel.dots().iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, false, true, false]);

        carousel.next();
        assert!(carousel.dots()[3].active);
        assert_eq!(carousel.dots().iter().filter(|d| d.active).count(), 1);
    }

    #[test]
    fn test_no_indicator_host_means_no_dots() {
        let spec = ContainerSpec::new("bare", "bare-next").with_cards(3);
        let mut carousel =
            Carousel::new(spec, Rc::new(ManualClock::new()), &CarouselConfig::default());
        carousel.next();
        assert!(carousel.dots().is_empty());
        assert!(carousel.view_signal().get().dots.is_empty());
    }

    #[test]
    fn test_inert_carousel() {
        let (mut carousel, clock) = setup(0);
        carousel.next();
        carousel.prev();
        carousel.go_to(0);
        carousel.start_autoplay();
        clock.advance(DELAY * 3);

        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.total_cards(), 0);
        assert!(!carousel.is_autoplaying());
        assert!(carousel.placements().is_empty());
        assert!(carousel.dots().is_empty());
        assert_eq!(carousel.view_signal().get(), CarouselView::default());
    }

    #[test]
    fn test_autoplay_started_twice_fires_once() {
        let (mut carousel, clock) = setup(5);
        carousel.start_autoplay();
        carousel.start_autoplay();

        clock.advance(DELAY);
        assert_eq!(carousel.tick(), 1);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_autoplay_custom_delay() {
        let (mut carousel, clock) = setup(3);
        carousel.start_autoplay_with(Duration::from_secs(2));

        clock.advance(Duration::from_secs(1));
        assert_eq!(carousel.tick(), 0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(carousel.tick(), 3);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_stop_autoplay() {
        let (mut carousel, clock) = setup(3);
        carousel.stop_autoplay();
        assert_eq!(carousel.current_index(), 0);

        carousel.start_autoplay();
        carousel.stop_autoplay();
        carousel.stop_autoplay();
        clock.advance(DELAY * 2);
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_zero_delay_leaves_timer_stopped() {
        let (mut carousel, clock) = setup(3);
        carousel.start_autoplay_with(Duration::ZERO);
        clock.advance(DELAY);
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn test_huge_delay_leaves_timer_stopped() {
        let (mut carousel, clock) = setup(3);
        clock.advance(Duration::from_secs(1));
        carousel.start_autoplay_with(Duration::MAX);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn test_tiny_delay_catch_up_is_one_update() {
        let (mut carousel, clock) = setup(5);
        carousel.start_autoplay_with(Duration::from_nanos(1));
        clock.advance(Duration::from_secs(5));

        assert_eq!(carousel.tick(), u32::MAX);
        assert_eq!(carousel.current_index(), (u32::MAX as usize) % 5);
        assert_eq!(carousel.dots().iter().filter(|d| d.active).count(), 1);
    }

    #[test]
    fn test_catch_up_publishes_once() {
        let (mut carousel, clock) = setup(5);
        let runs = Rc::new(Cell::new(0));
        let view = carousel.view_signal();
        let runs_clone = runs.clone();
        let _stop = effect(move || {
            let _ = view.get();
            runs_clone.set(runs_clone.get() + 1);
        });

        carousel.start_autoplay();
        clock.advance(DELAY * 3);
        assert_eq!(carousel.tick(), 3);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_view_signal_updates_once_per_operation() {
        let (mut carousel, _) = setup(5);
        let runs = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(usize::MAX));

        let view = carousel.view_signal();
        let runs_clone = runs.clone();
        let seen_clone = seen.clone();
        let _stop = effect(move || {
            seen_clone.set(view.get().current_index);
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);
        assert_eq!(seen.get(), 0);

        carousel.next();
        assert_eq!(runs.get(), 2);
        assert_eq!(seen.get(), 1);

        carousel.go_to(3);
        assert_eq!(runs.get(), 3);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_more_than_five_cards_hides_extra() {
        let (carousel, _) = setup(7);
        let hidden: Vec<usize> = carousel
            .placements()
            .iter()
            .filter(|p| p.is_hidden())
            .map(|p| p.absolute_index)
            .collect();
        // relative 1 -> slot 7, relatives 5 and 6 have no style
        assert_eq!(hidden, vec![1, 5, 6]);
    }
}
