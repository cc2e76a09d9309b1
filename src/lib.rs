//! # spark-carousel
//!
//! Headless infinite 3D carousel engine.
//!
//! Cycles a fixed set of cards through five positional slots with circular
//! indexing. Supports next/prev/go-to navigation, autoplay on a polled
//! timer, dot indicators, and arrow-key control routed to whichever carousel
//! is most visible in the viewport.
//!
//! ## Architecture
//!
//! The engine exposes plain synchronous methods. Hosts own the event loop:
//! they describe containers, feed input events, and call `tick()`. Each
//! carousel publishes its presentation output through a
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals) `Signal`:
//!
//! ```text
//! ContainerSpec → InstanceRegistry → Carousel → view Signal → presentation effect
//!                        ↑
//!     InputEvent → InputRouter (clicks by element, keys by visibility)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Container ids, element ids, geometry
//! - [`engine`] - Carousel state machine, position table, dots, registry
//! - [`state`] - Clock, autoplay, keyboard, input, visibility, routing
//! - [`pipeline`] - Mount handle tying the page together
//! - [`config`] / [`error`] - Configuration and its errors

pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{CarouselConfig, AUTOPLAY_DELAY_ENV, DEFAULT_AUTOPLAY_DELAY};
pub use error::{ConfigError, Result};

pub use engine::{
    relative_offset, slot_for, style_for_slot, CardPlacement, Carousel, CarouselState,
    CarouselView, DotIndicator, IndicatorSync, InstanceRegistry, PositionStyle, SlotName,
    POSITIONS, SLOT_COUNT,
};

pub use pipeline::{mount, mount_with_clock, unmount, MountHandle};

pub use state::{
    // Time
    AutoplayHandle, AutoplayTimer, Clock, ManualClock, SystemClock,
    // Input
    convert_key_event, poll_event, read_event, InputEvent,
    KeyState, KeyboardEvent, Modifiers, NavKey,
    // Routing
    most_visible, visible_extent, Binding, InputRouter, Routed,
};
