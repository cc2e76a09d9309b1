//! Engine - carousel state machine, slot styles, dots and the registry.

pub mod carousel;
pub mod indicators;
pub mod positions;
pub mod registry;

pub use carousel::{
    relative_offset, slot_for, CardPlacement, Carousel, CarouselState, CarouselView,
};
pub use indicators::{DotIndicator, IndicatorSync};
pub use positions::{style_for_slot, PositionStyle, SlotName, POSITIONS, SLOT_COUNT};
pub use registry::InstanceRegistry;
