//! Core types for spark-carousel.
//!
//! Identifiers and geometry shared by the engine, the router and the
//! visibility resolver. The collaborator that owns the page supplies these;
//! nothing here knows about any particular markup.

use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identity of a carousel container (the section the carousel lives in).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ContainerId(pub String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identity of any element that can receive a click (next control, dot).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// Container description
// =============================================================================

/// Everything the engine needs from one discovered container.
///
/// `cards` is order-significant: position in the list is the card's
/// absolute index. `next` must be a real control in the host markup; binding
/// it is the host's job, the engine only records the handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerSpec {
    pub id: ContainerId,
    pub cards: Vec<ElementId>,
    /// Host element that dots are generated into. `None` means no dots.
    pub indicators: Option<ElementId>,
    pub next: ElementId,
}

impl ContainerSpec {
    pub fn new(id: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            id: ContainerId::new(id),
            cards: Vec::new(),
            indicators: None,
            next: ElementId::new(next),
        }
    }

    /// Append `count` cards with ids `<container>-card-<i>`.
    pub fn with_cards(mut self, count: usize) -> Self {
        let base = self.cards.len();
        for i in base..base + count {
            self.cards.push(ElementId(format!("{}-card-{}", self.id, i)));
        }
        self
    }

    pub fn with_indicators(mut self, host: impl Into<String>) -> Self {
        self.indicators = Some(ElementId::new(host));
        self
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Vertical extent of an element relative to the viewport top, in pixels.
///
/// Matches a client bounding rect: `top` may be negative when the element
/// is scrolled past.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Pixels of this rect that intersect a viewport of `viewport_height`.
    pub fn visible_height(&self, viewport_height: f32) -> f32 {
        (self.bottom.min(viewport_height) - self.top.max(0.0)).max(0.0)
    }
}

/// Viewport geometry query supplied by the host.
pub trait Geometry {
    /// Bounding rect of a container, or `None` if the host cannot measure it.
    fn container_rect(&self, id: &ContainerId) -> Option<Rect>;

    /// Current viewport height in pixels.
    fn viewport_height(&self) -> f32;
}

// =============================================================================
// Tests
// =============================================================================
