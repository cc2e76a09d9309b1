//! Input Router - events to carousel operations.
//!
//! Clicks are routed by element: each carousel's next control calls
//! `next()` and each dot calls `go_to(ordinal)` on its own carousel. Arrow
//! keys are global and go to whichever carousel is most visible.
//!
//! # Routing
//!
//! ```text
//! Click(next control) → owner.next()
//! Click(dot i)        → owner.go_to(i)
//! ArrowRight          → most_visible.next()   (default suppressed)
//! ArrowLeft           → most_visible.prev()   (default suppressed)
//! anything else       → ignored
//! ```

use std::collections::HashMap;

use super::input::InputEvent;
use super::keyboard::{KeyboardEvent, NavKey};
use super::visibility::most_visible;
use crate::engine::InstanceRegistry;
use crate::types::{ContainerId, ElementId, Geometry};

bitflags::bitflags! {
    /// What routing did with an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Routed: u8 {
        const NONE = 0;
        /// A carousel operation ran.
        const HANDLED = 1 << 0;
        /// The host should suppress its default action for this event.
        const PREVENT_DEFAULT = 1 << 1;
    }
}

/// Carousel operation bound to a clickable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Next(ContainerId),
    Dot(ContainerId, usize),
}

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    bindings: HashMap<ElementId, Binding>,
}

impl InputRouter {
    /// Bind the next control and dots of every non-inert carousel.
    pub fn bind(registry: &InstanceRegistry) -> Self {
        let mut bindings = HashMap::new();
        for carousel in registry.iter().filter(|c| !c.is_inert()) {
            bindings.insert(
                carousel.next_control().clone(),
                Binding::Next(carousel.id().clone()),
            );
            for dot in carousel.dots() {
                bindings.insert(dot.id.clone(), Binding::Dot(carousel.id().clone(), dot.ordinal));
            }
        }
        Self { bindings }
    }

    pub fn binding(&self, element: &ElementId) -> Option<&Binding> {
        self.bindings.get(element)
    }

    pub fn route(
        &self,
        registry: &mut InstanceRegistry,
        geometry: &dyn Geometry,
        event: &InputEvent,
    ) -> Routed {
        match event {
            InputEvent::Key(key) => self.route_key(registry, geometry, key),
            InputEvent::Click(element) => self.route_click(registry, element),
            InputEvent::Resize(..) | InputEvent::None => Routed::NONE,
        }
    }

    pub fn route_click(&self, registry: &mut InstanceRegistry, element: &ElementId) -> Routed {
        let Some(binding) = self.bindings.get(element) else {
            return Routed::NONE;
        };

        match binding {
            Binding::Next(id) => match registry.get_mut(id) {
                Some(carousel) => {
                    carousel.next();
                    Routed::HANDLED
                }
                None => Routed::NONE,
            },
            Binding::Dot(id, ordinal) => match registry.get_mut(id) {
                Some(carousel) => {
                    carousel.go_to(*ordinal);
                    Routed::HANDLED
                }
                None => Routed::NONE,
            },
        }
    }

    pub fn route_key(
        &self,
        registry: &mut InstanceRegistry,
        geometry: &dyn Geometry,
        event: &KeyboardEvent,
    ) -> Routed {
        let Some(nav) = event.nav_key() else {
            return Routed::NONE;
        };

        let Some(id) = most_visible(registry, geometry).cloned() else {
            return Routed::PREVENT_DEFAULT;
        };
        let Some(carousel) = registry.get_mut(&id) else {
            return Routed::PREVENT_DEFAULT;
        };

        match nav {
            NavKey::Next => carousel.next(),
            NavKey::Prev => carousel.prev(),
        }
        Routed::HANDLED | Routed::PREVENT_DEFAULT
    }
}
