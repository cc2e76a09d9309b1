//! Mount API - page lifecycle.
//!
//! Mounting is the single initialization point: discover every carousel
//! container, build one engine per container, start autoplay, and bind
//! input. The returned handle owns the registry and the router; the host
//! feeds it events and calls `tick()` from its loop.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::pipeline::mount;
//! use spark_carousel::{CarouselConfig, ContainerSpec};
//!
//! let containers = vec![ContainerSpec::new("web", "web-next").with_cards(5)];
//! let mut handle = mount::mount(containers, &CarouselConfig::default());
//!
//! while handle.is_running() {
//!     if let Some(event) = poll_event(Duration::from_millis(16))? {
//!         handle.dispatch(&event, &geometry);
//!     }
//!     handle.tick();
//! }
//!
//! handle.unmount();
//! ```

use std::rc::Rc;

use tracing::info;

use crate::config::CarouselConfig;
use crate::engine::{Carousel, InstanceRegistry};
use crate::state::clock::{Clock, SystemClock};
use crate::state::input::InputEvent;
use crate::state::router::{InputRouter, Routed};
use crate::types::{ContainerId, ContainerSpec, Geometry};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount().
///
/// Owns the registry (built once, never re-discovered) and the router bound
/// to it.
pub struct MountHandle {
    registry: InstanceRegistry,
    router: InputRouter,
    running: bool,
}

impl MountHandle {
    /// Route one input event. Ctrl+C stops the handle.
    pub fn dispatch(&mut self, event: &InputEvent, geometry: &dyn Geometry) -> Routed {
        if let InputEvent::Key(key) = event {
            if key.is_key_down() && key.modifiers.ctrl && key.key == "c" {
                self.running = false;
                return Routed::HANDLED;
            }
        }
        self.router.route(&mut self.registry, geometry, event)
    }

    /// Poll autoplay on every carousel. Returns the number of transitions.
    pub fn tick(&mut self) -> u32 {
        self.registry.tick()
    }

    pub fn carousel(&self, id: &ContainerId) -> Option<&Carousel> {
        self.registry.get(id)
    }

    pub fn carousel_mut(&mut self, id: &ContainerId) -> Option<&mut Carousel> {
        self.registry.get_mut(id)
    }

    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop without tearing anything down.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop autoplay everywhere and release the page.
    pub fn unmount(mut self) {
        self.running = false;
        self.registry.stop_all();
    }
}

// =============================================================================
// Mount Functions
// =============================================================================

/// Mount carousels on the system clock.
pub fn mount<I>(containers: I, config: &CarouselConfig) -> MountHandle
where
    I: IntoIterator<Item = ContainerSpec>,
{
    mount_with_clock(containers, config, Rc::new(SystemClock::new()))
}

/// Mount carousels on an explicit clock.
pub fn mount_with_clock<I>(
    containers: I,
    config: &CarouselConfig,
    clock: Rc<dyn Clock>,
) -> MountHandle
where
    I: IntoIterator<Item = ContainerSpec>,
{
    let registry = InstanceRegistry::discover(containers, clock, config);
    let router = InputRouter::bind(&registry);

    info!(instances = registry.len(), "3D carousels successfully initialized");

    MountHandle {
        registry,
        router,
        running: true,
    }
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Tests
// =============================================================================
