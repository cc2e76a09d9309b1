//! Visibility Resolver - which carousel owns the keyboard.
//!
//! The carousel with the most vertical pixels inside the viewport wins.
//! Ties go to the earlier carousel in discovery order. When nothing is on
//! screen there is no selection.

use crate::engine::InstanceRegistry;
use crate::types::{ContainerId, Geometry};

/// Visible pixel extent of a container, 0 when the host cannot measure it.
pub fn visible_extent(geometry: &dyn Geometry, id: &ContainerId) -> f32 {
    geometry
        .container_rect(id)
        .map(|rect| rect.visible_height(geometry.viewport_height()))
        .unwrap_or(0.0)
}

/// The most visible container, if any has a positive visible extent.
pub fn most_visible<'a>(
    registry: &'a InstanceRegistry,
    geometry: &dyn Geometry,
) -> Option<&'a ContainerId> {
    let mut best: Option<&ContainerId> = None;
    let mut best_extent = 0.0;

    for id in registry.ids() {
        let extent = visible_extent(geometry, id);
        if extent > best_extent {
            best_extent = extent;
            best = Some(id);
        }
    }

    best
}
