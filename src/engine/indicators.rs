//! Indicator Sync - dot generation and active-dot highlighting.
//!
//! Dots are generated once, one per card, into the container's indicator
//! host. A dot is active iff its ordinal equals the current index.

use crate::types::{ContainerId, ElementId};

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotIndicator {
    pub id: ElementId,
    pub ordinal: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorSync {
    dots: Vec<DotIndicator>,
}

impl IndicatorSync {
    /// Generate `count` dots for a container. No host means no dots.
    pub fn generate(container: &ContainerId, host: Option<&ElementId>, count: usize) -> Self {
        if host.is_none() {
            return Self::default();
        }

        let dots = (0..count)
            .map(|ordinal| DotIndicator {
                id: ElementId(format!("{container}-dot-{ordinal}")),
                ordinal,
                active: false,
            })
            .collect();
        Self { dots }
    }

    /// Highlight the dot at `current`, clear the rest.
    pub fn sync(&mut self, current: usize) {
        for dot in &mut self.dots {
            dot.active = dot.ordinal == current;
        }
    }

    pub fn dots(&self) -> &[DotIndicator] {
        &self.dots
    }

    pub fn active_flags(&self) -> Vec<bool> {
        self.dots.iter().map(|d| d.active).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}
