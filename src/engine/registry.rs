//! Instance Registry - one carousel per discovered container.
//!
//! Built once at mount time, in discovery order, then only read for routing
//! (and mutated through the carousels it owns). Lookups by container id are
//! O(1); iteration follows discovery order.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use super::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::state::clock::Clock;
use crate::types::{ContainerId, ContainerSpec};

#[derive(Default)]
pub struct InstanceRegistry {
    entries: Vec<Carousel>,
    by_id: HashMap<ContainerId, usize>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one carousel per container, in the order given.
    ///
    /// Autoplay is started on each instance when `config.autoplay_on_mount`
    /// is set.
    pub fn discover<I>(containers: I, clock: Rc<dyn Clock>, config: &CarouselConfig) -> Self
    where
        I: IntoIterator<Item = ContainerSpec>,
    {
        let mut registry = Self::new();
        for spec in containers {
            let mut carousel = Carousel::new(spec, clock.clone(), config);
            if config.autoplay_on_mount {
                carousel.start_autoplay();
            }
            registry.insert(carousel);
        }
        registry
    }

    /// Register a carousel. A repeated id replaces the earlier instance but
    /// keeps its position in iteration order.
    pub fn insert(&mut self, carousel: Carousel) {
        match self.by_id.get(carousel.id()) {
            Some(&position) => {
                warn!(container = %carousel.id(), "duplicate carousel container id, replacing");
                self.entries[position] = carousel;
            }
            None => {
                self.by_id.insert(carousel.id().clone(), self.entries.len());
                self.entries.push(carousel);
            }
        }
    }

    pub fn get(&self, id: &ContainerId) -> Option<&Carousel> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, id: &ContainerId) -> Option<&mut Carousel> {
        let position = *self.by_id.get(id)?;
        self.entries.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Carousels in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Carousel> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Carousel> {
        self.entries.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ContainerId> {
        self.entries.iter().map(|c| c.id())
    }

    /// Poll autoplay on every carousel. Returns total `next()` calls fired.
    pub fn tick(&mut self) -> u32 {
        self.entries.iter_mut().map(|c| c.tick()).sum()
    }

    pub fn stop_all(&mut self) {
        for carousel in &mut self.entries {
            carousel.stop_autoplay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::ManualClock;
    use std::time::Duration;

    fn setup(config: CarouselConfig) -> (InstanceRegistry, ManualClock) {
        let clock = ManualClock::new();
        let containers = vec![
            ContainerSpec::new("it", "it-next").with_cards(3),
            ContainerSpec::new("web", "web-next").with_cards(5),
            ContainerSpec::new("empty", "empty-next"),
        ];
        let registry = InstanceRegistry::discover(containers, Rc::new(clock.clone()), &config);
        (registry, clock)
    }

    #[test]
    fn test_discovery_order_and_lookup() {
        let (registry, _) = setup(CarouselConfig::default());

        let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["it", "web", "empty"]);
        assert_eq!(registry.get(&"web".into()).unwrap().total_cards(), 5);
        assert!(registry.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_autoplay_starts_on_discovery() {
        let (mut registry, clock) = setup(CarouselConfig::default());

        assert!(registry.get(&"it".into()).unwrap().is_autoplaying());
        assert!(!registry.get(&"empty".into()).unwrap().is_autoplaying());

        clock.advance(Duration::from_millis(15_000));
        assert_eq!(registry.tick(), 2);
        assert_eq!(registry.get(&"it".into()).unwrap().current_index(), 1);
        assert_eq!(registry.get(&"web".into()).unwrap().current_index(), 1);
    }

    #[test]
    fn test_autoplay_on_mount_disabled() {
        let (mut registry, clock) = setup(CarouselConfig::default().with_autoplay_on_mount(false));
        clock.advance(Duration::from_secs(60));
        assert_eq!(registry.tick(), 0);
        assert!(registry.iter().all(|c| !c.is_autoplaying()));
    }

    #[test]
    fn test_instances_are_independent() {
        let (mut registry, _) = setup(CarouselConfig::default());
        registry.get_mut(&"web".into()).unwrap().go_to(3);

        assert_eq!(registry.get(&"web".into()).unwrap().current_index(), 3);
        assert_eq!(registry.get(&"it".into()).unwrap().current_index(), 0);
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let clock: Rc<dyn Clock> = Rc::new(ManualClock::new());
        let config = CarouselConfig::default();
        let containers = vec![
            ContainerSpec::new("a", "a-next").with_cards(2),
            ContainerSpec::new("b", "b-next").with_cards(2),
            ContainerSpec::new("a", "a2-next").with_cards(4),
        ];
        let registry = InstanceRegistry::discover(containers, clock, &config);

        assert_eq!(registry.len(), 2);
        let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(registry.get(&"a".into()).unwrap().total_cards(), 4);
    }

    #[test]
    fn test_stop_all() {
        let (mut registry, clock) = setup(CarouselConfig::default());
        registry.stop_all();
        clock.advance(Duration::from_secs(60));
        assert_eq!(registry.tick(), 0);
    }
}
