//! Registration registry
//!
//! Maps caller-chosen ids to elements and their (possibly not yet built)
//! bodies. Entries outlive world rebuilds; bodies don't.

use std::collections::HashMap;

use crate::domain::host::Size;
use crate::domain::outline::BodyOutline;
use crate::domain::props::BodyProps;
use crate::systems::{BodyHandle, BuiltBody};

/// A body that exists in the current world.
#[derive(Clone, Debug, PartialEq)]
pub struct HydratedBody {
    pub handle: BodyHandle,
    pub outline: BodyOutline,
    pub size: Size,
}

impl From<BuiltBody> for HydratedBody {
    fn from(built: BuiltBody) -> Self {
        Self {
            handle: built.handle,
            outline: built.outline,
            size: built.size,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BodySlot {
    /// Registered before the world existed (or since its last teardown).
    #[default]
    Pending,
    Hydrated(HydratedBody),
}

impl BodySlot {
    pub fn hydrated(&self) -> Option<&HydratedBody> {
        match self {
            BodySlot::Pending => None,
            BodySlot::Hydrated(body) => Some(body),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, BodySlot::Pending)
    }

    /// Detach the body, leaving the slot pending.
    pub fn take(&mut self) -> Option<HydratedBody> {
        match std::mem::take(self) {
            BodySlot::Pending => None,
            BodySlot::Hydrated(body) => Some(body),
        }
    }
}

pub struct Entry<E> {
    pub element: E,
    pub props: BodyProps,
    pub body: BodySlot,
}

/// Outcome of `Registry::upsert`.
pub enum Upsert {
    /// Same element as before; props replaced, body untouched.
    Updated,
    /// Fresh entry. Carries the body of whatever entry it replaced.
    Replaced(Option<HydratedBody>),
}

pub struct Registry<E> {
    entries: HashMap<String, Entry<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<E> Registry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update `id`. `same` decides element identity.
    pub fn upsert(&mut self, id: &str, element: E, props: BodyProps, same: impl Fn(&E, &E) -> bool) -> Upsert {
        if let Some(entry) = self.entries.get_mut(id) {
            if same(&entry.element, &element) {
                entry.props = props;
                return Upsert::Updated;
            }
        }
        let previous = self.entries.insert(
            id.to_string(),
            Entry { element, props, body: BodySlot::Pending },
        );
        Upsert::Replaced(previous.and_then(|mut entry| entry.body.take()))
    }

    pub fn remove(&mut self, id: &str) -> Option<Entry<E>> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry<E>> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entry<E>> {
        self.entries.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry<E>)> {
        self.entries.iter()
    }

    /// Ids of entries still waiting for a body, in a stable order.
    pub fn pending_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.body.is_pending())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Detach every body, keeping the entries.
    pub fn take_bodies(&mut self) -> Vec<HydratedBody> {
        self.entries
            .values_mut()
            .filter_map(|entry| entry.body.take())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hydrated_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| !entry.body.is_pending())
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outline::{OutlineShape, RenderStyle};
    use crate::systems::PhysicsWorld;
    use rapier2d::prelude::*;

    fn hydrated(world: &mut PhysicsWorld) -> HydratedBody {
        let handle = world.insert(RigidBodyBuilder::dynamic().build(), vec![ColliderBuilder::ball(1.0).build()]);
        HydratedBody {
            handle,
            outline: BodyOutline { shape: OutlineShape::Circle { radius: 1.0 }, style: RenderStyle::INVISIBLE },
            size: Size::new(2.0, 2.0),
        }
    }

    #[test]
    fn same_element_keeps_its_body() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let mut registry = Registry::new();
        assert!(matches!(registry.upsert("a", 1, BodyProps::default(), |a, b| a == b), Upsert::Replaced(None)));
        registry.get_mut("a").unwrap().body = BodySlot::Hydrated(hydrated(&mut world));

        let props = BodyProps::default().with_angle(45.0);
        assert!(matches!(registry.upsert("a", 1, props.clone(), |a, b| a == b), Upsert::Updated));
        let entry = registry.get("a").unwrap();
        assert_eq!(entry.props, props);
        assert!(!entry.body.is_pending());
    }

    #[test]
    fn different_element_hands_back_the_old_body() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let mut registry = Registry::new();
        registry.upsert("a", 1, BodyProps::default(), |a, b| a == b);
        let body = hydrated(&mut world);
        registry.get_mut("a").unwrap().body = BodySlot::Hydrated(body.clone());

        match registry.upsert("a", 2, BodyProps::default(), |a, b| a == b) {
            Upsert::Replaced(Some(old)) => assert_eq!(old, body),
            _ => panic!("expected the old body back"),
        }
        assert!(registry.get("a").unwrap().body.is_pending());
        assert_eq!(registry.get("a").unwrap().element, 2);
    }

    #[test]
    fn take_bodies_keeps_entries() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let mut registry = Registry::new();
        registry.upsert("a", 1, BodyProps::default(), |a, b| a == b);
        registry.upsert("b", 2, BodyProps::default(), |a, b| a == b);
        registry.get_mut("b").unwrap().body = BodySlot::Hydrated(hydrated(&mut world));

        assert_eq!(registry.hydrated_count(), 1);
        assert_eq!(registry.take_bodies().len(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.pending_ids(), vec!["a".to_string(), "b".to_string()]);
    }
}
