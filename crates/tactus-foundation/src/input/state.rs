//! Shared multi-pointer interaction state.
//!
//! The region owns exactly one [`InteractionState`] and mutates it before any
//! recognizer hook runs; recognizers only ever receive `&InteractionState`, so
//! every hook within one dispatch observes the same snapshot.

use super::types::{PointerId, PointerSample};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tactus_geometry::{centroid, Point};

/// History of one live contact: where it went down, its previous sample and
/// its latest one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub initial: PointerSample,
    pub previous: PointerSample,
    pub current: PointerSample,
}

impl PointerInput {
    pub fn new(id: PointerId, sample: PointerSample) -> Self {
        Self {
            id,
            initial: sample,
            previous: sample,
            current: sample,
        }
    }

    fn advance(&mut self, sample: PointerSample) {
        self.previous = self.current;
        self.current = sample;
    }

    pub fn point(&self) -> Point {
        self.current.point
    }

    /// Straight-line displacement since the contact went down.
    pub fn total_distance(&self) -> f32 {
        self.initial.distance_to(&self.current)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.current.time.saturating_sub(self.initial.time)
    }
}

/// What is touching the surface right now.
///
/// `active` keeps pointers in the order they went down. `centroid` is the
/// unweighted mean of their current points and is `None` whenever nothing is
/// down.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    active: IndexMap<PointerId, PointerInput>,
    centroid: Option<Point>,
    changed: Option<PointerInput>,
    time: u64,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new contact. Returns `false`, leaving the state untouched,
    /// when `id` is already active.
    pub fn add_pointer(&mut self, id: PointerId, sample: PointerSample) -> bool {
        if self.active.contains_key(&id) {
            return false;
        }
        let input = PointerInput::new(id, sample);
        self.active.insert(id, input);
        self.changed = Some(input);
        self.time = sample.time;
        self.recompute_centroid();
        log::trace!("pointer {id} down at {:?}, {} active", sample.point, self.len());
        true
    }

    /// Records a new sample for an active contact. Returns `false` when `id` is
    /// not active.
    pub fn update_pointer(&mut self, id: PointerId, sample: PointerSample) -> bool {
        let Some(input) = self.active.get_mut(&id) else {
            return false;
        };
        input.advance(sample);
        self.changed = Some(*input);
        self.time = sample.time;
        self.recompute_centroid();
        true
    }

    /// Drops a contact from the active set. Unknown ids are a no-op.
    ///
    /// The removed contact stays reachable through [`changed`](Self::changed)
    /// until the next mutation.
    pub fn remove_pointer(&mut self, id: PointerId) -> Option<PointerInput> {
        let removed = self.active.shift_remove(&id)?;
        self.changed = Some(removed);
        self.recompute_centroid();
        log::trace!("pointer {id} removed, {} active", self.len());
        Some(removed)
    }

    /// Forgets every contact.
    pub fn clear(&mut self) {
        self.active.clear();
        self.centroid = None;
        self.changed = None;
    }

    fn recompute_centroid(&mut self) {
        self.centroid = centroid(self.active.values().map(PointerInput::point));
    }

    pub fn active(&self) -> impl Iterator<Item = &PointerInput> + '_ {
        self.active.values()
    }

    pub fn active_points(&self) -> SmallVec<[Point; 8]> {
        self.active.values().map(PointerInput::point).collect()
    }

    pub fn get(&self, id: PointerId) -> Option<&PointerInput> {
        self.active.get(&id)
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.active.contains_key(&id)
    }

    /// Number of active contacts.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn centroid(&self) -> Option<Point> {
        self.centroid
    }

    /// The contact whose event is being dispatched, including one that has
    /// just ended and already left the active set.
    pub fn changed(&self) -> Option<&PointerInput> {
        self.changed.as_ref()
    }

    /// Timestamp of the event being dispatched.
    pub fn time(&self) -> u64 {
        self.time
    }
}
