use tactus_geometry::Point;

pub type PointerId = u64;

/// Lifecycle stage of a single pointer contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Platform-level pointer action, before normalization into a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

/// Raw pointer notification handed to a [`Region`](super::region::Region).
///
/// Platform adapters build these; the region turns each one into a
/// [`PointerSample`] stamped with the event time, or with its own clock when
/// the platform supplied none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: Option<u64>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms: None,
        }
    }

    pub fn down(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y)).with_id(id)
    }

    pub fn moved(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y)).with_id(id)
    }

    pub fn up(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y)).with_id(id)
    }

    pub fn cancel(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y)).with_id(id)
    }

    /// Phase the region routes this event under.
    pub fn phase(&self) -> PointerPhase {
        self.kind.phase()
    }

    /// Set the pointer this event belongs to
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Set an explicit timestamp, overriding the region's clock
    pub fn with_time(mut self, time_ms: u64) -> Self {
        self.time_ms = Some(time_ms);
        self
    }
}

/// One observation of one pointer. Never mutated after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub time: u64,
    pub point: Point,
}

impl PointerSample {
    pub const fn new(phase: PointerPhase, time: u64, point: Point) -> Self {
        Self { phase, time, point }
    }

    pub fn distance_to(&self, other: &PointerSample) -> f32 {
        self.point.distance_to(other.point)
    }
}
