//! Lifecycle pool - bounded set of short-lived entities.
//!
//! Spawn policy (when and what to spawn) belongs to the owning scene; the pool
//! only enforces the capacity cap and the advance/prune cycle.

/// Rectangle entities must stay inside to survive pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether a continuous position lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }
}

/// An entity with a finite life inside a [`Pool`].
pub trait Ephemeral {
    /// Per-tick input to [`Ephemeral::advance`] (e.g. the current game speed).
    type Step: Copy;

    /// Integrate one tick of motion and age.
    fn advance(&mut self, step: Self::Step);

    /// Whether the entity should be removed at the next prune.
    fn expired(&self, bounds: Bounds) -> bool;
}

/// Fixed-capacity collection of ephemeral entities.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ephemeral> Pool<T> {
    /// The backing storage is reserved up front; steady-state ticks do not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Add `item` unless the pool is full. A rejected spawn is dropped, not queued.
    pub fn try_spawn(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn advance_all(&mut self, step: T::Step) {
        for item in &mut self.items {
            item.advance(step);
        }
    }

    /// Remove every expired entity in a single pass. Survivors keep their
    /// relative order. Returns how many were removed.
    pub fn prune(&mut self, bounds: Bounds) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.expired(bounds));
        before - self.items.len()
    }

    /// Advance then prune: one full lifecycle tick.
    pub fn tick(&mut self, step: T::Step, bounds: Bounds) -> usize {
        self.advance_all(step);
        self.prune(bounds)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
