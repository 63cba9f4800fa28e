//! Growable index stacks
//!
//! The flood fill keeps its traversal state on an explicit stack instead of
//! the call stack, so components of any size can be labeled without
//! recursion. [`IndexStack`] holds the coordinates of a single axis and
//! doubles its capacity whenever a push would overflow it;
//! [`CoordStack`] bundles one stack per axis and pushes and pops them in
//! lock-step so the entries at a given depth always form one voxel
//! coordinate.

use crate::error::{RegionError, RegionResult};
use tracing::{debug, warn};
use voxlabel_core::Dims;

/// A voxel coordinate `(i, j, k)`
pub type Coord = (usize, usize, usize);

/// LIFO stack of axis indices with capacity doubling
///
/// The logical capacity is tracked explicitly: it starts at the requested
/// value and doubles (0 grows to 1) each time a push finds the stack
/// full. Existing entries keep their positions across growth.
#[derive(Debug, Clone)]
pub struct IndexStack {
    items: Vec<usize>,
    capacity: usize,
}

impl IndexStack {
    /// Create an empty stack with room for `capacity` entries
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::StackExhausted`] if the backing storage
    /// cannot be allocated.
    pub fn with_capacity(capacity: usize) -> RegionResult<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| RegionError::StackExhausted { capacity: 0 })?;
        Ok(Self { items, capacity })
    }

    /// Push `value` as the new top, doubling the capacity if the stack is
    /// full
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::StackExhausted`] if the capacity cannot be
    /// doubled. The stack is left unchanged in that case.
    pub fn push(&mut self, value: usize) -> RegionResult<()> {
        self.reserve_one()?;
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the top entry
    ///
    /// Returns `None` (and logs a warning) if the stack is empty. Callers
    /// in this crate always check [`IndexStack::is_empty`] first.
    pub fn pop(&mut self) -> Option<usize> {
        let item = self.items.pop();
        if item.is_none() {
            warn!("pop on empty index stack");
        }
        item
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all entries, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Make sure one more push fits without growing
    fn reserve_one(&mut self) -> RegionResult<()> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let exhausted = RegionError::StackExhausted {
            capacity: self.capacity,
        };
        let new_capacity = match self.capacity {
            0 => 1,
            n => n.checked_mul(2).ok_or(exhausted)?,
        };
        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| RegionError::StackExhausted {
                capacity: self.capacity,
            })?;
        debug!(
            old_capacity = self.capacity,
            new_capacity, "index stack capacity doubled"
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

/// Three [`IndexStack`]s, one per axis, used as a stack of coordinates
#[derive(Debug, Clone)]
pub struct CoordStack {
    i: IndexStack,
    j: IndexStack,
    k: IndexStack,
}

impl CoordStack {
    /// Create an empty coordinate stack with room for `capacity` entries
    /// per axis
    pub fn with_capacity(capacity: usize) -> RegionResult<Self> {
        Ok(Self {
            i: IndexStack::with_capacity(capacity)?,
            j: IndexStack::with_capacity(capacity)?,
            k: IndexStack::with_capacity(capacity)?,
        })
    }

    /// Push a coordinate onto all three axis stacks
    ///
    /// Growth happens on all three stacks before any entry is written, so
    /// a failed push never leaves the axes misaligned.
    pub fn push(&mut self, (i, j, k): Coord) -> RegionResult<()> {
        self.i.reserve_one()?;
        self.j.reserve_one()?;
        self.k.reserve_one()?;
        self.i.items.push(i);
        self.j.items.push(j);
        self.k.items.push(k);
        Ok(())
    }

    /// Pop the top coordinate
    pub fn pop(&mut self) -> Option<Coord> {
        if self.is_empty() {
            warn!("pop on empty coordinate stack");
            return None;
        }
        Some((self.i.pop()?, self.j.pop()?, self.k.pop()?))
    }

    /// Number of coordinates
    #[inline]
    pub fn len(&self) -> usize {
        self.i.len()
    }

    /// Whether the stack holds no coordinates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    /// Current logical capacity (identical on every axis)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.i.capacity()
    }

    /// Remove all coordinates
    pub fn clear(&mut self) {
        self.i.clear();
        self.j.clear();
        self.k.clear();
    }
}

/// Initial stack capacity for a volume of the given extents
///
/// Roughly a tenth of the sum of the extents, which is in the range of the
/// surface of a typical component. The stack grows as needed, so this
/// only affects how often it doubles.
pub fn default_stack_capacity(dims: Dims) -> usize {
    ((dims.x + dims.y + dims.z) / 10).max(1)
}
