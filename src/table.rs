//! ProbeTable: fixed-capacity open addressing with double hashing.

use crate::slot::Slot;
use crate::stride::{step_for, FixedStride};
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use zwohash::ZwoHasher;

/// Default primary hasher: cheap deterministic hashing of the key's
/// representation.
pub type DefaultPrimary = BuildHasherDefault<ZwoHasher>;

/// Selects the target of a [`lookup`](ProbeTable::lookup) or
/// [`remove`](ProbeTable::remove).
#[derive(Clone, Copy, Debug)]
pub enum Query<'a, K> {
    /// The slot holding a key equal to the referenced key.
    Key(&'a K),
    /// Any occupied slot; which one is unspecified.
    Any,
}

/// Rejected insertions. Both variants hand the failed key back, so a
/// failing insert never consumes the caller's key.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertError<K> {
    /// The table is at capacity, or no free slot is reachable on this
    /// key's probe sequence.
    TableFull(K),
    /// An equal key is already stored.
    DuplicateKey(K),
}

impl<K> InsertError<K> {
    /// The key the table refused to store.
    pub fn into_key(self) -> K {
        match self {
            InsertError::TableFull(key) | InsertError::DuplicateKey(key) => key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    KeyNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    ZeroCapacity,
}

/// A fixed-capacity hash set using open addressing with double
/// hashing.
///
/// Up to `capacity` keys are stored directly in one slot array; there
/// is no chaining, no per-entry allocation, and no resizing.
/// Collisions walk the probe sequence `(h1 + i * step) mod capacity`,
/// where `h1` comes from the primary hasher `P` and `step` is derived
/// from the secondary hasher `S`. The step is always non-zero (see
/// [`FixedStride`]), so every operation terminates within `capacity`
/// probes.
///
/// Removal leaves a tombstone rather than an empty slot, keeping
/// probe chains built across the removed entry intact; only a
/// never-used slot terminates a probe.
///
/// Capacity guidance: a probe sequence reaches every slot only when
/// its step and the capacity are coprime. A prime capacity guarantees
/// that for any step; otherwise an insert into a non-full table can
/// fail with [`InsertError::TableFull`] once its sequence is
/// exhausted.
pub struct ProbeTable<K, P = DefaultPrimary, S = FixedStride> {
    slots: Box<[Slot<K>]>,
    len: usize,
    primary: P,
    secondary: S,
}

impl<K> ProbeTable<K> {
    /// Table with the default hasher pair.
    pub fn new(capacity: usize) -> Result<Self, InitError> {
        Self::with_hashers(capacity, DefaultPrimary::default(), FixedStride)
    }
}

impl<K, P, S> ProbeTable<K, P, S> {
    /// Table with caller-supplied primary and secondary hashers.
    pub fn with_hashers(capacity: usize, primary: P, secondary: S) -> Result<Self, InitError> {
        if capacity == 0 {
            return Err(InitError::ZeroCapacity);
        }
        Ok(Self {
            slots: core::iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            len: 0,
            primary,
            secondary,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Drop every stored key and reset all slots to never-used,
    /// keeping the allocation. Equivalent to rebuilding the table at
    /// the same capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Iterator over the stored keys, in unspecified order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            slots: self.slots.iter(),
        }
    }
}

impl<K, P, S> ProbeTable<K, P, S>
where
    K: Eq + Hash,
    P: BuildHasher,
    S: BuildHasher,
{
    fn probe(&self, key: &K) -> ProbeSeq {
        let h1 = self.primary.hash_one(key);
        let h2 = self.secondary.hash_one(key);
        ProbeSeq::new(h1, step_for(h2, self.slots.len()), self.slots.len())
    }

    /// Store a key.
    ///
    /// A full table reports [`InsertError::TableFull`] without
    /// probing, even for keys already present. Otherwise one probe
    /// pass both rejects duplicates and picks the landing slot.
    pub fn insert(&mut self, key: K) -> Result<(), InsertError<K>> {
        if self.is_full() {
            return Err(InsertError::TableFull(key));
        }
        // Remember the first tombstone so the key lands as early in
        // its probe sequence as possible, but keep scanning for a
        // duplicate until the empty slot that ends the cluster.
        let mut free = None;
        for index in self.probe(&key) {
            match &self.slots[index] {
                Slot::Occupied(existing) => {
                    if *existing == key {
                        return Err(InsertError::DuplicateKey(key));
                    }
                }
                Slot::Tombstone => {
                    if free.is_none() {
                        free = Some(index);
                    }
                }
                Slot::Empty => {
                    let index = free.unwrap_or(index);
                    self.slots[index].fill(key);
                    self.len += 1;
                    return Ok(());
                }
            }
        }
        match free {
            Some(index) => {
                self.slots[index].fill(key);
                self.len += 1;
                Ok(())
            }
            // The sequence ended without reaching a free slot: this
            // key's stride does not cover the whole array.
            None => Err(InsertError::TableFull(key)),
        }
    }

    /// Find a stored key.
    pub fn lookup(&self, query: Query<'_, K>) -> Option<&K> {
        match query {
            Query::Any => self.slots.iter().find_map(Slot::key),
            Query::Key(key) => self
                .find_index(key)
                .and_then(|index| self.slots[index].key()),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lookup(Query::Key(key)).is_some()
    }

    /// Vacate a slot and hand its key back, leaving a tombstone.
    pub fn remove(&mut self, query: Query<'_, K>) -> Result<K, RemoveError> {
        let index = match query {
            Query::Any => self.slots.iter().position(Slot::is_occupied),
            Query::Key(key) => self.find_index(key),
        };
        let index = index.ok_or(RemoveError::KeyNotFound)?;
        let key = self.slots[index].vacate().ok_or(RemoveError::KeyNotFound)?;
        self.len -= 1;
        Ok(key)
    }

    fn find_index(&self, key: &K) -> Option<usize> {
        for index in self.probe(key) {
            match &self.slots[index] {
                Slot::Occupied(existing) if existing == key => return Some(index),
                // A never-used slot ends the cluster: no insert could
                // have probed past it.
                Slot::Empty => return None,
                _ => {}
            }
        }
        None
    }
}

impl<K: fmt::Debug, P, S> fmt::Debug for ProbeTable<K, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the keys of a [`ProbeTable`].
pub struct Iter<'a, K> {
    slots: core::slice::Iter<'a, Slot<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.slots.find_map(Slot::key)
    }
}

/// Deterministic sequence of slot indices examined for one key:
/// `(h1 + i * step) mod capacity` for i in `0..capacity`. Yields
/// exactly `capacity` indices, then ends; every probing operation is
/// bounded by it.
struct ProbeSeq {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSeq {
    fn new(primary_hash: u64, step: usize, capacity: usize) -> Self {
        ProbeSeq {
            index: (primary_hash % capacity as u64) as usize,
            step,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(current)
    }
}
