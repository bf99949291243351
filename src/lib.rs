//! probe-table: a fixed-capacity, single-threaded hash set using
//! open addressing with double hashing.
//!
//! Internal Design:
//!
//! Summary
//! - All keys live directly in one fixed slot array; no chaining and
//!   no per-entry allocation. Capacity is set at construction and
//!   never changes.
//! - Collisions walk `(h1 + i * step) mod capacity`: `h1` comes from
//!   the primary `BuildHasher`, `step` is derived from the secondary
//!   one and forced non-zero, so no probe sequence can collapse to a
//!   single revisited slot.
//! - Removal tombstones a slot instead of emptying it. Probe chains
//!   built across the removed entry stay intact; only a never-used
//!   slot terminates a probe.
//!
//! Layers
//! - `Slot<K>`: tagged per-slot state (`Empty | Tombstone |
//!   Occupied`); the whole slot lifecycle is one enum, so equality
//!   only ever runs against live keys.
//! - `FixedStride` and the step derivation: the default
//!   key-independent odd stride, and the mapping of any secondary
//!   hash into `1..capacity`.
//! - `ProbeTable<K, P, S>`: the public table; insert, lookup, remove
//!   and clear plus introspection.
//!
//! Constraints
//! - Single-threaded by design; callers serialize access externally
//!   if they need sharing.
//! - Every operation is bounded by `capacity` probes and terminates
//!   even when every slot is a tombstone.
//! - Duplicate inserts are rejected; failed inserts hand the key
//!   back to the caller.
//! - The table owns its keys: dropping the table (or calling
//!   `clear`) drops every stored key exactly once, and `remove`
//!   returns the key to the caller.
//!
//! Caveats and non-goals
//! - A probe sequence reaches every slot only when its step and the
//!   capacity are coprime. Prime capacities guarantee that; for
//!   other capacities an insert into a non-full table can fail with
//!   `TableFull` once its sequence is exhausted.
//! - No resizing and no load-factor tracking; pick the capacity up
//!   front.
//! - Iteration order is unspecified.

mod slot;
mod stride;
mod table;

// Public surface
pub use stride::{FixedStride, StrideHasher};
pub use table::{DefaultPrimary, InitError, InsertError, Iter, ProbeTable, Query, RemoveError};
