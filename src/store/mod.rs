//! The primary record store.
//!
//! The store is the single owner of every [`Student`](crate::Student)
//! lifetime: records are created on append and freed on removal. The
//! secondary indexes only ever hold [`SlotId`](crate::SlotId) handles into
//! the store's arena.
//!
//! # Components
//! - [`OrderedStore`] - arena-backed doubly linked list in insertion order

mod ordered;

pub use ordered::{Iter, OrderedStore};
