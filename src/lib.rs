//! chained-hashset: a fixed-capacity set of string keys stored in a
//! separate-chaining hash table, plus a small command session that drives
//! it on behalf of a view.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the table itself tiny and obviously correct, and push
//!   everything presentational behind an observer trait.
//! - Layers:
//!   - `rolling_hash`: `h = (h * 31 + c) mod n` over UTF-16 code units with
//!     32-bit wrapping arithmetic.
//!   - `ChainedHashSet`: `n` buckets fixed at construction, each a
//!     `Vec<String>` chain in insertion order, plus an incremental count.
//!   - `Session<V>`: owns one table and one `TableView`, parses text
//!     commands, and reports a success flag and message for each.
//!
//! Constraints
//! - Single-threaded and synchronous; no operation blocks or does I/O.
//! - Bucket count never changes (no resize, no rehash).
//! - Keys only, no values. Duplicate adds fail and leave the table as is.
//! - Keys are compared and hashed exactly as given; no locale folding.
//!
//! Chain policy
//! - `add` scans the whole chain for a duplicate and then appends to its
//!   tail, so the chain position of a new key is the prior chain length.
//! - `remove` scans from the tail toward the head and takes the first
//!   match. With unique keys this is just "the" match; the direction is
//!   kept fixed so any chain that ever held a repeated key loses its last
//!   copy first.
//! - Both scans are linear. There is no auxiliary index.
//!
//! Views
//! - `TableView::on_change` runs after a successful mutation with the
//!   table borrowed immutably. Failed operations do not notify.
//! - A view may delay its own visual update (an insertion animation, for
//!   instance); the logical insertion has already happened by then.
//!
//! Notes and non-goals
//! - No persistence and no generic value storage.
//! - Bucket counts above `i32::MAX` are rejected since the hash is
//!   defined over 32-bit arithmetic.

pub mod chained_hash_set;
mod chained_hash_set_proptest;
pub mod rolling_hash;
pub mod session;
pub mod view;

// Public surface
pub use chained_hash_set::{AddError, BuildError, ChainedHashSet, Iter, Placement};
pub use session::{Command, CommandError, Response, Session};
pub use view::{ChangeEvent, TableView, TextView};
