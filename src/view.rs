//! Observer seam between a `Session` and whatever presents the table.
//!
//! A view is told about each successful mutation after it has been applied
//! and receives the table by shared reference only, so it can read chains
//! but never change them. A view is free to defer its own update; the
//! table is already in its final state when `on_change` runs.

use crate::chained_hash_set::{ChainedHashSet, Placement};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeEvent<'a> {
    Added { key: &'a str, placement: Placement },
    Removed { key: &'a str },
}

pub trait TableView {
    fn on_change(&mut self, event: &ChangeEvent<'_>, table: &ChainedHashSet);
}

/// Views that do not care about updates.
impl TableView for () {
    fn on_change(&mut self, _event: &ChangeEvent<'_>, _table: &ChainedHashSet) {}
}

impl<T: TableView + ?Sized> TableView for &mut T {
    fn on_change(&mut self, event: &ChangeEvent<'_>, table: &ChainedHashSet) {
        (**self).on_change(event, table)
    }
}

/// Plain-text view: keeps a rendered copy of the chains and remembers where
/// the most recent key landed until the caller settles it.
#[derive(Debug, Default)]
pub struct TextView {
    frame: String,
    pending: Option<Placement>,
    updates: usize,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame. Empty until the first change.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Placement of the latest add that has not been settled yet.
    pub fn pending(&self) -> Option<Placement> {
        self.pending
    }

    /// Mark the pending insertion as shown, returning it.
    pub fn settle(&mut self) -> Option<Placement> {
        self.pending.take()
    }

    /// Number of change notifications received.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Draw every bucket as `[i] -> [k1] -> [k2] -> /`. Empty buckets have
    /// no terminator.
    pub fn render(table: &ChainedHashSet) -> String {
        let mut out = String::new();
        for (i, chain) in table.buckets().enumerate() {
            out.push_str(&format!("[{}]", i));
            for key in chain {
                out.push_str(&format!(" -> [{}]", key));
            }
            if !chain.is_empty() {
                out.push_str(" -> /");
            }
            out.push('\n');
        }
        out
    }
}

impl TableView for TextView {
    fn on_change(&mut self, event: &ChangeEvent<'_>, table: &ChainedHashSet) {
        self.updates += 1;
        match *event {
            ChangeEvent::Added { placement, .. } => self.pending = Some(placement),
            ChangeEvent::Removed { .. } => {}
        }
        self.frame = Self::render(table);
    }
}
