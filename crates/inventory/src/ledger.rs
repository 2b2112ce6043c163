//! FIFO expiring-batch ledger for one product in one warehouse.

use std::collections::VecDeque;

use larder_core::Day;

use crate::batch::Batch;

/// Ordered batches of a single product, oldest first.
///
/// Invariants:
/// - batches are ordered by receipt day (and therefore by expiration day)
/// - at most one batch per receipt day; same-day receipts accumulate
/// - no batch with zero quantity is ever retained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLedger {
    batches: VecDeque<Batch>,
    shelf_life: u32,
}

impl ProductLedger {
    /// Create an empty ledger whose batches all expire `shelf_life` days after receipt.
    pub fn new(shelf_life: u32) -> Self {
        Self {
            batches: VecDeque::new(),
            shelf_life,
        }
    }

    pub fn shelf_life(&self) -> u32 {
        self.shelf_life
    }

    /// Receive `quantity` units on `day`.
    ///
    /// Merges into the newest batch when it was received the same day,
    /// otherwise appends a new batch at the tail. A zero quantity is ignored.
    pub fn receive(&mut self, quantity: u64, day: Day) {
        if quantity == 0 {
            return;
        }

        match self.batches.back_mut() {
            Some(newest) if newest.received_on() == day => newest.add(quantity),
            _ => self
                .batches
                .push_back(Batch::new(quantity, day, self.shelf_life)),
        }
    }

    /// Consume up to `quantity` units oldest-first and return how many were shipped.
    ///
    /// Demand beyond the stock on hand is dropped: the ledger ends empty and
    /// nothing is backordered.
    pub fn consume(&mut self, quantity: u64) -> u64 {
        let mut remaining = quantity;

        while remaining > 0 {
            let Some(oldest) = self.batches.front_mut() else {
                break;
            };
            remaining -= oldest.take(remaining);
            if oldest.is_depleted() {
                self.batches.pop_front();
            }
        }

        quantity - remaining
    }

    /// Remove the oldest batch if it expires exactly on `day`.
    ///
    /// At most one batch is removed per call; the ledger is checked once per
    /// simulated day and receipt days are distinct, so only one batch can
    /// fall due on any given day.
    pub fn purge_expired(&mut self, day: Day) -> Option<Batch> {
        match self.batches.front() {
            Some(oldest) if oldest.expires_on() == day => self.batches.pop_front(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Total units remaining across all batches.
    pub fn on_hand(&self) -> u64 {
        self.batches.iter().map(Batch::quantity).sum()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Batches in FIFO order (oldest first).
    pub fn batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter()
    }
}
