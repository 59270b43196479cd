//! # Synthetic Order Generation
//!
//! The producer's data source: a deterministic id sequence plus randomized
//! customer, amount and status fields. The exact random sequences are not
//! part of any contract; only the ranges and the status distribution are.
//!
//! Scheduling (when batches are generated) belongs to the engine actor; this
//! module only knows how to make orders.

use crate::model::{Order, OrderStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed pool of customer names drawn from uniformly.
pub const CUSTOMER_NAMES: [&str; 20] = [
    "John Smith",
    "Jane Johnson",
    "Alice Williams",
    "Bob Brown",
    "Charlie Jones",
    "Diana Garcia",
    "Eve Miller",
    "Frank Davis",
    "Grace Rodriguez",
    "Henry Martinez",
    "Ivy Anderson",
    "Jack Taylor",
    "Kate Thomas",
    "Leo Jackson",
    "Mia White",
    "Noah Harris",
    "Olivia Martin",
    "Peter Thompson",
    "Quinn Garcia",
    "Rachel Martinez",
];

/// Generates synthetic orders with a running `ORD-NNNNN` id sequence.
///
/// The sequence is the generator's own state, independent of how many orders
/// the store ultimately accepted. After a producer reset the sequence starts
/// over at 1, which can collide with ids still in the store; the store's
/// batch insert absorbs those collisions by skipping the duplicates.
#[derive(Debug)]
pub struct OrderGenerator {
    next_seq: u64,
    rng: StdRng,
}

impl OrderGenerator {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            next_seq: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces the next order in the sequence, stamped with the current
    /// instant.
    pub fn generate(&mut self) -> Order {
        self.next_seq += 1;
        let id = format!("ORD-{:05}", self.next_seq);
        let customer = CUSTOMER_NAMES[self.rng.gen_range(0..CUSTOMER_NAMES.len())];
        Order::new(id, customer, self.random_amount(), self.random_status())
    }

    /// Produces `batch_size` consecutive orders.
    pub fn generate_batch(&mut self, batch_size: usize) -> Vec<Order> {
        (0..batch_size).map(|_| self.generate()).collect()
    }

    /// Restarts the id sequence at 1.
    pub fn reset(&mut self) {
        self.next_seq = 0;
    }

    /// Whole currency units in `[50, 5000]`, both bounds included.
    fn random_amount(&mut self) -> f64 {
        self.rng.gen_range(50..=5000) as f64
    }

    /// 40% New, 35% Processing, 25% Completed.
    fn random_status(&mut self) -> OrderStatus {
        let roll: f64 = self.rng.gen();
        if roll < 0.40 {
            OrderStatus::New
        } else if roll < 0.75 {
            OrderStatus::Processing
        } else {
            OrderStatus::Completed
        }
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
