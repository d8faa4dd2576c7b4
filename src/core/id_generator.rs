//! Identifier token generation
//!
//! This module provides the `IdGenerator` trait and its two implementations.
//! The ledger assigns every new account and transaction an opaque string
//! token drawn from a generator, so the labeling scheme can be swapped
//! without touching the transfer logic.
//!
//! The sequential generator is the default: a monotonically increasing
//! counter rendered as a decimal string, which keeps ids short, readable,
//! and collision-free within one ledger. The random generator produces
//! UUID v4 tokens for callers that want collision-resistant labels across
//! independently created ledgers.

use uuid::Uuid;

/// Produces identifier tokens for new accounts and transactions
///
/// Implementations only need to hand out string tokens; the ledger treats
/// them as opaque. Generators take `&mut self` because most useful
/// implementations carry state (a counter, an RNG handle).
pub trait IdGenerator {
    /// Generate the next identifier token
    fn generate_id(&mut self) -> String;
}

/// Counter-backed identifier generator
///
/// Renders a monotonically increasing `u64` as a decimal string, starting
/// at `"1"`. Every token from one generator instance is distinct, and the
/// numeric ordering matches creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdGenerator {
    /// The value the next call to `generate_id` will return
    next_id: u64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first token is `"1"`
    pub fn new() -> Self {
        SequentialIdGenerator { next_id: 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }
}

/// Random identifier generator
///
/// Produces UUID v4 tokens. Collisions are astronomically unlikely, which
/// makes these ids safe to mix across ledgers, at the cost of longer and
/// unordered tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
