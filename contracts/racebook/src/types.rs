use soroban_sdk::{contracttype, Address, String, Symbol};

/// One of the fixed, mutually exclusive options participants can back.
///
/// The roster is append-only: an entrant's `index` is assigned at creation
/// and never reused, and the record is never mutated afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entrant {
    /// Stable identity within the roster
    pub index: u32,
    /// Display name
    pub name: String,
    /// Category tag for filtering
    pub category: Symbol,
    /// Base reference used by off-chain consumers to build a media link
    pub media_base: String,
}

/// One resolution cycle: opens for staking, then closes with exactly one
/// winning entrant. Fields other than `open`/`winner`/`closed_at` are
/// write-once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Race {
    pub index: u32,
    pub name: String,
    pub open: bool,
    /// Winning entrant index; meaningful only once the race is closed
    pub winner: Option<u32>,
    pub opened_at: u64,
    /// Zero until the race is closed
    pub closed_at: u64,
}

/// A recorded wager, net of commission, in the smallest token unit.
/// Logically owned by the (race, entrant) pair it was placed under and
/// immutable once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub staker: Address,
    pub net: i128,
}
