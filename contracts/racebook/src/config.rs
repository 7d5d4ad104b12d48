use soroban_sdk::{Address, Env};

use crate::admin::AccessControl;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::DataKey;

/// Configuration for the racebook contract: compile-time constants plus the
/// two authority-mutable scalars (commission rate and cooldown). Mutable
/// values are read by value at the moment each operation executes, never
/// cached across operations.

// ===== CORE CONSTANTS =====

/// Percentage denominator for commission calculations (100%)
pub const PERCENTAGE_DENOMINATOR: i128 = 100;

/// Default operator commission percentage (5%)
pub const DEFAULT_COMMISSION_RATE: u32 = 5;

/// Maximum commission percentage
pub const MAX_COMMISSION_RATE: u32 = 100;

/// Default minimum interval between operator commission withdrawals (1 day)
pub const DEFAULT_COMMISSION_COOLDOWN: u64 = 86_400;

/// Maximum distinct entrants one participant may back within a single race.
/// Bounds settlement's per-participant iteration cost and prevents a griefing
/// participant from spreading a wager across the entire roster.
pub const MAX_PICKS_PER_RACE: u32 = 3;

/// Fixed-point scale factor used when computing proportional payout shares,
/// to minimize truncation error in the integer division.
pub const SHARE_SCALE: i128 = 1_000_000;

// ===== CONFIG MANAGER =====

pub struct ConfigManager;

impl ConfigManager {
    pub fn commission_rate(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::CommissionRate)
            .unwrap_or(DEFAULT_COMMISSION_RATE)
    }

    pub fn commission_cooldown(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::CommissionCooldown)
            .unwrap_or(DEFAULT_COMMISSION_COOLDOWN)
    }

    /// Set the commission percentage (0-100 inclusive). Authority-only.
    ///
    /// Affects only stakes placed thereafter; past stakes were already
    /// net-deducted when persisted.
    pub fn set_commission_rate(env: &Env, caller: &Address, rate: u32) -> Result<(), Error> {
        AccessControl::require_admin(env, caller)?;
        if rate > MAX_COMMISSION_RATE {
            return Err(Error::InvalidState);
        }
        env.storage().persistent().set(&DataKey::CommissionRate, &rate);
        EventEmitter::emit_commission_rate_changed(env, caller, rate);
        Ok(())
    }

    /// Set the operator withdrawal cooldown in seconds. Authority-only.
    pub fn set_commission_cooldown(env: &Env, caller: &Address, seconds: u64) -> Result<(), Error> {
        AccessControl::require_admin(env, caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::CommissionCooldown, &seconds);
        Ok(())
    }

    pub fn token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Token)
            .ok_or(Error::TokenNotSet)
    }
}
