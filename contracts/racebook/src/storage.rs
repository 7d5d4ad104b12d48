use soroban_sdk::{contracttype, vec, Address, Env, Vec};

use crate::types::{Entrant, Race, Stake};

/// Storage keys for every persisted entity and scalar.
///
/// Stakes are kept as an append-only list per (race, entrant) pair; picks are
/// the distinct entrant indices a participant has backed within one race.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Authority address
    Admin,
    /// Staking token address
    Token,
    /// Commission percentage, 0-100
    CommissionRate,
    /// Minimum seconds between operator commission withdrawals
    CommissionCooldown,
    /// Operator commission accrued and not yet withdrawn
    CommissionAccrued,
    /// Timestamp of the operator's last commission withdrawal
    LastCommissionWithdrawal,
    /// Sum of all credits (pending balances + accrued commission) not yet
    /// withdrawn; the distributable pot is the token balance minus this
    Reserved,
    EntrantCount,
    Entrant(u32),
    RaceCount,
    Race(u32),
    /// Append-only stake list under (race index, entrant index)
    Stakes(u32, u32),
    /// Distinct entrant indices picked by (participant, race index)
    Picks(Address, u32),
    /// Participant pending withdrawal balance
    Pending(Address),
    /// Reentrancy lock flag
    ReentrancyLock,
}

/// Pure data accessors for the ledger.
///
/// This layer holds no business rules: callers pre-validate, and the only
/// guarantees here are that reads observe the most recent completed write and
/// that stake appends never overwrite existing entries.
pub struct LedgerStore;

impl LedgerStore {
    // ===== ROSTER =====

    pub fn entrant_count(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::EntrantCount)
            .unwrap_or(0)
    }

    pub fn get_entrant(env: &Env, index: u32) -> Option<Entrant> {
        env.storage().persistent().get(&DataKey::Entrant(index))
    }

    pub fn append_entrant(env: &Env, entrant: &Entrant) {
        env.storage()
            .persistent()
            .set(&DataKey::Entrant(entrant.index), entrant);
        env.storage()
            .persistent()
            .set(&DataKey::EntrantCount, &(entrant.index + 1));
    }

    // ===== RACES =====

    pub fn race_count(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::RaceCount)
            .unwrap_or(0)
    }

    pub fn get_race(env: &Env, index: u32) -> Option<Race> {
        env.storage().persistent().get(&DataKey::Race(index))
    }

    pub fn set_race(env: &Env, race: &Race) {
        env.storage().persistent().set(&DataKey::Race(race.index), race);
    }

    pub fn append_race(env: &Env, race: &Race) {
        Self::set_race(env, race);
        env.storage()
            .persistent()
            .set(&DataKey::RaceCount, &(race.index + 1));
    }

    // ===== STAKES =====

    pub fn stakes_for(env: &Env, race: u32, entrant: u32) -> Vec<Stake> {
        env.storage()
            .persistent()
            .get(&DataKey::Stakes(race, entrant))
            .unwrap_or_else(|| vec![env])
    }

    pub fn append_stake(env: &Env, race: u32, entrant: u32, stake: &Stake) {
        let mut stakes = Self::stakes_for(env, race, entrant);
        stakes.push_back(stake.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Stakes(race, entrant), &stakes);
    }

    pub fn picks_of(env: &Env, participant: &Address, race: u32) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::Picks(participant.clone(), race))
            .unwrap_or_else(|| vec![env])
    }

    pub fn append_pick(env: &Env, participant: &Address, race: u32, entrant: u32) {
        let mut picks = Self::picks_of(env, participant, race);
        picks.push_back(entrant);
        env.storage()
            .persistent()
            .set(&DataKey::Picks(participant.clone(), race), &picks);
    }

    // ===== PENDING BALANCES =====

    pub fn pending_of(env: &Env, identity: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Pending(identity.clone()))
            .unwrap_or(0)
    }

    pub fn set_pending(env: &Env, identity: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Pending(identity.clone()), &amount);
    }

    pub fn commission_accrued(env: &Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::CommissionAccrued)
            .unwrap_or(0)
    }

    pub fn set_commission_accrued(env: &Env, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::CommissionAccrued, &amount);
    }

    pub fn reserved(env: &Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Reserved)
            .unwrap_or(0)
    }

    pub fn set_reserved(env: &Env, amount: i128) {
        env.storage().persistent().set(&DataKey::Reserved, &amount);
    }

    // ===== COMMISSION COOLDOWN =====

    pub fn last_commission_withdrawal(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::LastCommissionWithdrawal)
            .unwrap_or(0)
    }

    pub fn set_last_commission_withdrawal(env: &Env, at: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::LastCommissionWithdrawal, &at);
    }
}
