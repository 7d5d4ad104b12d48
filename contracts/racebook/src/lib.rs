#![no_std]

//! Racebook: a wagering ledger for a recurring race among a fixed roster of
//! entrants. Participants stake on a predicted winner while a race is open;
//! the authority resolves the race, the pot is distributed proportionally to
//! the winning stakes (commission deducted at stake time), and credited
//! winnings are paid out through a withdrawal gate that is immune to
//! reentrant double-spend.

pub mod admin;
pub mod config;
pub mod errors;
pub mod events;
pub mod races;
pub mod reentrancy;
pub mod roster;
pub mod settlement;
pub mod stakes;
pub mod storage;
pub mod types;
pub mod withdrawals;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

use admin::AccessControl;
use config::ConfigManager;
use errors::Error;
use races::RaceManager;
use roster::RosterManager;
use settlement::SettlementEngine;
use stakes::StakeManager;
use storage::LedgerStore;
use types::{Entrant, Race, Stake};
use withdrawals::WithdrawalGate;

#[contract]
pub struct RaceBook;

#[contractimpl]
impl RaceBook {
    /// One-time setup: authority address and staking token.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        AccessControl::initialize(&env, admin, token)
    }

    // ===== ROSTER =====

    /// Append an entrant to the roster and return its stable index.
    /// Authority-only.
    pub fn add_entrant(
        env: Env,
        admin: Address,
        name: String,
        category: Symbol,
        media_base: String,
    ) -> Result<u32, Error> {
        RosterManager::add_entrant(&env, &admin, name, category, media_base)
    }

    pub fn entrant_count(env: Env) -> u32 {
        LedgerStore::entrant_count(&env)
    }

    pub fn get_entrant(env: Env, index: u32) -> Option<Entrant> {
        LedgerStore::get_entrant(&env, index)
    }

    // ===== RACES =====

    /// Open a new race for staking. Authority-only; fails while an earlier
    /// race is still open.
    pub fn create_race(env: Env, admin: Address, name: String) -> Result<u32, Error> {
        RaceManager::create_race(&env, &admin, name)
    }

    pub fn race_count(env: Env) -> u32 {
        LedgerStore::race_count(&env)
    }

    pub fn get_race(env: Env, index: u32) -> Option<Race> {
        LedgerStore::get_race(&env, index)
    }

    // ===== STAKE INTAKE =====

    /// Record a gross stake on an entrant within an open race. The commission
    /// split is credited to the operator accrual immediately; the remainder
    /// is recorded as the participant's net stake.
    pub fn place_stake(
        env: Env,
        participant: Address,
        race_id: u32,
        entrant_id: u32,
        gross: i128,
    ) -> Result<(), Error> {
        StakeManager::place_stake(&env, &participant, race_id, entrant_id, gross)
    }

    pub fn stakes_for(env: Env, race_id: u32, entrant_id: u32) -> Vec<Stake> {
        LedgerStore::stakes_for(&env, race_id, entrant_id)
    }

    pub fn picks_of(env: Env, participant: Address, race_id: u32) -> Vec<u32> {
        LedgerStore::picks_of(&env, &participant, race_id)
    }

    // ===== SETTLEMENT =====

    /// Close a race with the given winning entrant and distribute the pot to
    /// the winning stakes. Authority-only, once per race.
    pub fn resolve_race(
        env: Env,
        admin: Address,
        race_id: u32,
        winner: u32,
    ) -> Result<(), Error> {
        SettlementEngine::resolve_race(&env, &admin, race_id, winner)
    }

    // ===== WITHDRAWAL =====

    /// Pay out the caller's full pending balance, exactly once.
    pub fn withdraw(env: Env, identity: Address) -> Result<i128, Error> {
        WithdrawalGate::withdraw(&env, &identity)
    }

    /// Pay out the operator's accrued commission, subject to the cooldown.
    /// Authority-only.
    pub fn withdraw_commission(env: Env, admin: Address) -> Result<i128, Error> {
        WithdrawalGate::withdraw_commission(&env, &admin)
    }

    pub fn pending_of(env: Env, identity: Address) -> i128 {
        LedgerStore::pending_of(&env, &identity)
    }

    pub fn commission_accrued(env: Env) -> i128 {
        LedgerStore::commission_accrued(&env)
    }

    // ===== CONFIGURATION =====

    /// Set the commission percentage (0-100). Authority-only; affects only
    /// stakes placed thereafter.
    pub fn set_commission_rate(env: Env, admin: Address, rate: u32) -> Result<(), Error> {
        ConfigManager::set_commission_rate(&env, &admin, rate)
    }

    pub fn commission_rate(env: Env) -> u32 {
        ConfigManager::commission_rate(&env)
    }

    /// Set the operator withdrawal cooldown in seconds. Authority-only.
    pub fn set_commission_cooldown(env: Env, admin: Address, seconds: u64) -> Result<(), Error> {
        ConfigManager::set_commission_cooldown(&env, &admin, seconds)
    }

    pub fn commission_cooldown(env: Env) -> u64 {
        ConfigManager::commission_cooldown(&env)
    }
}
