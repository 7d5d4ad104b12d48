use soroban_sdk::{token, Address, Env};

use crate::config::{ConfigManager, MAX_PICKS_PER_RACE, PERCENTAGE_DENOMINATOR};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::roster::RosterManager;
use crate::storage::LedgerStore;
use crate::types::Stake;

/// Stake intake: validates and records a new wager and immediately splits the
/// operator commission off into the commission accrual.
///
/// The gross amount is collected from the participant up front; only the net
/// (gross minus commission) is recorded against the (race, entrant) pair.
pub struct StakeManager;

impl StakeManager {
    /// Place a stake of `gross` on `entrant_id` in `race_id`.
    ///
    /// Preconditions, each failing with `InvalidState`, checked in order:
    /// the race exists and is open; the entrant exists; `gross` is strictly
    /// positive; the participant has not already staked on this entrant in
    /// this race; the participant has picked fewer than
    /// `MAX_PICKS_PER_RACE` distinct entrants in this race.
    pub fn place_stake(
        env: &Env,
        participant: &Address,
        race_id: u32,
        entrant_id: u32,
        gross: i128,
    ) -> Result<(), Error> {
        participant.require_auth();

        let race = LedgerStore::get_race(env, race_id).ok_or(Error::InvalidState)?;
        if !race.open {
            return Err(Error::InvalidState);
        }
        if !RosterManager::entrant_exists(env, entrant_id) {
            return Err(Error::InvalidState);
        }
        if gross <= 0 {
            return Err(Error::InvalidState);
        }
        let picks = LedgerStore::picks_of(env, participant, race_id);
        if picks.contains(entrant_id) {
            return Err(Error::InvalidState);
        }
        if picks.len() >= MAX_PICKS_PER_RACE {
            return Err(Error::InvalidState);
        }

        // Rate is read at call time; a later rate change never reprices
        // stakes that are already persisted.
        let rate = ConfigManager::commission_rate(env) as i128;
        let commission = gross
            .checked_mul(rate)
            .ok_or(Error::ArithmeticFault)?
            / PERCENTAGE_DENOMINATOR;
        let net = gross - commission;

        // Collect the gross stake into the contract.
        let token_client = token::Client::new(env, &ConfigManager::token(env)?);
        token_client.transfer(participant, &env.current_contract_address(), &gross);

        LedgerStore::append_stake(
            env,
            race_id,
            entrant_id,
            &Stake {
                staker: participant.clone(),
                net,
            },
        );
        LedgerStore::set_commission_accrued(env, LedgerStore::commission_accrued(env) + commission);
        LedgerStore::set_reserved(env, LedgerStore::reserved(env) + commission);
        LedgerStore::append_pick(env, participant, race_id, entrant_id);

        EventEmitter::emit_stake_placed(env, participant, race_id, entrant_id, gross);
        Ok(())
    }
}
