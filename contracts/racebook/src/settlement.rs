use soroban_sdk::{token, vec, Address, Env, Vec};

use crate::admin::AccessControl;
use crate::config::{ConfigManager, SHARE_SCALE};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::roster::RosterManager;
use crate::storage::LedgerStore;

/// Settlement engine: closes a race and distributes the pot among the stakes
/// placed on the winning entrant, proportionally to their net amounts.
///
/// The pot is whatever value is on hand at resolution time — the contract's
/// token balance minus everything already reserved for earlier credits — so
/// losing stakes are forfeited into it. Integer-division dust is absorbed by
/// the last winning stake in append order; this remainder policy is
/// order-dependent and intentionally preserved as-is.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Resolve `race_id` with `winner` as the winning entrant. Authority-only,
    /// callable once per race.
    ///
    /// Fails with `NoWinningStakes` (leaving the race open) when nobody staked
    /// on the winner, and with `ArithmeticFault` when a share computation
    /// would overflow i128 or divide by a zero winning-net total. Shares are
    /// computed in full before any state is written, so a failed resolution
    /// mutates nothing.
    pub fn resolve_race(
        env: &Env,
        caller: &Address,
        race_id: u32,
        winner: u32,
    ) -> Result<(), Error> {
        AccessControl::require_admin(env, caller)?;

        let mut race = LedgerStore::get_race(env, race_id).ok_or(Error::InvalidState)?;
        if !race.open {
            return Err(Error::AlreadyResolved);
        }
        if !RosterManager::entrant_exists(env, winner) {
            return Err(Error::InvalidState);
        }

        let winning_stakes = LedgerStore::stakes_for(env, race_id, winner);
        if winning_stakes.is_empty() {
            // Nothing to distribute and the divisor below would be zero;
            // the open -> closed transition is aborted.
            return Err(Error::NoWinningStakes);
        }

        let token_client = token::Client::new(env, &ConfigManager::token(env)?);
        let balance = token_client.balance(&env.current_contract_address());
        let pot = balance - LedgerStore::reserved(env);

        let mut total_winning_net: i128 = 0;
        for stake in winning_stakes.iter() {
            total_winning_net = total_winning_net
                .checked_add(stake.net)
                .ok_or(Error::ArithmeticFault)?;
        }
        // At a 100% commission rate every net stake is zero, so the stake
        // list can be non-empty while the share divisor is zero.
        if total_winning_net == 0 {
            return Err(Error::ArithmeticFault);
        }

        // First pass: compute every share before touching storage.
        let mut credits: Vec<(Address, i128)> = vec![env];
        let mut distributed: i128 = 0;
        let last = winning_stakes.len() - 1;
        for (i, stake) in winning_stakes.iter().enumerate() {
            let share = if i as u32 == last {
                // The final stake absorbs all rounding dust so the pot is
                // fully allocated with no value left stranded.
                pot - distributed
            } else {
                let scaled = pot
                    .checked_mul(stake.net)
                    .and_then(|v| v.checked_mul(SHARE_SCALE))
                    .ok_or(Error::ArithmeticFault)?;
                (scaled / total_winning_net) / SHARE_SCALE
            };
            distributed += share;
            credits.push_back((stake.staker.clone(), share));
        }

        // Second pass: persist the transition and the winner credits.
        race.open = false;
        race.winner = Some(winner);
        race.closed_at = env.ledger().timestamp();
        LedgerStore::set_race(env, &race);

        for (staker, share) in credits.iter() {
            LedgerStore::set_pending(env, &staker, LedgerStore::pending_of(env, &staker) + share);
        }
        LedgerStore::set_reserved(env, LedgerStore::reserved(env) + pot);

        EventEmitter::emit_race_resolved(env, race_id, winner, pot);
        Ok(())
    }
}
