use soroban_sdk::{Address, Env, String};

use crate::admin::AccessControl;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStore;
use crate::types::Race;

/// Race lifecycle records.
///
/// A race transitions open -> closed exactly once; closing happens in the
/// settlement engine, which supplies the winning entrant. This manager only
/// creates races and answers state queries.
pub struct RaceManager;

impl RaceManager {
    /// Create a new race, open for staking. Authority-only.
    ///
    /// At most one race may be open at a time: creation fails with
    /// `InvalidState` while an earlier race is unresolved.
    pub fn create_race(env: &Env, caller: &Address, name: String) -> Result<u32, Error> {
        AccessControl::require_admin(env, caller)?;

        let count = LedgerStore::race_count(env);
        if count > 0 {
            // Races close in order, so only the latest can still be open.
            if let Some(prev) = LedgerStore::get_race(env, count - 1) {
                if prev.open {
                    return Err(Error::InvalidState);
                }
            }
        }

        let race = Race {
            index: count,
            name: name.clone(),
            open: true,
            winner: None,
            opened_at: env.ledger().timestamp(),
            closed_at: 0,
        };
        LedgerStore::append_race(env, &race);

        EventEmitter::emit_race_created(env, count, &name);
        Ok(count)
    }

    pub fn is_open(env: &Env, index: u32) -> bool {
        LedgerStore::get_race(env, index).map_or(false, |r| r.open)
    }
}
