use soroban_sdk::{Address, Env, String, Symbol};

use crate::admin::AccessControl;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStore;
use crate::types::Entrant;

/// Append-only entrant roster, shared by every race.
///
/// Entrant indices are sequential, assigned at creation, and never reused;
/// a created entrant is never mutated or deleted.
pub struct RosterManager;

impl RosterManager {
    /// Add an entrant to the roster. Authority-only.
    ///
    /// Returns the new entrant's stable index.
    pub fn add_entrant(
        env: &Env,
        caller: &Address,
        name: String,
        category: Symbol,
        media_base: String,
    ) -> Result<u32, Error> {
        AccessControl::require_admin(env, caller)?;

        let index = LedgerStore::entrant_count(env);
        let entrant = Entrant {
            index,
            name: name.clone(),
            category,
            media_base,
        };
        LedgerStore::append_entrant(env, &entrant);

        EventEmitter::emit_entrant_added(env, index, &name);
        Ok(index)
    }

    pub fn entrant_exists(env: &Env, index: u32) -> bool {
        index < LedgerStore::entrant_count(env)
    }
}
