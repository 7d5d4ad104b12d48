use soroban_sdk::{Address, Env};

use crate::config::{DEFAULT_COMMISSION_COOLDOWN, DEFAULT_COMMISSION_RATE};
use crate::errors::Error;
use crate::storage::DataKey;

/// Access control for the single trusted authority.
///
/// The authority creates entrants and races, resolves races, adjusts the
/// commission configuration, and withdraws accrued commission. Everything
/// else is open to any authenticated participant.
pub struct AccessControl;

impl AccessControl {
    /// One-time contract setup: stores the authority and staking token and
    /// seeds the default commission configuration.
    pub fn initialize(env: &Env, admin: Address, token: Address) -> Result<(), Error> {
        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Token, &token);
        env.storage()
            .persistent()
            .set(&DataKey::CommissionRate, &DEFAULT_COMMISSION_RATE);
        env.storage()
            .persistent()
            .set(&DataKey::CommissionCooldown, &DEFAULT_COMMISSION_COOLDOWN);
        Ok(())
    }

    pub fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(Error::AdminNotSet)
    }

    /// Authenticates `caller` and verifies it is the stored authority.
    pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let admin = Self::admin(env)?;
        if caller != &admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
