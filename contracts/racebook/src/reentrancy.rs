use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage::DataKey;

/// Storage-flag reentrancy lock held while an outbound transfer is in flight.
///
/// The withdrawal gate's real defense is ordering (balances are zeroed before
/// the external call), and the Soroban host additionally rejects reentry.
/// The lock is kept on top of both so the gate's contract is explicit and
/// holds even if this code is ported to a runtime without either guarantee.
pub struct ReentrancyLock;

impl ReentrancyLock {
    pub fn is_locked(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::ReentrancyLock)
            .unwrap_or(false)
    }

    /// Acquire the lock before an outbound transfer.
    pub fn enter(env: &Env) -> Result<(), Error> {
        if Self::is_locked(env) {
            return Err(Error::ReentrancyDetected);
        }
        env.storage().persistent().set(&DataKey::ReentrancyLock, &true);
        Ok(())
    }

    /// Release the lock after the transfer completes.
    pub fn exit(env: &Env) {
        env.storage().persistent().set(&DataKey::ReentrancyLock, &false);
    }
}
