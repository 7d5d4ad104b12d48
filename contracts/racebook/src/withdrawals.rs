use soroban_sdk::{token, Address, Env};

use crate::admin::AccessControl;
use crate::config::ConfigManager;
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::reentrancy::ReentrancyLock;
use crate::storage::LedgerStore;

/// Withdrawal gate: pays a pending balance out exactly once.
///
/// Zero-then-transfer ordering is mandatory and must be preserved in any
/// port: the pending balance is set to zero *before* the external token call,
/// so a reentrant invocation during the transfer observes a zero balance and
/// cannot withdraw twice. A transfer failure fails the whole operation and
/// Soroban rolls the zeroing back, so the credit is never lost either.
pub struct WithdrawalGate;

impl WithdrawalGate {
    /// Debit `identity`'s full pending balance, returning the amount.
    ///
    /// This is the "effects" half of checks-effects-interactions: once it
    /// returns, any reader of the ledger sees a zero balance.
    pub fn debit_pending(env: &Env, identity: &Address) -> Result<i128, Error> {
        let amount = LedgerStore::pending_of(env, identity);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }
        LedgerStore::set_pending(env, identity, 0);
        LedgerStore::set_reserved(env, LedgerStore::reserved(env) - amount);
        Ok(amount)
    }

    /// Withdraw `identity`'s pending balance.
    pub fn withdraw(env: &Env, identity: &Address) -> Result<i128, Error> {
        identity.require_auth();

        let amount = Self::debit_pending(env, identity)?;
        Self::transfer_out(env, identity, amount)?;

        EventEmitter::emit_withdrawal_made(env, identity, amount);
        Ok(amount)
    }

    /// Withdraw the operator's accrued commission. Authority-only, rate
    /// limited by the commission cooldown.
    pub fn withdraw_commission(env: &Env, caller: &Address) -> Result<i128, Error> {
        AccessControl::require_admin(env, caller)?;

        let amount = LedgerStore::commission_accrued(env);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let now = env.ledger().timestamp();
        let last = LedgerStore::last_commission_withdrawal(env);
        let cooldown = ConfigManager::commission_cooldown(env);
        // `last == 0` means the operator has never withdrawn.
        if last > 0 && now < last.saturating_add(cooldown) {
            return Err(Error::CooldownActive);
        }

        // Same ordering discipline as `withdraw`: all state is mutated
        // before the external call.
        LedgerStore::set_last_commission_withdrawal(env, now);
        LedgerStore::set_commission_accrued(env, 0);
        LedgerStore::set_reserved(env, LedgerStore::reserved(env) - amount);
        Self::transfer_out(env, caller, amount)?;

        EventEmitter::emit_withdrawal_made(env, caller, amount);
        Ok(amount)
    }

    fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let token_client = token::Client::new(env, &ConfigManager::token(env)?);

        ReentrancyLock::enter(env)?;
        let result =
            token_client.try_transfer(&env.current_contract_address(), to, &amount);
        ReentrancyLock::exit(env);

        match result {
            Ok(_) => Ok(()),
            // The error return rolls back this invocation's storage writes,
            // so the debit above is undone and the credit stays claimable.
            Err(_) => Err(Error::TransferFailed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LedgerStore;
    use crate::RaceBook;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    #[test]
    fn debit_zeroes_balance_before_any_transfer_could_observe_it() {
        let env = Env::default();
        let contract_id = env.register_contract(None, RaceBook);
        env.as_contract(&contract_id, || {
            let identity = Address::generate(&env);
            LedgerStore::set_pending(&env, &identity, 250);
            LedgerStore::set_reserved(&env, 250);

            let amount = WithdrawalGate::debit_pending(&env, &identity).unwrap();
            assert_eq!(amount, 250);

            // What a reentrant caller would see mid-transfer: nothing left.
            assert_eq!(LedgerStore::pending_of(&env, &identity), 0);
            assert_eq!(LedgerStore::reserved(&env), 0);
            assert_eq!(
                WithdrawalGate::debit_pending(&env, &identity),
                Err(Error::NothingToWithdraw)
            );
        });
    }
}
