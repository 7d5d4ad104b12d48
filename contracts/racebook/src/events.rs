use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Notification events for off-chain observers.
///
/// Events are fire-and-forget: they are published through the host event
/// system, no acknowledgement is expected, and no core behavior depends on
/// their delivery.

// ===== EVENT TYPES =====

/// Emitted when an entrant is appended to the roster.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntrantAddedEvent {
    pub index: u32,
    pub name: String,
    pub timestamp: u64,
}

/// Emitted when a race is created and opened for staking.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaceCreatedEvent {
    pub race: u32,
    pub name: String,
    pub timestamp: u64,
}

/// Emitted when a stake is recorded. Carries the gross amount as supplied by
/// the participant, before the commission split.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePlacedEvent {
    pub participant: Address,
    pub race: u32,
    pub entrant: u32,
    pub gross: i128,
    pub timestamp: u64,
}

/// Emitted when a race is resolved and the pot distributed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaceResolvedEvent {
    pub race: u32,
    pub winner: u32,
    pub pot: i128,
    pub timestamp: u64,
}

/// Emitted on every successful payout, participant or operator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalMadeEvent {
    pub identity: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted when the authority changes the commission percentage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommissionRateChangedEvent {
    pub admin: Address,
    pub rate: u32,
    pub timestamp: u64,
}

// ===== EVENT EMISSION UTILITIES =====

pub struct EventEmitter;

impl EventEmitter {
    pub fn emit_entrant_added(env: &Env, index: u32, name: &String) {
        let event = EntrantAddedEvent {
            index,
            name: name.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("entrant"),), event);
    }

    pub fn emit_race_created(env: &Env, race: u32, name: &String) {
        let event = RaceCreatedEvent {
            race,
            name: name.clone(),
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("race_new"),), event);
    }

    pub fn emit_stake_placed(
        env: &Env,
        participant: &Address,
        race: u32,
        entrant: u32,
        gross: i128,
    ) {
        let event = StakePlacedEvent {
            participant: participant.clone(),
            race,
            entrant,
            gross,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("stake"), participant.clone()), event);
    }

    pub fn emit_race_resolved(env: &Env, race: u32, winner: u32, pot: i128) {
        let event = RaceResolvedEvent {
            race,
            winner,
            pot,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("race_res"),), event);
    }

    pub fn emit_withdrawal_made(env: &Env, identity: &Address, amount: i128) {
        let event = WithdrawalMadeEvent {
            identity: identity.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("withdraw"), identity.clone()), event);
    }

    pub fn emit_commission_rate_changed(env: &Env, admin: &Address, rate: u32) {
        let event = CommissionRateChangedEvent {
            admin: admin.clone(),
            rate,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("comm_rate"),), event);
    }
}
