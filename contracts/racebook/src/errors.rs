use soroban_sdk::contracterror;

/// Error codes for the racebook wagering ledger.
///
/// Errors are grouped by the operation family that raises them:
///
/// **Setup and access control (100-199):**
/// - Initialization and authority failures
///
/// **Stake intake (200-299):**
/// - Precondition failures on `place_stake` and the roster/race CRUD
///
/// **Settlement (300-399):**
/// - Resolution state and arithmetic failures
///
/// **Withdrawal (400-499):**
/// - Payout and cooldown failures
///
/// Every error is synchronous and reported to the immediate caller; a failed
/// operation leaves persisted state untouched (Soroban rolls back the storage
/// writes of a failed invocation frame).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== SETUP AND ACCESS CONTROL =====
    /// Caller is not the authority for an authority-only operation
    Unauthorized = 100,
    /// Authority address is not set (initialization missing)
    AdminNotSet = 101,
    /// Contract has already been initialized
    AlreadyInitialized = 102,
    /// Staking token address is not set
    TokenNotSet = 103,

    // ===== STAKE INTAKE =====
    /// Operation attempted against a closed or nonexistent race, an invalid
    /// entrant index, a non-positive amount, or a duplicate/over-limit stake
    InvalidState = 200,

    // ===== SETTLEMENT =====
    /// Race has already been resolved
    AlreadyResolved = 300,
    /// Winning entrant received no stakes; nothing to distribute
    NoWinningStakes = 301,
    /// Intermediate multiplication overflowed the working integer width
    ArithmeticFault = 302,

    // ===== WITHDRAWAL =====
    /// Pending balance is zero
    NothingToWithdraw = 400,
    /// Operator cooldown period has not elapsed
    CooldownActive = 401,
    /// Outbound token transfer was rejected
    TransferFailed = 402,
    /// Reentrant invocation detected while a transfer is in flight
    ReentrancyDetected = 403,
}

impl Error {
    /// Human-readable description, suitable for surfacing to callers.
    pub fn description(&self) -> &'static str {
        match self {
            Error::Unauthorized => "Caller is not authorized to perform this action",
            Error::AdminNotSet => "Authority address is not set (initialization missing)",
            Error::AlreadyInitialized => "Contract has already been initialized",
            Error::TokenNotSet => "Staking token address is not set",
            Error::InvalidState => "Operation violates a stake or race precondition",
            Error::AlreadyResolved => "Race has already been resolved",
            Error::NoWinningStakes => "Winning entrant received no stakes",
            Error::ArithmeticFault => "Arithmetic overflow in settlement computation",
            Error::NothingToWithdraw => "Pending balance is zero",
            Error::CooldownActive => "Commission cooldown has not elapsed",
            Error::TransferFailed => "Outbound token transfer failed",
            Error::ReentrancyDetected => "Reentrant call detected during a transfer",
        }
    }

    /// Standardized UPPER_SNAKE_CASE identifier for logs and monitoring.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Unauthorized => "UNAUTHORIZED",
            Error::AdminNotSet => "ADMIN_NOT_SET",
            Error::AlreadyInitialized => "ALREADY_INITIALIZED",
            Error::TokenNotSet => "TOKEN_NOT_SET",
            Error::InvalidState => "INVALID_STATE",
            Error::AlreadyResolved => "ALREADY_RESOLVED",
            Error::NoWinningStakes => "NO_WINNING_STAKES",
            Error::ArithmeticFault => "ARITHMETIC_FAULT",
            Error::NothingToWithdraw => "NOTHING_TO_WITHDRAW",
            Error::CooldownActive => "COOLDOWN_ACTIVE",
            Error::TransferFailed => "TRANSFER_FAILED",
            Error::ReentrancyDetected => "REENTRANCY_DETECTED",
        }
    }
}
