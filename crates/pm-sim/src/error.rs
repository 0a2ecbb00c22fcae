use pm_core::Tick;
use thiserror::Error;

/// Driver errors.
///
/// Invalid submissions are not errors — they return `false` from the market
/// views.  The variants here are construction-time validation failures and
/// internal-invariant diagnostics; the latter indicate a bug in the driver,
/// not a user error, and abort the run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("duplicate initial grant for slot ({region}, {t})")]
    DuplicateGrant { region: String, t: Tick },

    #[error("initial grant for slot ({region}, {t}) lies outside the time window")]
    GrantOutOfWindow { region: String, t: Tick },

    #[error("settlement expected an open listing with a standing bid at ({region}, {t})")]
    SettlementConflict { region: String, t: Tick },
}

pub type SimResult<T> = Result<T, SimError>;
