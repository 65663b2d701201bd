//! Error types for match operations
//!
//! Plain enums rather than String-based errors so the engine stays usable
//! without `std`.

use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::PersonaId;

/// Errors that can occur while driving a match
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// Action not allowed in the current phase
    WrongPhase,
    /// Draft pick attempted by the side that is not on the clock
    NotYourTurn,
    /// All draft steps have already been taken
    DraftComplete,
    /// Selected card is not in the shared pool
    CardNotInPool { id: PersonaId },
    /// Selected card is not in the acting side's hand
    CardNotInHand { id: PersonaId },
    /// Roster could not fill a complete draft pool
    InsufficientRoster { have: u32, need: u32 },
    /// Roster is below the minimum viable size
    RosterTooSmall { have: u32, min: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase => f.write_str("action not allowed in the current phase"),
            GameError::NotYourTurn => f.write_str("it is not this side's turn to draft"),
            GameError::DraftComplete => f.write_str("the draft is already complete"),
            GameError::CardNotInPool { id } => write!(f, "card {id} is not in the draft pool"),
            GameError::CardNotInHand { id } => write!(f, "card {id} is not in hand"),
            GameError::InsufficientRoster { have, need } => {
                write!(f, "roster filled {have} of {need} pool slots")
            }
            GameError::RosterTooSmall { have, min } => {
                write!(f, "roster has {have} personas, at least {min} required")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Result type alias for match operations
pub type GameResult<T> = Result<T, GameError>;
