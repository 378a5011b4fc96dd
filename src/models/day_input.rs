//! Raw per-day input.
//!
//! A day holds three shifts (two regular, one extra), each an entry and an
//! exit token. Tokens stay exactly as typed; they are parsed afresh on every
//! calculation.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Input acceptance for a single clock token.
///
/// A token is accepted while it holds up to four ASCII digits, which is what a
/// timesheet field lets the user type. Completed tokens can still be
/// semantically invalid (e.g. `"2575"`); those are caught by the day-level
/// error check, not here.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::accept_token;
///
/// assert!(accept_token("").is_ok());
/// assert!(accept_token("07").is_ok());
/// assert!(accept_token("9999").is_ok());
/// assert!(accept_token("07:30").is_err());
/// ```
pub fn accept_token(token: &str) -> EngineResult<()> {
    if token.len() <= 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(EngineError::InvalidToken {
            token: token.to_string(),
        })
    }
}

/// Entry and exit tokens of one shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTokens {
    /// Entry time as typed (`HHmm` or empty).
    #[serde(default)]
    pub entry: String,
    /// Exit time as typed (`HHmm` or empty).
    #[serde(default)]
    pub exit: String,
}

impl ShiftTokens {
    /// Creates a shift from its entry and exit tokens.
    pub fn new(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
        }
    }

    /// Returns true when neither token has been typed.
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty() && self.exit.is_empty()
    }
}

/// The raw tokens of one calendar day.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DayInput, ShiftTokens};
///
/// let day = DayInput {
///     first_shift: ShiftTokens::new("0800", "1200"),
///     second_shift: ShiftTokens::new("1300", "1700"),
///     ..DayInput::default()
/// };
/// assert_eq!(day.tokens(), ["0800", "1200", "1300", "1700", "", ""]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInput {
    /// First regular shift.
    #[serde(default)]
    pub first_shift: ShiftTokens,
    /// Second regular shift.
    #[serde(default)]
    pub second_shift: ShiftTokens,
    /// Extra shift.
    #[serde(default)]
    pub extra_shift: ShiftTokens,
}

impl DayInput {
    /// Creates a day from its three shifts.
    pub fn new(first_shift: ShiftTokens, second_shift: ShiftTokens, extra_shift: ShiftTokens) -> Self {
        Self {
            first_shift,
            second_shift,
            extra_shift,
        }
    }

    /// Returns the three shifts in input order.
    pub fn shifts(&self) -> [&ShiftTokens; 3] {
        [&self.first_shift, &self.second_shift, &self.extra_shift]
    }

    /// Returns the six tokens in input order.
    pub fn tokens(&self) -> [&str; 6] {
        [
            self.first_shift.entry.as_str(),
            self.first_shift.exit.as_str(),
            self.second_shift.entry.as_str(),
            self.second_shift.exit.as_str(),
            self.extra_shift.entry.as_str(),
            self.extra_shift.exit.as_str(),
        ]
    }

    /// Returns true when no token has been typed.
    pub fn is_empty(&self) -> bool {
        self.shifts().iter().all(|shift| shift.is_empty())
    }

    /// Applies [`accept_token`] to all six tokens.
    pub fn validate(&self) -> EngineResult<()> {
        self.tokens().into_iter().try_for_each(accept_token)
    }

    /// Resets every token to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
