use std::fmt;

use chrono::Duration;

use crate::Reps;

/// Lifting tempo in the four-phase notation, e.g. `4/0/1/0`.
///
/// The phases are eccentric, pause at the bottom, concentric and pause at the
/// top. A phase written as `H` is an isometric hold without a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Tempo {
    pub eccentric: TempoPhase,
    pub pause_bottom: TempoPhase,
    pub concentric: TempoPhase,
    pub pause_top: TempoPhase,
}

impl Tempo {
    /// Seconds assumed for a hold phase when estimating durations.
    pub const HOLD_ESTIMATE: u32 = 2;

    #[must_use]
    pub fn phases(&self) -> [TempoPhase; 4] {
        [
            self.eccentric,
            self.pause_bottom,
            self.concentric,
            self.pause_top,
        ]
    }

    /// Approximate duration of a single repetition.
    #[must_use]
    pub fn rep_duration(&self) -> Duration {
        Duration::seconds(
            self.phases()
                .iter()
                .map(|phase| i64::from(phase.estimated_seconds()))
                .sum(),
        )
    }

    /// Approximate time under tension for `reps` repetitions.
    ///
    /// Holds are counted with [`Tempo::HOLD_ESTIMATE`], so the result is an
    /// estimate for display purposes, not a timing guarantee.
    #[must_use]
    pub fn estimated_duration(&self, reps: Reps) -> Duration {
        self.rep_duration() * i32::try_from(u32::from(reps)).unwrap_or(i32::MAX)
    }
}

impl TryFrom<&str> for Tempo {
    type Error = TempoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tokens = value.split('/').collect::<Vec<_>>();

        let &[eccentric, pause_bottom, concentric, pause_top] = tokens.as_slice() else {
            return Err(TempoError::TokenCount(tokens.len()));
        };

        Ok(Tempo {
            eccentric: TempoPhase::try_from(eccentric)?,
            pause_bottom: TempoPhase::try_from(pause_bottom)?,
            concentric: TempoPhase::try_from(concentric)?,
            pause_top: TempoPhase::try_from(pause_top)?,
        })
    }
}

impl TryFrom<String> for Tempo {
    type Error = TempoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tempo::try_from(value.as_str())
    }
}

impl From<Tempo> for String {
    fn from(value: Tempo) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.eccentric, self.pause_bottom, self.concentric, self.pause_top
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempoPhase {
    Seconds(u32),
    Hold,
}

impl TempoPhase {
    #[must_use]
    pub fn estimated_seconds(self) -> u32 {
        match self {
            TempoPhase::Seconds(seconds) => seconds,
            TempoPhase::Hold => Tempo::HOLD_ESTIMATE,
        }
    }
}

impl TryFrom<&str> for TempoPhase {
    type Error = TempoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == "H" {
            return Ok(TempoPhase::Hold);
        }

        // a leading `+` or `0` would not survive formatting
        let canonical = value == "0" || !value.starts_with('0');
        if canonical && !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(seconds) = value.parse::<u32>() {
                return Ok(TempoPhase::Seconds(seconds));
            }
        }

        Err(TempoError::InvalidPhase(value.to_string()))
    }
}

impl fmt::Display for TempoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempoPhase::Seconds(seconds) => write!(f, "{seconds}"),
            TempoPhase::Hold => write!(f, "H"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TempoError {
    #[error("Tempo must consist of four phases separated by '/' (found {0})")]
    TokenCount(usize),
    #[error("Tempo phase must be a number of seconds or 'H' (found '{0}')")]
    InvalidPhase(String),
}
