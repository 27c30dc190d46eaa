use std::{fmt, ops::Mul};

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Reps(u32);

impl Reps {
    pub const ONE: Reps = Reps(1);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<u32> for Reps {
    type Error = RepsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Reps::new(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

impl From<Reps> for f32 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Reps) -> Self {
        value.0 as f32
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// A whole number of seconds, used for rest periods between sets.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<u32> for Time {
    type Error = TimeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Time::new(value)
    }
}

impl From<Time> for chrono::Duration {
    fn from(value: Time) -> Self {
        chrono::Duration::seconds(i64::from(value.0))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
}

/// A load in whatever unit the caller uses consistently.
///
/// Values are displayed without a unit. Use [`format_weight`] for the
/// user-facing representation.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f32", into = "f32")
)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..10_000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f32> for Weight {
    type Error = WeightError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl Mul<Reps> for Weight {
    type Output = f32;

    fn mul(self, rhs: Reps) -> Self::Output {
        self.0 * f32::from(rhs)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 9999.9")]
    OutOfRange,
}

/// Format a weight for display, e.g. `"80kg"` or `"40kg (pin 7)"`.
///
/// The unit suffix is always `kg` and the number uses the locale-independent
/// representation of [`f32`].
#[must_use]
pub fn format_weight(weight: Weight, equipment_setting: Option<&str>) -> String {
    match equipment_setting {
        Some(setting) => format!("{weight}kg ({setting})"),
        None => format!("{weight}kg"),
    }
}

/// Rate of perceived exertion on the scale 1 to 10 in steps of 0.5.
///
/// Stored in tenths to keep the type `Eq` and `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f32", into = "f32")
)]
pub struct RPE(u8);

impl RPE {
    pub const ONE: RPE = RPE(10);
    pub const TWO: RPE = RPE(20);
    pub const THREE: RPE = RPE(30);
    pub const FOUR: RPE = RPE(40);
    pub const FIVE: RPE = RPE(50);
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }

    pub(crate) fn tenths(self) -> u8 {
        self.0
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<f32> for RPE {
    type Error = RPEError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        RPE::new(value)
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("8.5", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_try_from_str(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case(90, Ok(Time(90)))]
    #[case(1000, Err(TimeError::OutOfRange))]
    fn test_time_new(#[case] value: u32, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::new(value), expected);
    }

    #[test]
    fn test_time_into_duration() {
        assert_eq!(
            chrono::Duration::from(Time(90)),
            chrono::Duration::seconds(90)
        );
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(102.5, Ok(Weight(102.5)))]
    #[case(-2.5, Err(WeightError::OutOfRange))]
    #[case(10_000.0, Err(WeightError::OutOfRange))]
    #[case(f32::NAN, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[test]
    fn test_weight_mul_reps() {
        assert_eq!(Weight(62.5) * Reps(8), 500.0);
    }

    #[rstest]
    #[case::whole(Weight(100.0), None, "100kg")]
    #[case::fraction(Weight(62.5), None, "62.5kg")]
    #[case::equipment_setting(Weight(40.0), Some("pin 7"), "40kg (pin 7)")]
    fn test_format_weight(
        #[case] weight: Weight,
        #[case] equipment_setting: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_weight(weight, equipment_setting), expected);
    }

    #[rstest]
    #[case(1.0, Ok(RPE::ONE))]
    #[case(6.5, Ok(RPE(65)))]
    #[case(10.0, Ok(RPE::TEN))]
    #[case(0.5, Err(RPEError::OutOfRange))]
    #[case(10.5, Err(RPEError::OutOfRange))]
    #[case(7.2, Err(RPEError::InvalidResolution))]
    fn test_rpe_new(#[case] value: f32, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(value), expected);
    }

    #[rstest]
    #[case(RPE(80), "8")]
    #[case(RPE(95), "9.5")]
    fn test_rpe_display(#[case] input: RPE, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }
}
