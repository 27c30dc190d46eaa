use std::fmt;

use crate::Reps;

/// Planned repetitions of a set.
///
/// Coaches either enter a plain number or free text such as `6-8`, `10 p/s`
/// or `AMRAP`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum TargetReps {
    Numeric(Reps),
    Text(String),
}

impl TargetReps {
    /// The smallest rep count the target asks for.
    ///
    /// For ranges this is the lower bound. Free text without a number yields
    /// `None`.
    #[must_use]
    pub fn lower_bound(&self) -> Option<Reps> {
        match self {
            TargetReps::Numeric(reps) => Some(*reps),
            TargetReps::Text(text) => RepRange::try_from(text.as_str()).ok().map(|r| r.min),
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<RepRange> {
        match self {
            TargetReps::Numeric(reps) => Some(RepRange {
                min: *reps,
                max: *reps,
                per_side: false,
            }),
            TargetReps::Text(text) => RepRange::try_from(text.as_str()).ok(),
        }
    }
}

impl From<Reps> for TargetReps {
    fn from(value: Reps) -> Self {
        TargetReps::Numeric(value)
    }
}

impl From<&str> for TargetReps {
    fn from(value: &str) -> Self {
        match Reps::try_from(value) {
            Ok(reps) => TargetReps::Numeric(reps),
            Err(_) => TargetReps::Text(value.to_string()),
        }
    }
}

impl fmt::Display for TargetReps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetReps::Numeric(reps) => write!(f, "{reps}"),
            TargetReps::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A range of repetitions, optionally to be performed on each side.
///
/// `min` may exceed `max` if the input was written that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepRange {
    pub min: Reps,
    pub max: Reps,
    pub per_side: bool,
}

impl RepRange {
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();

        if lowercase.contains("p s") || lowercase.contains("p/s") {
            let reps = leading_reps(&strip_per_side(&lowercase))?;
            return Ok(RepRange {
                min: reps,
                max: reps,
                per_side: true,
            });
        }

        if let Some((min, max)) = value.split_once('-') {
            return Ok(RepRange {
                min: leading_reps(min)?,
                max: leading_reps(max)?,
                per_side: false,
            });
        }

        let reps = leading_reps(value)?;
        Ok(RepRange {
            min: reps,
            max: reps,
            per_side: false,
        })
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)?;
        } else {
            write!(f, "{}-{}", self.min, self.max)?;
        }
        if self.per_side {
            write!(f, " p/s")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Reps must start with a number")]
    NoNumber,
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}

/// Remove every `p s`, `ps` and `p/s` marker from lowercase text.
fn strip_per_side(text: &str) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == 'p' {
            match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('s'), _) => {
                    i += 2;
                    continue;
                }
                (Some(c), Some('s')) if c.is_whitespace() || *c == '/' => {
                    i += 3;
                    continue;
                }
                _ => {}
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Parse the decimal digits at the start of the trimmed text.
fn leading_reps(text: &str) -> Result<Reps, RepRangeError> {
    let trimmed = text.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    if end == 0 {
        return Err(RepRangeError::NoNumber);
    }

    trimmed[..end]
        .parse::<u32>()
        .ok()
        .and_then(|value| Reps::new(value).ok())
        .ok_or(RepRangeError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn range(min: u32, max: u32, per_side: bool) -> RepRange {
        RepRange {
            min: Reps::new(min).unwrap(),
            max: Reps::new(max).unwrap(),
            per_side,
        }
    }

    #[rstest]
    #[case::range("6-8", Ok(range(6, 8, false)))]
    #[case::range_with_spaces(" 8 - 12 ", Ok(range(8, 12, false)))]
    #[case::descending_range("12-8", Ok(range(12, 8, false)))]
    #[case::per_side("10 p S", Ok(range(10, 10, true)))]
    #[case::per_side_slash("8 p/s", Ok(range(8, 8, true)))]
    #[case::per_side_uppercase("12 P/S", Ok(range(12, 12, true)))]
    #[case::single("12", Ok(range(12, 12, false)))]
    #[case::single_with_text("12 reps", Ok(range(12, 12, false)))]
    #[case::amrap("AMRAP", Err(RepRangeError::NoNumber))]
    #[case::failure("failure", Err(RepRangeError::NoNumber))]
    #[case::empty("", Err(RepRangeError::NoNumber))]
    #[case::open_range("6-", Err(RepRangeError::NoNumber))]
    #[case::per_side_without_number("p/s", Err(RepRangeError::NoNumber))]
    #[case::too_many("1000", Err(RepRangeError::OutOfRange))]
    fn test_rep_range_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<RepRange, RepRangeError>,
    ) {
        assert_eq!(RepRange::try_from(value), expected);
    }

    #[rstest]
    #[case(range(6, 8, false), "6-8")]
    #[case(range(10, 10, false), "10")]
    #[case(range(10, 10, true), "10 p/s")]
    fn test_rep_range_display(#[case] input: RepRange, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    #[case("10 p s", "10 ")]
    #[case("10ps", "10")]
    #[case("10 p/s", "10 ")]
    #[case("pull", "pull")]
    fn test_strip_per_side(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(strip_per_side(value), expected);
    }

    #[rstest]
    #[case(TargetReps::Numeric(Reps::new(5).unwrap()), Some(5))]
    #[case(TargetReps::Text("6-8".to_string()), Some(6))]
    #[case(TargetReps::Text("10 p/s".to_string()), Some(10))]
    #[case(TargetReps::Text("AMRAP".to_string()), None)]
    fn test_target_reps_lower_bound(#[case] target: TargetReps, #[case] expected: Option<u32>) {
        assert_eq!(target.lower_bound(), expected.map(|r| Reps::new(r).unwrap()));
    }

    #[rstest]
    #[case("8", TargetReps::Numeric(Reps::new(8).unwrap()))]
    #[case("8-10", TargetReps::Text("8-10".to_string()))]
    fn test_target_reps_from_str(#[case] value: &str, #[case] expected: TargetReps) {
        assert_eq!(TargetReps::from(value), expected);
        assert_eq!(expected.to_string(), value);
    }
}
