use log::debug;
use strum::{Display, EnumIter, EnumString};

use crate::{RPE, Reps, Weight};

/// Percentage of the one-rep max used for RPE values below the lookup table.
///
/// This is a placeholder, not a calibrated value.
pub const SUBMAXIMAL_PERCENTAGE: f32 = 70.0;

#[derive(Debug, Default, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OneRepMaxFormula {
    #[default]
    Epley,
    Brzycki,
    Lander,
}

/// Estimate the one-rep max from a set of `reps` repetitions with `weight`.
///
/// A single repetition is returned unchanged. The Brzycki and Lander formulas
/// are undefined for high rep counts (37 and 38 or more) where their
/// denominator is no longer positive.
pub fn estimate_one_rep_max(
    weight: Weight,
    reps: Reps,
    formula: OneRepMaxFormula,
) -> Result<f32, OneRepMaxError> {
    let w = f32::from(weight);
    let r = f32::from(reps);

    if reps == Reps::ONE {
        return Ok(w);
    }

    let (numerator, denominator) = match formula {
        OneRepMaxFormula::Epley => (w * (30.0 + r), 30.0),
        OneRepMaxFormula::Brzycki => (w, 1.0278 - 0.0278 * r),
        OneRepMaxFormula::Lander => (100.0 * w, 101.3 - 2.671_23 * r),
    };

    if denominator <= 0.0 {
        debug!("{formula} formula undefined for {reps} reps");
        return Err(OneRepMaxError::DegenerateFormula { formula, reps });
    }

    Ok(numerator / denominator)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OneRepMaxError {
    #[error("The {formula} formula is not defined for {reps} repetitions")]
    DegenerateFormula {
        formula: OneRepMaxFormula,
        reps: Reps,
    },
}

/// The given percentage of a one-rep max, rounded to a whole number.
#[must_use]
pub fn percent_of_one_rep_max(one_rep_max: f32, percentage: f32) -> f32 {
    (one_rep_max * percentage / 100.0).round()
}

/// Percentage of the one-rep max corresponding to an RPE of 6 or more.
#[must_use]
pub fn percentage_for_rpe(rpe: RPE) -> Option<f32> {
    match rpe.tenths() {
        60 => Some(80.0),
        65 => Some(82.5),
        70 => Some(85.0),
        75 => Some(87.5),
        80 => Some(90.0),
        85 => Some(92.5),
        90 => Some(95.0),
        95 => Some(97.5),
        100 => Some(100.0),
        _ => None,
    }
}

/// Percentage of the one-rep max corresponding to an RPE.
///
/// RPE values below 6 are too far from failure for a reliable estimate and
/// map to [`SUBMAXIMAL_PERCENTAGE`].
#[must_use]
pub fn rpe_to_percentage(rpe: RPE) -> f32 {
    percentage_for_rpe(rpe).unwrap_or_else(|| {
        debug!("no percentage for RPE {rpe}, using {SUBMAXIMAL_PERCENTAGE}");
        SUBMAXIMAL_PERCENTAGE
    })
}

#[must_use]
pub fn weight_for_rpe(one_rep_max: f32, rpe: RPE) -> f32 {
    percent_of_one_rep_max(one_rep_max, rpe_to_percentage(rpe))
}
