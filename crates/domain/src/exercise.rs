use crate::{ExerciseID, Name};

/// Catalog entry of an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: String,
    pub equipment: String,
    pub muscle_groups: Vec<String>,
    pub variations: Vec<String>,
    pub unilateral: bool,
}
