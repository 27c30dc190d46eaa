use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;
use strum::{Display, EnumString};

use crate::{
    ClientID, Exercise, ExerciseID, Name, RPE, Reps, TargetReps, Tempo, TemplateID, Time, Weight,
    WorkoutID, group_by_superset,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workout {
    pub id: WorkoutID,
    pub client_id: ClientID,
    pub template_id: Option<TemplateID>,
    pub name: Name,
    pub date: NaiveDate,
    pub status: WorkoutStatus,
    pub started_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub exercises: Vec<WorkoutExercise>,
    pub metrics: Option<WorkoutMetrics>,
    pub rpe: Option<RPE>,
    pub notes: Option<String>,
}

impl Workout {
    /// Volume load of all complete sets.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.exercises.iter().map(WorkoutExercise::volume).sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.exercises
            .iter()
            .map(WorkoutExercise::completed_set_count)
            .sum()
    }

    /// Share of complete sets in percent, 0 for a workout without sets.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        let num_sets = self.num_sets();
        if num_sets == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let progress = 100.0 * self.completed_set_count() as f32 / num_sets as f32;
        progress
    }

    #[must_use]
    pub fn metrics(&self) -> WorkoutMetrics {
        let complete_sets = self
            .exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.is_complete())
            .collect::<Vec<_>>();
        WorkoutMetrics {
            total_volume: self.volume(),
            total_sets: u32::try_from(complete_sets.len()).unwrap_or(u32::MAX),
            total_reps: complete_sets
                .iter()
                .filter_map(|s| s.actual_reps)
                .map(u32::from)
                .sum(),
            duration: self
                .started_at
                .zip(self.completed_at)
                .map(|(started_at, completed_at)| completed_at - started_at),
        }
    }

    /// Planned duration of all exercises, see [`WorkoutExercise::estimated_duration`].
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        self.exercises
            .iter()
            .map(WorkoutExercise::estimated_duration)
            .sum()
    }

    /// The first incomplete set in the order the workout is performed.
    ///
    /// Exercises of a superset are alternated set by set.
    #[must_use]
    pub fn next_set(&self) -> Option<SetPosition> {
        for group in group_by_superset(&self.exercises) {
            let rounds = group
                .exercises()
                .map(|e| e.sets.len())
                .max()
                .unwrap_or_default();
            for set in 0..rounds {
                for (exercise, workout_exercise) in group.indexed() {
                    if workout_exercise
                        .sets
                        .get(set)
                        .is_some_and(|s| !s.is_complete())
                    {
                        return Some(SetPosition { exercise, set });
                    }
                }
            }
        }
        None
    }

    pub fn start(&mut self, at: NaiveDateTime) -> Result<(), StatusError> {
        self.transition(WorkoutStatus::InProgress)?;
        self.started_at = Some(at);
        Ok(())
    }

    /// Finish the workout and store its computed metrics.
    pub fn complete(&mut self, at: NaiveDateTime) -> Result<(), StatusError> {
        if self.started_at.is_some_and(|started_at| at < started_at) {
            return Err(StatusError::CompletedBeforeStart);
        }
        self.transition(WorkoutStatus::Completed)?;
        self.completed_at = Some(at);
        self.metrics = Some(self.metrics());
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), StatusError> {
        self.transition(WorkoutStatus::Skipped)
    }

    fn transition(&mut self, to: WorkoutStatus) -> Result<(), StatusError> {
        if !self.status.can_transition_to(to) {
            debug!("rejected transition of workout {} from {} to {to}", self.id, self.status);
            return Err(StatusError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

#[derive(Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WorkoutStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Skipped,
}

impl WorkoutStatus {
    #[must_use]
    pub fn can_transition_to(self, to: WorkoutStatus) -> bool {
        matches!(
            (self, to),
            (WorkoutStatus::Planned, WorkoutStatus::InProgress)
                | (WorkoutStatus::InProgress, WorkoutStatus::Completed)
                | (
                    WorkoutStatus::Planned | WorkoutStatus::InProgress,
                    WorkoutStatus::Skipped
                )
        )
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, WorkoutStatus::Completed | WorkoutStatus::Skipped)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StatusError {
    #[error("Workout cannot change from {from} to {to}")]
    InvalidTransition {
        from: WorkoutStatus,
        to: WorkoutStatus,
    },
    #[error("Workout cannot be completed before it was started")]
    CompletedBeforeStart,
}

/// Computed totals stored alongside a completed workout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutMetrics {
    pub total_volume: f32,
    pub total_sets: u32,
    pub total_reps: u32,
    #[cfg_attr(feature = "serde", serde(with = "duration_seconds"))]
    pub duration: Option<Duration>,
}

#[cfg(feature = "serde")]
mod duration_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => s.serialize_some(&duration.num_seconds()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<i64>::deserialize(d)?.map(Duration::seconds))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPosition {
    pub exercise: usize,
    pub set: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub exercise: Option<Exercise>,
    pub sets: Vec<ExerciseSet>,
    pub order: u32,
    pub superset_group: Option<String>,
    pub order_in_superset: Option<u32>,
    pub tempo: Option<Tempo>,
    pub rest: Time,
    pub notes: Option<String>,
}

impl WorkoutExercise {
    /// Seconds per repetition assumed when no tempo is prescribed.
    pub const DEFAULT_REP_DURATION: u32 = 4;

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.sets
            .iter()
            .filter(|s| s.is_complete())
            .map(ExerciseSet::volume)
            .sum()
    }

    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.sets.iter().filter(|s| s.is_complete()).count()
    }

    /// Planned time for all sets including the rest between them.
    ///
    /// Each set takes its lower target rep count (at least one repetition)
    /// at the prescribed tempo.
    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        let sets = self
            .sets
            .iter()
            .map(|set| {
                let reps = set
                    .target_reps
                    .lower_bound()
                    .filter(|r| *r > Reps::default())
                    .unwrap_or(Reps::ONE);
                match &self.tempo {
                    Some(tempo) => tempo.estimated_duration(reps),
                    None => {
                        Duration::seconds(i64::from(Self::DEFAULT_REP_DURATION * u32::from(reps)))
                    }
                }
            })
            .sum::<Duration>();
        let rests = i32::try_from(self.sets.len().saturating_sub(1)).unwrap_or(i32::MAX);
        sets + Duration::from(self.rest) * rests
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExerciseSet {
    pub set_number: u32,
    pub target_reps: TargetReps,
    pub target_weight: Weight,
    pub target_rpe: Option<RPE>,
    pub actual_reps: Option<Reps>,
    pub actual_weight: Option<Weight>,
    pub actual_rpe: Option<RPE>,
    pub equipment_setting: Option<String>,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl ExerciseSet {
    /// A set counts as complete only if the performed reps and weight were recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed && self.actual_reps.is_some() && self.actual_weight.is_some()
    }

    /// Volume load of the set, preferring performed over planned values.
    ///
    /// A rep range contributes its lower bound. Targets without a rep count
    /// contribute nothing.
    #[must_use]
    pub fn volume(&self) -> f32 {
        let weight = self.actual_weight.unwrap_or(self.target_weight);
        match self.actual_reps.or_else(|| self.target_reps.lower_bound()) {
            Some(reps) => weight * reps,
            None => {
                debug!(
                    "no rep count in target '{}' of set {}",
                    self.target_reps, self.set_number
                );
                0.0
            }
        }
    }

    pub fn record(&mut self, reps: Reps, weight: Weight, rpe: Option<RPE>, at: NaiveDateTime) {
        self.actual_reps = Some(reps);
        self.actual_weight = Some(weight);
        self.actual_rpe = rpe;
        self.completed = true;
        self.completed_at = Some(at);
    }
}
