use std::fmt;

use crate::WorkoutExercise;

/// Identifies a group of exercises performed back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey<'a> {
    /// Exercises sharing the same superset label.
    Superset(&'a str),
    /// An exercise without a label, identified by its position in the workout.
    Single(usize),
}

impl fmt::Display for GroupKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Superset(label) => write!(f, "{label}"),
            GroupKey::Single(index) => write!(f, "single-{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupersetGroup<'a> {
    key: GroupKey<'a>,
    members: Vec<(usize, &'a WorkoutExercise)>,
}

impl<'a> SupersetGroup<'a> {
    #[must_use]
    pub fn key(&self) -> GroupKey<'a> {
        self.key
    }

    pub fn exercises(&self) -> impl Iterator<Item = &'a WorkoutExercise> + '_ {
        self.members.iter().map(|(_, e)| *e)
    }

    /// Members together with their position in the original exercise list.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &'a WorkoutExercise)> + '_ {
        self.members.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn is_superset(&self) -> bool {
        matches!(self.key, GroupKey::Superset(_)) && self.members.len() > 1
    }
}

/// Group exercises by their superset label.
///
/// Groups appear in the order their first member appears in `exercises`.
/// Members of a group are ordered by `order_in_superset` (missing values count
/// as 0), keeping the original order for equal values. Exercises without a
/// label form a group of their own.
#[must_use]
pub fn group_by_superset(exercises: &[WorkoutExercise]) -> Vec<SupersetGroup<'_>> {
    let mut groups: Vec<SupersetGroup<'_>> = vec![];

    for (index, exercise) in exercises.iter().enumerate() {
        let key = match &exercise.superset_group {
            Some(label) => GroupKey::Superset(label.as_str()),
            None => GroupKey::Single(index),
        };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.members.push((index, exercise)),
            None => groups.push(SupersetGroup {
                key,
                members: vec![(index, exercise)],
            }),
        }
    }

    for group in &mut groups {
        group
            .members
            .sort_by_key(|(_, e)| e.order_in_superset.unwrap_or_default());
    }

    groups
}
