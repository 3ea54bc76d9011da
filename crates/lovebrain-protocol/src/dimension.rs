use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// The five scoring axes of the quiz, in canonical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    EmotionalDependence,
    IdealizationFilter,
    BoundarySacrifice,
    LossOfSelf,
    RelationshipCentrality,
}

impl Dimension {
    pub const COUNT: usize = 5;

    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::EmotionalDependence,
        Dimension::IdealizationFilter,
        Dimension::BoundarySacrifice,
        Dimension::LossOfSelf,
        Dimension::RelationshipCentrality,
    ];

    /// Wire / column name, e.g. `loss_of_self`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Dimension::EmotionalDependence => "Emotional Dependence",
            Dimension::IdealizationFilter => "Idealization Filter",
            Dimension::BoundarySacrifice => "Boundary Sacrifice",
            Dimension::LossOfSelf => "Loss of Self",
            Dimension::RelationshipCentrality => "Relationship Centrality",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object of dimension scores")]
    NotAnObject,

    #[error("Score for dimension {0} is missing")]
    Missing(Dimension),

    #[error("Score for dimension {0} must be a number")]
    NotNumeric(Dimension),

    #[error("Score for dimension {dimension} must be finite (got {value})")]
    NotFinite { dimension: Dimension, value: f64 },
}

/// One value per dimension. Field order is the canonical serialization order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionMap<T> {
    pub emotional_dependence: T,
    pub idealization_filter: T,
    pub boundary_sacrifice: T,
    pub loss_of_self: T,
    pub relationship_centrality: T,
}

/// Raw per-dimension quiz scores (in practice integer sums in 0..=32).
pub type ScoreVector = DimensionMap<f64>;

/// Per-dimension percentiles in 1..=99.
pub type Rankings = DimensionMap<u8>;

impl<T: Copy> DimensionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            emotional_dependence: f(Dimension::EmotionalDependence),
            idealization_filter: f(Dimension::IdealizationFilter),
            boundary_sacrifice: f(Dimension::BoundarySacrifice),
            loss_of_self: f(Dimension::LossOfSelf),
            relationship_centrality: f(Dimension::RelationshipCentrality),
        }
    }

    pub fn get(&self, dimension: Dimension) -> T {
        match dimension {
            Dimension::EmotionalDependence => self.emotional_dependence,
            Dimension::IdealizationFilter => self.idealization_filter,
            Dimension::BoundarySacrifice => self.boundary_sacrifice,
            Dimension::LossOfSelf => self.loss_of_self,
            Dimension::RelationshipCentrality => self.relationship_centrality,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: T) {
        let slot = match dimension {
            Dimension::EmotionalDependence => &mut self.emotional_dependence,
            Dimension::IdealizationFilter => &mut self.idealization_filter,
            Dimension::BoundarySacrifice => &mut self.boundary_sacrifice,
            Dimension::LossOfSelf => &mut self.loss_of_self,
            Dimension::RelationshipCentrality => &mut self.relationship_centrality,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, T)> + '_ {
        Dimension::iter().map(move |d| (d, self.get(d)))
    }
}

impl ScoreVector {
    /// Builds a score vector from an untyped JSON body.
    ///
    /// Every dimension must be present as a JSON number. Extra keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut scores = ScoreVector::default();
        for dimension in Dimension::iter() {
            let raw = object
                .get(dimension.as_str())
                .ok_or(ValidationError::Missing(dimension))?;
            let score = raw.as_f64().ok_or(ValidationError::NotNumeric(dimension))?;
            scores.set(dimension, score);
        }

        scores.validate()?;
        Ok(scores)
    }

    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.len() != Dimension::COUNT {
            return None;
        }
        Some(Self::from_fn(|d| values[d.index()]))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (dimension, value) in self.iter() {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { dimension, value });
            }
        }
        Ok(())
    }
}
