//! Passenger attributes and their encoding into the classifier feature vector.
//!
//! Categorical fields are closed enums, so encoding is an exhaustive `match`
//! with no lookup failure. Numeric fields are clamped to the same limits the
//! form widgets enforce before a [`PredictionRequest`] is built.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of columns in an encoded feature row.
pub const FEATURE_COUNT: usize = 7;

/// Column names in the order the classifier was trained on.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] =
    ["Pclass", "Sex", "Age", "Fare", "SibSp", "Parch", "Embarked"];

/// Lowest accepted age.
pub const MIN_AGE: f32 = 1.0;
/// Highest accepted age.
pub const MAX_AGE: f32 = 100.0;
/// Lowest accepted fare.
pub const MIN_FARE: f32 = 0.0;

/// Ticket class, encoded as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    pub const ALL: [PassengerClass; 3] = [Self::First, Self::Second, Self::Third];

    pub fn code(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }
}

impl fmt::Display for PassengerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Passenger sex as recorded on the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    pub fn code(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Port where the passenger boarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Embarked {
    Cherbourg,
    Queenstown,
    Southampton,
}

impl Embarked {
    pub const ALL: [Embarked; 3] = [Self::Cherbourg, Self::Queenstown, Self::Southampton];

    pub fn code(self) -> u8 {
        match self {
            Self::Cherbourg => 0,
            Self::Queenstown => 1,
            Self::Southampton => 2,
        }
    }

    /// Single-letter manifest label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cherbourg => "C",
            Self::Queenstown => "Q",
            Self::Southampton => "S",
        }
    }

    pub fn port_name(self) -> &'static str {
        match self {
            Self::Cherbourg => "Cherbourg",
            Self::Queenstown => "Queenstown",
            Self::Southampton => "Southampton",
        }
    }
}

impl fmt::Display for Embarked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field} value: {value:?} (expected one of {expected})")]
pub struct ParseCategoryError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for PassengerClass {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| ParseCategoryError {
                field: "Pclass",
                value: s.to_string(),
                expected: "1, 2, 3",
            })
    }
}

impl FromStr for Sex {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ParseCategoryError {
                field: "Sex",
                value: s.to_string(),
                expected: "Male, Female",
            }),
        }
    }
}

impl FromStr for Embarked {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cherbourg" => Ok(Self::Cherbourg),
            "q" | "queenstown" => Ok(Self::Queenstown),
            "s" | "southampton" => Ok(Self::Southampton),
            _ => Err(ParseCategoryError {
                field: "Embarked",
                value: s.to_string(),
                expected: "C, Q, S",
            }),
        }
    }
}

/// Raw passenger details as collected by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerInput {
    pub pclass: PassengerClass,
    pub sex: Sex,
    pub age: f32,
    pub fare: f32,
    pub sibsp: u32,
    pub parch: u32,
    pub embarked: Embarked,
}

impl Default for PassengerInput {
    fn default() -> Self {
        Self {
            pclass: PassengerClass::First,
            sex: Sex::Male,
            age: 30.0,
            fare: 50.0,
            sibsp: 0,
            parch: 0,
            embarked: Embarked::Cherbourg,
        }
    }
}

impl PassengerInput {
    /// Apply the widget limits: age into `[1, 100]`, fare to at least zero.
    ///
    /// Sibling and parent counts are unsigned and have no upper bound.
    pub fn clamped(mut self) -> Self {
        self.age = clamp_age(self.age);
        self.fare = clamp_fare(self.fare);
        self
    }
}

pub fn clamp_age(age: f32) -> f32 {
    age.clamp(MIN_AGE, MAX_AGE)
}

pub fn clamp_fare(fare: f32) -> f32 {
    fare.max(MIN_FARE)
}

/// Numeric input that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

/// Encoded feature row handed to the classifier, in [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    features: [f32; FEATURE_COUNT],
}

impl PredictionRequest {
    /// Clamp and encode passenger details.
    pub fn encode(input: &PassengerInput) -> Result<Self, RequestError> {
        ensure_finite("Age", input.age)?;
        ensure_finite("Fare", input.fare)?;
        let input = input.clone().clamped();
        Ok(Self {
            features: [
                f32::from(input.pclass.code()),
                f32::from(input.sex.code()),
                input.age,
                input.fare,
                input.sibsp as f32,
                input.parch as f32,
                f32::from(input.embarked.code()),
            ],
        })
    }

    pub fn features(&self) -> &[f32; FEATURE_COUNT] {
        &self.features
    }

    /// Pair each value with its column name, for logging and JSON output.
    pub fn named_features(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.features.iter().copied())
    }
}

fn ensure_finite(field: &'static str, value: f32) -> Result<(), RequestError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RequestError::NonFinite { field, value })
    }
}
