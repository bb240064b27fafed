//! Die identity and shape types.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for one die instance, valid for its lifetime in
/// the scene. The host assigns ids; the store never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DieId(String);

impl DieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// All supported die shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::D4,
        Shape::D6,
        Shape::D8,
        Shape::D10,
        Shape::D12,
        Shape::D20,
    ];

    pub fn face_count(&self) -> usize {
        match self {
            Shape::D4 => 4,
            Shape::D6 => 6,
            Shape::D8 => 8,
            Shape::D10 => 10,
            Shape::D12 => 12,
            Shape::D20 => 20,
        }
    }

    /// Range of face values. A d10 reads 0-9; every other shape reads 1-N.
    pub fn values(&self) -> RangeInclusive<u32> {
        match self {
            Shape::D10 => 0..=9,
            _ => 1..=self.face_count() as u32,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::D4 => "D4",
            Shape::D6 => "D6",
            Shape::D8 => "D8",
            Shape::D10 => "D10",
            Shape::D12 => "D12",
            Shape::D20 => "D20",
        }
    }

    pub fn parse(s: &str) -> Option<Shape> {
        match s.to_lowercase().as_str() {
            "d4" => Some(Shape::D4),
            "d6" => Some(Shape::D6),
            "d8" => Some(Shape::D8),
            "d10" => Some(Shape::D10),
            "d12" => Some(Shape::D12),
            "d20" => Some(Shape::D20),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
