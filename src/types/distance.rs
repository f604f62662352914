//! Tentative path lengths with an explicit "unreached" state.

use serde::{Serialize, Serializer};

/// Length of the best known path to a node.
///
/// Variant order matters: the derived ordering puts every `Finite` value
/// strictly below `Unreached`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub enum Distance {
    /// A path of this total weight is known.
    Finite(f64),
    /// No path has been found.
    #[default]
    Unreached,
}

impl Distance {
    /// Distance of the source node to itself.
    pub const ZERO: Distance = Distance::Finite(0.0);

    /// Returns true if a path is known.
    pub fn is_reached(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The numeric value, or `None` when unreached.
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreached => None,
        }
    }

    /// Extend this distance by one edge. Unreached stays unreached.
    pub fn plus(self, weight: f64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + weight),
            Distance::Unreached => Distance::Unreached,
        }
    }
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Distance::Unreached, Distance::Finite)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_f64(*d),
            Distance::Unreached => serializer.serialize_none(),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreached => write!(f, "∞"),
        }
    }
}
