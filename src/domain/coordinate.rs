use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A latitude/longitude pair marking the intended delivery location.
///
/// Serialized as the two-element array `[latitude, longitude]`, which is the shape
/// the order backend stores. Any value is accepted, but NaN and infinities are
/// written as `null` by serde_json and do not read back; the CLI refuses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Starting point of the delivery marker before the buyer clicks the map.
    pub const DEFAULT: Self = Self::new(-12.0433, -77.028);

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.latitude, self.longitude].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (latitude, longitude) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Self::new(latitude, longitude))
    }
}
