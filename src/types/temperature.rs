use ordered_float::OrderedFloat;
use std::fmt;

/// A single temperature reading in degrees Celsius.
///
/// Wraps the raw value in [`OrderedFloat`] so readings are `Eq + Hash` and can
/// take part in the set-equality semantics of day and city reports. Any finite
/// value is accepted, negatives included; equality is by value.
///
/// # Examples
///
/// ```
/// use weather_stats::Temperature;
///
/// let freezing = Temperature::new(0.0);
/// let cold = Temperature::new(-12.5);
/// assert_eq!(freezing, Temperature::new(0.0));
/// assert_eq!(cold.value(), -12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temperature(OrderedFloat<f64>);

impl Temperature {
    pub fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    /// The raw reading.
    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
