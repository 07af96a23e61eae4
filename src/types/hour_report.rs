use crate::types::temperature::Temperature;

/// A single hourly temperature observation within one [`DayReport`].
///
/// Immutable once created and owned exclusively by its day report. The id is
/// assigned by the store; freshly fetched observations carry `None`.
///
/// [`DayReport`]: crate::DayReport
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HourReport {
    id: Option<u64>,
    hour: u32,
    temperature: Temperature,
}

impl HourReport {
    /// Creates an observation as received from the provider, without an id.
    pub fn new(hour: u32, temperature: Temperature) -> Self {
        Self {
            id: None,
            hour,
            temperature,
        }
    }

    /// Reconstructs a stored observation with its assigned id.
    pub fn with_id(id: u64, hour: u32, temperature: Temperature) -> Self {
        Self {
            id: Some(id),
            hour,
            temperature,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Hour of day, 0..=23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_with_same_fields_are_equal() {
        let a = HourReport::new(14, Temperature::new(19.0));
        let b = HourReport::new(14, Temperature::new(19.0));
        assert_eq!(a, b);
    }

    #[test]
    fn id_distinguishes_stored_from_fetched() {
        let fetched = HourReport::new(14, Temperature::new(19.0));
        let stored = HourReport::with_id(7, 14, Temperature::new(19.0));
        assert_ne!(fetched, stored);
        assert_eq!(stored.id(), Some(7));
    }
}
