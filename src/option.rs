/// Number of digits rendered after the decimal point for metric values.
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// Knobs applied while extracting entries for a comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub(crate) decimal_places: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl CompareOptions {
    /// Digits after the decimal point when formatting metric values.
    pub fn decimal_places(self, decimal_places: usize) -> Self {
        CompareOptions {
            decimal_places,
            ..self
        }
    }

    /// Currently configured number of decimal places.
    pub fn get_decimal_places(&self) -> usize {
        self.decimal_places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_three_decimal_places() {
        assert_eq!(CompareOptions::default().get_decimal_places(), 3);
    }

    #[test]
    fn setter_overrides_decimal_places() {
        let options = CompareOptions::default().decimal_places(1);
        assert_eq!(options.get_decimal_places(), 1);
    }
}
