use crate::PackageError;

/// Positional reader over a package's readings. Arity is checked by the
/// caller, so reads past the end are a bug rather than bad input.
pub(crate) struct ReadingCursor<'a> {
    code: &'a str,
    fields: &'static [&'static str],
    readings: &'a [f64],
    index: usize,
}

impl<'a> ReadingCursor<'a> {
    pub(crate) fn new(code: &'a str, fields: &'static [&'static str], readings: &'a [f64]) -> Self {
        debug_assert_eq!(fields.len(), readings.len());
        Self {
            code,
            fields,
            readings,
            index: 0,
        }
    }

    fn advance(&mut self) -> (&'static str, f64) {
        let item = (self.fields[self.index], self.readings[self.index]);
        self.index += 1;
        item
    }

    fn invalid(&self, field: &'static str, value: f64) -> PackageError {
        PackageError::InvalidReading {
            code: self.code.to_owned(),
            field,
            value,
        }
    }

    /// Non negative whole number that fits in `u32`.
    pub(crate) fn count(&mut self) -> Result<u32, PackageError> {
        let (field, value) = self.advance();
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX)
        {
            return Err(self.invalid(field, value));
        }
        Ok(value as u32)
    }

    /// Finite, strictly positive measurement.
    pub(crate) fn positive(&mut self) -> Result<f64, PackageError> {
        let (field, value) = self.advance();
        if !value.is_finite() || value <= 0.0 {
            return Err(self.invalid(field, value));
        }
        Ok(value)
    }

    /// Duration in hours, used as a divisor by every speed model.
    pub(crate) fn duration(&mut self) -> Result<f64, PackageError> {
        let (_, value) = self.advance();
        if !value.is_finite() || value <= 0.0 {
            return Err(PackageError::NonPositiveDuration {
                code: self.code.to_owned(),
                value,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["count", "duration", "weight"];

    #[test]
    fn reads_in_order() {
        let readings = [12.0, 1.5, 70.0];
        let mut cursor = ReadingCursor::new("RUN", FIELDS, &readings);
        assert_eq!(cursor.count(), Ok(12));
        assert_eq!(cursor.duration(), Ok(1.5));
        assert_eq!(cursor.positive(), Ok(70.0));
    }

    #[test]
    fn count_rejects_fractions_and_negatives() {
        for bad in [1.5, -1.0, f64::NAN, f64::INFINITY, 5e9] {
            let readings = [bad, 1.0, 1.0];
            let mut cursor = ReadingCursor::new("RUN", FIELDS, &readings);
            assert!(
                matches!(
                    cursor.count(),
                    Err(PackageError::InvalidReading { field: "count", .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn count_accepts_zero() {
        let readings = [0.0, 1.0, 1.0];
        let mut cursor = ReadingCursor::new("RUN", FIELDS, &readings);
        assert_eq!(cursor.count(), Ok(0));
    }

    #[test]
    fn duration_rejects_zero() {
        let readings = [1.0, 0.0, 1.0];
        let mut cursor = ReadingCursor::new("RUN", FIELDS, &readings);
        cursor.count().unwrap();
        assert_eq!(
            cursor.duration(),
            Err(PackageError::NonPositiveDuration {
                code: "RUN".into(),
                value: 0.0
            })
        );
    }
}
