use crate::types::temperature::{TemperatureSample, TemperatureSeries};
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDateTime;

/// Returns the sample whose timestamp is closest to `target`.
///
/// When two samples are equally far from `target`, the one with the earlier timestamp
/// wins. Samples sharing the exact same timestamp resolve to the one that arrived first.
///
/// # Errors
///
/// Returns [`WeatherDataError::EmptySeries`] if `series` holds no samples.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use smhi_weather::{nearest_sample, TemperatureSample, TemperatureSeries};
///
/// let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let series: TemperatureSeries = vec![
///     TemperatureSample::new(day.and_hms_opt(11, 50, 0).unwrap(), -2.0),
///     TemperatureSample::new(day.and_hms_opt(12, 3, 0).unwrap(), -1.0),
/// ]
/// .into();
///
/// let sample = nearest_sample(&series, day.and_hms_opt(12, 0, 0).unwrap()).unwrap();
/// assert_eq!(sample.temperature_celsius, -1.0);
/// ```
pub fn nearest_sample(
    series: &TemperatureSeries,
    target: NaiveDateTime,
) -> Result<&TemperatureSample, WeatherDataError> {
    // min_by_key keeps the first of equal keys, giving arrival order for equal timestamps.
    series
        .iter()
        .min_by_key(|sample| ((sample.timestamp - target).abs(), sample.timestamp))
        .ok_or(WeatherDataError::EmptySeries)
}

impl TemperatureSeries {
    /// See [`nearest_sample`].
    pub fn nearest_sample(
        &self,
        target: NaiveDateTime,
    ) -> Result<&TemperatureSample, WeatherDataError> {
        nearest_sample(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn target() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample(offset_minutes: i64, temperature: f64) -> TemperatureSample {
        TemperatureSample::new(target() + TimeDelta::minutes(offset_minutes), temperature)
    }

    #[test]
    fn closer_later_sample_beats_earlier_one() {
        let series: TemperatureSeries = vec![sample(-10, 14.0), sample(3, 15.5)].into();
        let picked = nearest_sample(&series, target()).unwrap();
        assert_eq!(*picked, sample(3, 15.5));
    }

    #[test]
    fn series_order_does_not_matter() {
        let series: TemperatureSeries =
            vec![sample(120, 1.0), sample(-1, 2.0), sample(-60, 3.0), sample(2, 4.0)].into();
        assert_eq!(series.nearest_sample(target()).unwrap().temperature_celsius, 2.0);
    }

    #[test]
    fn exact_match_wins() {
        let series: TemperatureSeries = vec![sample(-1, 1.0), sample(0, 2.0), sample(1, 3.0)].into();
        assert_eq!(nearest_sample(&series, target()).unwrap().temperature_celsius, 2.0);
    }

    #[test]
    fn equidistant_tie_goes_to_earlier_timestamp() {
        let later_first: TemperatureSeries = vec![sample(30, 1.0), sample(-30, 2.0)].into();
        let earlier_first: TemperatureSeries = vec![sample(-30, 2.0), sample(30, 1.0)].into();

        assert_eq!(*nearest_sample(&later_first, target()).unwrap(), sample(-30, 2.0));
        assert_eq!(*nearest_sample(&earlier_first, target()).unwrap(), sample(-30, 2.0));
    }

    #[test]
    fn duplicate_timestamps_keep_arrival_order() {
        let series: TemperatureSeries = vec![sample(5, 1.0), sample(5, 2.0)].into();
        assert_eq!(nearest_sample(&series, target()).unwrap().temperature_celsius, 1.0);
    }

    #[test]
    fn empty_series_is_an_error() {
        assert!(matches!(
            nearest_sample(&TemperatureSeries::new(), target()),
            Err(WeatherDataError::EmptySeries)
        ));
    }
}
