//! Air temperature observations for a single station.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One hourly air temperature reading.
///
/// The timestamp is naive and interpreted as UTC, the way the archive reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: f64,
}

impl TemperatureSample {
    pub fn new(timestamp: NaiveDateTime, temperature_celsius: f64) -> Self {
        Self {
            timestamp,
            temperature_celsius,
        }
    }
}

/// The temperature samples of one station in the order they were read.
///
/// The series is not sorted by time; lookups scan every sample. Every sample in a
/// series has a valid timestamp and a finite temperature, since rows that fail to
/// parse never make it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    samples: Vec<TemperatureSample>,
}

impl TemperatureSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: TemperatureSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TemperatureSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemperatureSample> {
        self.samples.iter()
    }

    pub fn into_samples(self) -> Vec<TemperatureSample> {
        self.samples
    }
}

impl From<Vec<TemperatureSample>> for TemperatureSeries {
    fn from(samples: Vec<TemperatureSample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<TemperatureSample> for TemperatureSeries {
    fn from_iter<I: IntoIterator<Item = TemperatureSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TemperatureSeries {
    type Item = &'a TemperatureSample;
    type IntoIter = std::slice::Iter<'a, TemperatureSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
