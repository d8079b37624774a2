use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Metric carried by every [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Horizontal position metric (GDP).
    X,
    /// Vertical position metric (energy consumption per capita).
    Y,
    /// Radius/color metric (total energy consumption).
    Size,
    /// Display-only metric.
    Population,
}

/// One observation of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub population: f64,
}

impl Record {
    /// Builds a record, rejecting negative or non-finite metrics.
    pub fn new(
        name: impl Into<String>,
        x: f64,
        y: f64,
        size: f64,
        population: f64,
    ) -> ScatterResult<Self> {
        let record = Self {
            name: name.into(),
            x,
            y,
            size,
            population,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> ScatterResult<()> {
        for metric in [Metric::X, Metric::Y, Metric::Size, Metric::Population] {
            let value = self.metric(metric);
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "record `{}` has invalid {metric:?} value {value}; expected finite and >= 0",
                    self.name
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::X => self.x,
            Metric::Y => self.y,
            Metric::Size => self.size,
            Metric::Population => self.population,
        }
    }
}

/// Immutable, ordered record collection.
///
/// Insertion order is draw order; later records paint on top of earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
    by_name: IndexMap<String, usize>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> ScatterResult<Self> {
        let mut by_name = IndexMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            record.validate()?;
            // Duplicate names keep the first occurrence for lookups.
            by_name.entry(record.name.clone()).or_insert(index);
        }
        Ok(Self { records, by_name })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Record> {
        self.index_of(name).and_then(|index| self.records.get(index))
    }

    /// Largest value of `metric`, or `None` for an empty set.
    #[must_use]
    pub fn max(&self, metric: Metric) -> Option<f64> {
        self.records
            .iter()
            .map(|record| OrderedFloat(record.metric(metric)))
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Smallest value of `metric`, or `None` for an empty set.
    #[must_use]
    pub fn min(&self, metric: Metric) -> Option<f64> {
        self.records
            .iter()
            .map(|record| OrderedFloat(record.metric(metric)))
            .min()
            .map(OrderedFloat::into_inner)
    }
}
