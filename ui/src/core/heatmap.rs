//! Five-step intensity buckets for contribution/activity heatmaps.

use super::error::{non_negative, positive, InputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Peak,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::Empty,
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Peak,
    ];

    /// Bucket a `value / max` ratio. Thresholds are exclusive lower bounds.
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio > 0.8 {
            Intensity::Peak
        } else if ratio > 0.6 {
            Intensity::High
        } else if ratio > 0.4 {
            Intensity::Medium
        } else if ratio > 0.2 {
            Intensity::Low
        } else {
            Intensity::Empty
        }
    }

    pub fn classify(value: f64, max: f64) -> Result<Self, InputError> {
        let value = non_negative("heatmap value", value)?;
        let max = positive("heatmap maximum", max)?;
        Ok(Self::for_ratio(value / max))
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Intensity::Empty => "heatmap__cell--0",
            Intensity::Low => "heatmap__cell--1",
            Intensity::Medium => "heatmap__cell--2",
            Intensity::High => "heatmap__cell--3",
            Intensity::Peak => "heatmap__cell--4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub value: f64,
    pub intensity: Intensity,
}

/// Counts laid out row-major in `columns` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub columns: usize,
    pub max: f64,
    pub cells: Vec<HeatCell>,
}

impl HeatmapGrid {
    pub fn from_counts(columns: usize, counts: &[f64]) -> Result<Self, InputError> {
        if columns == 0 {
            return Err(InputError::EmptyCollection {
                what: "heatmap columns",
            });
        }
        let mut max = 0.0_f64;
        for value in counts {
            max = max.max(non_negative("heatmap value", *value)?);
        }

        let cells = counts
            .iter()
            .map(|&value| HeatCell {
                value,
                // An all-zero grid has no meaningful maximum; every cell is empty.
                intensity: if max > 0.0 {
                    Intensity::for_ratio(value / max)
                } else {
                    Intensity::Empty
                },
            })
            .collect();

        Ok(Self {
            columns,
            max,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[HeatCell]> {
        self.cells.chunks(self.columns)
    }
}
