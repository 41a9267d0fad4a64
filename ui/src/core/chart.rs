//! Line/area chart geometry without a charting library.
//!
//! Samples are projected into a `0 0 100 100` viewBox: `x` spreads the
//! samples evenly across the width and `y` is inverted so larger values sit
//! higher on screen. Paths are printed with two decimals so the same input
//! always yields the same string.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::error::{finite, InputError};

pub const VIEWBOX: &str = "0 0 100 100";

/// Bottom edge of the viewBox, where area fills close.
const BASELINE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertical band the plotted values occupy: `y = 100 - norm * span - offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub span: f64,
    pub offset: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            span: 80.0,
            offset: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathStyle {
    /// Cubic segments with control points at the horizontal midpoint.
    #[default]
    Smooth,
    /// Straight `L` segments.
    Linear,
}

/// Shared min/max for one or more series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub fn of<'a>(values: impl IntoIterator<Item = &'a f64>) -> Result<Self, InputError> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for value in values {
            let value = finite("chart value", *value)?;
            min = min.min(value);
            max = max.max(value);
            seen = true;
        }
        if !seen {
            return Err(InputError::EmptySeries);
        }
        // Finite samples can still be too far apart to subtract.
        finite("chart range", max - min)?;
        Ok(Self { min, max })
    }

    /// `max - min`, or 1 when every sample is equal.
    pub fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            range
        } else {
            1.0
        }
    }

    pub fn project_y(&self, value: f64, frame: Frame) -> f64 {
        BASELINE - ((value - self.min) / self.range()) * frame.span - frame.offset
    }
}

/// Horizontal position of sample `index` on an axis of `len` slots.
pub fn project_x(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 50.0;
    }
    index as f64 / (len - 1) as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPath {
    /// SVG path data for the stroke.
    pub d: String,
    pub points: Vec<PlotPoint>,
}

impl ChartPath {
    /// Final sample, for the "current value" dot.
    pub fn last(&self) -> Option<PlotPoint> {
        self.points.last().copied()
    }

    /// The stroke closed down to the baseline for a filled area.
    pub fn area(&self) -> String {
        area_path(&self.d, &self.points)
    }
}

/// Single-series geometry with its own scale.
pub fn line_chart(
    series: &[SeriesPoint],
    frame: Frame,
    style: PathStyle,
) -> Result<ChartPath, InputError> {
    let scale = Scale::of(series.iter().map(|p| &p.value))?;
    Ok(build_path(series, series.len(), scale, frame, style))
}

/// Actual vs. forecast on one shared scale and one shared horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DualChart {
    pub scale: Scale,
    pub actual: ChartPath,
    pub forecast: ChartPath,
}

impl DualChart {
    pub fn build(
        actual: &[SeriesPoint],
        forecast: &[SeriesPoint],
        frame: Frame,
        style: PathStyle,
    ) -> Result<Self, InputError> {
        if actual.is_empty() || forecast.is_empty() {
            return Err(InputError::EmptySeries);
        }
        let scale = Scale::of(actual.iter().chain(forecast).map(|p| &p.value))?;
        let slots = actual.len().max(forecast.len());
        Ok(Self {
            scale,
            actual: build_path(actual, slots, scale, frame, style),
            forecast: build_path(forecast, slots, scale, frame, style),
        })
    }
}

fn build_path(
    series: &[SeriesPoint],
    slots: usize,
    scale: Scale,
    frame: Frame,
    style: PathStyle,
) -> ChartPath {
    let points: Vec<PlotPoint> = series
        .iter()
        .enumerate()
        .map(|(index, sample)| PlotPoint {
            x: project_x(index, slots),
            y: scale.project_y(sample.value, frame),
        })
        .collect();

    let d = match style {
        PathStyle::Smooth => smooth_path(&points),
        PathStyle::Linear => linear_path(&points),
    };
    ChartPath { d, points }
}

pub fn linear_path(points: &[PlotPoint]) -> String {
    let mut d = String::new();
    for (index, point) in points.iter().enumerate() {
        let cmd = if index == 0 { 'M' } else { 'L' };
        push_cmd(&mut d, cmd, &[(point.x, point.y)]);
    }
    d
}

pub fn smooth_path(points: &[PlotPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = String::new();
    push_cmd(&mut d, 'M', &[(first.x, first.y)]);
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mid_x = (from.x + to.x) / 2.0;
        push_cmd(
            &mut d,
            'C',
            &[(mid_x, from.y), (mid_x, to.y), (to.x, to.y)],
        );
    }
    d
}

/// Close `stroke` to the baseline below the last and first points.
pub fn area_path(stroke: &str, points: &[PlotPoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = stroke.to_string();
    push_cmd(&mut d, 'L', &[(last.x, BASELINE)]);
    push_cmd(&mut d, 'L', &[(first.x, BASELINE)]);
    d.push_str(" Z");
    d
}

fn push_cmd(d: &mut String, cmd: char, coords: &[(f64, f64)]) {
    if !d.is_empty() {
        d.push(' ');
    }
    d.push(cmd);
    for (i, (x, y)) in coords.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        // Writing into a String cannot fail.
        let _ = write!(d, "{sep}{x:.2} {y:.2}");
    }
}
