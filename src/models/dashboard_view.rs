use crate::domain::{HistoricSeries, KpiValue, Selection};
use crate::engine::DashboardState;

/// The rows of the KPI text block, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiField {
    CurrentPrice,
    AveragePrice,
    MaxPrice,
    MinPrice,
    Volatility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiLine {
    pub field: KpiField,
    /// Verbatim value, or empty while unknown.
    pub value: String,
}

/// Points for the monthly line chart.
///
/// The x axis is categorical: point `i` sits at `x = i` and is labelled with
/// `day_labels[i]`, preserving the backend's order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub day_labels: Vec<String>,
    pub points: Vec<[f64; 2]>,
}

impl LineSeries {
    pub fn from_series(series: &HistoricSeries) -> Self {
        let (day_labels, points) = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| (p.day.clone(), [i as f64, p.price]))
            .unzip();
        Self { day_labels, points }
    }

    /// Runs of consecutive finite points. A non-numeric price splits the line.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in &self.points {
            if point[1].is_finite() {
                current.push(*point);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Day label for an x coordinate, if it lands on a point.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.day_labels.get(rounded as usize).map(String::as_str)
    }
}

/// The two bars of the secondary min/max chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRange {
    pub min: f64,
    pub max: f64,
}

/// Everything the window draws, derived from state alone.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub kpi_lines: Vec<KpiLine>,
    /// `None` until the first historic series arrives; the plot frame is still drawn.
    pub line: Option<LineSeries>,
    /// `None` unless both secondary bounds are present.
    pub bars: Option<BarRange>,
    pub selection: Selection,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let text = |value: &Option<KpiValue>| {
            value
                .as_ref()
                .map(|v| v.as_str().to_string())
                .unwrap_or_default()
        };

        let kpis = &state.kpis;
        let kpi_lines = vec![
            KpiLine {
                field: KpiField::CurrentPrice,
                value: state.current_price.clone().unwrap_or_default(),
            },
            KpiLine {
                field: KpiField::AveragePrice,
                value: text(&kpis.avg_price),
            },
            KpiLine {
                field: KpiField::MaxPrice,
                value: text(&kpis.max_price),
            },
            KpiLine {
                field: KpiField::MinPrice,
                value: text(&kpis.min_price),
            },
            KpiLine {
                field: KpiField::Volatility,
                value: text(&kpis.volatility),
            },
        ];

        let bars = kpis.secondary_range().map(|(min, max)| BarRange {
            min: min.as_f64().unwrap_or(f64::NAN),
            max: max.as_f64().unwrap_or(f64::NAN),
        });

        Self {
            kpi_lines,
            line: state.historic.as_ref().map(LineSeries::from_series),
            bars,
            selection: state.selection,
        }
    }
}
