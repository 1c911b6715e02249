//! Chart series shaping for the dashboards
//!
//! Everything here is plain data: label/value pairs, colours and formatted
//! strings. Plotting lives in `ui::charts`.

use serde::{Deserialize, Serialize};

use crate::{OwnerAnalytics, UserAnalytics};

/// Fallback slice colour for sports without a dedicated colour (#6B7280)
pub const DEFAULT_SPORT_COLOR: [u8; 3] = [107, 114, 128];

const SPORT_COLORS: &[(&str, [u8; 3])] = &[
    ("Cricket", [16, 185, 129]),
    ("Football", [59, 130, 246]),
    ("Tennis", [245, 158, 11]),
    ("Badminton", [239, 68, 68]),
    ("Basketball", [249, 115, 22]),
    ("Pickleball", [139, 92, 246]),
    ("Volleyball", [6, 182, 212]),
    ("Squash", [132, 204, 22]),
];

/// Peak-hour slice colours, reused cyclically
pub const PEAK_HOUR_PALETTE: [[u8; 3]; 5] = [
    [139, 92, 246],
    [59, 130, 246],
    [16, 185, 129],
    [245, 158, 11],
    [239, 68, 68],
];

/// Minimum bar opacity in the activity chart
pub const MIN_ACTIVITY_INTENSITY: f64 = 0.3;

/// Parallel label/value arrays fed to a single chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pairs up labels and values; extra entries on either side are dropped
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Each value as a percentage of the total, zero when the total is zero
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|v| if total > 0.0 { v / total * 100.0 } else { 0.0 })
            .collect()
    }

    /// Legend entries like `Cricket (40.0%)`
    pub fn share_labels(&self) -> Vec<String> {
        self.labels
            .iter()
            .zip(self.shares())
            .map(|(label, share)| format!("{} ({:.1}%)", label, share))
            .collect()
    }

    /// Bar opacity relative to the tallest bar, floored at `MIN_ACTIVITY_INTENSITY`
    pub fn intensities(&self) -> Vec<f64> {
        let max = self.max();
        self.values
            .iter()
            .map(|v| {
                let ratio = if max > 0.0 { v / max } else { 0.0 };
                ratio.max(MIN_ACTIVITY_INTENSITY)
            })
            .collect()
    }
}

pub fn sport_color(sport: &str) -> [u8; 3] {
    SPORT_COLORS
        .iter()
        .find(|(name, _)| *name == sport)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(DEFAULT_SPORT_COLOR)
}

pub fn peak_hour_color(index: usize) -> [u8; 3] {
    PEAK_HOUR_PALETTE[index % PEAK_HOUR_PALETTE.len()]
}

// ============================================================================
// Analytics → series
// ============================================================================

impl UserAnalytics {
    pub fn monthly_spending_series(&self) -> ChartSeries {
        let (labels, values) = self.monthly_spending.iter().map(|m| (m.month.clone(), m.total_spent)).unzip();
        ChartSeries::new(labels, values)
    }

    pub fn sport_distribution_series(&self) -> ChartSeries {
        let (labels, values) = self.sport_distribution.iter().map(|s| (s.sport.clone(), s.percentage)).unzip();
        ChartSeries::new(labels, values)
    }

    pub fn activity_series(&self) -> ChartSeries {
        let (labels, values) = self.activity_by_day.iter().map(|d| (d.day_of_week.clone(), d.total_hours)).unzip();
        ChartSeries::new(labels, values)
    }

    pub fn peak_hours_series(&self) -> ChartSeries {
        let (labels, values) = self.peak_booking_hours.iter().map(|p| (p.hour_range.clone(), p.percentage)).unzip();
        ChartSeries::new(labels, values)
    }
}

impl OwnerAnalytics {
    pub fn revenue_series(&self) -> ChartSeries {
        ChartSeries::new(self.revenue_chart_labels.clone(), self.revenue_chart_data.clone())
    }

    pub fn bookings_series(&self) -> ChartSeries {
        ChartSeries::new(self.bookings_chart_labels.clone(), self.bookings_chart_data.clone())
    }

    pub fn sports_series(&self) -> ChartSeries {
        let (labels, values) = self.sports_distribution.iter().map(|(k, v)| (k.clone(), *v)).unzip();
        ChartSeries::new(labels, values)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// `125000.0` → `₹125,000`; fractions are rounded away
pub fn format_rupees(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}
