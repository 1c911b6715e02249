//! Dashboard charts - shared between desktop and WASM
//!
//! Renders: revenue trend, sport distribution, booking activity, peak hours,
//! monthly spending. Each chart takes a ready-made `ChartSeries`.

use egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use egui_phosphor::regular;

use crate::{format_rupees, peak_hour_color, sport_color, ChartSeries};
use super::{rgb, rgba, skeleton_rows};

const REVENUE_COLOR: [u8; 3] = [59, 130, 246];
const ACTIVITY_COLOR: [u8; 3] = [16, 185, 129];
const SPENDING_COLOR: [u8; 3] = [139, 92, 246];

/// Configuration for how charts should render
#[derive(Clone, Copy)]
pub struct ChartConfig {
    /// Fixed height for plots (None = use view_aspect)
    pub plot_height: Option<f32>,
    /// Whether to allow plot interaction (drag/zoom/scroll)
    pub allow_plot_interaction: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl ChartConfig {
    /// Config suitable for WASM (compact, no interaction)
    pub fn wasm() -> Self {
        Self {
            plot_height: Some(220.0),
            allow_plot_interaction: false,
        }
    }

    /// Config suitable for desktop (interactive, aspect-based sizing)
    pub fn desktop() -> Self {
        Self {
            plot_height: None,
            allow_plot_interaction: true,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Category axis: integer grid marks show the matching label
fn category_plot(id: &str, series: &ChartSeries, config: &ChartConfig, ui: &Ui) -> Plot<'static> {
    let labels = series.labels.clone();
    let mut plot = Plot::new(id.to_string())
        .auto_bounds(egui::Vec2b::new(true, true))
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        });

    if let Some(height) = config.plot_height {
        plot = plot.height(height).width(ui.available_width());
    } else {
        plot = plot.view_aspect(2.0);
    }

    if !config.allow_plot_interaction {
        plot = plot
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false);
    }

    plot
}

fn line_points(series: &ChartSeries) -> PlotPoints<'static> {
    if series.is_empty() {
        return PlotPoints::default();
    }
    series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect()
}

fn loading_placeholder(ui: &mut Ui, config: &ChartConfig) {
    let height = config.plot_height.unwrap_or(ui.available_width() / 2.0);
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(height / 2.0 - 12.0);
            ui.spinner();
        });
    });
}

fn empty_note(ui: &mut Ui, series: &ChartSeries, text: &str) {
    if series.is_empty() {
        ui.label(RichText::new(text).color(Color32::GRAY));
    }
}

// ============================================================================
// Charts
// ============================================================================

/// Filled line of revenue per period
pub fn render_revenue_trend(ui: &mut Ui, series: &ChartSeries, loading: bool, config: &ChartConfig) {
    ui.heading(format!("{} Revenue Trend", regular::TREND_UP));
    ui.separator();

    if loading {
        skeleton_rows(ui, 2, 16.0);
        return;
    }

    let line = Line::new("Revenue (₹)", line_points(series))
        .color(rgb(REVENUE_COLOR))
        .width(3.0)
        .fill(0.0);

    category_plot("revenue_trend", series, config, ui)
        .y_axis_formatter(|mark, _range| format_rupees(mark.value))
        .label_formatter(|_name, point| format!("Revenue: {}", format_rupees(point.y)))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });

    empty_note(ui, series, "No revenue recorded yet.");
}

/// Share of bookings per sport, with `Sport (xx.x%)` legend entries
pub fn render_sport_distribution(ui: &mut Ui, series: &ChartSeries, loading: bool, config: &ChartConfig) {
    ui.heading(format!("{} Sport Distribution", regular::SOCCER_BALL));
    ui.separator();

    if loading {
        loading_placeholder(ui, config);
        return;
    }

    let shares = series.shares();
    let legend = series.share_labels();
    let bars: Vec<Bar> = series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, value)
                .width(0.7)
                .fill(rgb(sport_color(label)))
                .name(legend.get(i).cloned().unwrap_or_else(|| label.to_string()))
        })
        .collect();
    let chart = BarChart::new("Sports", bars)
        .element_formatter(Box::new(move |bar, _chart| {
            let share = shares.get(bar.argument.round() as usize).copied().unwrap_or(0.0);
            format!("{}: {} ({:.1}%)", bar.name, bar.value, share)
        }));

    category_plot("sport_distribution", series, config, ui)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });

    if series.is_empty() {
        empty_note(ui, series, "No sports played yet.");
    } else {
        ui.horizontal_wrapped(|ui| {
            for (label, text) in series.labels.iter().zip(&legend) {
                ui.label(RichText::new(format!("{} {}", regular::CIRCLE, text)).color(rgb(sport_color(label))));
            }
        });
    }
}

/// Hours played per weekday; bar opacity follows the busiest day
pub fn render_booking_activity(ui: &mut Ui, series: &ChartSeries, loading: bool, config: &ChartConfig) {
    ui.heading(format!("{} Booking Activity", regular::CALENDAR));
    ui.separator();

    if loading {
        skeleton_rows(ui, 7, 12.0);
        return;
    }

    let intensities = series.intensities();
    let bars: Vec<Bar> = series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, value)
                .width(0.6)
                .fill(rgba(ACTIVITY_COLOR, intensities[i]))
                .stroke(egui::Stroke::new(2.0, rgb(ACTIVITY_COLOR)))
                .name(label)
        })
        .collect();
    let chart = BarChart::new("Hours Played", bars)
        .element_formatter(Box::new(|bar, _chart| format!("{} hours played", bar.value)));

    category_plot("booking_activity", series, config, ui)
        .y_axis_formatter(|mark, _range| format!("{}h", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });

    empty_note(ui, series, "No bookings this week.");
}

/// Booking percentage per time slot
pub fn render_peak_hours(ui: &mut Ui, series: &ChartSeries, loading: bool, config: &ChartConfig) {
    ui.heading(format!("{} Peak Hours", regular::CLOCK));
    ui.separator();

    if loading {
        loading_placeholder(ui, config);
        return;
    }

    let bars: Vec<Bar> = series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            let color = peak_hour_color(i);
            Bar::new(i as f64, value)
                .width(0.7)
                .fill(rgba(color, 0.7))
                .stroke(egui::Stroke::new(2.0, rgb(color)))
                .name(format!("{}: {:.1}%", label, value))
        })
        .collect();
    let chart = BarChart::new("Booking Percentage", bars)
        .element_formatter(Box::new(|bar, _chart| bar.name.clone()));

    category_plot("peak_hours", series, config, ui)
        .legend(Legend::default().position(egui_plot::Corner::RightTop))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });

    empty_note(ui, series, "No peak hour data yet.");
}

/// Filled line of monthly spend
pub fn render_monthly_spending(ui: &mut Ui, series: &ChartSeries, loading: bool, config: &ChartConfig) {
    ui.heading(format!("{} Monthly Spending", regular::WALLET));
    ui.separator();

    if loading {
        skeleton_rows(ui, 6, 20.0);
        return;
    }

    let line = Line::new("Monthly Spending", line_points(series))
        .color(rgb(SPENDING_COLOR))
        .width(3.0)
        .fill(0.0);

    category_plot("monthly_spending", series, config, ui)
        .y_axis_formatter(|mark, _range| format_rupees(mark.value))
        .label_formatter(|_name, point| format!("Spent: {}", format_rupees(point.y)))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });

    empty_note(ui, series, "No spending recorded yet.");
}
