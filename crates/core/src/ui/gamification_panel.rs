//! Points, level progress and badge cards

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::{
    level_for_points, points_to_next_level, progress_percent, weekly_progress_percent,
    BadgeDefinition, BadgeTier, UserGameStats, WEEKLY_BOOKING_GOAL,
};
use super::{skeleton_rows, tone_bg, tone_fg};

const GRID_ACCENTS: [Color32; 4] = [
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(16, 185, 129),
    Color32::from_rgb(234, 179, 8),
    Color32::from_rgb(168, 85, 247),
];

/// Render the gamification block for a player
pub fn render_gamification_stats(ui: &mut Ui, stats: Option<&UserGameStats>, loading: bool) {
    if loading {
        ui.columns(4, |cols| {
            for col in cols {
                skeleton_rows(col, 2, 18.0);
            }
        });
        return;
    }

    let Some(stats) = stats else {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(regular::TROPHY).size(48.0).color(Color32::GRAY));
            ui.label("No gamification stats available yet.");
            ui.label(RichText::new("Start booking to see your progress!").small().color(Color32::GRAY));
            ui.add_space(16.0);
        });
        return;
    };

    render_level_header(ui, stats.points);
    ui.add_space(12.0);
    render_stats_grid(ui, stats);

    if let Some(weekly) = stats.weekly_bookings {
        ui.add_space(12.0);
        render_weekly_progress(ui, weekly);
    }
}

fn render_level_header(ui: &mut Ui, points: u32) {
    let level = level_for_points(points);
    egui::Frame::new()
        .fill(Color32::from_rgb(79, 70, 229))
        .corner_radius(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Level {}", level.number)).heading().color(Color32::WHITE));
                    ui.label(RichText::new(level.name).color(tone_bg(level.tone)));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(points.to_string()).heading().strong().color(Color32::WHITE));
                        ui.label(RichText::new("Points").small().color(Color32::WHITE));
                    });
                });
            });
            ui.add(
                egui::ProgressBar::new(progress_percent(points) / 100.0)
                    .fill(Color32::WHITE)
                    .desired_height(10.0),
            );
            let remaining = points_to_next_level(points).max(0);
            ui.label(RichText::new(format!("{} points to next level", remaining)).small().color(Color32::WHITE));
        });
}

fn stat_card(ui: &mut Ui, accent: Color32, icon: &str, title: &str, value: u32) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).small().color(Color32::GRAY));
                    ui.label(RichText::new(value.to_string()).heading().strong());
                });
                ui.label(RichText::new(icon).size(28.0).color(accent));
            });
        });
}

fn render_stats_grid(ui: &mut Ui, stats: &UserGameStats) {
    let level = level_for_points(stats.points);
    let cards = [
        (regular::LIGHTNING, "Total Points", stats.points),
        (regular::TREND_UP, "Current Level", u32::from(level.number)),
        (regular::TROPHY, "Badges Earned", stats.badges_earned),
        (regular::STAR, "Achievements", stats.total_achievements),
    ];
    ui.columns(cards.len(), |cols| {
        for (i, (col, (icon, title, value))) in cols.iter_mut().zip(cards).enumerate() {
            stat_card(col, GRID_ACCENTS[i], icon, title, value);
        }
    });
}

fn render_weekly_progress(ui: &mut Ui, weekly: u32) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{} This Week's Progress", regular::TREND_UP)).strong());
            ui.horizontal(|ui| {
                ui.label("Bookings this week");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}/{}", weekly, WEEKLY_BOOKING_GOAL)).strong());
                });
            });
            ui.add(
                egui::ProgressBar::new(weekly_progress_percent(weekly) / 100.0)
                    .fill(GRID_ACCENTS[0])
                    .desired_height(6.0),
            );
            if weekly >= WEEKLY_BOOKING_GOAL {
                ui.label(RichText::new(format!("{} Weekly Warrior badge earned!", regular::CONFETTI)).color(GRID_ACCENTS[1]));
            }
        });
}

// ============================================================================
// Badges
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn icon_size(&self) -> f32 {
        match self {
            BadgeSize::Small => 24.0,
            BadgeSize::Medium => 32.0,
            BadgeSize::Large => 40.0,
        }
    }
}

/// Icon picked from keywords in the badge name
pub fn badge_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
    if has(&["first", "timer"]) {
        regular::STAR
    } else if has(&["weekly", "warrior"]) {
        regular::TARGET
    } else if has(&["regular", "player"]) {
        regular::TROPHY
    } else if has(&["sports", "enthusiast"]) {
        regular::LIGHTNING
    } else if has(&["spender", "big"]) {
        regular::CROWN
    } else if has(&["monthly", "champion"]) {
        regular::MEDAL
    } else if has(&["business", "entrepreneur"]) {
        regular::TARGET
    } else if has(&["popular", "venue"]) {
        regular::STAR
    } else if has(&["revenue", "milestone"]) {
        regular::CROWN
    } else {
        regular::TROPHY
    }
}

/// Badge card; unearned badges render greyed out
pub fn render_badge(ui: &mut Ui, badge: &BadgeDefinition, earned: bool, size: BadgeSize) {
    render_badge_parts(ui, badge.name, badge.description, Some(badge.tier), earned, size);
}

pub fn render_badge_parts(
    ui: &mut Ui,
    name: &str,
    description: &str,
    tier: Option<BadgeTier>,
    earned: bool,
    size: BadgeSize,
) {
    let (fg, bg) = match (earned, tier) {
        (false, _) => (Color32::GRAY, ui.visuals().faint_bg_color),
        (true, Some(tier)) => (tone_fg(tier.tone()), tone_bg(tier.tone())),
        (true, None) => (tone_fg(crate::Tone::Info), tone_bg(crate::Tone::Info)),
    };

    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(2.0, fg))
        .corner_radius(10.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(140.0);
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(badge_icon(name)).size(size.icon_size()).color(fg));
                    if earned {
                        ui.label(RichText::new(regular::CHECK_CIRCLE).color(Color32::from_rgb(34, 197, 94)));
                    }
                });
                ui.label(RichText::new(name).strong().color(fg));
                ui.label(RichText::new(description).small().color(fg));
            });
        });
}
