//! Role-based dashboard - shared between desktop and WASM
//!
//! Renders the player, owner or admin view for the signed-in identity and
//! owns the facility modal and checkout window state.

use chrono::Utc;
use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;
use tracing::{debug, info};

use crate::{
    badges_for, booking_status_tone, format_rupees, status_label, BadgeKind, BookingSummary,
    BoxDetails, BoxStatus, CheckoutForm, DashboardData, PaymentProcessor, Role, Standing, Tone,
    UserIdentity,
};
use super::{
    pill, render_badge, render_booking_activity, render_box_modal, render_checkout_form,
    render_gamification_stats, render_monthly_spending, render_peak_hours, render_revenue_trend,
    render_sport_distribution, status_icon, BadgeSize, BoxModalState, ChartConfig, CheckoutEvent,
};

const DEFAULT_SLOT: &str = "18:00 - 19:00";

pub struct Dashboard {
    data: Option<DashboardData>,
    chart_config: ChartConfig,
    modal: BoxModalState,
    modal_open: bool,
    selected_box: Option<i64>,
    checkout: Option<CheckoutForm>,
    processor: Box<dyn PaymentProcessor>,
    notice: Option<(Tone, String)>,
    // derived for the last rendered role
    standing: Option<(Role, Option<Standing>)>,
}

/// Click on a listing row, applied after the frame's rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxAction {
    View(i64),
    Book(i64),
}

impl Dashboard {
    pub fn new(api_base_url: impl Into<String>, chart_config: ChartConfig, processor: Box<dyn PaymentProcessor>) -> Self {
        Self {
            data: None,
            chart_config,
            modal: BoxModalState::new(api_base_url),
            modal_open: false,
            selected_box: None,
            checkout: None,
            processor,
            notice: None,
            standing: None,
        }
    }

    pub fn set_data(&mut self, data: DashboardData) {
        self.data = Some(data);
        self.standing = None;
    }

    pub fn is_loading(&self) -> bool {
        self.data.is_none()
    }

    /// Drop per-account UI state, e.g. on logout
    pub fn reset(&mut self) {
        self.modal_open = false;
        self.selected_box = None;
        self.checkout = None;
        self.notice = None;
        self.standing = None;
    }

    fn open_box(&mut self, id: i64) {
        self.selected_box = Some(id);
        self.modal_open = true;
    }

    fn start_checkout(&mut self, box_id: i64, user: &UserIdentity) {
        let Some(b) = self.data.as_ref().and_then(|d| d.find_box(box_id)) else {
            return;
        };
        let summary = BookingSummary {
            box_name: b.name.clone(),
            date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            time: DEFAULT_SLOT.to_string(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
        };
        self.checkout = Some(CheckoutForm::new(b.price, summary));
        self.notice = None;
    }

    /// Render the dashboard for `user` into the central area
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut Ui, user: &UserIdentity) {
        ui.heading(user.role.dashboard_title());
        ui.label(RichText::new(format!("Welcome back, {}", user.name)).color(Color32::GRAY));
        if let Some((tone, text)) = &self.notice {
            pill(ui, *tone, text.as_str());
        }
        ui.separator();

        self.refresh_standing(user.role);
        let config = self.chart_config;
        let standing = self.standing.as_ref().and_then(|(_, s)| s.as_ref());
        let action = egui::ScrollArea::vertical()
            .show(ui, |ui| match self.data.as_ref() {
                None => {
                    loading_block(ui);
                    None
                }
                Some(data) => match user.role {
                    Role::User => render_player(ui, data, standing, &config),
                    Role::Owner => render_owner(ui, data, standing, &config),
                    Role::Admin => render_admin(ui, data),
                },
            })
            .inner;

        match action {
            Some(BoxAction::View(id)) => self.open_box(id),
            Some(BoxAction::Book(id)) => self.start_checkout(id, user),
            None => {}
        }

        let selected = self
            .selected_box
            .and_then(|id| self.data.as_ref().and_then(|d| d.find_box(id)));
        render_box_modal(ctx, &mut self.modal_open, selected, &mut self.modal);

        self.render_checkout_window(ctx);
    }

    /// Recompute badges and points when the data or the role changed
    fn refresh_standing(&mut self, role: Role) {
        if matches!(&self.standing, Some((cached, _)) if *cached == role) {
            return;
        }
        let Some(data) = self.data.as_ref() else {
            return;
        };
        let standing = data.standing(role, Utc::now().date_naive());
        if let Some(s) = &standing {
            debug!(?role, points = s.stats.points, badges = s.stats.badges_earned, "standing derived");
        }
        self.standing = Some((role, standing));
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    fn render_checkout_window(&mut self, ctx: &egui::Context) {
        let Some(form) = self.checkout.as_mut() else {
            return;
        };

        let mut open = true;
        let mut event = None;
        egui::Window::new(format!("{} Complete Payment", regular::CREDIT_CARD))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(420.0)
            .show(ctx, |ui| {
                event = render_checkout_form(ui, form, self.processor.as_mut());
            });

        match event {
            Some(CheckoutEvent::Paid(confirmation)) => {
                info!(payment_method_id = %confirmation.payment_method_id, "booking paid");
                self.notice = Some((Tone::Success, format!("Paid {}", format_rupees(confirmation.amount))));
            }
            Some(CheckoutEvent::Failed(message)) => {
                self.notice = Some((Tone::Danger, message));
            }
            None => {}
        }

        if !open {
            self.checkout = None;
        }
    }
}

// ============================================================================
// Player
// ============================================================================

fn render_player(ui: &mut Ui, data: &DashboardData, standing: Option<&Standing>, config: &ChartConfig) -> Option<BoxAction> {
    render_gamification_stats(ui, standing.map(|s| &s.stats), false);
    ui.add_space(12.0);
    render_badge_row(ui, standing, BadgeKind::User);
    ui.add_space(12.0);

    let analytics = &data.user_analytics;
    ui.columns(2, |cols| {
        render_monthly_spending(&mut cols[0], &analytics.monthly_spending_series(), false, config);
        render_sport_distribution(&mut cols[1], &analytics.sport_distribution_series(), false, config);
    });
    ui.add_space(12.0);
    ui.columns(2, |cols| {
        render_booking_activity(&mut cols[0], &analytics.activity_series(), false, config);
        render_peak_hours(&mut cols[1], &analytics.peak_hours_series(), false, config);
    });
    ui.add_space(12.0);

    ui.heading(format!("{} Recent Bookings", regular::CLOCK_COUNTER_CLOCKWISE));
    ui.separator();
    if data.bookings.is_empty() {
        ui.label(RichText::new("No bookings yet.").color(Color32::GRAY));
    } else {
        egui::Grid::new("recent_bookings").num_columns(5).striped(true).spacing([16.0, 6.0]).show(ui, |ui| {
            for booking in &data.bookings {
                ui.label(RichText::new(&booking.box_name).strong());
                ui.label(booking.date.format("%d %b %Y").to_string());
                ui.label(format!("{} - {}", booking.start_time, booking.end_time));
                ui.label(format_rupees(booking.total_amount));
                pill(ui, booking_status_tone(&booking.booking_status), booking.booking_status.as_str());
                ui.end_row();
            }
        });
    }
    ui.add_space(12.0);

    ui.heading(format!("{} Book a Box", regular::MAGNIFYING_GLASS));
    ui.separator();
    let mut action = None;
    for b in data.boxes.iter().filter(|b| BoxStatus::parse(&b.status) == BoxStatus::Approved) {
        action = box_row(ui, b, true).or(action);
    }
    action
}

// ============================================================================
// Owner
// ============================================================================

fn render_owner(ui: &mut Ui, data: &DashboardData, standing: Option<&Standing>, config: &ChartConfig) -> Option<BoxAction> {
    let analytics = &data.owner_analytics;

    ui.columns(5, |cols| {
        summary_card(&mut cols[0], regular::CURRENCY_INR, "Total Revenue", format_rupees(analytics.total_revenue));
        summary_card(&mut cols[1], regular::CALENDAR_CHECK, "Total Bookings", analytics.total_bookings.to_string());
        summary_card(&mut cols[2], regular::CHECK_CIRCLE, "Active Boxes", analytics.active_boxes_count.to_string());
        summary_card(&mut cols[3], regular::CLOCK, "Pending", analytics.pending_boxes_count.to_string());
        summary_card(&mut cols[4], regular::X_CIRCLE, "Rejected", analytics.rejected_boxes_count.to_string());
    });
    ui.add_space(12.0);

    render_gamification_stats(ui, standing.map(|s| &s.stats), false);
    ui.add_space(12.0);

    ui.columns(2, |cols| {
        render_revenue_trend(&mut cols[0], &analytics.revenue_series(), false, config);
        render_booking_activity(&mut cols[1], &analytics.bookings_series(), false, config);
    });
    ui.add_space(12.0);
    render_sport_distribution(ui, &analytics.sports_series(), false, config);
    ui.add_space(12.0);

    render_badge_row(ui, standing, BadgeKind::Owner);
    ui.add_space(12.0);

    ui.heading(format!("{} My Boxes", regular::BUILDINGS));
    ui.separator();
    let mut action = None;
    for b in &data.boxes {
        action = box_row(ui, b, false).or(action);
    }
    action
}

// ============================================================================
// Admin
// ============================================================================

fn render_admin(ui: &mut Ui, data: &DashboardData) -> Option<BoxAction> {
    let count = |status: BoxStatus| data.boxes.iter().filter(|b| BoxStatus::parse(&b.status) == status).count();
    ui.columns(3, |cols| {
        summary_card(&mut cols[0], regular::CHECK_CIRCLE, "Approved", count(BoxStatus::Approved).to_string());
        summary_card(&mut cols[1], regular::CLOCK, "Awaiting Review", count(BoxStatus::Pending).to_string());
        summary_card(&mut cols[2], regular::X_CIRCLE, "Rejected", count(BoxStatus::Rejected).to_string());
    });
    ui.add_space(12.0);

    ui.heading(format!("{} All Listings", regular::LIST_CHECKS));
    ui.separator();
    let mut action = None;
    for b in &data.boxes {
        action = box_row(ui, b, false).or(action);
    }
    action
}

// ============================================================================
// Widgets
// ============================================================================

fn loading_block(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.spinner();
        ui.label(RichText::new("Loading dashboard...").color(Color32::GRAY));
    });
}

fn summary_card(ui: &mut Ui, icon: &str, title: &str, value: String) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{} {}", icon, title)).small().color(Color32::GRAY));
            ui.label(RichText::new(value).heading().strong());
        });
}

fn render_badge_row(ui: &mut Ui, standing: Option<&Standing>, kind: BadgeKind) {
    ui.heading(format!("{} Badges", regular::MEDAL));
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        for badge in badges_for(kind) {
            let earned = standing.is_some_and(|s| s.has_badge(badge.name));
            render_badge(ui, badge, earned, BadgeSize::Small);
        }
    });
}

/// One listing row with View (and Book when `bookable`) buttons
fn box_row(ui: &mut Ui, b: &BoxDetails, bookable: bool) -> Option<BoxAction> {
    let mut action = None;
    let status = BoxStatus::parse(&b.status);
    ui.horizontal(|ui| {
        ui.label(RichText::new(&b.name).strong());
        ui.label(RichText::new(format!("{} {}", regular::MAP_PIN, b.location)).color(Color32::GRAY));
        ui.label(format!("{}/hr", format_rupees(b.price)));
        pill(ui, status.tone(), format!("{} {}", status_icon(status.icon()), status_label(&b.status)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if bookable && ui.button(format!("{} Book", regular::CALENDAR_PLUS)).clicked() {
                action = Some(BoxAction::Book(b.id));
            }
            if ui.button(format!("{} View", regular::EYE)).clicked() {
                action = Some(BoxAction::View(b.id));
            }
        });
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Authenticator, Credentials, DemoAuthenticator, DemoPaymentProcessor};

    fn dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new("http://localhost:8000", ChartConfig::desktop(), Box::new(DemoPaymentProcessor::default()));
        let data = DashboardData::from_json(include_str!("../../../../assets/demo_data.json")).unwrap();
        dashboard.set_data(data);
        dashboard
    }

    fn player() -> UserIdentity {
        let auth = DemoAuthenticator::new();
        let demo = &auth.demo_credentials()[0];
        auth.authenticate(&Credentials { email: demo.email.into(), password: demo.password.into() }).unwrap()
    }

    #[test]
    fn standing_follows_the_rendered_role() {
        let mut dashboard = dashboard();
        dashboard.refresh_standing(Role::User);
        assert!(matches!(&dashboard.standing, Some((Role::User, Some(_)))));

        dashboard.refresh_standing(Role::Admin);
        assert!(matches!(&dashboard.standing, Some((Role::Admin, None))));

        dashboard.reset();
        assert!(dashboard.standing.is_none());
    }

    #[test]
    fn book_action_opens_checkout_for_that_box() {
        let mut dashboard = dashboard();
        let id = dashboard.data.as_ref().unwrap().boxes[0].id;
        dashboard.start_checkout(id, &player());
        assert!(dashboard.checkout.is_some());

        dashboard.checkout = None;
        dashboard.start_checkout(-1, &player());
        assert!(dashboard.checkout.is_none());
    }
}
