//! Checkout form UI around a `PaymentProcessor`

use std::cell::Cell;

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::{format_rupees, CheckoutForm, CheckoutState, PaymentConfirmation, PaymentProcessor};

/// Outcome of a frame of the checkout form
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEvent {
    Paid(PaymentConfirmation),
    Failed(String),
}

/// Render the checkout form. The card field itself belongs to the processor,
/// which is why only a placeholder frame is drawn here.
pub fn render_checkout_form<P: PaymentProcessor + ?Sized>(
    ui: &mut Ui,
    form: &mut CheckoutForm,
    processor: &mut P,
) -> Option<CheckoutEvent> {
    if let CheckoutState::Succeeded(_) = form.state() {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(regular::CHECK_CIRCLE).size(64.0).color(Color32::from_rgb(34, 197, 94)));
            ui.heading("Payment Successful!");
            ui.label("Your booking has been confirmed.");
            ui.add_space(16.0);
        });
        return None;
    }

    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Booking Summary").strong());
            egui::Grid::new("booking_summary").num_columns(2).show(ui, |ui| {
                ui.label("Box:");
                ui.label(RichText::new(&form.summary.box_name).strong());
                ui.end_row();
                ui.label("Date:");
                ui.label(RichText::new(&form.summary.date).strong());
                ui.end_row();
                ui.label("Time:");
                ui.label(RichText::new(&form.summary.time).strong());
                ui.end_row();
                ui.label(RichText::new("Total:").strong());
                ui.label(RichText::new(format_rupees(form.amount)).strong().color(Color32::from_rgb(37, 99, 235)));
                ui.end_row();
            });
        });

    ui.add_space(8.0);
    ui.label(format!("{} Card Details", regular::CREDIT_CARD));
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, Color32::GRAY))
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let hint = if processor.is_ready() {
                "Card entry is handled by the payment provider"
            } else {
                "Loading payment provider..."
            };
            ui.label(RichText::new(hint).color(Color32::GRAY));
        });

    ui.horizontal(|ui| {
        ui.label(RichText::new(regular::LOCK).color(Color32::from_rgb(34, 197, 94)));
        ui.label(RichText::new("Your payment information is secure and encrypted").small());
    });

    ui.add_space(8.0);
    let label = if form.is_processing() {
        "Processing...".to_string()
    } else {
        format!("{} Pay {}", regular::LOCK, format_rupees(form.amount))
    };
    let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0));
    let event = Cell::new(None);
    if ui.add_enabled(form.can_submit(&*processor), button).clicked() {
        form.submit(
            processor,
            |confirmation| event.set(Some(CheckoutEvent::Paid(confirmation.clone()))),
            |message| event.set(Some(CheckoutEvent::Failed(message.to_string()))),
        );
    }

    ui.label(
        RichText::new("By completing this payment, you agree to our Terms of Service and Privacy Policy.")
            .small()
            .color(Color32::GRAY),
    );

    event.into_inner()
}
