//! Checkout against a hosted payment processor
//!
//! The processor owns card entry. This side only sees billing details going
//! out and a payment-method id (or an error string) coming back.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{BookMyBoxError, Result};

/// Currency code sent with every confirmation
pub const CURRENCY: &str = "inr";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
}

/// What the form shows above the card field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingSummary {
    pub box_name: String,
    pub date: String,
    pub time: String,
    pub user_name: String,
    pub user_email: String,
}

impl BookingSummary {
    pub fn billing(&self) -> BillingDetails {
        BillingDetails {
            name: self.user_name.clone(),
            email: self.user_email.clone(),
        }
    }
}

/// Handed to the success callback once the processor accepts the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub payment_method_id: String,
    pub amount: f64,
    pub currency: String,
}

pub trait PaymentProcessor {
    /// Whether the hosted widget has finished loading
    fn is_ready(&self) -> bool {
        true
    }

    /// Tokenize the card the user entered in the processor's widget.
    /// Declines come back as `BookMyBoxError::Payment` carrying the
    /// processor's own message.
    fn create_payment_method(&mut self, billing: &BillingDetails) -> Result<String>;
}

/// Local processor that accepts every card
#[derive(Debug, Default)]
pub struct DemoPaymentProcessor {
    issued: u32,
}

impl PaymentProcessor for DemoPaymentProcessor {
    fn create_payment_method(&mut self, _billing: &BillingDetails) -> Result<String> {
        self.issued += 1;
        Ok(format!("pm_demo_{:04}", self.issued))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing,
    Succeeded(PaymentConfirmation),
}

/// Payment form state for one booking
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub amount: f64,
    pub summary: BookingSummary,
    state: CheckoutState,
}

impl CheckoutForm {
    pub fn new(amount: f64, summary: BookingSummary) -> Self {
        Self { amount, summary, state: CheckoutState::Idle }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, CheckoutState::Processing)
    }

    pub fn can_submit<P: PaymentProcessor + ?Sized>(&self, processor: &P) -> bool {
        processor.is_ready() && matches!(self.state, CheckoutState::Idle)
    }

    /// Run the processor and report through exactly one of the callbacks.
    /// Does nothing while the processor is loading or after a success.
    pub fn submit<P, F, E>(&mut self, processor: &mut P, on_success: F, on_error: E)
    where
        P: PaymentProcessor + ?Sized,
        F: FnOnce(&PaymentConfirmation),
        E: FnOnce(&str),
    {
        if !self.can_submit(&*processor) {
            return;
        }
        self.state = CheckoutState::Processing;

        match processor.create_payment_method(&self.summary.billing()) {
            Ok(payment_method_id) => {
                info!(%payment_method_id, amount = self.amount, "payment method created");
                let confirmation = PaymentConfirmation {
                    payment_method_id,
                    amount: self.amount,
                    currency: CURRENCY.to_string(),
                };
                on_success(&confirmation);
                self.state = CheckoutState::Succeeded(confirmation);
            }
            Err(e) => {
                warn!("payment method creation failed: {}", e);
                self.state = CheckoutState::Idle;
                // processor messages are shown as-is, other errors via Display
                let message = match e {
                    BookMyBoxError::Payment(message) => message,
                    other => other.to_string(),
                };
                on_error(&message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn create_payment_method(&mut self, _billing: &BillingDetails) -> Result<String> {
            Err(BookMyBoxError::Payment("Your card was declined.".to_string()))
        }
    }

    struct LoadingProcessor;

    impl PaymentProcessor for LoadingProcessor {
        fn is_ready(&self) -> bool {
            false
        }

        fn create_payment_method(&mut self, _billing: &BillingDetails) -> Result<String> {
            panic!("must not be called before the widget loads");
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm::new(
            1200.0,
            BookingSummary {
                box_name: "Turf Arena".into(),
                date: "2024-05-01".into(),
                time: "18:00 - 19:00".into(),
                user_name: "John Player".into(),
                user_email: "user@demo.com".into(),
            },
        )
    }

    #[test]
    fn success_reports_confirmation_once() {
        let mut form = form();
        let mut processor = DemoPaymentProcessor::default();
        let mut seen = None;
        form.submit(&mut processor, |c| seen = Some(c.clone()), |_| panic!("no error expected"));

        let confirmation = seen.unwrap();
        assert_eq!(confirmation.currency, "inr");
        assert_eq!(confirmation.amount, 1200.0);
        assert_eq!(form.state(), &CheckoutState::Succeeded(confirmation));

        // second submit is ignored
        form.submit(&mut processor, |_| panic!("already paid"), |_| panic!("already paid"));
    }

    #[test]
    fn processor_error_passes_through_verbatim() {
        let mut form = form();
        let mut message = String::new();
        form.submit(&mut DecliningProcessor, |_| panic!("no success expected"), |m| message = m.to_string());
        assert_eq!(message, "Your card was declined.");
        assert_eq!(form.state(), &CheckoutState::Idle);
    }

    #[test]
    fn not_ready_processor_blocks_submit() {
        let mut form = form();
        assert!(!form.can_submit(&LoadingProcessor));
        form.submit(&mut LoadingProcessor, |_| panic!(), |_| panic!());
        assert_eq!(form.state(), &CheckoutState::Idle);
    }

    struct OfflineProcessor;

    impl PaymentProcessor for OfflineProcessor {
        fn create_payment_method(&mut self, _billing: &BillingDetails) -> Result<String> {
            Err(BookMyBoxError::InvalidData("empty response".to_string()))
        }
    }

    #[test]
    fn non_processor_error_is_reported_with_context() {
        let mut form = form();
        let mut message = String::new();
        form.submit(&mut OfflineProcessor, |_| panic!("no success expected"), |m| message = m.to_string());
        assert_eq!(message, "Invalid data: empty response");
        assert!(form.can_submit(&OfflineProcessor));
    }
}
