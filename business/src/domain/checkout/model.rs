use serde::{Deserialize, Serialize};

use super::errors::CheckoutError;
use crate::domain::order::model::{OrderId, PaymentMethod, PaymentSummary, ShippingInfo};

/// Wizard stages, visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
    Confirmation,
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::Shipping => write!(f, "shipping"),
            CheckoutStep::Payment => write!(f, "payment"),
            CheckoutStep::Review => write!(f, "review"),
            CheckoutStep::Confirmation => write!(f, "confirmation"),
        }
    }
}

/// Card fields as typed by the buyer. Only checked for presence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInfo {
    Card(CardDetails),
    Cash,
}

impl PaymentInfo {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentInfo::Card(_) => PaymentMethod::Card,
            PaymentInfo::Cash => PaymentMethod::Cash,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            PaymentInfo::Cash => Vec::new(),
            PaymentInfo::Card(card) => [
                ("card_number", &card.card_number),
                ("card_name", &card.card_name),
                ("expiry", &card.expiry),
                ("cvv", &card.cvv),
            ]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect(),
        }
    }

    pub fn summary(&self) -> PaymentSummary {
        match self {
            PaymentInfo::Card(card) => PaymentSummary::card(&card.card_number),
            PaymentInfo::Cash => PaymentSummary::cash(),
        }
    }
}

/// In-progress checkout for one browsing session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: Option<ShippingInfo>,
    payment: Option<PaymentInfo>,
    order_id: Option<OrderId>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping: None,
            payment: None,
            order_id: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentInfo> {
        self.payment.as_ref()
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Shipping -> Payment. Blank required fields keep the flow where it is.
    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<CheckoutStep, CheckoutError> {
        self.expect_step(CheckoutStep::Shipping, CheckoutStep::Payment)?;

        let missing = info.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::ShippingIncomplete {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        self.shipping = Some(info);
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Payment -> Review. Cash needs no extra fields.
    pub fn submit_payment(&mut self, info: PaymentInfo) -> Result<CheckoutStep, CheckoutError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Review)?;

        let missing = info.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::PaymentIncomplete {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        self.payment = Some(info);
        self.step = CheckoutStep::Review;
        Ok(self.step)
    }

    /// Back to Shipping from Payment or Review, keeping entered data.
    pub fn edit_shipping(&mut self) -> Result<CheckoutStep, CheckoutError> {
        match self.step {
            CheckoutStep::Payment | CheckoutStep::Review => {
                self.step = CheckoutStep::Shipping;
                Ok(self.step)
            }
            from => Err(CheckoutError::InvalidTransition {
                from,
                to: CheckoutStep::Shipping,
            }),
        }
    }

    /// Back to Payment from Review, keeping entered data.
    pub fn edit_payment(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.expect_step(CheckoutStep::Review, CheckoutStep::Payment)?;
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Data needed to place the order; only available in Review.
    pub fn ready_for_submission(&self) -> Result<(ShippingInfo, PaymentInfo), CheckoutError> {
        self.expect_step(CheckoutStep::Review, CheckoutStep::Confirmation)?;

        match (&self.shipping, &self.payment) {
            (Some(shipping), Some(payment)) => Ok((shipping.clone(), payment.clone())),
            _ => Err(CheckoutError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::Confirmation,
            }),
        }
    }

    /// Review -> Confirmation. Card details are dropped once the order exists.
    pub fn confirm(&mut self, order_id: OrderId) -> Result<CheckoutStep, CheckoutError> {
        self.expect_step(CheckoutStep::Review, CheckoutStep::Confirmation)?;
        self.order_id = Some(order_id);
        if let Some(PaymentInfo::Card(card)) = &mut self.payment {
            let last4 = PaymentSummary::card(&card.card_number)
                .card_last4
                .unwrap_or_default();
            *card = CardDetails {
                card_number: last4,
                ..CardDetails::default()
            };
        }
        self.step = CheckoutStep::Confirmation;
        Ok(self.step)
    }

    fn expect_step(&self, expected: CheckoutStep, to: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step != expected {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                to,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            full_name: "Omar Khalid".to_string(),
            phone: "0551234567".to_string(),
            address: "Building 4, King Fahd Road".to_string(),
            city: "Riyadh".to_string(),
            postal_code: Some("12271".to_string()),
            notes: None,
        }
    }

    fn card() -> PaymentInfo {
        PaymentInfo::Card(CardDetails {
            card_number: "4242424242424242".to_string(),
            card_name: "OMAR KHALID".to_string(),
            expiry: "12/29".to_string(),
            cvv: "123".to_string(),
        })
    }

    fn flow_in_review() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        flow.submit_shipping(shipping()).unwrap();
        flow.submit_payment(card()).unwrap();
        flow
    }

    #[test]
    fn should_start_at_shipping() {
        assert_eq!(CheckoutFlow::new().step(), CheckoutStep::Shipping);
    }

    #[test]
    fn should_advance_to_payment_when_shipping_complete() {
        let mut flow = CheckoutFlow::new();

        let step = flow.submit_shipping(shipping()).unwrap();

        assert_eq!(step, CheckoutStep::Payment);
        assert_eq!(flow.shipping(), Some(&shipping()));
    }

    #[test]
    fn should_stay_at_shipping_when_any_required_field_blank() {
        for field in ["full_name", "phone", "address", "city"] {
            let mut info = shipping();
            match field {
                "full_name" => info.full_name = String::new(),
                "phone" => info.phone = " ".to_string(),
                "address" => info.address = String::new(),
                _ => info.city = String::new(),
            }
            let mut flow = CheckoutFlow::new();

            let result = flow.submit_shipping(info);

            match result.unwrap_err() {
                CheckoutError::ShippingIncomplete { missing } => {
                    assert_eq!(missing, vec![field.to_string()])
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(flow.step(), CheckoutStep::Shipping);
            assert!(flow.shipping().is_none());
        }
    }

    #[test]
    fn should_require_all_card_fields() {
        let mut flow = CheckoutFlow::new();
        flow.submit_shipping(shipping()).unwrap();

        let result = flow.submit_payment(PaymentInfo::Card(CardDetails {
            card_number: "4242".to_string(),
            ..CardDetails::default()
        }));

        match result.unwrap_err() {
            CheckoutError::PaymentIncomplete { missing } => {
                assert_eq!(missing, vec!["card_name", "expiry", "cvv"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn should_accept_card_without_format_checks() {
        let mut flow = CheckoutFlow::new();
        flow.submit_shipping(shipping()).unwrap();

        let step = flow
            .submit_payment(PaymentInfo::Card(CardDetails {
                card_number: "not a number".to_string(),
                card_name: "x".to_string(),
                expiry: "whenever".to_string(),
                cvv: "?".to_string(),
            }))
            .unwrap();

        assert_eq!(step, CheckoutStep::Review);
    }

    #[test]
    fn should_accept_cash_without_extra_fields() {
        let mut flow = CheckoutFlow::new();
        flow.submit_shipping(shipping()).unwrap();

        assert_eq!(
            flow.submit_payment(PaymentInfo::Cash).unwrap(),
            CheckoutStep::Review
        );
    }

    #[test]
    fn should_not_skip_shipping() {
        let mut flow = CheckoutFlow::new();

        let result = flow.submit_payment(PaymentInfo::Cash);

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::InvalidTransition {
                from: CheckoutStep::Shipping,
                to: CheckoutStep::Review
            }
        ));
    }

    #[test]
    fn should_keep_data_when_editing_from_review() {
        let mut flow = flow_in_review();

        flow.edit_shipping().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping(), Some(&shipping()));
        assert_eq!(flow.payment(), Some(&card()));

        flow.submit_shipping(shipping()).unwrap();
        flow.submit_payment(card()).unwrap();
        flow.edit_payment().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Payment);
        assert_eq!(flow.payment(), Some(&card()));
    }

    #[test]
    fn should_reject_edit_payment_outside_review() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.edit_payment().is_err());
        assert!(flow.edit_shipping().is_err());
    }

    #[test]
    fn should_only_be_ready_for_submission_in_review() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.ready_for_submission().is_err());

        flow.submit_shipping(shipping()).unwrap();
        assert!(flow.ready_for_submission().is_err());

        flow.submit_payment(PaymentInfo::Cash).unwrap();
        let (ship, pay) = flow.ready_for_submission().unwrap();
        assert_eq!(ship, shipping());
        assert_eq!(pay, PaymentInfo::Cash);
    }

    #[test]
    fn should_be_terminal_after_confirmation() {
        let mut flow = flow_in_review();

        flow.confirm(OrderId::new("ED-77-2026")).unwrap();

        assert_eq!(flow.step(), CheckoutStep::Confirmation);
        assert_eq!(flow.order_id().map(OrderId::as_str), Some("ED-77-2026"));
        assert!(flow.edit_shipping().is_err());
        assert!(flow.edit_payment().is_err());
        assert!(flow.submit_shipping(shipping()).is_err());
        assert!(flow.confirm(OrderId::new("ED-78-2026")).is_err());
    }

    #[test]
    fn should_drop_card_secrets_on_confirmation() {
        let mut flow = flow_in_review();

        flow.confirm(OrderId::new("ED-1-2026")).unwrap();

        match flow.payment() {
            Some(PaymentInfo::Card(card)) => {
                assert_eq!(card.card_number, "4242");
                assert!(card.cvv.is_empty());
                assert!(card.expiry.is_empty());
            }
            other => panic!("unexpected payment: {other:?}"),
        }
    }
}
