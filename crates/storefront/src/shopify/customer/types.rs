//! Types for Shopify Customer Account API responses.

use chrono::{DateTime, Utc};
use flagpole_core::{AddressId, CustomerId, FinancialStatus, Money, OrderId};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Customer Types
// ─────────────────────────────────────────────────────────────────────────────

/// A Shopify customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The customer's unique ID.
    pub id: CustomerId,
    /// The customer's first name.
    pub first_name: Option<String>,
    /// The customer's last name.
    pub last_name: Option<String>,
    /// The customer's email address.
    pub email_address: Option<EmailAddress>,
    /// The customer's phone number.
    pub phone_number: Option<PhoneNumber>,
    /// The customer's default address.
    pub default_address: Option<Address>,
}

impl Customer {
    /// Get the customer's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }

    /// The customer's email, if one is on file.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email_address
            .as_ref()
            .map(|e| e.email_address.as_str())
    }
}

/// Wrapper Shopify uses for customer email addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub email_address: String,
}

/// Wrapper Shopify uses for customer phone numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    pub phone_number: String,
}

/// A customer address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The address ID.
    pub id: AddressId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    /// Province/state code.
    pub zone_code: Option<String>,
    /// ISO country code.
    pub territory_code: Option<String>,
    /// Postal/ZIP code.
    pub zip: Option<String>,
    pub phone_number: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Order Types
// ─────────────────────────────────────────────────────────────────────────────

/// A customer order summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The order ID.
    pub id: OrderId,
    /// Display name (e.g. `#1042`).
    pub name: String,
    /// When the order was processed.
    pub processed_at: DateTime<Utc>,
    /// Payment state.
    pub financial_status: Option<FinancialStatus>,
    /// Order total.
    pub total_price: Money,
}

// ─────────────────────────────────────────────────────────────────────────────
// Connection helpers
// ─────────────────────────────────────────────────────────────────────────────

/// A GraphQL connection reduced to its nodes.
#[derive(Debug, Deserialize)]
pub(super) struct Connection<T> {
    pub nodes: Vec<T>,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_customer_deserialize() {
        let json = r#"{
            "id": "gid://shopify/Customer/1001",
            "firstName": "Betsy",
            "lastName": null,
            "emailAddress": { "emailAddress": "betsy@example.com" },
            "phoneNumber": null,
            "defaultAddress": null
        }"#;

        let customer: Customer = serde_json::from_str(json).expect("deserialize");
        assert_eq!(customer.id.numeric_id(), Some(1001));
        assert_eq!(customer.full_name(), "Betsy");
        assert_eq!(customer.email(), Some("betsy@example.com"));
    }

    #[test]
    fn test_order_deserialize() {
        let json = r##"{
            "id": "gid://shopify/Order/42",
            "name": "#1042",
            "processedAt": "2026-07-04T15:30:00Z",
            "financialStatus": "PAID",
            "totalPrice": { "amount": "289.00", "currencyCode": "USD" }
        }"##;

        let order: Order = serde_json::from_str(json).expect("deserialize");
        assert_eq!(order.name, "#1042");
        assert_eq!(order.financial_status, Some(FinancialStatus::Paid));
        assert_eq!(order.total_price.amount, Decimal::new(28900, 2));
        assert_eq!(order.total_price.display(), "$289.00");
    }
}
