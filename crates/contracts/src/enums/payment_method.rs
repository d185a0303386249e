use serde::{Deserialize, Serialize};

/// Payment options shown at checkout. All of them are labels only; no
/// payment processing happens anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "gcash")]
    GCash,
    #[serde(rename = "paymaya")]
    PayMaya,
    #[serde(rename = "bank-transfer")]
    BankTransfer,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "gcash",
            PaymentMethod::PayMaya => "paymaya",
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "GCash",
            PaymentMethod::PayMaya => "PayMaya",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Emoji marker shown next to the radio label at checkout.
    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::GCash => "📱",
            PaymentMethod::PayMaya => "💳",
            PaymentMethod::BankTransfer => "🏦",
            PaymentMethod::CashOnDelivery => "💵",
        }
    }

    /// Methods offered by the checkout form.
    pub fn checkout_options() -> [PaymentMethod; 3] {
        [
            PaymentMethod::GCash,
            PaymentMethod::PayMaya,
            PaymentMethod::BankTransfer,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "gcash" => PaymentMethod::GCash,
            "paymaya" => PaymentMethod::PayMaya,
            "bank-transfer" => PaymentMethod::BankTransfer,
            "cod" => PaymentMethod::CashOnDelivery,
            _ => PaymentMethod::GCash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for pm in [
            PaymentMethod::GCash,
            PaymentMethod::PayMaya,
            PaymentMethod::BankTransfer,
            PaymentMethod::CashOnDelivery,
        ] {
            assert_eq!(PaymentMethod::from_code(pm.code()), pm);
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_gcash() {
        assert_eq!(PaymentMethod::from_code("bitcoin"), PaymentMethod::GCash);
    }
}
