use serde::{Deserialize, Serialize};

/// Fulfilment status of a placed order.
///
/// Set once at creation; nothing in this system ever transitions it, the
/// values past `Pending` exist for display of previously saved data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "delivering")]
    Delivering,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Delivering => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS class for the status badge in the order history.
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-badge status-badge--pending",
            OrderStatus::Confirmed => "status-badge status-badge--confirmed",
            OrderStatus::Preparing => "status-badge status-badge--preparing",
            OrderStatus::Delivering => "status-badge status-badge--delivering",
            OrderStatus::Delivered => "status-badge status-badge--delivered",
            OrderStatus::Cancelled => "status-badge status-badge--cancelled",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => OrderStatus::Pending,
            "confirmed" => OrderStatus::Confirmed,
            "preparing" => OrderStatus::Preparing,
            "delivering" => OrderStatus::Delivering,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_code(status.code()), status);
        }
    }

    #[test]
    fn test_delivering_display_label() {
        assert_eq!(OrderStatus::Delivering.display_name(), "Out for Delivery");
    }
}
