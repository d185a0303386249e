/// Delivery windows offered by the checkout form.
///
/// Orders store the human readable time range as a free-form string, so this
/// enum only exists on the form side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryTimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl DeliveryTimeSlot {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTimeSlot::Morning => "Morning",
            DeliveryTimeSlot::Afternoon => "Afternoon",
            DeliveryTimeSlot::Evening => "Evening",
        }
    }

    /// The string that ends up on the order.
    pub fn time_range(&self) -> &'static str {
        match self {
            DeliveryTimeSlot::Morning => "8:00 AM - 12:00 PM",
            DeliveryTimeSlot::Afternoon => "1:00 PM - 5:00 PM",
            DeliveryTimeSlot::Evening => "6:00 PM - 9:00 PM",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryTimeSlot::Morning => "morning",
            DeliveryTimeSlot::Afternoon => "afternoon",
            DeliveryTimeSlot::Evening => "evening",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "morning" => DeliveryTimeSlot::Morning,
            "afternoon" => DeliveryTimeSlot::Afternoon,
            "evening" => DeliveryTimeSlot::Evening,
            _ => DeliveryTimeSlot::Morning,
        }
    }

    pub fn all() -> [DeliveryTimeSlot; 3] {
        [
            DeliveryTimeSlot::Morning,
            DeliveryTimeSlot::Afternoon,
            DeliveryTimeSlot::Evening,
        ]
    }
}
