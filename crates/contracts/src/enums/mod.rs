pub mod delivery_time_slot;
pub mod order_status;
pub mod payment_method;
pub mod quantity_type;

pub use delivery_time_slot::DeliveryTimeSlot;
pub use order_status::OrderStatus;
pub use payment_method::PaymentMethod;
pub use quantity_type::QuantityType;
