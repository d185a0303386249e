use contracts::domain::a003_order::OrderDraft;
use contracts::enums::{DeliveryTimeSlot, PaymentMethod};
use leptos::prelude::*;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::components::ui::{Button, Input, Radio, Textarea};
use crate::shared::icons::icon;
use crate::shared::number_format::format_peso;

/// Modal two-step checkout wizard.
///
/// Step 1 collects the customer details; Continue stays disabled until the
/// three required fields are non-empty after trimming. Step 2 picks payment
/// and delivery slot and shows the summary. Placing the order snapshots the
/// cart into a draft — id, date and status are the store's business.
#[component]
pub fn Checkout(on_complete: Callback<OrderDraft>, on_cancel: Callback<()>) -> impl IntoView {
    let cart = use_cart();

    let step = RwSignal::new(1u8);
    let customer_name = RwSignal::new(String::new());
    let delivery_address = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let special_instructions = RwSignal::new(String::new());
    let payment_method = RwSignal::new(PaymentMethod::GCash);
    let time_slot = RwSignal::new(DeliveryTimeSlot::Morning);

    let form_valid = move || {
        !customer_name.get().trim().is_empty()
            && !delivery_address.get().trim().is_empty()
            && !contact_number.get().trim().is_empty()
    };

    let place_order = move |_| {
        let draft = OrderDraft {
            items: cart.items_untracked(),
            total: cart.total_untracked(),
            payment_method: payment_method.get_untracked(),
            delivery_time_slot: time_slot.get_untracked().time_range().to_string(),
            customer_name: customer_name.get_untracked().trim().to_string(),
            delivery_address: delivery_address.get_untracked().trim().to_string(),
            contact_number: contact_number.get_untracked().trim().to_string(),
            special_instructions: special_instructions.get_untracked().trim().to_string(),
        };
        on_complete.run(draft);
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--wide">
                <div class="modal__head">
                    <h2 class="modal__title">"Checkout"</h2>
                    <button class="modal__close" on:click=move |_| on_cancel.run(())>
                        {icon("close")}
                    </button>
                </div>

                <div class="checkout__steps">
                    <div class=move || step_class(1, step.get())>
                        <div class="checkout__step-circle">"1"</div>
                        <span class="checkout__step-label">"Customer Info"</span>
                    </div>
                    <div class=move || {
                        if step.get() >= 2 {
                            "checkout__step-line checkout__step-line--done"
                        } else {
                            "checkout__step-line"
                        }
                    }></div>
                    <div class=move || step_class(2, step.get())>
                        <div class="checkout__step-circle">"2"</div>
                        <span class="checkout__step-label">"Payment & Delivery"</span>
                    </div>
                </div>

                <Show when=move || step.get() == 1>
                    <div class="checkout__section">
                        <h3 class="checkout__heading">"Customer Information"</h3>

                        <Input
                            label="Full Name *"
                            value=customer_name
                            on_input=Callback::new(move |v| customer_name.set(v))
                            placeholder="Enter your full name"
                        />
                        <Textarea
                            label="Delivery Address *"
                            value=delivery_address
                            on_input=Callback::new(move |v| delivery_address.set(v))
                            placeholder="Enter your complete delivery address"
                            rows=3
                        />
                        <Input
                            label="Contact Number *"
                            value=contact_number
                            on_input=Callback::new(move |v| contact_number.set(v))
                            placeholder="Enter your phone number"
                            input_type="tel"
                        />
                        <Textarea
                            label="Special Instructions"
                            value=special_instructions
                            on_input=Callback::new(move |v| special_instructions.set(v))
                            placeholder="Any special delivery instructions (optional)"
                            rows=2
                        />

                        <div class="checkout__buttons">
                            <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                                "Cancel"
                            </Button>
                            <Button
                                disabled=Signal::derive(move || !form_valid())
                                on_click=Callback::new(move |_| step.set(2))
                            >
                                "Continue"
                            </Button>
                        </div>
                    </div>
                </Show>

                <Show when=move || step.get() == 2>
                    <div class="checkout__section">
                        <h3 class="checkout__heading">"Payment & Delivery"</h3>

                        <div class="checkout__options">
                            <span class="form__label">"Payment Method *"</span>
                            {PaymentMethod::checkout_options()
                                .into_iter()
                                .map(|method| view! {
                                    <Radio
                                        label=format!("{} {}", method.icon(), method.display_name())
                                        value=method.code()
                                        checked_value=Signal::derive(move || {
                                            payment_method.get().code().to_string()
                                        })
                                        on_change=Callback::new(move |code: String| {
                                            payment_method.set(PaymentMethod::from_code(&code))
                                        })
                                        name="paymentMethod"
                                    />
                                })
                                .collect_view()}
                        </div>

                        <div class="checkout__options">
                            <span class="form__label">"Delivery Time Slot *"</span>
                            {DeliveryTimeSlot::all()
                                .into_iter()
                                .map(|slot| view! {
                                    <label class="form__radio-wrapper">
                                        <input
                                            type="radio"
                                            class="form__radio"
                                            name="deliveryTimeSlot"
                                            value=slot.code()
                                            checked=move || time_slot.get() == slot
                                            on:change=move |_| time_slot.set(slot)
                                        />
                                        <span class="form__radio-label">
                                            <span class="checkout__slot-label">{slot.label()}</span>
                                            <span class="checkout__slot-time">{slot.time_range()}</span>
                                        </span>
                                    </label>
                                })
                                .collect_view()}
                        </div>

                        <OrderSummary />

                        <div class="checkout__buttons">
                            <Button variant="secondary" on_click=Callback::new(move |_| step.set(1))>
                                "Back"
                            </Button>
                            <Button on_click=Callback::new(place_order)>
                                "Place Order"
                            </Button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn step_class(step: u8, current: u8) -> &'static str {
    if current >= step {
        "checkout__step checkout__step--active"
    } else {
        "checkout__step"
    }
}

#[component]
fn OrderSummary() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="checkout__summary">
            <h4 class="checkout__summary-title">"Order Summary"</h4>
            <For
                each=move || cart.items()
                key=|item| (item.product_id.clone(), item.quantity_type, item.quantity)
                children=|item| {
                    let line = format!(
                        "{} ({} {})",
                        item.name,
                        item.quantity,
                        item.quantity_type.display_name()
                    );
                    let amount = format_peso(item.line_total());
                    view! {
                        <div class="checkout__summary-row">
                            <span>{line}</span>
                            <span>{amount}</span>
                        </div>
                    }
                }
            />
            <div class="checkout__summary-total">
                <span>"Total:"</span>
                <span>{move || format_peso(cart.total())}</span>
            </div>
        </div>
    }
}
