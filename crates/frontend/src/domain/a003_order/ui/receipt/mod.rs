use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::number_format::format_peso;

/// Flat fee shown on the receipt. Display only — the persisted order total
/// stays the plain item sum.
const DELIVERY_FEE: f64 = 50.0;

/// Order receipt shown right after checkout.
///
/// Confirm closes it and the parent clears the cart; Cancel sits in a
/// "Cancelling..." state for a second before doing the same.
#[component]
pub fn Receipt(on_close: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let cart = use_cart();
    let is_cancelling = RwSignal::new(false);

    let handle_cancel = move |_| {
        is_cancelling.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            on_cancel.run(());
            is_cancelling.set(false);
            on_close.run(());
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal receipt">
                <div class="receipt__head">
                    <h2 class="receipt__shop">"Harley's Fresh Eggs"</h2>
                    <p class="receipt__subtitle">"Order Receipt"</p>
                </div>

                <div class="receipt__items">
                    <For
                        each=move || cart.items()
                        key=|item| (item.product_id.clone(), item.quantity_type, item.quantity)
                        children=|item| {
                            let amount = format_peso(item.line_total());
                            let each = format!("{} each", format_peso(item.unit_price));
                            view! {
                                <div class="receipt__item">
                                    <div>
                                        <h3 class="receipt__item-name">{item.name}</h3>
                                        <p class="receipt__item-meta">
                                            {format!("{} • {}", item.size, item.category)}
                                        </p>
                                        <p class="receipt__item-meta">
                                            {format!("Quantity: {}", item.quantity)}
                                        </p>
                                    </div>
                                    <div class="receipt__item-amounts">
                                        <p class="receipt__item-total">{amount}</p>
                                        <p class="receipt__item-each">{each}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="receipt__totals">
                    <div class="receipt__totals-row">
                        <span>"Subtotal:"</span>
                        <span>{move || format_peso(cart.total())}</span>
                    </div>
                    <div class="receipt__totals-row">
                        <span>"Delivery Fee:"</span>
                        <span>{format_peso(DELIVERY_FEE)}</span>
                    </div>
                    <div class="receipt__totals-row receipt__totals-row--grand">
                        <span>"Total:"</span>
                        <span>{move || format_peso(cart.total() + DELIVERY_FEE)}</span>
                    </div>
                </div>

                <div class="receipt__buttons">
                    <button
                        class="button button--primary receipt__confirm"
                        on:click=move |_| on_close.run(())
                    >
                        "Confirm Order"
                    </button>
                    <button
                        class="button button--danger receipt__cancel"
                        disabled=move || is_cancelling.get()
                        on:click=handle_cancel
                    >
                        {move || if is_cancelling.get() { "Cancelling..." } else { "Cancel Order" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
