use contracts::domain::common::LineItem;
use leptos::prelude::*;

use crate::domain::a002_cart::context::use_cart;
use crate::domain::a003_order::context::use_orders;
use crate::domain::a003_order::ui::checkout::Checkout;
use crate::domain::a003_order::ui::history::OrderHistory;
use crate::domain::a003_order::ui::receipt::Receipt;
use crate::shared::icons::icon;
use crate::shared::number_format::format_peso;

/// The cart corner of the header: history and cart buttons, the dropdown
/// panel, and the checkout → receipt flow hanging off it.
#[component]
pub fn CartWidget() -> impl IntoView {
    let cart = use_cart();
    let orders = use_orders();

    let show_checkout = RwSignal::new(false);
    let show_receipt = RwSignal::new(false);
    let show_history = RwSignal::new(false);

    view! {
        <div class="cart">
            <div class="cart__actions">
                <button
                    class="cart__icon-btn"
                    title="Order History"
                    on:click=move |_| show_history.set(true)
                >
                    {icon("history")}
                </button>
                <button class="cart__icon-btn cart__toggle" on:click=move |_| cart.toggle_open()>
                    {icon("cart")}
                    <Show when=move || (cart.item_count() > 0)>
                        <span class="cart__badge">{move || cart.item_count()}</span>
                    </Show>
                </button>
            </div>

            <Show when=move || cart.is_open.get()>
                <CartPanel on_checkout=Callback::new(move |_| {
                    show_checkout.set(true);
                    cart.is_open.set(false);
                }) />
            </Show>

            <Show when=move || show_checkout.get()>
                <Checkout
                    on_complete=Callback::new(move |draft| {
                        orders.add_order(draft);
                        show_checkout.set(false);
                        show_receipt.set(true);
                    })
                    on_cancel=Callback::new(move |_| show_checkout.set(false))
                />
            </Show>

            <Show when=move || show_receipt.get()>
                <Receipt
                    on_close=Callback::new(move |_| {
                        show_receipt.set(false);
                        cart.clear();
                    })
                    on_cancel=Callback::new(move |_| cart.clear())
                />
            </Show>

            <Show when=move || show_history.get()>
                <OrderHistory
                    on_reorder=Callback::new(move |items: Vec<LineItem>| {
                        cart.set_items(items);
                        show_history.set(false);
                    })
                    on_close=Callback::new(move |_| show_history.set(false))
                />
            </Show>
        </div>
    }
}

/// The dropdown listing the cart lines with steppers and removal.
#[component]
fn CartPanel(on_checkout: Callback<()>) -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-panel">
            <div class="cart-panel__head">
                <h3 class="cart-panel__title">"Shopping Cart"</h3>
                <Show when=move || !cart.is_empty()>
                    <button class="cart-panel__clear" on:click=move |_| cart.clear()>
                        "Clear Cart"
                    </button>
                </Show>
            </div>

            <Show
                when=move || !cart.is_empty()
                fallback=|| view! { <p class="cart-panel__empty">"Your cart is empty"</p> }
            >
                <div class="cart-panel__items">
                    <For
                        each=move || cart.items()
                        // quantity is part of the key so a stepper click
                        // re-renders the row it changed
                        key=|item| (item.product_id.clone(), item.quantity_type, item.quantity)
                        children=move |item: LineItem| {
                            view! { <CartLine item=item /> }
                        }
                    />
                </div>

                <div class="cart-panel__footer">
                    <div class="cart-panel__total-row">
                        <span class="cart-panel__total-label">"Total:"</span>
                        <span class="cart-panel__total">{move || format_peso(cart.total())}</span>
                    </div>
                    <button
                        class="button button--primary cart-panel__checkout"
                        on:click=move |_| on_checkout.run(())
                    >
                        "Checkout"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let cart = use_cart();

    let quantity = item.quantity;
    let quantity_type = item.quantity_type;
    let id_for_dec = item.product_id.clone();
    let id_for_inc = item.product_id.clone();
    let id_for_remove = item.product_id.clone();

    view! {
        <div class="cart-line">
            <div class="cart-line__info">
                <h4 class="cart-line__name">{item.name}</h4>
                <div class="cart-line__meta">
                    <span>{item.size}</span>
                    <span>"•"</span>
                    <span>{item.category}</span>
                    <span>"•"</span>
                    <span>{quantity_type.display_name()}</span>
                </div>
                <p class="cart-line__price">{format_peso(item.unit_price)}</p>
            </div>
            <div class="cart-line__controls">
                // dropping to zero is a store-side no-op; removal is the × button
                <button
                    class="cart-line__step"
                    on:click=move |_| {
                        cart.update_quantity(&id_for_dec, quantity_type, quantity.saturating_sub(1))
                    }
                >
                    "-"
                </button>
                <span class="cart-line__count">{quantity}</span>
                <button
                    class="cart-line__step"
                    on:click=move |_| cart.update_quantity(&id_for_inc, quantity_type, quantity + 1)
                >
                    "+"
                </button>
                <button
                    class="cart-line__remove"
                    on:click=move |_| cart.remove_item(&id_for_remove, quantity_type)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
