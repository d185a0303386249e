use contracts::domain::a003_order::{Order, OrderId};
use contracts::domain::common::LineItem;
use leptos::prelude::*;

use crate::domain::a003_order::context::use_orders;
use crate::shared::date_utils::format_order_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_peso;

/// Order history modal: newest order first, expandable details, reorder.
#[component]
pub fn OrderHistory(on_reorder: Callback<Vec<LineItem>>, on_close: Callback<()>) -> impl IntoView {
    let orders = use_orders();
    let expanded = RwSignal::new(None::<OrderId>);

    view! {
        <div class="modal-overlay">
            <div class="modal modal--wide order-history">
                <div class="modal__head">
                    <h2 class="modal__title">"Order History"</h2>
                    <div class="order-history__head-actions">
                        <Show when=move || !orders.is_empty()>
                            <button
                                class="order-history__clear"
                                on:click=move |_| orders.clear_all()
                            >
                                "Clear History"
                            </button>
                        </Show>
                        <button class="modal__close" on:click=move |_| on_close.run(())>
                            {icon("close")}
                        </button>
                    </div>
                </div>

                <Show
                    when=move || !orders.is_empty()
                    fallback=|| view! {
                        <div class="order-history__empty">
                            {icon("clipboard")}
                            <h3 class="order-history__empty-title">"No orders yet"</h3>
                            <p class="order-history__empty-text">
                                "Start shopping to see your order history here."
                            </p>
                        </div>
                    }
                >
                    <div class="order-history__list">
                        <For
                            each=move || orders.orders()
                            key=|order| order.id.clone()
                            children=move |order: Order| {
                                view! { <OrderCard order=order expanded=expanded on_reorder=on_reorder /> }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn OrderCard(
    order: Order,
    expanded: RwSignal<Option<OrderId>>,
    on_reorder: Callback<Vec<LineItem>>,
) -> impl IntoView {
    let orders = use_orders();

    // Copy handle so the toggle, the label and the reorder button can all
    // refer to the id from their own closures.
    let card_id = StoredValue::new(order.id.clone());
    let is_expanded =
        move || expanded.with(|e| card_id.with_value(|id| e.as_ref() == Some(id)));
    let toggle_expanded = move |_| {
        expanded.update(|e| {
            let id = card_id.get_value();
            if e.as_ref() == Some(&id) {
                *e = None;
            } else {
                *e = Some(id);
            }
        })
    };

    let short_id = order.id.short().to_string();
    let date_label = format_order_date(order.created_at);
    let item_count = order.item_count();
    let items = order.items.clone();
    let customer_name = order.customer_name.clone();
    let delivery_address = order.delivery_address.clone();
    let contact_number = order.contact_number.clone();
    let delivery_time_slot = order.delivery_time_slot.clone();
    let special_instructions = order.special_instructions.clone();
    let payment_label = order.payment_method.display_name();

    view! {
        <div class="order-card">
            <div class="order-card__head">
                <div>
                    <h3 class="order-card__id">{format!("Order #{}", short_id)}</h3>
                    <p class="order-card__date">{date_label}</p>
                </div>
                <div class="order-card__head-actions">
                    <span class=order.status.css_class()>{order.status.display_name()}</span>
                    <button
                        class="order-card__details-toggle"
                        on:click=toggle_expanded
                    >
                        {move || if is_expanded() { "Hide Details" } else { "View Details" }}
                    </button>
                </div>
            </div>

            <div class="order-card__summary">
                <span class="order-card__count">
                    {format!("{} item{}", item_count, if item_count == 1 { "" } else { "s" })}
                </span>
                <span class="order-card__total">{format_peso(order.total)}</span>
            </div>

            <Show when=is_expanded>
                <div class="order-card__details">
                    <div class="order-card__items">
                        <h4 class="order-card__section-title">"Items:"</h4>
                        {items
                            .iter()
                            .map(|item| {
                                let line = format!(
                                    "{} ({} {})",
                                    item.name,
                                    item.quantity,
                                    item.quantity_type.display_name()
                                );
                                let amount = format_peso(item.line_total());
                                view! {
                                    <div class="order-card__item-row">
                                        <span>{line}</span>
                                        <span>{amount}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="order-card__info-grid">
                        <div>
                            <h4 class="order-card__section-title">"Delivery Details:"</h4>
                            <p><b>"Name: "</b>{customer_name.clone()}</p>
                            <p><b>"Address: "</b>{delivery_address.clone()}</p>
                            <p><b>"Contact: "</b>{contact_number.clone()}</p>
                            <p><b>"Time Slot: "</b>{delivery_time_slot.clone()}</p>
                        </div>
                        <div>
                            <h4 class="order-card__section-title">"Payment:"</h4>
                            <p><b>"Method: "</b>{payment_label}</p>
                            {(!special_instructions.is_empty()).then(|| view! {
                                <p><b>"Notes: "</b>{special_instructions.clone()}</p>
                            })}
                        </div>
                    </div>

                    <div class="order-card__actions">
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                let items = card_id.with_value(|id| orders.reorder_items(id));
                                on_reorder.run(items);
                            }
                        >
                            "Reorder"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
