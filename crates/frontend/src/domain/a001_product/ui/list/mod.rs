use contracts::domain::a001_product::{catalog, Product};
use contracts::enums::QuantityType;
use leptos::prelude::*;

use crate::domain::a002_cart::context::use_cart;
use crate::shared::components::qr_code::QrCodePanel;
use crate::shared::icons::icon;
use crate::shared::number_format::format_peso;

/// The landing page: hero, product grid, features strip and the QR panel.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    view! {
        <HeroSection />

        <div class="product-grid">
            {catalog()
                .iter()
                .map(|product| view! { <ProductCard product=product.clone() /> })
                .collect_view()}
        </div>

        <FeaturesSection />

        <div class="storefront__qr">
            <QrCodePanel />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__title-row">
                <h2 class="hero__title">"Welcome to Harley's Egg Shop!"</h2>
                {icon("egg")}
            </div>
            <p class="hero__text">
                "We are a family-owned farm dedicated to providing the freshest, \
                 highest-quality eggs in the Philippines. Our free-range chickens \
                 are raised with care and love, resulting in eggs that are not \
                 only delicious but also packed with nutrients."
            </p>
            <div class="hero__address">
                {icon("location")}
                <span>"Barangay Vito, Minglanilla Cebu, 6046"</span>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features__card">
                {icon("egg")}
                <h3 class="features__title">"Fresh Daily"</h3>
                <p class="features__text">"Eggs collected fresh every morning from our happy chickens"</p>
            </div>
            <div class="features__card">
                {icon("truck")}
                <h3 class="features__title">"Free Delivery"</h3>
                <p class="features__text">"Free delivery for orders over ₱100 within Minglanilla"</p>
            </div>
            <div class="features__card">
                {icon("badge-check")}
                <h3 class="features__title">"Quality Guaranteed"</h3>
                <p class="features__text">"97% satisfaction guarantee on all our products"</p>
            </div>
        </section>
    }
}

/// One product tile. Adding is two-phase: the first click reveals the
/// quantity selector, the second one actually puts the selection in the
/// cart.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let show_selector = RwSignal::new(false);
    let quantity = RwSignal::new(1u32);
    let quantity_type = RwSignal::new(QuantityType::Individual);

    let price = product.price;
    let product_for_add = product.clone();
    let handle_add = move |_| {
        if show_selector.get_untracked() {
            cart.add_item(
                &product_for_add,
                quantity.get_untracked(),
                quantity_type.get_untracked(),
            );
            show_selector.set(false);
        } else {
            show_selector.set(true);
        }
    };

    view! {
        <div class="product-card">
            <div class="product-card__head">
                <div>
                    <h3 class="product-card__name">{product.name}</h3>
                    <p class="product-card__size">{format!("{} Size", product.size)}</p>
                </div>
                <span class="product-card__category">{product.category}</span>
            </div>
            <p class="product-card__description">{product.description}</p>

            <Show when=move || show_selector.get()>
                <QuantitySelector quantity=quantity quantity_type=quantity_type />
            </Show>

            <div class="product-card__footer">
                <div>
                    <span class="product-card__price">{format_peso(price)}</span>
                    <Show when=move || show_selector.get()>
                        <div class="product-card__per-unit">
                            {move || format!("per {}", quantity_type.get().display_name().to_lowercase())}
                        </div>
                    </Show>
                </div>
                <div class="product-card__actions">
                    <Show when=move || show_selector.get()>
                        <button
                            class="button button--secondary"
                            on:click=move |_| show_selector.set(false)
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <button class="button button--primary" on:click=handle_add>
                        {move || if show_selector.get() { "Add to Cart" } else { "Select Quantity" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Unit-type buttons plus a quantity stepper. The stepper floors at 1;
/// the egg count below keeps the bulk units honest.
#[component]
pub fn QuantitySelector(quantity: RwSignal<u32>, quantity_type: RwSignal<QuantityType>) -> impl IntoView {
    view! {
        <div class="quantity-selector">
            <div class="quantity-selector__types">
                {QuantityType::selector_options()
                    .into_iter()
                    .map(|option| view! {
                        <button
                            class=move || {
                                if quantity_type.get() == option {
                                    "quantity-selector__type quantity-selector__type--active"
                                } else {
                                    "quantity-selector__type"
                                }
                            }
                            on:click=move |_| quantity_type.set(option)
                        >
                            {option.display_name()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="quantity-selector__stepper">
                <span class="quantity-selector__label">"Quantity:"</span>
                <button
                    class="quantity-selector__step"
                    on:click=move |_| quantity.update(|q| *q = q.saturating_sub(1).max(1))
                >
                    "-"
                </button>
                <span class="quantity-selector__count">{move || quantity.get()}</span>
                <button
                    class="quantity-selector__step"
                    on:click=move |_| quantity.update(|q| *q += 1)
                >
                    "+"
                </button>
                <span class="quantity-selector__total">
                    {move || {
                        let eggs = quantity.get() * quantity_type.get().eggs_per_unit();
                        format!("({} eggs total)", eggs)
                    }}
                </span>
            </div>
        </div>
    }
}
