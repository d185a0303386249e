use leptos::prelude::*;

use crate::domain::a002_cart::ui::panel::CartWidget;
use crate::shared::icons::icon;
use crate::system::user::context::use_user;
use crate::system::user::ui::NameInput;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="storefront__header">
            <div class="storefront__identity">
                <Logo />
                <NameInput />
            </div>
            <CartWidget />
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    let user = use_user();

    view! {
        <div class="logo">
            {icon("egg")}
            <span class="logo__greeting">{move || format!("Hi! {}", user.user_name())}</span>
        </div>
    }
}
