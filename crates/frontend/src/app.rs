use crate::domain::a001_product::ui::list::StorefrontPage;
use crate::domain::a002_cart::context::CartContext;
use crate::domain::a003_order::context::OrderContext;
use crate::layout::header::Header;
use crate::system::user::context::UserContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let user = UserContext::new();
    let orders = OrderContext::new();
    let cart = CartContext::new();

    provide_context(user);
    provide_context(orders);
    provide_context(cart);

    // localStorage is only reachable once we are mounted in the browser.
    // Until this effect runs, the stores serve defaults and skip writes so
    // the persisted state cannot be clobbered by an early render.
    Effect::new(move |_| {
        user.hydrate();
        orders.hydrate();
    });

    view! {
        <main class="storefront">
            <div class="storefront__container">
                <Header />
                <StorefrontPage />
            </div>
        </main>
    }
}
