use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_user;
use crate::shared::components::ui::Button;

/// Inline editor for the customer's display name.
///
/// "Welcome, {name}!" with a Change Name link; editing swaps in a small
/// form. Undo appears whenever the name history is non-empty. Saves and
/// restores flash a confirmation for a couple of seconds.
#[component]
pub fn NameInput() -> impl IntoView {
    let user = use_user();
    let is_editing = RwSignal::new(false);
    let temp_name = RwSignal::new(String::new());
    let flash = RwSignal::new(None::<&'static str>);

    let show_flash = move |message: &'static str| {
        flash.set(Some(message));
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            flash.set(None);
        });
    };

    let start_editing = move |_| {
        temp_name.set(user.user_name());
        is_editing.set(true);
    };

    let save_name = move || {
        let trimmed = temp_name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        user.set_name(&trimmed);
        is_editing.set(false);
        show_flash("Name saved!");
    };

    let handle_undo = move |_| {
        user.undo();
        show_flash("Name restored!");
    };

    view! {
        <div class="name-input">
            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <span class="name-input__greeting">
                        {move || format!("Welcome, {}!", user.user_name())}
                    </span>
                    <button class="name-input__link" on:click=start_editing>
                        "Change Name"
                    </button>
                    <Show when=move || user.can_undo()>
                        <button class="name-input__link" on:click=handle_undo>
                            "Undo"
                        </button>
                    </Show>
                }
            >
                <form
                    class="name-input__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        save_name();
                    }
                >
                    <input
                        class="form__input name-input__field"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || temp_name.get()
                        on:input=move |ev| temp_name.set(event_target_value(&ev))
                    />
                    <Button button_type="submit">"Save"</Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            temp_name.set(user.user_name());
                            is_editing.set(false);
                        })
                    >
                        "Cancel"
                    </Button>
                </form>
            </Show>
            <Show when=move || flash.get().is_some()>
                <span class="name-input__flash">{move || flash.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
