use contracts::domain::a004_customer::Customer;
use leptos::prelude::*;

use crate::shared::storage;

const USER_NAME_KEY: &str = "userName";
const PREVIOUS_NAMES_KEY: &str = "previousNames";

/// App-wide customer identity: the display name and its undo stack.
///
/// Persisted under two keys — the name as a plain string, the stack as a
/// JSON array — and both are written on every transition so they never
/// drift apart.
#[derive(Clone, Copy)]
pub struct UserContext {
    customer: RwSignal<Customer>,
    hydrated: RwSignal<bool>,
}

impl UserContext {
    pub fn new() -> Self {
        Self {
            customer: RwSignal::new(Customer::default()),
            hydrated: RwSignal::new(false),
        }
    }

    /// One-shot load from localStorage once the browser environment is up.
    /// Before this runs the context serves defaults and refuses to write.
    pub fn hydrate(&self) {
        if self.hydrated.get_untracked() {
            return;
        }

        let name = storage::load_string(USER_NAME_KEY);
        let previous = storage::load_json::<Vec<String>>(PREVIOUS_NAMES_KEY);
        if name.is_some() || previous.is_some() {
            self.customer.update(|c| {
                if let Some(name) = name {
                    c.user_name = name;
                }
                if let Some(previous) = previous {
                    c.previous_names = previous;
                }
            });
        }

        self.hydrated.set(true);
    }

    fn persist(&self) {
        if !self.hydrated.get_untracked() {
            return;
        }
        self.customer.with_untracked(|c| {
            storage::save_string(USER_NAME_KEY, &c.user_name);
            storage::save_json(PREVIOUS_NAMES_KEY, &c.previous_names);
        });
    }

    /// Replace the display name. Callers trim and drop empty input before
    /// getting here; the store itself does not validate.
    pub fn set_name(&self, new_name: &str) {
        self.customer.update(|c| c.set_name(new_name));
        self.persist();
    }

    /// Restore the previous name, one level per call.
    pub fn undo(&self) {
        self.customer.update(|c| c.undo());
        self.persist();
    }

    pub fn user_name(&self) -> String {
        self.customer.with(|c| c.user_name.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.customer.with(Customer::can_undo)
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_user() -> UserContext {
    use_context::<UserContext>().expect("UserContext not found. Provide it from App.")
}
