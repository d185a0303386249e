/// The customer's display identity: the current name plus an undo stack of
/// previous names.
///
/// The stack is append-only on change and pop-only on undo; there is no
/// redo, and no depth cap. Name validation (trimming, rejecting empties)
/// belongs to the form, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub user_name: String,
    pub previous_names: Vec<String>,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            user_name: "Guest".to_string(),
            previous_names: Vec::new(),
        }
    }
}

impl Customer {
    pub fn new(user_name: String, previous_names: Vec<String>) -> Self {
        Self {
            user_name,
            previous_names,
        }
    }

    /// Replace the current name, pushing the old one onto the stack.
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        let previous = std::mem::replace(&mut self.user_name, new_name.into());
        self.previous_names.push(previous);
    }

    /// Restore the most recent previous name. No-op on an empty stack;
    /// exactly one level per call.
    pub fn undo(&mut self) {
        if let Some(previous) = self.previous_names.pop() {
            self.user_name = previous;
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.previous_names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_guest() {
        let customer = Customer::default();
        assert_eq!(customer.user_name, "Guest");
        assert!(!customer.can_undo());
    }

    #[test]
    fn test_set_name_pushes_the_old_name() {
        let mut customer = Customer::default();
        customer.set_name("Alice");
        customer.set_name("Bob");

        assert_eq!(customer.user_name, "Bob");
        assert_eq!(customer.previous_names, vec!["Guest", "Alice"]);
    }

    #[test]
    fn test_undo_restores_one_level_per_call() {
        let mut customer = Customer::default();
        customer.set_name("Alice");
        customer.set_name("Bob");

        customer.undo();
        assert_eq!(customer.user_name, "Alice");

        customer.undo();
        assert_eq!(customer.user_name, "Guest");
        assert!(!customer.can_undo());
    }

    #[test]
    fn test_undo_on_empty_stack_is_a_no_op() {
        let mut customer = Customer::new("Alice".into(), Vec::new());
        customer.undo();
        assert_eq!(customer.user_name, "Alice");
    }

    #[test]
    fn test_undo_does_not_repush() {
        let mut customer = Customer::default();
        customer.set_name("Alice");
        customer.undo();

        // "Alice" is gone for good; there is no redo.
        assert_eq!(customer.user_name, "Guest");
        assert!(customer.previous_names.is_empty());
    }
}
