use crate::components::Input;

/// Widgets whose value can be validated and which can show the outcome.
pub trait Validatable {
    /// Extract the current value for validation.
    fn validation_value(&self) -> String;

    /// Show `message` as the widget's error, or clear it with `None`.
    fn set_validation_error(&mut self, message: Option<String>);
}

impl Validatable for Input {
    fn validation_value(&self) -> String {
        self.value().to_string()
    }

    fn set_validation_error(&mut self, message: Option<String>) {
        self.set_error(message);
    }
}
