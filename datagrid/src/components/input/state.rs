use std::fmt;

/// Callback receiving the input's complete new value.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

/// Visual treatment of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Background fill, no border.
    Filled,
    /// Box border around the field.
    #[default]
    Outlined,
    /// No border and no fill.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Field width in terminal columns, borders included.
    pub fn width(self) -> u16 {
        match self {
            Self::Sm => 20,
            Self::Md => 32,
            Self::Lg => 48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Masked unless revealed.
    Password,
}

/// Message line shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage<'a> {
    Helper(&'a str),
    Error(&'a str),
}

/// A labelled single-line text input.
///
/// The input owns its value and reports every change through
/// [`on_change`](Input::on_change) with the full new value. Setting the value
/// programmatically with [`set_value`](Input::set_value) does not notify.
///
/// ```
/// use datagrid::components::Input;
/// use datagrid::event::{Key, Modifiers};
/// use datagrid::components::ComponentEvents;
///
/// let mut input = Input::new().label("Username").clearable(true);
/// input.on_key(Key::Char('h'), Modifiers::new());
/// input.on_key(Key::Char('i'), Modifiers::new());
/// assert_eq!(input.value(), "hi");
///
/// assert!(input.clear());
/// assert_eq!(input.value(), "");
/// ```
pub struct Input {
    value: String,
    /// Cursor position (byte offset, always on a char boundary)
    cursor: usize,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    clearable: bool,
    revealed: bool,
    focused: bool,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("label", &self.label)
            .field("value", &self.display_value())
            .field("error_message", &self.error_message)
            .field("disabled", &self.disabled)
            .field("variant", &self.variant)
            .field("kind", &self.kind)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            clearable: false,
            revealed: false,
            focused: false,
            on_change: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn password(self) -> Self {
        self.kind(InputKind::Password)
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn get_variant(&self) -> InputVariant {
        self.variant
    }

    pub fn get_size(&self) -> InputSize {
        self.size
    }

    pub fn get_kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field draws in the error state.
    pub fn is_invalid(&self) -> bool {
        self.invalid || self.error_message.is_some()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_masked(&self) -> bool {
        self.kind == InputKind::Password && !self.revealed
    }

    /// The value as drawn: masked with `•` for unrevealed passwords.
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Whether the clear affordance is shown.
    pub fn shows_clear_button(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.disabled
    }

    pub fn shows_reveal_button(&self) -> bool {
        self.kind == InputKind::Password && !self.disabled
    }

    /// The message under the field: the error if any, else the helper text.
    pub fn message(&self) -> Option<InputMessage<'_>> {
        match (&self.error_message, &self.helper_text) {
            (Some(error), _) => Some(InputMessage::Error(error)),
            (None, Some(helper)) => Some(InputMessage::Helper(helper)),
            (None, None) => None,
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the value without notifying `on_change`. Cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn notify_change(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.value);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.disabled {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.notify_change();
    }

    /// Delete the character before the cursor (Backspace).
    pub fn delete_char_before(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let Some(prev) = self.value[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.value.remove(self.cursor);
        self.notify_change();
        true
    }

    /// Delete the character at the cursor (Delete).
    pub fn delete_char_at(&mut self) -> bool {
        if self.disabled || self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        self.notify_change();
        true
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.value[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Empty the value through the clear affordance and notify with `""`.
    ///
    /// Only available while the clear button is shown.
    pub fn clear(&mut self) -> bool {
        if !self.shows_clear_button() {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        self.notify_change();
        true
    }

    /// Show or mask a password value.
    pub fn toggle_reveal(&mut self) -> bool {
        if !self.shows_reveal_button() {
            return false;
        }
        self.revealed = !self.revealed;
        true
    }
}
