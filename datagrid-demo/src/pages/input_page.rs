//! Form demo page: text inputs, validation and a submit button.

use std::cell::RefCell;
use std::rc::Rc;

use datagrid::prelude::*;

const SUBMIT_LABEL: &str = "[ Submit ]";

const USERNAME: &str = "username";
const EMAIL: &str = "email";
const PASSWORD: &str = "password";

/// Values reported by the inputs' `on_change` callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Focusable items, in tab order. The disabled input is never focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Email,
    Password,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Username, Focus::Email, Focus::Password, Focus::Submit];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Areas from the last render, for click routing.
#[derive(Debug, Clone, Copy, Default)]
struct PageAreas {
    username: Rect,
    email: Rect,
    password: Rect,
    disabled: Rect,
    submit: Rect,
}

pub struct InputPage {
    username: Input,
    email: Input,
    password: Input,
    disabled: Input,
    values: Rc<RefCell<FormValues>>,
    focus: Focus,
    status: Option<String>,
    areas: PageAreas,
}

impl Default for InputPage {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPage {
    pub fn new() -> Self {
        let values = Rc::new(RefCell::new(FormValues::default()));

        let username = Input::new()
            .label("Username")
            .placeholder("Enter username")
            .helper_text("This will be public")
            .clearable(true)
            .on_change({
                let values = Rc::clone(&values);
                move |value: &str| values.borrow_mut().username = value.to_string()
            });

        let email = Input::new()
            .label("Email")
            .placeholder("you@example.com")
            .variant(InputVariant::Filled)
            .on_change({
                let values = Rc::clone(&values);
                move |value: &str| values.borrow_mut().email = value.to_string()
            });

        let password = Input::new()
            .label("Password")
            .placeholder("Enter password")
            .helper_text("At least 6 characters")
            .password()
            .on_change({
                let values = Rc::clone(&values);
                move |value: &str| values.borrow_mut().password = value.to_string()
            });

        let disabled = Input::new()
            .label("Disabled Input")
            .placeholder("Can't type here")
            .size(InputSize::Sm)
            .disabled(true);

        let mut page = Self {
            username,
            email,
            password,
            disabled,
            values,
            focus: Focus::default(),
            status: None,
            areas: PageAreas::default(),
        };
        page.set_focus(Focus::Username);
        page
    }

    pub fn values(&self) -> FormValues {
        self.values.borrow().clone()
    }

    fn input_mut(&mut self, focus: Focus) -> Option<&mut Input> {
        match focus {
            Focus::Username => Some(&mut self.username),
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Submit => None,
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        for item in Focus::ORDER {
            if let Some(input) = self.input_mut(item) {
                input.set_focused(item == focus);
            }
        }
    }

    /// Validate the form, show per-field errors and set the status line.
    ///
    /// Returns whether the form was valid.
    pub fn submit(&mut self) -> bool {
        let result = Validator::new()
            .widget(USERNAME, &self.username)
            .required("Username is required")
            .widget(EMAIL, &self.email)
            .contains("@", "Enter a valid email")
            .widget(PASSWORD, &self.password)
            .min_length(6, "Password must be at least 6 characters")
            .validate();

        result.apply_to(USERNAME, &mut self.username);
        result.apply_to(EMAIL, &mut self.email);
        result.apply_to(PASSWORD, &mut self.password);

        if result.is_valid() {
            let values = self.values();
            log::info!("form submitted for {}", values.username);
            self.status = Some(format!(
                "Form submitted ✓ Username: {} Email: {}",
                values.username, values.email
            ));
            true
        } else {
            log::debug!("form rejected: {} invalid field(s)", result.errors().len());
            self.status = None;
            false
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let mut rest = area;

        let mut place = |input: &Input, buf: &mut Buffer| {
            let (slot, below) = rest.split_top(input.height());
            input.render(buf, slot, theme);
            rest = below.shrink(1, 0, 0, 0);
            slot
        };
        let username = place(&self.username, buf);
        let email = place(&self.email, buf);
        let password = place(&self.password, buf);
        let disabled = place(&self.disabled, buf);

        let submit = rest
            .row(0)
            .map(|row| Rect::new(row.x, row.y, SUBMIT_LABEL.len() as u16, 1))
            .unwrap_or_default();
        if !submit.is_empty() {
            let mut style = Style::new().fg(theme.primary).bold();
            if self.focus == Focus::Submit {
                style = style.fg(theme.background).bg(theme.primary);
            }
            buf.put_str(submit.x, submit.y, SUBMIT_LABEL, style, rest.width);
        }

        if let (Some(status), Some(row)) = (&self.status, rest.row(2)) {
            let style = Style::new().fg(theme.success);
            buf.put_str(row.x, row.y, status, style, row.width);
        }

        self.areas = PageAreas {
            username,
            email,
            password,
            disabled,
            submit,
        };
    }
}

impl ComponentEvents for InputPage {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        match key {
            Key::Tab => {
                self.set_focus(self.focus.next());
                return EventResult::Consumed;
            }
            Key::BackTab => {
                self.set_focus(self.focus.prev());
                return EventResult::Consumed;
            }
            Key::Enter if self.focus == Focus::Submit => {
                self.submit();
                return EventResult::Consumed;
            }
            Key::Enter => {
                self.set_focus(self.focus.next());
                return EventResult::Consumed;
            }
            _ => {}
        }

        match self.input_mut(self.focus) {
            Some(input) => input.on_key(key, modifiers),
            None => EventResult::Ignored,
        }
    }

    fn on_click(&mut self, _area: Rect, x: u16, y: u16) -> EventResult {
        let areas = self.areas;
        if areas.submit.contains(x, y) {
            self.set_focus(Focus::Submit);
            self.submit();
            return EventResult::Consumed;
        }

        let targets = [
            (Focus::Username, areas.username),
            (Focus::Email, areas.email),
            (Focus::Password, areas.password),
        ];
        for (focus, rect) in targets {
            if rect.contains(x, y) {
                self.set_focus(focus);
                if let Some(input) = self.input_mut(focus) {
                    input.on_click(rect, x, y);
                }
                return EventResult::Consumed;
            }
        }

        // Clicks on the disabled input land but change nothing
        if areas.disabled.contains(x, y) {
            return self.disabled.on_click(areas.disabled, x, y);
        }
        EventResult::Ignored
    }
}
