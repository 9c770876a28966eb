//! Demo application shell: navbar, page switching, theme toggle and the
//! event loop.

use std::time::Duration;

use datagrid::prelude::*;
use datagrid::{Terminal, text::display_width};

use crate::config::DemoConfig;
use crate::pages::{InputPage, Page, TablePage};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const HELP: &str = "F1 Input  F2 DataTable  F5 Theme  Tab Focus  Ctrl+Q Quit";

/// Rows taken by the navbar and the blank row under it.
const NAVBAR_HEIGHT: u16 = 2;

/// Navbar items and where they were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavItem {
    Tab(Page),
    ThemeToggle,
}

pub struct App {
    page: Page,
    theme_mode: ThemeMode,
    theme: Theme,
    input_page: InputPage,
    table_page: TablePage,
    size: (u16, u16),
    should_quit: bool,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            page: config.start_page,
            theme_mode: config.theme,
            theme: Theme::for_mode(config.theme),
            input_page: InputPage::new(),
            table_page: TablePage::new(),
            size: (0, 0),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> std::io::Result<()> {
        self.size = terminal.size();
        log::info!("starting on {:?} page, {} theme", self.page, self.theme_mode.name());

        while !self.should_quit {
            terminal.draw(|buf| self.render(buf))?;
            for event in terminal.poll(POLL_INTERVAL)? {
                self.handle_event(event);
            }
        }

        log::info!("quit requested");
        Ok(())
    }

    fn switch_page(&mut self, page: Page) {
        if self.page != page {
            log::info!("switched to {} page", page.title());
            self.page = page;
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::for_mode(self.theme_mode);
        log::info!("theme set to {}", self.theme_mode.name());
    }

    /// Label of the theme toggle: the mode it switches to.
    fn toggle_label(&self) -> String {
        match self.theme_mode {
            ThemeMode::Light => "◐ Dark".to_string(),
            ThemeMode::Dark => "◐ Light".to_string(),
        }
    }

    /// Navbar items with their clickable rects.
    fn nav_items(&self) -> Vec<(NavItem, Rect)> {
        let mut items = Vec::new();
        let mut x = 1;
        for page in [Page::Input, Page::Table] {
            let width = display_width(page.title()) as u16 + 2;
            items.push((NavItem::Tab(page), Rect::new(x, 0, width, 1)));
            x += width + 1;
        }

        let label_width = display_width(&self.toggle_label()) as u16 + 2;
        let toggle_x = self.size.0.saturating_sub(label_width + 1).max(x);
        items.push((NavItem::ThemeToggle, Rect::new(toggle_x, 0, label_width, 1)));
        items
    }

    fn content_area(&self) -> Rect {
        let (width, height) = self.size;
        Rect::from_size(width, height).shrink(NAVBAR_HEIGHT, 1, 1, 1)
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize { width, height } => self.size = (width, height),
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y),
            Event::Click { .. } => {}
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Char('q' | 'c') if modifiers.ctrl => {
                self.should_quit = true;
                return;
            }
            Key::F(1) => return self.switch_page(Page::Input),
            Key::F(2) => return self.switch_page(Page::Table),
            Key::F(5) => return self.toggle_theme(),
            _ => {}
        }

        let result = match self.page {
            Page::Input => self.input_page.on_key(key, modifiers),
            Page::Table => self.table_page.on_key(key, modifiers),
        };
        if !result.is_consumed() {
            log::trace!("unhandled key {key:?} on {} page", self.page.title());
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let hit = self
            .nav_items()
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y));
        match hit {
            Some((NavItem::Tab(page), _)) => return self.switch_page(page),
            Some((NavItem::ThemeToggle, _)) => return self.toggle_theme(),
            None => {}
        }

        let area = self.content_area();
        match self.page {
            Page::Input => self.input_page.on_click(area, x, y),
            Page::Table => self.table_page.on_click(area, x, y),
        };
    }

    pub fn render(&mut self, buf: &mut Buffer) {
        let theme = self.theme.clone();
        self.size = (buf.width(), buf.height());
        let screen = buf.area();
        buf.fill(screen, Style::new().fg(theme.foreground).bg(theme.background));

        if let Some(navbar) = screen.row(0) {
            buf.fill(navbar, Style::new().bg(theme.surface));
        }
        for (item, rect) in self.nav_items() {
            let (label, style) = match item {
                NavItem::Tab(page) if page == self.page => (
                    page.title().to_string(),
                    Style::new().fg(theme.background).bg(theme.primary).bold(),
                ),
                NavItem::Tab(page) => (page.title().to_string(), Style::new().fg(theme.foreground)),
                NavItem::ThemeToggle => (self.toggle_label(), Style::new().fg(theme.muted)),
            };
            buf.fill(rect, style);
            buf.put_str(rect.x + 1, rect.y, &label, style, rect.width.saturating_sub(1));
        }

        let content = self.content_area();
        match self.page {
            Page::Input => self.input_page.render(buf, content, &theme),
            Page::Table => self.table_page.render(buf, content, &theme),
        }

        if let Some(footer) = screen.row(screen.height.saturating_sub(1)) {
            let style = Style::new().fg(theme.muted);
            buf.put_str(footer.x + 1, footer.y, HELP, style, footer.width.saturating_sub(1));
        }
    }
}
