//! The demo's two pages.

mod input_page;
mod table_page;

pub use input_page::InputPage;
pub use table_page::TablePage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Input,
    Table,
}

impl Page {
    /// Navbar tab label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Table => "DataTable",
        }
    }
}
