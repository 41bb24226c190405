pub mod author;
pub mod contacts;
pub mod copyright;
pub mod layout;
pub mod menu;
pub mod page;
pub mod sidebar;
pub mod theme_toggler;

pub use author::Author;
pub use contacts::Contacts;
pub use copyright::Copyright;
pub use layout::Layout;
pub use menu::Menu;
pub use page::Page;
pub use sidebar::Sidebar;
pub use theme_toggler::ThemeToggler;
