//! UI components module

pub mod dialogs;
pub mod header;
pub mod help_panel;
pub mod item_list;
pub mod search_bar;
pub mod status_bar;
pub mod toast_popup;

pub use header::Header;
pub use help_panel::HelpPanel;
pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use toast_popup::ToastPopup;
