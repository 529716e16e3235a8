//! UI layout constants.

/// Rows taken by the application header
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the footer (copyright + key hints)
pub const FOOTER_HEIGHT: u16 = 2;
/// Rows of the search box (with border)
pub const SEARCH_HEIGHT: u16 = 3;
/// Spacing between buttons in modal dialogs
pub const MODAL_BUTTON_SPACING: u16 = 4;
/// Maximum width of the record form
pub const FORM_MAX_WIDTH: u16 = 64;
/// Width of the field label column in the form
pub const FORM_LABEL_WIDTH: u16 = 8;
/// Maximum width of the toast banner
pub const TOAST_MAX_WIDTH: u16 = 48;
/// Rows scrolled by PageUp / PageDown in the table
pub const PAGE_SCROLL_ROWS: isize = 10;
