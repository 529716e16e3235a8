//! Screen rendering for roster.
//!
//! Stateless render functions over plain parameters; none of them mutate
//! the controller.

pub mod form;
pub mod header;
pub mod roster_table;
pub mod status_bar;
pub mod toast;

pub use form::render_form;
pub use header::render_header;
pub use roster_table::{render_list, ListParams};
pub use status_bar::render_status_bar;
pub use toast::render_toast;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
