mod help;
mod picker;
mod strip;

pub use help::render_help;
pub use picker::{get_layout_rects, render_picker, PickerLayout};
