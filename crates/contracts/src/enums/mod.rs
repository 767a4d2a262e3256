pub mod highlight_color;
pub mod view;

pub use highlight_color::HighlightColor;
pub use view::View;
