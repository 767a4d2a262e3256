//! Page layout:
//! ```text
//! +------------------------------------------+
//! |  NavBarTop (fixed)                       |
//! +------------------------------------------+
//! |  Center: page for the current view       |
//! +------------------------------------------+
//! ```

pub mod center;
pub mod global_context;
pub mod top_header;
