//! Commands Layer
//!
//! Host-facing handlers, one per UI event of the rental screen.

mod cart_cmd;
mod file_cmd;
mod view_cmd;

pub use cart_cmd::*;
pub use file_cmd::*;
pub use view_cmd::*;
