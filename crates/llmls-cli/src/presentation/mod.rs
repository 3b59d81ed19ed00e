//! Output rendering for the CLI.
//!
//! The render functions are pure (records + width in, lines out) so
//! they can be unit tested; the print functions are thin stdout
//! wrappers around them.

pub mod detail;
pub mod table;
pub mod term;

pub use detail::print_detailed;
pub use table::print_compact;
pub use term::{description_column_width, terminal_width};
