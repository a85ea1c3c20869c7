//! Pure functions turning gesture geometry into batches of [`Edit`]s.
//!
//! None of these look at editor state; the ones that need the grid size or
//! the current colors take the [`Picture`] explicitly.
//!
//! [`Edit`]: crate::picture::Edit
//! [`Picture`]: crate::picture::Picture

mod circle;
mod flood_fill;
mod line;
mod rectangle;

pub use circle::circle;
pub use flood_fill::flood_fill;
pub use line::line;
pub use rectangle::rectangle;
