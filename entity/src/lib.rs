//! Word sources shared by the puzzle solvers.
//!
//! Solvers never read a dictionary from ambient state. A binary picks a
//! [`WordSource`], calls [`load`] once, and hands the resulting words to the
//! solver it drives.

mod connection;
mod entities;
mod word_list;

pub use connection::*;
pub use entities::*;
pub use word_list::*;
