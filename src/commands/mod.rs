//! Command implementations

mod check;
mod init;

pub use check::check;
pub use init::init;
