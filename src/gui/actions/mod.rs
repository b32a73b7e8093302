// src/gui/actions/mod.rs
mod copy;
mod fetch;
mod load;

pub use copy::copy;
pub use fetch::fetch_scrobbles;
pub use load::load;
