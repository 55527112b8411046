pub mod types;

pub use types::{AppEvent, Command, Reply};

#[cfg(test)]
mod tests;
