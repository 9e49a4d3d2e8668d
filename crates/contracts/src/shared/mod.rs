pub mod config;
pub mod notification;
pub mod scheduler;
pub mod surface;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
