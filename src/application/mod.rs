//! Application layer: session state and the services that mutate it.

pub mod clock;
pub mod error;
pub mod gateway;
pub mod navigation;
pub mod repos;
pub mod search;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
