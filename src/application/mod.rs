//! Application Use Cases
//!
//! One use case per operation. Each holds the gateways it needs and exposes
//! `execute`, returning an `AppResult`.

pub mod cast_member;
pub mod category;
pub mod genre;

#[cfg(test)]
mod fakes;
