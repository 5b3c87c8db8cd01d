//! Domain models for the GoodEats service.

pub mod restaurant;

pub use restaurant::Restaurant;
