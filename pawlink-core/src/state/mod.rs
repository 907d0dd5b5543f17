//! Creature state

pub mod pet;

pub use pet::Pet;
