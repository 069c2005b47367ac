//! Entity directory repositories.
//!
//! Each repository caches one kind of game entity (characters, corporations,
//! alliances, item types, solar systems). All upserts are versioned: a write
//! only lands if its version is higher than the stored one, so stale
//! resolutions can never clobber fresher data regardless of arrival order.

pub mod alliance;
pub mod character;
pub mod corporation;
pub mod item_type;
pub mod solar_system;

pub use alliance::AllianceRepository;
pub use character::CharacterRepository;
pub use corporation::CorporationRepository;
pub use item_type::ItemTypeRepository;
pub use solar_system::{SolarSystemRecord, SolarSystemRepository};

#[cfg(test)]
mod tests;
