pub use super::eve_alliance::Entity as EveAlliance;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::eve_item_type::Entity as EveItemType;
pub use super::eve_solar_system::Entity as EveSolarSystem;
pub use super::killmail::Entity as Killmail;
pub use super::killmail_attacker::Entity as KillmailAttacker;
pub use super::killmail_item::Entity as KillmailItem;
pub use super::killmail_participant::Entity as KillmailParticipant;
pub use super::killmail_view::Entity as KillmailView;
pub use super::price_snapshot::Entity as PriceSnapshot;
