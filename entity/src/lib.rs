pub mod prelude;
pub mod sea_orm_active_enums;

pub mod eve_alliance;
pub mod eve_character;
pub mod eve_corporation;
pub mod eve_item_type;
pub mod eve_solar_system;
pub mod killmail;
pub mod killmail_attacker;
pub mod killmail_item;
pub mod killmail_participant;
pub mod killmail_view;
pub mod price_snapshot;
