pub use sea_orm_migration::prelude::*;

mod m20260110_000001_eve_alliance;
mod m20260110_000002_eve_corporation;
mod m20260110_000003_eve_character;
mod m20260110_000004_eve_item_type;
mod m20260110_000005_eve_solar_system;
mod m20260110_000006_killmail;
mod m20260110_000007_killmail_attacker;
mod m20260110_000008_killmail_item;
mod m20260110_000009_price_snapshot;
mod m20260110_000010_killmail_view;
mod m20260110_000011_killmail_participant;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_eve_alliance::Migration),
            Box::new(m20260110_000002_eve_corporation::Migration),
            Box::new(m20260110_000003_eve_character::Migration),
            Box::new(m20260110_000004_eve_item_type::Migration),
            Box::new(m20260110_000005_eve_solar_system::Migration),
            Box::new(m20260110_000006_killmail::Migration),
            Box::new(m20260110_000007_killmail_attacker::Migration),
            Box::new(m20260110_000008_killmail_item::Migration),
            Box::new(m20260110_000009_price_snapshot::Migration),
            Box::new(m20260110_000010_killmail_view::Migration),
            Box::new(m20260110_000011_killmail_participant::Migration),
        ]
    }
}
