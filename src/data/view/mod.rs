//! Materialized view store.
//!
//! Versioned replace-on-conflict storage for everything derived from the
//! event store: the denormalized killmail rows and the by-entity participant
//! index. Writers only ever append a (key, version) pair; the upsert guard
//! `WHERE excluded.version > version` makes the highest version win
//! regardless of the write order storage observes, so readers never see a
//! superseded row and no compaction pass is needed.

pub mod killmail_view;
pub mod participant;

pub use killmail_view::KillmailViewRepository;
pub use participant::ParticipantRepository;

use migration::Condition;
use sea_orm::ColumnTrait;

use entity::sea_orm_active_enums::EntityKind;

/// Condition matching denormalized rows a given entity appears on, as victim
/// or final-blow attacker, or (for locations) where the kill happened.
pub(crate) fn view_entity_condition(entity_kind: EntityKind, entity_id: i64) -> Condition {
    use entity::killmail_view::Column;

    match entity_kind {
        EntityKind::Character => Condition::any()
            .add(Column::VictimCharacterId.eq(entity_id))
            .add(Column::FinalBlowCharacterId.eq(entity_id)),
        EntityKind::Corporation => Condition::any()
            .add(Column::VictimCorporationId.eq(entity_id))
            .add(Column::FinalBlowCorporationId.eq(entity_id)),
        EntityKind::Alliance => Condition::any()
            .add(Column::VictimAllianceId.eq(entity_id))
            .add(Column::FinalBlowAllianceId.eq(entity_id)),
        EntityKind::Type => Condition::any().add(Column::VictimShipTypeId.eq(entity_id)),
        EntityKind::System => Condition::any().add(Column::SolarSystemId.eq(entity_id)),
        EntityKind::Region => Condition::any().add(Column::RegionId.eq(entity_id)),
    }
}
