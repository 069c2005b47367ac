//! Killmail denormalization.
//!
//! Builds the display-ready view row and the by-entity participant index rows
//! for one killmail, resolving every referenced id through the directory and
//! pricing the hull and fitted items through the price oracle. Resolution
//! failures degrade to placeholders and mark the row for backfill; they never
//! fail the call. Missing prices contribute zero.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use futures::future;
use sea_orm::DbErr;

use entity::sea_orm_active_enums::EntityKind;

use crate::data::killmail::KillmailRepository;
use crate::data::view::{KillmailViewRepository, ParticipantRepository};
use crate::error::Error;
use crate::esi;
use crate::model::space;
use crate::service::directory::{
    DirectoryService, Resolution, ResolutionCache, UNKNOWN_NAME, UNKNOWN_TICKER,
};
use crate::service::price::PriceService;

pub struct DenormalizeService<'a> {
    db: &'a sea_orm::DatabaseConnection,
    directory: DirectoryService<'a>,
    price: PriceService<'a>,
}

impl<'a> DenormalizeService<'a> {
    pub fn new(
        db: &'a sea_orm::DatabaseConnection,
        esi_client: &'a esi::Client,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            db,
            directory: DirectoryService::new(db, esi_client, resolve_timeout),
            price: PriceService::new(db, esi_client, resolve_timeout),
        }
    }

    /// Recomputes and stores the view row and participant rows for a stored
    /// killmail. The emitted version is the computation timestamp, so a later
    /// pass with better resolutions supersedes this one.
    pub async fn denormalize(
        &self,
        cache: &mut ResolutionCache,
        killmail_id: i64,
    ) -> Result<entity::killmail_view::Model, Error> {
        let repository = KillmailRepository::new(self.db);

        let killmail = repository
            .get_by_killmail_id(killmail_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("killmail {}", killmail_id)))?;
        let attackers = repository.get_attackers(killmail_id).await?;
        let items = repository.get_items(killmail_id).await?;

        let mut needs_backfill = false;

        let system = self
            .directory
            .resolve_solar_system(cache, killmail.solar_system_id)
            .await?;
        needs_backfill |= system.is_unresolved();
        let (solar_system_name, region_id, region_name, space_type) = match &system {
            Resolution::Resolved(model) => (
                model.name.clone(),
                model.region_id,
                model.region_name.clone(),
                space::classify(model.region_id, model.security_status),
            ),
            Resolution::Unresolved => (
                UNKNOWN_NAME.to_string(),
                0,
                UNKNOWN_NAME.to_string(),
                space::classify(0, 0.0),
            ),
        };

        let victim_character = match killmail.victim_character_id {
            Some(id) => Some((id, self.directory.resolve_character(cache, id).await?)),
            None => None,
        };
        let victim_corporation = match killmail.victim_corporation_id {
            Some(id) => Some((id, self.directory.resolve_corporation(cache, id).await?)),
            None => None,
        };
        let victim_alliance = match killmail.victim_alliance_id {
            Some(id) => Some((id, self.directory.resolve_alliance(cache, id).await?)),
            None => None,
        };

        let victim_ship = self
            .directory
            .resolve_item_type(cache, killmail.victim_ship_type_id)
            .await?;
        needs_backfill |= victim_ship.is_unresolved();
        let victim_ship_name = victim_ship
            .as_resolved()
            .map(|model| model.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let final_blow = attackers.iter().find(|attacker| attacker.final_blow);
        let final_blow_character = match final_blow.and_then(|attacker| attacker.character_id) {
            Some(id) => Some((id, self.directory.resolve_character(cache, id).await?)),
            None => None,
        };
        let final_blow_corporation = match final_blow.and_then(|attacker| attacker.corporation_id)
        {
            Some(id) => Some((id, self.directory.resolve_corporation(cache, id).await?)),
            None => None,
        };
        let final_blow_alliance = match final_blow.and_then(|attacker| attacker.alliance_id) {
            Some(id) => Some((id, self.directory.resolve_alliance(cache, id).await?)),
            None => None,
        };

        needs_backfill |= victim_character
            .as_ref()
            .is_some_and(|(_, r)| r.is_unresolved())
            | victim_corporation
                .as_ref()
                .is_some_and(|(_, r)| r.is_unresolved())
            | victim_alliance
                .as_ref()
                .is_some_and(|(_, r)| r.is_unresolved())
            | final_blow_character
                .as_ref()
                .is_some_and(|(_, r)| r.is_unresolved())
            | final_blow_corporation
                .as_ref()
                .is_some_and(|(_, r)| r.is_unresolved())
            | final_blow_alliance
                .as_ref()
                .is_some_and(|(_, r)| r.is_unresolved());

        let kill_date = killmail.killmail_time.date();
        let ship_value = self
            .price
            .value_at(killmail.victim_ship_type_id, kill_date)
            .await?;

        let mut item_type_ids: Vec<i64> = items.iter().map(|item| item.item_type_id).collect();
        item_type_ids.sort_unstable();
        item_type_ids.dedup();

        let prices = future::try_join_all(
            item_type_ids
                .iter()
                .map(|type_id| self.price.value_at(*type_id, kill_date)),
        )
        .await?;
        let price_by_type: HashMap<i64, f64> =
            item_type_ids.into_iter().zip(prices).collect();

        let mut dropped_value = 0.0;
        let mut destroyed_value = 0.0;
        for item in &items {
            let unit_price = price_by_type
                .get(&item.item_type_id)
                .copied()
                .unwrap_or(0.0);
            dropped_value += unit_price * item.quantity_dropped as f64;
            destroyed_value += unit_price * item.quantity_destroyed as f64;
        }
        let total_value = ship_value + dropped_value + destroyed_value;

        let attacker_count = attackers.len() as i32;
        let is_npc =
            !attackers.is_empty() && attackers.iter().all(|attacker| attacker.character_id.is_none());
        let is_solo = attacker_count == 1
            && final_blow
                .map(|attacker| attacker.character_id.is_some())
                .unwrap_or(false);

        let version = Utc::now().timestamp_millis();
        let now = Utc::now().naive_utc();

        let view = entity::killmail_view::Model {
            killmail_id,
            version,
            killmail_time: killmail.killmail_time,
            solar_system_id: killmail.solar_system_id,
            solar_system_name,
            region_id,
            region_name,
            space_type,
            victim_character_id: victim_character.as_ref().map(|(id, _)| *id),
            victim_character_name: victim_character
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            victim_corporation_id: victim_corporation.as_ref().map(|(id, _)| *id),
            victim_corporation_name: victim_corporation
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            victim_corporation_ticker: victim_corporation
                .as_ref()
                .map(|(_, r)| resolved_ticker(r.as_resolved().map(|m| m.ticker.clone()))),
            victim_alliance_id: victim_alliance.as_ref().map(|(id, _)| *id),
            victim_alliance_name: victim_alliance
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            victim_alliance_ticker: victim_alliance
                .as_ref()
                .map(|(_, r)| resolved_ticker(r.as_resolved().map(|m| m.ticker.clone()))),
            victim_ship_type_id: killmail.victim_ship_type_id,
            victim_ship_name,
            final_blow_character_id: final_blow_character.as_ref().map(|(id, _)| *id),
            final_blow_character_name: final_blow_character
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            final_blow_corporation_id: final_blow_corporation.as_ref().map(|(id, _)| *id),
            final_blow_corporation_name: final_blow_corporation
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            final_blow_alliance_id: final_blow_alliance.as_ref().map(|(id, _)| *id),
            final_blow_alliance_name: final_blow_alliance
                .as_ref()
                .map(|(_, r)| resolved_name(r.as_resolved().map(|m| m.name.clone()))),
            final_blow_ship_type_id: final_blow.and_then(|attacker| attacker.ship_type_id),
            ship_value,
            dropped_value,
            destroyed_value,
            total_value,
            attacker_count,
            is_solo,
            is_npc,
            needs_backfill,
            updated_at: now,
        };

        let participants = build_participants(&view, &killmail, &attackers, version);

        KillmailViewRepository::new(self.db).put(view.clone()).await?;
        ParticipantRepository::new(self.db)
            .put_many(participants)
            .await?;

        tracing::debug!(
            killmail_id,
            total_value,
            needs_backfill,
            "killmail denormalized"
        );

        Ok(view)
    }
}

fn resolved_name(name: Option<String>) -> String {
    name.unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn resolved_ticker(ticker: Option<String>) -> String {
    ticker.unwrap_or_else(|| UNKNOWN_TICKER.to_string())
}

/// Expands one killmail into its participant index rows.
///
/// Victim-side identities get `is_victim`; every attacker identity gets
/// `is_attacker`, with `is_final_blow` on the final-blow attacker's ids.
/// Location rows (system, region) carry the kill-side flags so per-location
/// stats and leaderboards count kills that happened there. An identity that
/// appears on both sides of the same kill collapses into one row with both
/// flag sets.
fn build_participants(
    view: &entity::killmail_view::Model,
    killmail: &entity::killmail::Model,
    attackers: &[entity::killmail_attacker::Model],
    version: i64,
) -> Vec<entity::killmail_participant::Model> {
    let mut rows: HashMap<(EntityKind, i64), entity::killmail_participant::Model> = HashMap::new();

    let mut merge = |kind: EntityKind, id: i64, victim: bool, attacker: bool, final_blow: bool| {
        let row = rows
            .entry((kind, id))
            .or_insert_with(|| entity::killmail_participant::Model {
                killmail_id: view.killmail_id,
                entity_kind: kind,
                entity_id: id,
                version,
                killmail_time: view.killmail_time,
                total_value: view.total_value,
                is_victim: false,
                is_final_blow: false,
                is_attacker: false,
                is_solo: view.is_solo,
                is_npc: view.is_npc,
            });
        row.is_victim |= victim;
        row.is_attacker |= attacker;
        row.is_final_blow |= final_blow;
    };

    if let Some(id) = killmail.victim_character_id {
        merge(EntityKind::Character, id, true, false, false);
    }
    if let Some(id) = killmail.victim_corporation_id {
        merge(EntityKind::Corporation, id, true, false, false);
    }
    if let Some(id) = killmail.victim_alliance_id {
        merge(EntityKind::Alliance, id, true, false, false);
    }
    merge(
        EntityKind::Type,
        killmail.victim_ship_type_id,
        true,
        false,
        false,
    );

    for attacker in attackers {
        if let Some(id) = attacker.character_id {
            merge(EntityKind::Character, id, false, true, attacker.final_blow);
        }
        if let Some(id) = attacker.corporation_id {
            merge(
                EntityKind::Corporation,
                id,
                false,
                true,
                attacker.final_blow,
            );
        }
        if let Some(id) = attacker.alliance_id {
            merge(EntityKind::Alliance, id, false, true, attacker.final_blow);
        }
        if let Some(id) = attacker.ship_type_id {
            merge(EntityKind::Type, id, false, true, attacker.final_blow);
        }
    }

    merge(
        EntityKind::System,
        killmail.solar_system_id,
        false,
        true,
        true,
    );
    if view.region_id != 0 {
        merge(EntityKind::Region, view.region_id, false, true, true);
    }

    rows.into_values().collect()
}
