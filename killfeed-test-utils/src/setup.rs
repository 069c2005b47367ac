use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;
use crate::fixtures::eve::EveFixtures;

/// A mock upstream server plus an in-memory database, the two external
/// dependencies every engine test needs.
pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock upstream, for building a client against it.
    pub fn esi_url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helpers for directory entities and their mock endpoints.
    pub fn eve(&mut self) -> EveFixtures<'_> {
        EveFixtures { setup: self }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every table the engine touches, for end-to-end ingest tests.
#[macro_export]
macro_rules! test_setup_with_killmail_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::EveAlliance),
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::EveItemType),
                schema.create_table_from_entity(entity::prelude::EveSolarSystem),
                schema.create_table_from_entity(entity::prelude::Killmail),
                schema.create_table_from_entity(entity::prelude::KillmailAttacker),
                schema.create_table_from_entity(entity::prelude::KillmailItem),
                schema.create_table_from_entity(entity::prelude::PriceSnapshot),
                schema.create_table_from_entity(entity::prelude::KillmailView),
                schema.create_table_from_entity(entity::prelude::KillmailParticipant),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
