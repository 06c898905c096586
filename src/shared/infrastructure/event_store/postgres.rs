// Postgres implementation of the EventStore port.
//
// Table
// - account_event(account_id UUID, event_id UUID, payload BYTEA), primary key (account_id, event_id).
// - Postgres compares UUIDs byte by byte, the same order as `Uuid`, so ORDER BY event_id
//   is replay order.
//
// `bootstrap` creates the table when it is missing and is safe to run on every start.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, StoredEvent};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use uuid::Uuid;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS account_event (\
     account_id UUID NOT NULL, \
     event_id UUID NOT NULL, \
     payload BYTEA NOT NULL, \
     PRIMARY KEY (account_id, event_id))";

#[derive(Clone)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, EventStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await
            .map_err(backend)?;
        Ok(Self::new(pool))
    }

    pub async fn bootstrap(&self) -> Result<(), EventStoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        tracing::debug!("account_event table ready");
        Ok(())
    }
}

fn backend(error: sqlx::Error) -> EventStoreError {
    EventStoreError::Backend(error.to_string())
}

#[async_trait]
impl EventStore for PostgresEventStore {
    async fn append(&self, event: StoredEvent) -> Result<(), EventStoreError> {
        let result = sqlx::query(
            "INSERT INTO account_event (account_id, event_id, payload) VALUES ($1, $2, $3)",
        )
        .bind(event.stream_id)
        .bind(event.event_id)
        .bind(&event.payload)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(error)) if error.is_unique_violation() => {
                Err(EventStoreError::DuplicateEvent {
                    stream_id: event.stream_id,
                    event_id: event.event_id,
                })
            }
            Err(error) => Err(backend(error)),
        }
    }

    async fn read_stream(&self, stream_id: Uuid) -> Result<Vec<StoredEvent>, EventStoreError> {
        let rows: Vec<(Uuid, Uuid, Vec<u8>)> = sqlx::query_as(
            "SELECT account_id, event_id, payload FROM account_event \
             WHERE account_id = $1 ORDER BY event_id ASC",
        )
        .bind(stream_id)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows
            .into_iter()
            .map(|(stream_id, event_id, payload)| StoredEvent {
                stream_id,
                event_id,
                payload,
            })
            .collect())
    }

    async fn list_stream_ids(&self) -> Result<Vec<Uuid>, EventStoreError> {
        sqlx::query_scalar("SELECT DISTINCT account_id FROM account_event ORDER BY account_id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)
    }
}
