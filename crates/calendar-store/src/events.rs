use tracing::{info, instrument};

use calendar_core::{Event, EventId, NewEvent};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

const TABLE: &str = "events";

/// CRUD over the `events` table.
#[derive(Clone)]
pub struct EventRepo {
    db: Database,
}

impl EventRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new event. The store assigns the id.
    #[instrument(skip(self, new), fields(date = %new.date))]
    pub fn create(&self, new: &NewEvent) -> Result<Event, StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO events (event, date) VALUES (?1, ?2)",
                rusqlite::params![new.name, row_helpers::format_date(new.date)],
            )?;
            let id = EventId::from_raw(conn.last_insert_rowid());
            info!(event_id = %id, "event created");

            Ok(Event {
                id,
                name: new.name.clone(),
                date: new.date,
            })
        })
    }

    /// All events in insertion order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, event, date FROM events ORDER BY id")?;
            let mut rows = stmt.query([])?;
            let mut events = Vec::new();
            while let Some(row) = rows.next()? {
                events.push(event_from_row(row)?);
            }
            Ok(events)
        })
    }

    /// Get an event by id.
    #[instrument(skip(self), fields(event_id = %id))]
    pub fn get(&self, id: EventId) -> Result<Event, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, event, date FROM events WHERE id = ?1")?;
            let mut rows = stmt.query([id.as_i64()])?;
            let event = match rows.next()? {
                Some(row) => event_from_row(row)?,
                None => return Err(StoreError::NotFound(format!("event {id}"))),
            };
            Ok(event)
        })
    }

    /// Permanently delete an event.
    #[instrument(skip(self), fields(event_id = %id))]
    pub fn delete(&self, id: EventId) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM events WHERE id = ?1", [id.as_i64()])?;
            if removed == 0 {
                return Err(StoreError::NotFound(format!("event {id}")));
            }
            info!("event deleted");
            Ok(())
        })
    }

    pub fn count(&self) -> Result<u64, StoreError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
            Ok(count.max(0) as u64)
        })
    }
}

fn event_from_row(row: &rusqlite::Row<'_>) -> Result<Event, StoreError> {
    let raw_date: String = row_helpers::get(row, 2, TABLE, "date")?;
    Ok(Event {
        id: EventId::from_raw(row_helpers::get(row, 0, TABLE, "id")?),
        name: row_helpers::get(row, 1, TABLE, "event")?,
        date: row_helpers::parse_date(&raw_date, TABLE, "date")?,
    })
}
