//! Data source adapter: thin wrapper around the sync MongoDB client.
//! The whole collection is pulled into memory unconditionally; there is
//! no pagination and no server-side filtering.

use crate::config::Config;
use crate::errors::AppResult;
use crate::table::AttendanceTable;
use mongodb::bson::Document;
use mongodb::sync::{Client, Collection};

pub struct DataSource {
    collection: Collection<Document>,
}

impl DataSource {
    /// Open a client for the configured URI and select the attendance
    /// collection. Connection or auth failures are fatal to the session.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&cfg.mongo_uri)?;
        let collection = client
            .database(&cfg.database)
            .collection::<Document>(&cfg.collection);
        Ok(Self { collection })
    }

    /// Fetch every document of the collection.
    pub fn fetch_all(&self) -> AppResult<Vec<Document>> {
        let cursor = self.collection.find(Document::new()).run()?;

        let mut docs = Vec::new();
        for doc in cursor {
            docs.push(doc?);
        }
        Ok(docs)
    }
}

/// One reporting session: the connection handle plus the snapshot table
/// fetched at open time. Concurrent external writes are not observed
/// until the next session.
pub struct Session {
    pub source: DataSource,
    pub table: AttendanceTable,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let source = DataSource::connect(cfg)?;
        let docs = source.fetch_all()?;
        let table = AttendanceTable::from_documents(&docs);
        Ok(Self { source, table })
    }
}
