use rusqlite::Connection;

use crate::db::repository::MetaRepo;
use crate::progress::error::StoreError;
use crate::progress::store::KeyValueStore;

/// `KeyValueStore` backed by the `app_meta` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        MetaRepo::get(&self.conn, key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        MetaRepo::set(&self.conn, key, value)
    }
}
