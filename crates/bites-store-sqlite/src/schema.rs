//! SQL schema for the Bites SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The UNIQUE constraint on `name` spans soft-deleted rows: deleted
/// names stay reserved, and it is the serialisation point for
/// concurrent creates with the same name (the second writer sees a
/// constraint violation, never a silent overwrite). Creation order is
/// recoverable from the implicit rowid.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS reviews (
    review_id TEXT PRIMARY KEY,
    name      TEXT NOT NULL UNIQUE,
    location  TEXT NOT NULL,
    rating    INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    favorite  INTEGER NOT NULL DEFAULT 0,
    review    TEXT,
    deleted   INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS reviews_favorite_idx ON reviews(favorite, deleted);

PRAGMA user_version = 1;
";
