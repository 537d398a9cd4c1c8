//! [`SqliteStore`] — the SQLite implementation of [`ReviewStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use bites_core::{
  review::{NewReview, Review, validate_rating},
  store::ReviewStore,
};

use crate::{
  Error, Result,
  encode::{RawReview, REVIEW_COLUMNS, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Bites review store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Look up the `deleted` flag for a review, `None` if the id is
  /// absent entirely. Used by [`delete_review`](ReviewStore::delete_review)
  /// to distinguish not-found from already-deleted.
  async fn delete_state(&self, id: Uuid) -> Result<Option<bool>> {
    let id_str = encode_uuid(id);

    let state: Option<bool> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT deleted FROM reviews WHERE review_id = ?1",
              rusqlite::params![id_str],
              |r| r.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(state)
  }

  /// Run a single-column `UPDATE` restricted to live rows, then
  /// re-read the record. A zero row count means the id is absent or
  /// soft-deleted — not-found either way, per the visibility rule.
  async fn update_live<P>(
    &self,
    id: Uuid,
    sql: &'static str,
    value: P,
  ) -> Result<Review>
  where
    P: rusqlite::ToSql + Send + 'static,
  {
    let id_str = encode_uuid(id);

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(sql, rusqlite::params![value, id_str])?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::Core(bites_core::Error::ReviewNotFound(id)));
    }
    self.get_review(id).await
  }
}

/// Whether a rusqlite error is a UNIQUE-constraint violation.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── ReviewStore impl ────────────────────────────────────────────────────────

impl ReviewStore for SqliteStore {
  type Error = Error;

  async fn create_review(&self, input: NewReview) -> Result<Review> {
    input.validate().map_err(Error::Core)?;

    let review = Review {
      id:       Uuid::new_v4(),
      name:     input.name,
      location: input.location,
      rating:   input.rating,
      favorite: input.favorite,
      review:   input.review,
      deleted:  false,
    };

    let id_str = encode_uuid(review.id);
    let name = review.name.clone();
    let location = review.location.clone();
    let rating = review.rating;
    let favorite = review.favorite;
    let text = review.review.clone();

    let inserted = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reviews (review_id, name, location, rating, favorite, review, deleted)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0)",
          rusqlite::params![id_str, name, location, rating, favorite, text],
        )?;
        Ok(())
      })
      .await;

    match inserted {
      Ok(()) => {
        tracing::info!(id = %review.id, name = %review.name, "review created");
        Ok(review)
      }
      Err(tokio_rusqlite::Error::Rusqlite(e)) if is_unique_violation(&e) => {
        Err(Error::Core(bites_core::Error::DuplicateName(review.name)))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn get_review(&self, id: Uuid) -> Result<Review> {
    let id_str = encode_uuid(id);

    let raw: Option<RawReview> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {REVIEW_COLUMNS} FROM reviews WHERE review_id = ?1"
              ),
              rusqlite::params![id_str],
              RawReview::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    // A soft-deleted row is indistinguishable from an absent one here.
    match raw {
      Some(r) if !r.deleted => r.into_review(),
      _ => Err(Error::Core(bites_core::Error::ReviewNotFound(id))),
    }
  }

  async fn get_review_by_name(&self, name: &str) -> Result<Review> {
    let name_param = name.to_owned();

    let raw: Option<RawReview> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE name = ?1"),
              rusqlite::params![name_param],
              RawReview::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    match raw {
      Some(r) if !r.deleted => r.into_review(),
      _ => Err(Error::Core(bites_core::Error::ReviewNameNotFound(
        name.to_owned(),
      ))),
    }
  }

  async fn delete_review(&self, id: Uuid) -> Result<()> {
    match self.delete_state(id).await? {
      None => {
        return Err(Error::Core(bites_core::Error::ReviewNotFound(id)));
      }
      Some(true) => {
        return Err(Error::Core(bites_core::Error::AlreadyDeleted(id)));
      }
      Some(false) => {}
    }

    let id_str = encode_uuid(id);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE reviews SET deleted = 1 WHERE review_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::info!(id = %id, "review soft-deleted");
    Ok(())
  }

  async fn update_review_text(&self, id: Uuid, text: String) -> Result<Review> {
    self
      .update_live(
        id,
        "UPDATE reviews SET review = ?1 WHERE review_id = ?2 AND deleted = 0",
        text,
      )
      .await
  }

  async fn update_rating(&self, id: Uuid, rating: i32) -> Result<Review> {
    // Range check before any storage access.
    validate_rating(rating).map_err(Error::Core)?;

    self
      .update_live(
        id,
        "UPDATE reviews SET rating = ?1 WHERE review_id = ?2 AND deleted = 0",
        rating,
      )
      .await
  }

  async fn update_favorite(&self, id: Uuid, favorite: bool) -> Result<Review> {
    self
      .update_live(
        id,
        "UPDATE reviews SET favorite = ?1 WHERE review_id = ?2 AND deleted = 0",
        favorite,
      )
      .await
  }

  async fn list_favorites(&self) -> Result<Vec<Review>> {
    let raws: Vec<RawReview> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {REVIEW_COLUMNS} FROM reviews
           WHERE favorite = 1 AND deleted = 0
           ORDER BY rowid"
        ))?;
        let rows = stmt
          .query_map([], RawReview::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReview::into_review).collect()
  }

  async fn clear_all(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM reviews", [])?;
        Ok(())
      })
      .await?;

    tracing::warn!("review store cleared");
    Ok(())
  }
}
