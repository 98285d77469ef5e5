use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use rand::Rng;

use crate::{gallery, model::Entry, pool::Pool, select};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty prompt pool")]
    EmptyPool,
}

/// One read-stamp-insert-write cycle against the gallery file.
pub struct Updater {
    gallery_path: PathBuf,
    pool: Pool,
}

impl Updater {
    pub fn new(gallery_path: impl Into<PathBuf>, pool: Pool) -> Self {
        Self {
            gallery_path: gallery_path.into(),
            pool,
        }
    }

    /// Returns the inserted entry. Nothing is written when load or
    /// selection fails; a failed write discards the new state.
    pub fn run<R>(&self, rng: &mut R) -> crate::Result<Entry>
    where
        R: Rng + ?Sized,
    {
        self.run_at(Local::now().date_naive(), rng)
    }

    fn run_at<R>(&self, today: NaiveDate, rng: &mut R) -> crate::Result<Entry>
    where
        R: Rng + ?Sized,
    {
        let mut entries = gallery::load(&self.gallery_path)?;

        let candidate =
            select::choose(self.pool.candidates(), &entries, rng).ok_or(Error::EmptyPool)?;

        let next_id = entries.iter().map(|e| e.id).max().map_or(1, |id| id + 1);
        let entry = candidate.stamp(next_id, today);

        // newest on top
        entries.insert(0, entry.clone());

        gallery::save(&self.gallery_path, &entries)?;

        tracing::info!("added: id = {}, title = {}", entry.id, entry.title);

        Ok(entry)
    }
}
