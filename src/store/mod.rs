//! Episode Log: the authoritative in-memory episode list plus the storage
//! slot it mirrors. Every mutating operation ends with the same commit
//! step: recalculate the derived intervals over the full set, then
//! overwrite the durable snapshot.

pub mod slot;

use crate::errors::AppResult;
use crate::models::episode::Episode;
use crate::utils::time::compose_local;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use slot::StorageSlot;
use std::cmp::Reverse;

pub struct EpisodeLog {
    episodes: Vec<Episode>,
    slot: StorageSlot,
}

impl EpisodeLog {
    /// Load the log from its slot. An absent slot starts an empty log; a
    /// corrupt one is logged and reset to empty, never surfaced as an
    /// error to the caller.
    pub fn open(slot: StorageSlot) -> Self {
        let episodes = match slot.read() {
            Ok(Some(mut eps)) => {
                // Sort newest-first just in case the snapshot was stored unsorted
                eps.sort_by_key(|e| Reverse(e.timestamp));
                eps
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("{}; resetting to an empty log", e);
                Vec::new()
            }
        };

        Self { episodes, slot }
    }

    /// Snapshot of the log, ordered newest-first.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == id)
    }

    /// Register an episode happening right now. Returns the new id.
    pub fn add(&mut self, now: DateTime<Local>) -> AppResult<String> {
        let ep = Episode::new(now, "");
        let id = ep.id.clone();
        self.episodes.insert(0, ep);
        self.commit()?;
        Ok(id)
    }

    /// Backfill an episode at an arbitrary local date and time.
    pub fn add_manual(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        notes: &str,
    ) -> AppResult<String> {
        let at = compose_local(date, time)?;
        let ep = Episode::new(at, notes);
        let id = ep.id.clone();
        self.episodes.push(ep);
        self.commit()?;
        Ok(id)
    }

    /// Remove the chronologically newest episode (bounded undo of the last
    /// registration). Returns it, or None if the log was already empty.
    pub fn remove_newest(&mut self) -> AppResult<Option<Episode>> {
        if self.episodes.is_empty() {
            return Ok(None);
        }
        let ep = self.episodes.remove(0);
        self.commit()?;
        Ok(Some(ep))
    }

    /// Move an episode to a new time of day on its existing calendar date
    /// and replace its notes. The date component never changes. Returns
    /// false (no-op) when the id is unknown.
    pub fn edit(&mut self, id: &str, new_time: NaiveTime, new_notes: &str) -> AppResult<bool> {
        let Some(pos) = self.episodes.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let date = self.episodes[pos].date_naive().ok_or_else(|| {
            crate::errors::AppError::InvalidDate(self.episodes[pos].date.clone())
        })?;
        let at = compose_local(date, new_time)?;

        let ep = &mut self.episodes[pos];
        ep.set_instant(at);
        ep.notes = new_notes.to_string();

        self.commit()?;
        Ok(true)
    }

    /// Delete an episode by id. Returns false (no-op) when not found.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.episodes.len();
        self.episodes.retain(|e| e.id != id);
        if self.episodes.len() == before {
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    /// Wholesale replacement of the log (used by import). The caller has
    /// already validated the incoming records. Returns the new size.
    pub fn replace_all(&mut self, list: Vec<Episode>) -> AppResult<usize> {
        self.episodes = list;
        self.commit()?;
        Ok(self.episodes.len())
    }

    fn commit(&mut self) -> AppResult<()> {
        recalculate_intervals(&mut self.episodes);
        self.slot.write(&self.episodes)
    }
}

/// The single derivation pass run after every mutation: sort newest-first
/// (stable, so equal timestamps keep their relative order), then set each
/// episode's interval to the floored minute delta from the next-older one.
/// The oldest episode always ends with `interval = None`.
pub fn recalculate_intervals(episodes: &mut [Episode]) {
    episodes.sort_by_key(|e| Reverse(e.timestamp));

    for i in 0..episodes.len() {
        episodes[i].interval = if i + 1 < episodes.len() {
            let delta_ms = episodes[i].timestamp - episodes[i + 1].timestamp;
            Some(delta_ms.div_euclid(60_000))
        } else {
            None
        };
    }
}
