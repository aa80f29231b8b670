pub mod add;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod reg;
pub mod report;
pub mod stats;
pub mod status;
pub mod undo;

use crate::config::Config;
use crate::store::EpisodeLog;
use crate::store::slot::StorageSlot;

/// Open the episode log backed by the configured storage slot.
pub(crate) fn open_log(cfg: &Config) -> EpisodeLog {
    EpisodeLog::open(StorageSlot::new(&cfg.storage))
}
