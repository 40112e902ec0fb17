use crate::cancel::CancelToken;
use crate::history::History;
use crate::options::Options;
use crate::undo::{undo_last, UndoReport};
use anyhow::Result;

/// Undo the most recent committed batch.
pub fn undo_operation(
    history: &mut History,
    options: &Options,
    cancel: &CancelToken,
) -> Result<UndoReport> {
    Ok(undo_last(history, options, cancel))
}
