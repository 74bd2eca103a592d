/// Command layer: drives one merge run from a resolved `MergeConfig`.
pub mod merge;

use crate::cli::OutputCtx;
use crate::report::{MergeConfig, ReportError};

/// Run the merge described by `config`.
///
/// # Errors
///
/// Returns `ReportError` if an input can't be read or the output can't be written.
pub fn dispatch(config: &MergeConfig, ctx: &OutputCtx) -> Result<(), ReportError> {
    merge::run(config, ctx)
}
