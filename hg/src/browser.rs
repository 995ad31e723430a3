//! Opening generated files in the default browser

use std::path::Path;

use tracing::debug;

use crate::error::{GenError, GenResult};

/// Open a file with its default handler without waiting for the viewer to exit
pub fn open_in_browser(path: &Path) -> GenResult<()> {
    debug!(path = %path.display(), "open_in_browser: called");
    open::that_detached(path).map_err(|e| GenError::filesystem(path, e))
}
