//! Data file preflight.

use std::path::Path;

/// Return the names from `required` that do not exist under `root`.
///
/// Names are reported verbatim and in the order given.
pub fn missing_data_files(root: &Path, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| {
            let present = root.join(name.as_str()).exists();
            tracing::debug!(file = %name, present, "Checked data file");
            !present
        })
        .cloned()
        .collect()
}
