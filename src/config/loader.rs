//! Engine policy loading.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EnginePolicy;

/// Loads an engine policy from a YAML file.
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file cannot be read and
/// [`EngineError::ConfigParseError`] when it is not valid YAML for
/// [`EnginePolicy`].
///
/// # Example
///
/// ```no_run
/// use checkin_engine::config::load_policy;
///
/// let policy = load_policy("./config/policy.yaml")?;
/// assert_eq!(policy.lookback_days, 30);
/// # Ok::<(), checkin_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<EnginePolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
