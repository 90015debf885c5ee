//! Project key validation

use crate::core::LinkError;

/// Check that at least one usable project key is configured
///
/// Runs before any pattern is built: an empty alternation would either fail
/// to compile or match a bare `-<digits>`.
pub fn validate_project_keys<S: AsRef<str>>(project_keys: &[S]) -> Result<(), LinkError> {
    if project_keys.is_empty() {
        return Err(LinkError::MissingProjectKey);
    }

    if let Some(index) = project_keys.iter().position(|key| key.as_ref().trim().is_empty()) {
        return Err(LinkError::BlankProjectKey { index });
    }

    Ok(())
}
