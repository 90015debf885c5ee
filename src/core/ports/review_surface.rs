//! Review surface port
//!
//! Where the outcome of a run is posted.

/// Annotation sink on the pull request
#[cfg_attr(test, mockall::automock)]
pub trait ReviewSurface {
    /// Post a non-blocking advisory warning
    fn warn(&self, text: &str);

    /// Post an informational message; may contain link markup
    fn message(&self, text: &str);
}
