//! Configuration options for building a registry.

/// Configuration options for [`Registry::new`](super::Registry::new).
///
/// # Example
///
/// ```
/// use tally_core::api::RegistryOptions;
///
/// // Reproducible evaluation: leave out `rnd`.
/// let options = RegistryOptions {
///     include_nondeterministic: false,
///     ..RegistryOptions::default()
/// };
/// assert!(options.include_stdlib);
/// ```
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// Register the built-in functions.
    ///
    /// Default: true
    pub include_stdlib: bool,

    /// Register built-ins whose results vary between calls (`rnd`).
    /// Has no effect without `include_stdlib`.
    ///
    /// Default: true
    pub include_nondeterministic: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            include_stdlib: true,
            include_nondeterministic: true,
        }
    }
}
