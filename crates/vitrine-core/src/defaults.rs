/// Immutable table of safe-default constants handed to every adapter.
///
/// Kept as a value passed down the call chain rather than module-level
/// statics so tests and alternate deployments can substitute their own
/// placeholders.
#[derive(Debug, Clone)]
pub struct CatalogDefaults {
    /// Title used when a source record has no usable display name.
    pub placeholder_title: String,
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        Self {
            placeholder_title: "Untitled Product".to_string(),
        }
    }
}
