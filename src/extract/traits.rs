use crate::table::KeyValueEntry;

/// Pulls ordered `(key, value)` entries out of one run's source object.
pub trait EntryExtractor {
    /// Object the entries are read from.
    type Source: ?Sized;

    /// Entries in discovery order; empty when the source carries no data.
    fn extract(&self, source: &Self::Source) -> Vec<KeyValueEntry>;
}
