use std::{fmt, sync::Arc};

/// Stable key for a geographic area (e.g. an ONS area code or a census FIPS code).
/// Keep the original identifier text (with leading zeros) but avoid repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoId(Arc<str>);

impl GeoId {
    pub fn new(id: &str) -> Self { Self(Arc::from(id)) }

    /// Get the identifier text.
    #[inline] pub fn id(&self) -> &str { &self.0 }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeoId {
    fn from(id: &str) -> Self { Self::new(id) }
}

#[cfg(test)]
mod tests {
    use super::GeoId;

    #[test]
    fn keeps_leading_zeros() {
        let id = GeoId::new("01001");
        assert_eq!(id.id(), "01001");
        assert_eq!(id.to_string(), "01001");
    }

    #[test]
    fn orders_by_text() {
        let mut ids = vec![GeoId::new("E09"), GeoId::new("E06"), GeoId::new("E07")];
        ids.sort();
        assert_eq!(ids.iter().map(GeoId::id).collect::<Vec<_>>(), vec!["E06", "E07", "E09"]);
    }
}
