/// Opaque handle grouping every virtual-text mark the session places, so the
/// host can clear them in one call without touching unrelated marks.
/// Internally a String (host-assigned key) but callers treat it as opaque.
///
/// Registered with the host once per session, on the first render of a
/// non-empty suggestion, and reused for every render after that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OverlayNamespace(pub String);

impl OverlayNamespace {
    /// Create a namespace from the host-assigned key.
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the internal string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
