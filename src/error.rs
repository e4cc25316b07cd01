use thiserror::Error;

/// Errors surfaced by suggestion operations.
///
/// Host primitives are treated as infallible: the session only hands back
/// positions it read from the host within the same event, so an out-of-range
/// argument is a host bug, not an error this crate models.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestError {
    /// A formatting suspension was requested while a previous snapshot was
    /// still in flight. The guard refuses rather than overwriting the saved
    /// settings.
    #[error("auto-formatting already suspended; nested suspend would lose the saved settings")]
    NestedSuspend,
}
