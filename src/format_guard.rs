use crate::error::SuggestError;
use crate::host::FormattingControl;

/// The four buffer-local settings that reformat text as it is typed.
///
/// Captured before a commit and restored after it, so a programmatic insert
/// is never re-indented or re-wrapped by the host while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingSettings {
    /// Copy the current line's indent onto a new line.
    pub auto_indent: bool,

    /// Language-aware indentation on new lines.
    pub smart_indent: bool,

    /// Host-specific auto-format flags (empty = none).
    pub format_options: String,

    /// Hard-wrap column (0 = off).
    pub text_width: u16,
}

impl FormattingSettings {
    /// The no-auto-formatting values applied while a commit is writing.
    pub fn suspended() -> Self {
        Self {
            auto_indent: false,
            smart_indent: false,
            format_options: String::new(),
            text_width: 0,
        }
    }
}

/// Single-slot suspend/restore pair owned by the session.
///
/// At most one snapshot is in flight at a time; suspending again before the
/// matching restore is refused so the saved settings cannot be lost.
#[derive(Debug, Default)]
pub struct FormattingGuard {
    saved: Option<FormattingSettings>,
}

impl FormattingGuard {
    pub fn new() -> Self {
        Self { saved: None }
    }

    /// Snapshot the host's formatting settings, then force the suspended
    /// values.
    pub fn suspend<H: FormattingControl + ?Sized>(&mut self, host: &mut H) -> Result<(), SuggestError> {
        if self.saved.is_some() {
            return Err(SuggestError::NestedSuspend);
        }
        let snapshot = host.snapshot();
        tracing::trace!(?snapshot, "suspending auto-formatting");
        self.saved = Some(snapshot);
        host.apply(&FormattingSettings::suspended());
        Ok(())
    }

    /// Write back the exact values captured by the matching `suspend`.
    /// A no-op when nothing is suspended.
    pub fn restore<H: FormattingControl + ?Sized>(&mut self, host: &mut H) {
        if let Some(saved) = self.saved.take() {
            tracing::trace!(?saved, "restoring auto-formatting");
            host.apply(&saved);
        }
    }

    /// True while a snapshot is in flight.
    pub fn is_suspended(&self) -> bool {
        self.saved.is_some()
    }
}
