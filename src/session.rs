use crate::annotation::Annotation;
use crate::commit;
use crate::config::SuggestConfig;
use crate::error::SuggestError;
use crate::format_guard::FormattingGuard;
use crate::host::EditorHost;
use crate::overlay::OverlayNamespace;
use crate::suggestion::Suggestion;
use crate::viewport;

/// One suggestion session per editing session.
///
/// Owns the overlay namespace and the formatting snapshot, so two sessions
/// never trample each other's state and the formatting guard can refuse a
/// nested suspend instead of silently losing the saved settings.
///
/// Every operation runs synchronously on the host's interaction thread;
/// the `&mut self` receivers put the one-operation-at-a-time rule into the
/// type system.
pub struct SuggestionSession {
    config: SuggestConfig,
    namespace: Option<OverlayNamespace>,
    guard: FormattingGuard,
}

impl SuggestionSession {
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config,
            namespace: None,
            guard: FormattingGuard::new(),
        }
    }

    /// Draw `suggestion` as ghost text at the cursor.
    ///
    /// An empty or absent suggestion draws nothing and touches nothing: no
    /// namespace is registered and no marks are cleared. A non-empty one
    /// replaces whatever the previous render left behind.
    pub fn render_suggestion(&mut self, host: &mut impl EditorHost, suggestion: Option<&Suggestion>) {
        let style = self.config.highlight.style();
        let Some(annotation) = suggestion.and_then(|s| Annotation::from_suggestion(s, style)) else {
            return;
        };

        // Register once, reuse forever: clearing by namespace only works
        // when every render writes into the same one.
        let ns = match &self.namespace {
            Some(ns) => ns.clone(),
            None => {
                let ns = host.register_namespace(&self.config.namespace_label);
                self.namespace = Some(ns.clone());
                ns
            }
        };
        host.clear_namespace(&ns);

        let cursor = host.cursor();
        if viewport::needs_recenter(host.viewport(), cursor.row, annotation.height()) {
            tracing::debug!(
                cursor_row = cursor.row,
                height = annotation.height(),
                "recentering viewport before draw"
            );
            host.recenter_on_cursor();
        }

        tracing::debug!(
            height = annotation.height(),
            row = cursor.row,
            col = cursor.col,
            "rendering ghost text"
        );
        host.place_inline_mark(&ns, cursor, &annotation.inline);
        if !annotation.below.is_empty() {
            host.place_virtual_lines(&ns, cursor.row, &annotation.below);
        }
    }

    /// Remove this session's ghost text from the current buffer.
    ///
    /// Safe to call before the first render (no namespace yet) or twice in
    /// a row; both are no-ops.
    pub fn clear_suggestion(&mut self, host: &mut impl EditorHost) {
        if let Some(ns) = &self.namespace {
            host.clear_namespace(ns);
        }
    }

    /// Accept `suggestion`: splice its lines into the buffer at the cursor,
    /// with auto-formatting suspended and the edit joined to the previous
    /// undo step.
    pub fn commit_suggestion(
        &mut self,
        host: &mut impl EditorHost,
        suggestion: &Suggestion,
    ) -> Result<(), SuggestError> {
        commit::commit(host, suggestion, &mut self.guard)
    }

    /// Fallback input path: hand the keypress back to the host as a
    /// literal tab.
    pub fn feed_fallback_key(&mut self, host: &mut impl EditorHost) {
        host.insert_tab();
    }
}
