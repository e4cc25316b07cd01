use crate::annotation::AnnotationFragment;
use crate::format_guard::FormattingSettings;
use crate::overlay::OverlayNamespace;

/// Cursor position: zero-based row, byte offset within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub row: usize,
    pub col: usize,
}

impl CursorPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Viewport geometry as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    /// Buffer row of the first visible line.
    pub top_row: usize,

    /// Visible height in rows.
    pub height: usize,

    /// Rows the host keeps clear at the bottom of the window when
    /// scrolling (the bottom scroll margin).
    pub scroll_margin: usize,
}

/// Capability for reading and writing the buffer-local auto-formatting
/// settings around a programmatic edit.
pub trait FormattingControl {
    /// Current values of the four formatting settings.
    fn snapshot(&self) -> FormattingSettings;

    /// Overwrite all four formatting settings at once.
    fn apply(&mut self, settings: &FormattingSettings);
}

/// Editor primitives the suggestion engine drives; one implementation per
/// host editor.
///
/// All methods are infallible. The session only passes back positions it
/// read from the host within the same event, so out-of-range arguments are
/// host bugs and may panic in the host.
///
/// The intent methods (`join_undo`, `nudge_attached_tooling`, `insert_tab`)
/// keep input simulation out of the engine: it states what it wants, and
/// the host translates that to whatever keystroke or command mechanism it
/// has.
pub trait EditorHost: FormattingControl {
    // --- cursor ---

    fn cursor(&self) -> CursorPos;
    fn set_cursor(&mut self, pos: CursorPos);

    // --- buffer lines ---

    fn line_count(&self) -> usize;

    /// Content of `row`, without a trailing newline.
    fn line(&self, row: usize) -> String;

    /// Replace the content of `row` in place. Does not change line count.
    fn set_line(&mut self, row: usize, text: &str);

    /// Insert a new line before `row`, pushing `row` and everything below
    /// it down.
    fn insert_line_before(&mut self, row: usize, text: &str);

    /// Append a new line after the current last line.
    fn append_line(&mut self, text: &str);

    /// Insert text within an existing line at `pos`. Never creates a line.
    fn insert_text(&mut self, pos: CursorPos, text: &str);

    // --- overlay marks ---

    /// Create a namespace for grouped virtual-text marks. Called at most
    /// once per session; the returned handle is reused for every render.
    fn register_namespace(&mut self, label: &str) -> OverlayNamespace;

    /// Remove every mark in `ns` from the current buffer. Must be a no-op
    /// when the namespace holds no marks.
    fn clear_namespace(&mut self, ns: &OverlayNamespace);

    /// Draw inline virtual text at an exact buffer position.
    fn place_inline_mark(&mut self, ns: &OverlayNamespace, at: CursorPos, fragment: &AnnotationFragment);

    /// Draw whole virtual lines attached below `row`, in fragment order.
    fn place_virtual_lines(&mut self, ns: &OverlayNamespace, row: usize, fragments: &[AnnotationFragment]);

    // --- viewport ---

    fn viewport(&self) -> ViewportGeometry;

    /// Scroll so the cursor's line sits at the vertical center of the
    /// window.
    fn recenter_on_cursor(&mut self);

    // --- host intents ---

    /// Join the next edit with the previous undo step.
    fn join_undo(&mut self);

    /// Best-effort nudge so attached tooling (signature help popups and the
    /// like) refreshes or dismisses after an edit.
    fn nudge_attached_tooling(&mut self);

    /// Inject a literal tab keypress.
    fn insert_tab(&mut self);

    /// Repaint the whole display; overlay and real text were both touched.
    fn force_redraw(&mut self);
}
