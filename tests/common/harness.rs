// ScratchEditor - in-memory editor host for exercising the suggestion engine

use ghostline::annotation::AnnotationFragment;
use ghostline::{
    CursorPos, EditorHost, FormattingControl, FormattingSettings, OverlayNamespace,
    ViewportGeometry,
};

/// Side effects the session asked the host for, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIntent {
    JoinUndo,
    NudgeTooling,
    InsertTab,
    Redraw,
    Recenter,
}

/// A virtual-text mark placed through the overlay surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Inline ghost text at an exact buffer position.
    Inline { at: CursorPos, text: String },
    /// Whole virtual lines attached below `row`.
    VirtualLines { row: usize, texts: Vec<String> },
}

/// A line-vector editor with just enough surface to host the suggestion
/// engine: cursor, formatting settings, viewport geometry, namespaced
/// overlay marks, and a log of every intent the engine issued.
pub struct ScratchEditor {
    pub lines: Vec<String>,
    pub cursor: CursorPos,
    pub formatting: FormattingSettings,
    pub viewport: ViewportGeometry,
    /// Namespace keys handed out by `register_namespace`, in order.
    pub namespaces: Vec<String>,
    /// Marks currently present, tagged with their namespace key.
    pub marks: Vec<(String, Mark)>,
    pub intents: Vec<HostIntent>,
    /// Every `apply()` call, in order (for guard round-trip assertions).
    pub applied_formatting: Vec<FormattingSettings>,
    next_namespace: u64,
}

impl ScratchEditor {
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            cursor: CursorPos::new(0, 0),
            formatting: FormattingSettings {
                auto_indent: true,
                smart_indent: true,
                format_options: "tcqj".to_string(),
                text_width: 100,
            },
            viewport: ViewportGeometry {
                top_row: 0,
                height: 24,
                scroll_margin: 3,
            },
            namespaces: Vec::new(),
            marks: Vec::new(),
            intents: Vec::new(),
            applied_formatting: Vec::new(),
            next_namespace: 0,
        }
    }

    pub fn with_cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = CursorPos::new(row, col);
        self
    }

    pub fn with_viewport(mut self, top_row: usize, height: usize, scroll_margin: usize) -> Self {
        self.viewport = ViewportGeometry {
            top_row,
            height,
            scroll_margin,
        };
        self
    }

    /// The buffer's full text, lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    pub fn intent_count(&self, intent: &HostIntent) -> usize {
        self.intents.iter().filter(|i| *i == intent).count()
    }
}

impl FormattingControl for ScratchEditor {
    fn snapshot(&self) -> FormattingSettings {
        self.formatting.clone()
    }

    fn apply(&mut self, settings: &FormattingSettings) {
        self.formatting = settings.clone();
        self.applied_formatting.push(settings.clone());
    }
}

impl EditorHost for ScratchEditor {
    fn cursor(&self) -> CursorPos {
        self.cursor
    }

    fn set_cursor(&mut self, pos: CursorPos) {
        self.cursor = pos;
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, row: usize) -> String {
        self.lines[row].clone()
    }

    fn set_line(&mut self, row: usize, text: &str) {
        self.lines[row] = text.to_string();
    }

    fn insert_line_before(&mut self, row: usize, text: &str) {
        self.lines.insert(row, text.to_string());
    }

    fn append_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn insert_text(&mut self, pos: CursorPos, text: &str) {
        self.lines[pos.row].insert_str(pos.col, text);
    }

    fn register_namespace(&mut self, label: &str) -> OverlayNamespace {
        self.next_namespace += 1;
        let key = format!("{}_{}", label, self.next_namespace);
        self.namespaces.push(key.clone());
        OverlayNamespace::from_string(key)
    }

    fn clear_namespace(&mut self, ns: &OverlayNamespace) {
        self.marks.retain(|(key, _)| key != ns.as_str());
    }

    fn place_inline_mark(
        &mut self,
        ns: &OverlayNamespace,
        at: CursorPos,
        fragment: &AnnotationFragment,
    ) {
        self.marks.push((
            ns.as_str().to_string(),
            Mark::Inline {
                at,
                text: fragment.text.clone(),
            },
        ));
    }

    fn place_virtual_lines(
        &mut self,
        ns: &OverlayNamespace,
        row: usize,
        fragments: &[AnnotationFragment],
    ) {
        self.marks.push((
            ns.as_str().to_string(),
            Mark::VirtualLines {
                row,
                texts: fragments.iter().map(|f| f.text.clone()).collect(),
            },
        ));
    }

    fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    fn recenter_on_cursor(&mut self) {
        self.intents.push(HostIntent::Recenter);
        // Emulate the scroll: put the cursor's line at vertical center.
        let center = self.viewport.height / 2;
        self.viewport.top_row = self.cursor.row.saturating_sub(center);
    }

    fn join_undo(&mut self) {
        self.intents.push(HostIntent::JoinUndo);
    }

    fn nudge_attached_tooling(&mut self) {
        self.intents.push(HostIntent::NudgeTooling);
    }

    fn insert_tab(&mut self) {
        self.intents.push(HostIntent::InsertTab);
    }

    fn force_redraw(&mut self) {
        self.intents.push(HostIntent::Redraw);
    }
}
