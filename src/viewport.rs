use crate::host::ViewportGeometry;

/// Rows the cursor may sit below the window's vertical center without
/// triggering a recenter. Keeps near-centered cursors from bouncing the
/// viewport on every render.
pub const CENTER_DEADBAND: usize = 2;

/// Decide whether the window must scroll before ghost text is drawn.
///
/// True when drawing `annotation_height` rows starting at the cursor's line
/// would run past the window's usable bottom (height minus the host's
/// bottom scroll margin) while the cursor sits strictly below vertical
/// center by more than [`CENTER_DEADBAND`] rows. The caller reacts by
/// recentering on the cursor, which makes room below instead of silently
/// clipping the annotation.
pub fn needs_recenter(
    geometry: ViewportGeometry,
    cursor_row: usize,
    annotation_height: usize,
) -> bool {
    if geometry.height == 0 {
        return false;
    }

    // Cursor's offset from the top of the window.
    let cursor_offset = cursor_row.saturating_sub(geometry.top_row);
    let usable_bottom = geometry.height.saturating_sub(geometry.scroll_margin);

    if cursor_offset + annotation_height <= usable_bottom {
        return false; // Annotation fits as-is.
    }

    let center = geometry.height / 2;
    cursor_offset > center && cursor_offset - center > CENTER_DEADBAND
}
