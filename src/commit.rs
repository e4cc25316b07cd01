use crate::error::SuggestError;
use crate::format_guard::FormattingGuard;
use crate::host::{CursorPos, EditorHost};
use crate::suggestion::Suggestion;

/// Splice an accepted suggestion into the buffer at the cursor and move the
/// cursor to the end of the inserted text.
///
/// The whole edit runs with auto-formatting suspended and joins the
/// previous undo step, so accepting a suggestion undoes together with the
/// keystroke that triggered it.
///
/// Placement of lines after the first favors reusing existing blank lines
/// (left behind by a prior auto-indent, say) over pushing fresh ones:
/// - past the end of the buffer: append;
/// - target line has content: insert before it, pushing it down;
/// - target line is blank: write into it in place.
pub fn commit(
    host: &mut impl EditorHost,
    suggestion: &Suggestion,
    guard: &mut FormattingGuard,
) -> Result<(), SuggestError> {
    let lines = suggestion.lines();
    let Some((first, rest)) = lines.split_first() else {
        return Ok(()); // Nothing to write, nothing to suspend.
    };

    let origin = host.cursor();
    tracing::debug!(
        lines = lines.len(),
        row = origin.row,
        col = origin.col,
        "committing suggestion"
    );

    guard.suspend(host)?;
    host.join_undo();

    // The first line continues the cursor line; it never creates a line.
    if !first.is_empty() {
        host.insert_text(origin, first);
    }

    for (i, line) in rest.iter().enumerate() {
        let target_row = origin.row + i + 1;
        if target_row >= host.line_count() {
            tracing::trace!(target_row, "append past end of buffer");
            host.append_line(line);
        } else if !host.line(target_row).is_empty() {
            tracing::trace!(target_row, "insert before, pushing content down");
            host.insert_line_before(target_row, line);
        } else {
            tracing::trace!(target_row, "reuse blank line");
            host.set_line(target_row, line);
        }
    }

    // Land on the end of what was written.
    let end = match rest.last() {
        None if first.is_empty() => origin,
        None => CursorPos::new(origin.row, origin.col + first.len()),
        Some(last) => CursorPos::new(origin.row + lines.len() - 1, last.len()),
    };
    host.set_cursor(end);

    host.nudge_attached_tooling();
    host.force_redraw();

    guard.restore(host);
    Ok(())
}
