use crate::suggestion::Suggestion;
use ratatui::style::Style;

/// One styled piece of ghost text: a single suggestion line plus the fixed
/// suggestion highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationFragment {
    pub text: String,
    pub style: Style,
}

/// Renderable form of a suggestion.
///
/// The first fragment is drawn inline at the exact cursor position; the
/// remaining fragments are drawn as virtual lines below the cursor's line,
/// in suggestion order. Built fresh on every render and discarded on the
/// next render or on clear.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Fragment drawn inline at the cursor.
    pub inline: AnnotationFragment,

    /// Fragments drawn as whole virtual lines below the cursor's line.
    pub below: Vec<AnnotationFragment>,
}

impl Annotation {
    /// Build the annotation for `suggestion`, or `None` when there is
    /// nothing to draw.
    ///
    /// Every line becomes exactly one fragment carrying `style`; no line is
    /// truncated, wrapped, or escaped.
    pub fn from_suggestion(suggestion: &Suggestion, style: Style) -> Option<Self> {
        let (first, rest) = suggestion.lines().split_first()?;
        Some(Self {
            inline: AnnotationFragment {
                text: first.clone(),
                style,
            },
            below: rest
                .iter()
                .map(|line| AnnotationFragment {
                    text: line.clone(),
                    style,
                })
                .collect(),
        })
    }

    /// Total number of rendered lines, counting the inline fragment's line.
    pub fn height(&self) -> usize {
        1 + self.below.len()
    }
}
