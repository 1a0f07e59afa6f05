//! Status bar widget
//!
//! One row at the bottom of the demo: current placeholder state on the left,
//! key hints after it.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::model::PlaceholderStyle;
use crate::ui::theme;

/// Placeholder state shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub style: Option<PlaceholderStyle>,
    pub is_centered: bool,
    pub spacing: u16,
    /// Last feedback message (button taps, etc.)
    pub message: Option<String>,
}

/// Build a status bar line with a state prefix and key hints
pub fn build_status_bar(info: &StatusInfo, hints: &[KeyHint]) -> Line<'static> {
    let style_label = info.style.map_or("none", PlaceholderStyle::label);
    let mut spans = vec![Span::styled(
        format!(" {} ", style_label),
        Style::default()
            .fg(theme::status_bar::LABEL_FG)
            .bg(theme::status_bar::LABEL_BG),
    )];

    let layout = format!(
        " spacing {}{} ",
        info.spacing,
        if info.is_centered { " centered" } else { "" }
    );
    spans.push(Span::raw(layout));

    if let Some(message) = &info.message {
        spans.push(Span::styled(
            format!("| {} ", message),
            Style::default().fg(theme::status_bar::LABEL_BG),
        ));
    }

    for hint in hints {
        spans.push(Span::styled(
            format!(" [{}] {}", hint.key, hint.label),
            Style::default().fg(theme::status_bar::HINT),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at the bottom of `area`
pub fn status_bar_area(area: Rect) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the demo status bar
pub fn render_status_bar(frame: &mut Frame, info: &StatusInfo) {
    let Some(status_area) = status_bar_area(frame.area()) else {
        return;
    };

    let status = build_status_bar(info, keys::DEMO_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}
