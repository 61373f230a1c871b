//! Horizontal category strip on the Home tab.

use crate::app::App;
use crate::i18n::filter_label;
use crate::news::CategoryFilter;
use crate::util::display_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the strip, scrolled so the active entry is always visible.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let strings = app.strings();
    let labels: Vec<(CategoryFilter, String)> = CategoryFilter::strip()
        .map(|c| (c, format!(" {} ", filter_label(strings, c))))
        .collect();
    let widths: Vec<usize> = labels.iter().map(|(_, l)| display_width(l) + 1).collect();
    let active = labels
        .iter()
        .position(|(c, _)| *c == app.category)
        .unwrap_or(0);
    let start = strip_offset(&widths, active, area.width as usize);

    let mut spans = Vec::with_capacity(labels.len() * 2 + 1);
    if start > 0 {
        spans.push(Span::styled("‹", app.palette.category_inactive));
    }
    for (filter, label) in labels.into_iter().skip(start) {
        let style = if filter == app.category {
            app.palette.category_active
        } else {
            app.palette.category_inactive
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// First entry to draw so that `active` fits in `available` columns.
fn strip_offset(widths: &[usize], active: usize, available: usize) -> usize {
    // One column is reserved for the scroll marker once scrolled.
    let mut start = 0;
    while start < active {
        let marker = usize::from(start > 0);
        let used: usize = widths[start..=active].iter().sum::<usize>() + marker;
        if used <= available {
            break;
        }
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_when_everything_fits() {
        assert_eq!(strip_offset(&[5, 5, 5], 2, 80), 0);
    }

    #[test]
    fn test_scrolls_to_keep_active_visible() {
        let widths = [10, 10, 10, 10, 10];
        let start = strip_offset(&widths, 4, 25);
        assert_eq!(start, 3);
        let used: usize = widths[start..=4].iter().sum::<usize>() + 1;
        assert!(used <= 25);
    }

    #[test]
    fn test_active_wider_than_area_shows_active_first() {
        assert_eq!(strip_offset(&[4, 4, 50], 2, 20), 2);
    }
}
