//! Article detail overlay.

use crate::app::{App, SummaryState};
use crate::i18n::{category_label, UiStrings};
use crate::news::Article;
use crate::theme::ColorPalette;
use crate::util::{relative_time, wrap_to_width};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::render::centered_rect;

/// Render the open article over the current tab.
pub fn render(f: &mut Frame, app: &mut App) {
    let overlay = centered_rect(90, 90, f.area());
    if overlay.width < 10 || overlay.height < 5 {
        return;
    }

    // Border plus one column of padding on each side.
    let text_area = Rect {
        x: overlay.x + 2,
        y: overlay.y + 1,
        width: overlay.width.saturating_sub(4),
        height: overlay.height.saturating_sub(2),
    };
    let visible = text_area.height as usize;

    let Some(reader) = app.reader.as_ref() else {
        return;
    };
    let lines = article_lines(
        &reader.article,
        &reader.summary,
        app.strings(),
        &app.palette,
        text_area.width as usize,
        Utc::now(),
    );
    let bookmarked = app.bookmarks.contains(&reader.article.id);

    // Clamp before drawing so a resize never shows an empty page.
    app.clamp_reader_scroll(lines.len(), visible);
    let scroll = app.reader.as_ref().map_or(0, |r| r.scroll);

    let title = if bookmarked {
        format!(" ★ {} ", app.strings().bookmarks)
    } else {
        String::new()
    };
    let position = if lines.len() > visible {
        format!(" {}/{} ", (scroll + visible).min(lines.len()), lines.len())
    } else {
        String::new()
    };

    f.render_widget(Clear, overlay);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.palette.panel_border_focused)
            .title(title)
            .title_bottom(Line::from(position).right_aligned())
            .style(app.palette.reader_body),
        overlay,
    );
    f.render_widget(
        Paragraph::new(lines)
            .style(app.palette.reader_body)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        text_area,
    );
}

/// Pre-wrapped detail text, so scroll limits match what is drawn.
pub(super) fn article_lines(
    article: &Article,
    summary: &SummaryState,
    strings: &'static UiStrings,
    palette: &ColorPalette,
    width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let push_wrapped = |lines: &mut Vec<Line<'static>>, text: &str, style: Style| {
        for line in wrap_to_width(text, width) {
            lines.push(Line::from(Span::styled(line, style)));
        }
    };

    push_wrapped(&mut lines, &article.title, palette.reader_heading);
    lines.push(Line::from(""));

    let mut byline = category_label(strings, &article.category).to_string();
    if !article.source.is_empty() {
        byline.push_str(&format!(" · {}: {}", strings.source, article.source));
    }
    if !article.author.is_empty() {
        byline.push_str(&format!(" · {}", article.author));
    }
    push_wrapped(&mut lines, &byline, palette.reader_metadata);

    let when = relative_time(&article.published_at, now);
    if !when.is_empty() {
        push_wrapped(
            &mut lines,
            &format!("{}: {}", strings.published, when),
            palette.reader_metadata,
        );
    }
    lines.push(Line::from(""));

    match summary {
        SummaryState::Idle => {}
        SummaryState::Generating => {
            push_wrapped(&mut lines, strings.generating_summary, palette.reader_metadata);
            lines.push(Line::from(""));
        }
        SummaryState::Ready(text) => {
            push_wrapped(&mut lines, strings.summary, palette.reader_heading);
            push_wrapped(&mut lines, text, palette.reader_body);
            lines.push(Line::from(""));
        }
        SummaryState::Failed => {
            push_wrapped(&mut lines, strings.failed_to_generate, palette.reader_metadata);
            lines.push(Line::from(""));
        }
    }

    if !article.description.is_empty() {
        push_wrapped(
            &mut lines,
            &article.description,
            palette.reader_body.add_modifier(Modifier::ITALIC),
        );
        lines.push(Line::from(""));
    }

    if !article.content.is_empty() {
        push_wrapped(&mut lines, &article.content, palette.reader_body);
        lines.push(Line::from(""));
    }

    if !article.url.is_empty() {
        push_wrapped(
            &mut lines,
            &format!("{}: {}", strings.read_more, article.url),
            palette.reader_link,
        );
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;
    use crate::news::{test_article, Language};
    use crate::theme::ThemeVariant;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_lines_include_metadata_and_link() {
        let mut article = test_article("1", "Headline", "Summary here", "Sports");
        article.source = "Wire".into();
        article.url = "https://example.com/a".into();
        article.content = "Body text.".into();
        let lines = article_lines(
            &article,
            &SummaryState::Idle,
            i18n::strings(Language::English),
            &ThemeVariant::Dark.palette(),
            60,
            Utc::now(),
        );
        let text = text_of(&lines);
        assert_eq!(text[0], "Headline");
        assert!(text.iter().any(|l| l == "Sports · Source: Wire"));
        assert!(text.iter().any(|l| l == "Summary here"));
        assert!(text.iter().any(|l| l == "Body text."));
        assert!(text.iter().any(|l| l == "Read more: https://example.com/a"));
    }

    #[test]
    fn test_summary_states_shown() {
        let article = test_article("1", "Headline", "Summary here", "Sports");
        let strings = i18n::strings(Language::German);
        let palette = ThemeVariant::Dark.palette();
        let render = |state: &SummaryState| {
            text_of(&article_lines(&article, state, strings, &palette, 60, Utc::now()))
        };

        assert!(!render(&SummaryState::Idle).iter().any(|l| l == strings.summary));
        assert!(render(&SummaryState::Generating)
            .iter()
            .any(|l| l == strings.generating_summary));
        assert!(render(&SummaryState::Failed)
            .iter()
            .any(|l| l == strings.failed_to_generate));

        let ready = render(&SummaryState::Ready("Kurz gesagt.".into()));
        let at = ready.iter().position(|l| l == strings.summary).unwrap();
        assert_eq!(ready[at + 1], "Kurz gesagt.");
    }

    #[test]
    fn test_lines_fit_width() {
        let mut article = test_article("1", "A fairly long headline for a narrow box", "", "X");
        article.content = "word ".repeat(50);
        let lines = article_lines(
            &article,
            &SummaryState::Idle,
            i18n::strings(Language::English),
            &ThemeVariant::Dark.palette(),
            12,
            Utc::now(),
        );
        for line in text_of(&lines) {
            assert!(crate::util::display_width(&line) <= 12, "{line:?}");
        }
    }
}
