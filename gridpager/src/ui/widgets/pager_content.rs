use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Alignment,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::get_line_offset;
use crate::{
    config::DisplayMode,
    ui::pager_view::{PagerContentProps, format_info_text},
};

const GAP: &str = "…";
const PAGE_SIZES_SEPARATOR: &str = "|";
const PREV_BUTTON: &str = "<";
const NEXT_BUTTON: &str = ">";
/// Adaptive mode lists every page up to this count
const MAX_UNCOLLAPSED_PAGES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageLabel {
    Page(usize),
    Gap,
}

/// Draws [`PagerContentProps`] on a single line:
/// `10 [20] 40 | < 1 … 4 5 6 … 20 > Page 5 of 20 (400 items)`
#[derive(Debug)]
pub struct PagerContent<'a> {
    props: &'a PagerContentProps,
    style: Style,
    selected_style: Style,
    alignment: Alignment,
}

impl<'a> PagerContent<'a> {
    pub fn new(props: &'a PagerContentProps) -> Self {
        Self {
            props,
            style: Style::default(),
            selected_style: Style::default().add_modifier(Modifier::REVERSED),
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl PagerContent<'_> {
    /// Page number labels stop once `max_width` cells are used up.
    fn segments(&self, max_width: usize) -> Vec<(String, Style)> {
        let props = self.props;
        let page_count = props.page_count.max(1);
        let current = props.page_index.min(page_count - 1);
        let mut result = Vec::new();

        if props.show_page_sizes && !props.page_sizes.is_empty() {
            for &size in &props.page_sizes {
                let label = if size == 0 { "All".to_owned() } else { size.to_string() };
                if size == props.page_size {
                    result.push((format!("[{label}]"), self.selected_style));
                } else {
                    result.push((label, self.style));
                }
            }
            result.push((PAGE_SIZES_SEPARATOR.to_owned(), self.style));
        }

        if props.show_navigation_buttons {
            result.push((PREV_BUTTON.to_owned(), self.style));
        }

        if props.display_mode == DisplayMode::Compact {
            result.push((format!("{}/{page_count}", current + 1), self.selected_style));
        } else {
            for label in page_labels(current, page_count, props.display_mode, max_width) {
                result.push(match label {
                    PageLabel::Page(idx) if idx == current => {
                        ((idx + 1).to_string(), self.selected_style)
                    }
                    PageLabel::Page(idx) => ((idx + 1).to_string(), self.style),
                    PageLabel::Gap => (GAP.to_owned(), self.style),
                });
            }
        }

        if props.show_navigation_buttons {
            result.push((NEXT_BUTTON.to_owned(), self.style));
        }

        if props.show_info {
            let info =
                format_info_text(&props.info_text, current, page_count, props.total_count);
            result.push((info, self.style));
        }

        result
    }
}

fn page_labels(
    current: usize,
    page_count: usize,
    display_mode: DisplayMode,
    max_width: usize,
) -> Vec<PageLabel> {
    let last = page_count.saturating_sub(1);
    if display_mode == DisplayMode::Full || page_count <= MAX_UNCOLLAPSED_PAGES {
        // Keeps the first label starting at or past `max_width` so an overflowing
        // line stays wider than the area
        let mut used = 0usize;
        return (0..page_count)
            .take_while(|idx| {
                let fits = used <= max_width;
                used = used.saturating_add((idx + 1).ilog10() as usize + 2);
                fits
            })
            .map(PageLabel::Page)
            .collect_vec();
    }

    let shown = [0, current.saturating_sub(1), current, current + 1, last]
        .into_iter()
        .filter(|idx| *idx <= last)
        .sorted_unstable()
        .dedup()
        .collect_vec();

    let mut result = Vec::with_capacity(shown.len() * 2);
    for (idx, page) in shown.iter().enumerate() {
        if idx > 0 && shown[idx - 1] + 1 != *page {
            result.push(PageLabel::Gap);
        }
        result.push(PageLabel::Page(*page));
    }
    result
}

impl Widget for PagerContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.props.visible || area.is_empty() {
            return;
        }

        let segments = self.segments(area.width as usize);
        let line_width = segments.iter().map(|(text, _)| text.width()).sum::<usize>()
            + segments.len().saturating_sub(1);
        let left_offset =
            get_line_offset(line_width.min(u16::MAX as usize) as u16, area.width, self.alignment);

        let mut x = area.left() + left_offset;
        for (text, style) in &segments {
            if x >= area.right() {
                break;
            }
            let remaining = (area.right() - x) as usize;
            let (end_x, _) = buf.set_stringn(x, area.top(), text, remaining, *style);
            x = end_x.saturating_add(1);
        }
    }
}
