use super::{GridPager, PagerEvent};
use crate::config::PageSize;

/// Number of pages needed for `total_count` rows. Never less than one.
pub fn page_count_for(total_count: usize, page_size: PageSize) -> usize {
    match page_size.normalized() {
        PageSize::All => 1,
        PageSize::Fixed(size) => total_count.div_ceil(size as usize).max(1),
    }
}

impl GridPager {
    fn last_page_index(&self) -> usize {
        self.props.page_count.saturating_sub(1)
    }

    fn go_to_page(&mut self, page_index: usize) -> Option<PagerEvent> {
        if page_index == self.props.page_index {
            return None;
        }
        Some(self.on_page_index_change(page_index))
    }

    pub fn next_page(&mut self) -> Option<PagerEvent> {
        let next = self.props.page_index.saturating_add(1).min(self.last_page_index());
        self.go_to_page(next)
    }

    pub fn prev_page(&mut self) -> Option<PagerEvent> {
        let prev = self.props.page_index.saturating_sub(1).min(self.last_page_index());
        self.go_to_page(prev)
    }

    pub fn first_page(&mut self) -> Option<PagerEvent> {
        self.go_to_page(0)
    }

    pub fn last_page(&mut self) -> Option<PagerEvent> {
        self.go_to_page(self.last_page_index())
    }
}
