use serde::Serialize;

use super::GridPagerProps;
use crate::config::PageSize;

/// Change emitted by the pager in response to user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::AsRefStr)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PagerEvent {
    PageIndexChanged(usize),
    /// Always carries a normalized size
    PageSizeChanged(PageSize),
}

impl GridPagerProps {
    /// Applies a change produced by a pager to this copy of the props.
    pub fn apply(&mut self, event: &PagerEvent) {
        match *event {
            PagerEvent::PageIndexChanged(page_index) => self.page_index = page_index,
            PagerEvent::PageSizeChanged(page_size) => self.page_size = page_size.normalized(),
        }
    }
}
