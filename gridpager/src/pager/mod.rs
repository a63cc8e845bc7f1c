use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    config::{AllowedPageSizes, DisplayMode, PageSize, Visibility},
    ui::pager_view::{self, PagerContentProps},
};

mod event;
mod navigation;
#[cfg(test)]
mod tests;

pub use event::PagerEvent;
pub use navigation::page_count_for;

/// Pager options supplied by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct GridPagerUserProps {
    #[builder(default, into)]
    pub visible: Visibility,
    #[builder(default, into)]
    pub allowed_page_sizes: AllowedPageSizes,
    #[builder(default)]
    pub display_mode: DisplayMode,
    #[builder(default)]
    pub show_info: bool,
    #[builder(default)]
    pub show_navigation_buttons: bool,
    #[builder(default)]
    pub show_page_size_selector: bool,
    /// Overrides the default `Page {0} of {1} ({2} items)` template
    #[builder(into)]
    pub info_text: Option<String>,
}

/// Props shared between the grid and its pager. `page_index` and
/// `page_size` are two-way, the pager writes them back on user input.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct GridPagerProps {
    #[builder(default)]
    pub pager: GridPagerUserProps,
    #[builder(default)]
    pub page_index: usize,
    #[builder(default, into)]
    pub page_size: PageSize,
    #[builder(default = 1)]
    pub page_count: usize,
    #[builder(default)]
    pub total_count: usize,
}

impl Default for GridPagerProps {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Snapshot of everything the pager derives from its props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedState {
    pub visible: bool,
    pub allowed_page_sizes: Vec<u32>,
    pub page_size: PageSize,
}

#[derive(Debug, Clone, Default)]
pub struct GridPager {
    pub props: GridPagerProps,
}

impl GridPager {
    pub fn new(props: GridPagerProps) -> Self {
        Self { props }
    }

    pub fn visible(&self) -> bool {
        self.props.pager.visible.resolve(self.props.page_count)
    }

    pub fn allowed_page_sizes(&self) -> Vec<u32> {
        match &self.props.pager.allowed_page_sizes {
            AllowedPageSizes::Explicit(sizes) => sizes.clone(),
            AllowedPageSizes::Auto => AllowedPageSizes::auto_for(self.page_size()),
        }
    }

    /// Effective page size, never `Fixed(0)`.
    pub fn page_size(&self) -> PageSize {
        self.props.page_size.normalized()
    }

    pub fn derived(&self) -> DerivedState {
        DerivedState {
            visible: self.visible(),
            allowed_page_sizes: self.allowed_page_sizes(),
            page_size: self.page_size(),
        }
    }

    /// Props for the pager content element, see [`pager_view::view`].
    pub fn view(&self) -> PagerContentProps {
        pager_view::view(&self.props, self.page_size(), self.visible())
    }

    /// Like [`GridPager::view`] but honours the user's display options.
    pub fn configured_view(&self) -> PagerContentProps {
        pager_view::configured_view(self)
    }

    /// Stores the new index without range checks. The returned event is meant
    /// for the owner of the grid props.
    pub fn on_page_index_change(&mut self, page_index: usize) -> PagerEvent {
        let event = PagerEvent::PageIndexChanged(page_index);
        self.props.apply(&event);
        log::debug!(page_index; "Page index changed");
        event
    }

    pub fn on_page_size_change(&mut self, page_size: PageSize) -> PagerEvent {
        let event = PagerEvent::PageSizeChanged(page_size.normalized());
        self.props.apply(&event);
        log::debug!(requested:% = page_size, stored:% = self.props.page_size; "Page size changed");
        event
    }
}
