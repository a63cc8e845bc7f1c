use crate::{
    config::{DisplayMode, PageSize},
    pager::{GridPager, GridPagerProps},
};

pub const DEFAULT_INFO_TEXT: &str = "Page {0} of {1} ({2} items)";

/// Props of the pager content element rendered below a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools, reason = "Bools represent different flags")]
pub struct PagerContentProps {
    pub display_mode: DisplayMode,
    pub info_text: String,
    pub page_count: usize,
    pub page_index: usize,
    /// Rows per page, zero when every row is on a single page
    pub page_size: u32,
    pub page_sizes: Vec<u32>,
    pub show_info: bool,
    pub show_navigation_buttons: bool,
    pub show_page_sizes: bool,
    pub total_count: usize,
    pub visible: bool,
}

/// Maps the grid pager state to the props of its content element.
///
/// Only the page count, page size and visibility flow through. Everything
/// else is fixed: adaptive layout, first page, no info, no navigation
/// buttons and no page size selector.
pub fn view(props: &GridPagerProps, page_size: PageSize, visible: bool) -> PagerContentProps {
    PagerContentProps {
        display_mode: DisplayMode::Adaptive,
        info_text: DEFAULT_INFO_TEXT.to_owned(),
        page_count: props.page_count,
        page_index: 0,
        page_size: page_size.as_count(),
        page_sizes: Vec::new(),
        show_info: false,
        show_navigation_buttons: false,
        show_page_sizes: false,
        total_count: 0,
        visible,
    }
}

/// Maps the grid pager state using every user option and the current
/// position.
pub fn configured_view(pager: &GridPager) -> PagerContentProps {
    let props = &pager.props;
    let user = &props.pager;

    PagerContentProps {
        display_mode: user.display_mode,
        info_text: user.info_text.clone().unwrap_or_else(|| DEFAULT_INFO_TEXT.to_owned()),
        page_count: props.page_count,
        page_index: props.page_index,
        page_size: pager.page_size().as_count(),
        page_sizes: pager.allowed_page_sizes(),
        show_info: user.show_info,
        show_navigation_buttons: user.show_navigation_buttons,
        show_page_sizes: user.show_page_size_selector,
        total_count: props.total_count,
        visible: pager.visible(),
    }
}

/// Fills `{0}` with the 1-based page, `{1}` with the page count and `{2}`
/// with the total row count.
pub fn format_info_text(
    template: &str,
    page_index: usize,
    page_count: usize,
    total_count: usize,
) -> String {
    template
        .replace("{0}", &page_index.saturating_add(1).to_string())
        .replace("{1}", &page_count.to_string())
        .replace("{2}", &total_count.to_string())
}
