//! Pager for paginated data grids: configuration with `auto`/`all`
//! sentinels, derived display state, the mapping to pager content props and
//! a ratatui widget that draws them.

pub mod config;
pub mod pager;
pub mod ui;

pub use config::{AllowedPageSizes, ConfigFile, DisplayMode, PageSize, Visibility};
pub use pager::{DerivedState, GridPager, GridPagerProps, GridPagerUserProps, PagerEvent};
pub use ui::{
    pager_view::{PagerContentProps, view},
    widgets::pager_content::PagerContent,
};
