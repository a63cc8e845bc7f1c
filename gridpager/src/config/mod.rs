use serde::{Deserialize, Serialize};

pub mod page_size;
pub mod visibility;

pub use page_size::{AllowedPageSizes, PageSize, ParsePageSizeError};
pub use visibility::Visibility;

use crate::pager::{GridPagerProps, GridPagerUserProps, page_count_for};

/// How page numbers are laid out by the pager content.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    /// Collapses long page ranges around the current page
    #[default]
    Adaptive,
    /// Only `current/count`
    Compact,
    /// Every page number
    Full,
}

/// On-disk pager configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    pub pager: GridPagerUserProps,
    pub page_index: usize,
    pub page_size: PageSize,
    /// Derived from `total_count` and `page_size` when missing
    pub page_count: Option<usize>,
    pub total_count: usize,
}

impl ConfigFile {
    /// Builds the runtime props, values passed in take precedence over the
    /// file.
    pub fn into_props(
        self,
        page_count_override: Option<usize>,
        total_count_override: Option<usize>,
    ) -> GridPagerProps {
        let total_count = total_count_override.unwrap_or(self.total_count);
        let page_count = page_count_override
            .or(self.page_count)
            .unwrap_or_else(|| page_count_for(total_count, self.page_size));

        log::debug!(page_count, total_count, page_size:% = self.page_size; "Resolved pager props");

        GridPagerProps::builder()
            .pager(self.pager)
            .page_index(self.page_index)
            .page_size(self.page_size)
            .page_count(page_count)
            .total_count(total_count)
            .build()
    }
}
