pub mod pager_view;
pub mod widgets;
