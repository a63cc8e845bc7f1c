use anyhow::{Context, Result};
use gridpager::{ConfigFile, DerivedState, GridPager, PagerContent, PagerContentProps, PagerEvent};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use serde::Serialize;

use crate::cli::Command;

#[derive(Debug, Serialize)]
struct StateOutput {
    #[serde(flatten)]
    derived: DerivedState,
    page_index: usize,
    page_count: usize,
    total_count: usize,
}

impl From<&GridPager> for StateOutput {
    fn from(pager: &GridPager) -> Self {
        Self {
            derived: pager.derived(),
            page_index: pager.props.page_index,
            page_count: pager.props.page_count,
            total_count: pager.props.total_count,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChangeOutput {
    event: PagerEvent,
    state: StateOutput,
}

/// Runs `command` against the pager and returns what should be printed.
pub fn run(command: &Command, pager: &mut GridPager) -> Result<String> {
    match command {
        Command::Config => {
            let config = ron::ser::to_string_pretty(
                &ConfigFile::default(),
                ron::ser::PrettyConfig::default(),
            )
            .context("Failed to serialize default config")?;
            Ok(config)
        }
        Command::State => to_json(&StateOutput::from(&*pager)),
        Command::Render { width, plain } => {
            let props = if *plain { pager.view() } else { pager.configured_view() };
            Ok(render_line(&props, *width))
        }
        Command::SetPage { page_index } => {
            let event = pager.on_page_index_change(*page_index);
            change_output(event, pager)
        }
        Command::SetPageSize { page_size } => {
            let event = pager.on_page_size_change(*page_size);
            change_output(event, pager)
        }
    }
}

fn change_output(event: PagerEvent, pager: &GridPager) -> Result<String> {
    log::info!(event = event.as_ref(); "Pager changed");
    to_json(&ChangeOutput { event, state: StateOutput::from(pager) })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Draws the pager content into a single line buffer and returns its text
/// without trailing blanks.
pub fn render_line(props: &PagerContentProps, width: u16) -> String {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, 1));
    PagerContent::new(props).render(buf.area, &mut buf);

    let line = (0..width).map(|x| buf[(x, 0)].symbol()).collect::<String>();
    line.trim_end().to_owned()
}
