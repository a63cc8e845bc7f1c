use flexi_logger::{FileSpec, FlexiLoggerError, LoggerHandle};

const PALETTE: &str = "1;3;15;4;13";

pub fn init(log_to_file: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    if log_to_file { init_file() } else { init_console() }
}

fn init_console() -> Result<LoggerHandle, FlexiLoggerError> {
    flexi_logger::Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format_for_stderr(console_format)
        .set_palette(PALETTE.to_string())
        .start()
}

fn init_file() -> Result<LoggerHandle, FlexiLoggerError> {
    flexi_logger::Logger::try_with_env_or_str("debug")?
        .log_to_file(
            FileSpec::default()
                .directory(std::env::temp_dir())
                .basename("gridpager")
                .suppress_timestamp(),
        )
        .format_for_files(structured_detailed_format)
        .start()
}

pub fn console_format(
    w: &mut dyn std::io::Write,
    _now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let mut visitor = Visitor::new();
    record.key_values().visit(&mut visitor).map_err(std::io::Error::other)?;
    let level = record.level();

    write!(
        w,
        "{:<5}: {} {}",
        flexi_logger::style(level).paint(level.to_string()),
        record.args(),
        visitor
    )
}

pub fn structured_detailed_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let mut visitor = Visitor::new();
    record.key_values().visit(&mut visitor).map_err(std::io::Error::other)?;

    write!(
        w,
        r#"{} {:<5} {}:{} message="{}" {}"#,
        now.now_utc_owned().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        record.level(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args(),
        visitor
    )
}

/// Collects structured key-value pairs attached to a log record.
#[derive(Debug)]
struct Visitor {
    values: Vec<(String, String)>,
}

impl Visitor {
    fn new() -> Self {
        Self { values: Vec::new() }
    }
}

impl std::fmt::Display for Visitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.values {
            write!(f, r#"{key}="{value}" "#)?;
        }
        Ok(())
    }
}

impl<'kvs> log::kv::VisitSource<'kvs> for Visitor {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.values.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
