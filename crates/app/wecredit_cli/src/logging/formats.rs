use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::Record;

const TIMESTAMP: &str = "%H:%M:%S%.3f";

/// `12:00:00.000 ERROR [wecredit_core::controller] message`
pub fn cli_format(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    let level = record.level();
    write!(
        w,
        "{} {} [{}] {}",
        now.format(TIMESTAMP),
        style(level).paint(format!("{level:<5}")),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}
