//! Human-readable report printed by advanced lookups.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};

use crate::style::{Styler, Tone};

const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %:z";

pub(super) struct ReportContext {
    pub cwd: Option<PathBuf>,
    pub env_dir: Option<PathBuf>,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub host: String,
}

pub(super) fn write_report<W: Write>(
    out: &mut W,
    styler: &dyn Styler,
    ctx: &ReportContext,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", styler.heading(Tone::General, "-- General information --"))?;
    let cwd = display_dir(&ctx.cwd);
    let env_dir = display_dir(&ctx.env_dir);
    entry(out, styler, Tone::General, "- Current working directory:", &cwd)?;
    entry(out, styler, Tone::General, "- .env working directory:", &env_dir)?;

    writeln!(out)?;
    writeln!(out, "{}", styler.heading(Tone::FileInfo, "-- ENV file information --"))?;
    entry(out, styler, Tone::FileInfo, "- Created by:", &ctx.owner)?;
    entry(out, styler, Tone::FileInfo, "- Created at:", &local_time(ctx.created_at))?;
    entry(out, styler, Tone::FileInfo, "- Updated at:", &local_time(ctx.updated_at))?;

    writeln!(out)?;
    writeln!(out, "{}", styler.heading(Tone::Timing, "-- Logging time --"))?;
    entry(out, styler, Tone::Timing, "- Logged time:", &local_time(ctx.now))?;
    entry(out, styler, Tone::Timing, "- Host:", &ctx.host)?;

    out.flush()
}

fn entry<W: Write>(
    out: &mut W,
    styler: &dyn Styler,
    tone: Tone,
    label: &str,
    value: &str,
) -> io::Result<()> {
    writeln!(out, "{} {}", styler.paint(tone, label), value)
}

fn display_dir(dir: &Option<PathBuf>) -> String {
    dir.as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_LAYOUT).to_string()
}
