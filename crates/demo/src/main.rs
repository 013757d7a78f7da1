// File: crates/demo/src/main.rs
// Summary: CLI that loads a disaster-cost CSV, applies legend filters and writes the
// timeline as PNG and optionally SVG.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, ValueHint};
use timeline_core::{load_csv, theme, AppState, Category, TimelineConfig, YearDomain};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a timeline of billion-dollar disaster costs", long_about = None)]
struct Cli {
    /// Input CSV with name, category, year, mid and cost columns.
    #[arg(default_value = "data/disaster_costs.csv", value_hint = ValueHint::FilePath)]
    csv: String,

    /// PNG output path.
    #[arg(short, long, default_value = "target/out/disaster_timeline.png", value_hint = ValueHint::FilePath)]
    out: PathBuf,

    /// Also write an SVG document.
    #[arg(long, value_hint = ValueHint::FilePath)]
    svg: Option<PathBuf>,

    /// Hide a category, as if its legend entry had been clicked. Repeatable.
    #[arg(long, value_name = "CATEGORY")]
    hide: Vec<Category>,

    /// Theme preset name (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Vertical axis domain.
    #[arg(long, value_enum, default_value_t = YearDomainOpt::Fixed)]
    year_domain: YearDomainOpt,

    /// Leave the legend out of the rendered frame.
    #[arg(long)]
    no_legend: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum YearDomainOpt {
    Fixed,
    Fit,
}

impl From<YearDomainOpt> for YearDomain {
    fn from(opt: YearDomainOpt) -> Self {
        match opt {
            YearDomainOpt::Fixed => YearDomain::default(),
            YearDomainOpt::Fit => YearDomain::FitData,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let (path, used_alt) = resolve_path(&cli.csv)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        warn!("extension swapped between .csv/.cvs");
    }

    let records = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if records.is_empty() {
        warn!("no records loaded; the chart will only show axes");
    }

    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, "unknown theme, using {}", theme.name);
    }
    let config = TimelineConfig::default()
        .with_theme(theme)
        .with_year_domain(cli.year_domain.into())
        .with_legend(!cli.no_legend);

    let mut app = AppState::new(config, records);
    if !cli.hide.is_empty() {
        app.hide(&cli.hide);
    }
    info!(
        shown = app.view().data().len(),
        total = app.all_records().len(),
        labelled = app.view().labelled().len(),
        "timeline built"
    );

    let frame = app.frame();
    timeline_render_skia::render_to_png(&frame, &cli.out)
        .with_context(|| format!("failed to render PNG '{}'", cli.out.display()))?;
    if let Some(svg) = &cli.svg {
        timeline_core::write_svg(&frame, svg)
            .with_context(|| format!("failed to write SVG '{}'", svg.display()))?;
    }
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_hide_flags() {
        let cli = Cli::try_parse_from([
            "disaster-timeline",
            "in.csv",
            "--hide",
            "flooding",
            "--hide",
            "severe-storm",
            "--year-domain",
            "fit",
            "--no-legend",
        ])
        .expect("valid args");
        assert_eq!(cli.hide, vec![Category::Flooding, Category::SevereStorm]);
        assert_eq!(cli.year_domain, YearDomainOpt::Fit);
        assert!(cli.no_legend);
        assert_eq!(cli.out, PathBuf::from("target/out/disaster_timeline.png"));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["disaster-timeline", "--hide", "volcano"]).is_err());
    }

    #[test]
    fn swaps_csv_extension() {
        assert_eq!(swap_ext(Path::new("a/b.cvs")), Some(PathBuf::from("a/b.csv")));
        assert_eq!(swap_ext(Path::new("a/b.CSV")), Some(PathBuf::from("a/b.cvs")));
        assert_eq!(swap_ext(Path::new("a/b.txt")), None);
    }
}
