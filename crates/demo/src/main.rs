// File: crates/demo/src/main.rs
// Summary: Demo host; loads task/employee/material JSON, runs one analytics pass, writes an SVG board and CSV series.

mod export;
mod svg;

use std::path::{Path, PathBuf};

use analytics_core::{
    bar_chart_height, ChartOptions, Dashboard, DashboardInput, Employee, Material, TaskRecord, Theme, Viewport,
    WindowTag,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about = "Render the shift analytics board from exported records")]
struct Args {
    /// JSON file with `tasks`, `employees` and `materials` arrays
    input: PathBuf,
    /// Active window: day, week or month
    #[arg(long, default_value = "week")]
    window: WindowTag,
    /// Reference day (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,
    #[arg(long, default_value_t = 360.0)]
    width: f64,
    #[arg(long, default_value_t = 220.0)]
    height: f64,
    #[arg(long, default_value_t = 32.0)]
    padding: f64,
    /// Donut hole as a fraction of the pie radius
    #[arg(long, default_value_t = 0.0)]
    donut: f64,
    /// light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,
    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

/// Shape of the exported backend snapshot.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    tasks: Vec<TaskRecord>,
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    materials: Vec<Material>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.width < 0.0 || args.height <= 2.0 * args.padding {
        anyhow::bail!(
            "viewport {}x{} cannot hold a padding of {}",
            args.width,
            args.height,
            args.padding
        );
    }
    let theme: Theme = args.theme.parse()?;
    let today = args.today.unwrap_or_else(|| chrono::Local::now().date_naive());

    let snapshot = load_snapshot(&args.input)
        .with_context(|| format!("failed to load records from '{}'", args.input.display()))?;
    println!(
        "Loaded {} tasks, {} employees, {} materials",
        snapshot.tasks.len(),
        snapshot.employees.len(),
        snapshot.materials.len()
    );

    let opts = ChartOptions {
        viewport: Viewport::new(args.width, args.height, args.padding),
        theme,
        inner_ratio: args.donut,
        ..ChartOptions::default()
    };
    let input = DashboardInput {
        tasks: &snapshot.tasks,
        employees: &snapshot.employees,
        materials: &snapshot.materials,
        tag: args.window,
        today,
    };
    let frame = Dashboard::render(&input, &opts);
    println!(
        "Window {} [{} ..= {}]: {} of {} tasks completed ({}%)",
        frame.window.tag,
        frame.window.start,
        frame.window.end,
        frame.summary.completed_tasks,
        frame.summary.total_tasks,
        frame.summary.completion_rate
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory '{}'", args.out.display()))?;

    let panels = [
        svg::Panel::new("Performance trend", &frame.line, args.height),
        svg::Panel::new("Material usage", &frame.pie, args.height),
        svg::Panel::new("Material totals", &frame.bars, bar_chart_height(frame.categories.len())),
        svg::Panel::new("Attendance (last 7 days)", &frame.attendance_bars, args.height),
    ];
    let board = svg::render_board(&panels, args.width, &opts.theme);
    let board_path = args.out.join("board.svg");
    std::fs::write(&board_path, board).with_context(|| format!("writing '{}'", board_path.display()))?;
    println!("Wrote {}", board_path.display());

    for path in export::write_series(&args.out, &frame)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw).context("decoding snapshot JSON")?;
    log::debug!("snapshot {} parsed ({} bytes)", path.display(), raw.len());
    Ok(snapshot)
}
