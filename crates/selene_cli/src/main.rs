mod config;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use selene_rs::{
    DirectoryLoader, ImageIndex, PhaseRequest, RenderData, UtcTime, daily_phases, image_index,
    render_data, render_with_loader, rotation_frames,
};
use tracing::info;

use crate::config::SeleneConfig;

#[derive(Parser)]
#[command(name = "selene", version, about = "Moon phase and frame calculator")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to TOML configuration file (default: ./selene.toml if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Phase, name and illumination for a date (default: now)
    Phase {
        /// UTC datetime (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long)]
        date: Option<String>,
        /// Phase fraction override (0 = new, 0.5 = full)
        #[arg(long, allow_negative_numbers = true)]
        phase: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Frame index (2-28) for a phase fraction
    Index {
        /// Phase fraction; any real value, wrapped into [0, 1)
        #[arg(allow_negative_numbers = true)]
        phase: f64,
    },
    /// Julian Day for a UTC date
    Jd {
        /// UTC datetime (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long)]
        date: String,
    },
    /// UTC date for a Julian Day
    Calendar {
        /// Julian Day number
        jd: f64,
    },
    /// Frame sequence for a rotating moon loop
    Frames {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load the frame image for a date or phase
    Image {
        /// UTC datetime (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long)]
        date: Option<String>,
        /// Phase fraction override
        #[arg(long, allow_negative_numbers = true)]
        phase: Option<f64>,
        /// Directory with moon-{n}.{ext} frames (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Image format: jpeg, png or webp (overrides config)
        #[arg(long)]
        format: Option<String>,
        /// Copy the frame to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// One row per day: date, phase, name, illumination, frame
    Table {
        /// First UTC date (default: today)
        #[arg(long)]
        start: Option<String>,
        /// Number of days
        #[arg(long, default_value = "30")]
        days: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Phase { date, phase, json } => {
            let data = render_data(&build_request(date.as_deref(), phase)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_render_data(&data);
            }
        }
        Commands::Index { phase } => {
            println!("{}", image_index(phase)?);
        }
        Commands::Jd { date } => {
            let utc = parse_date(&date)?;
            println!("{:.6}", utc.to_jd());
        }
        Commands::Calendar { jd } => {
            if !jd.is_finite() {
                bail!("julian day must be finite, got {jd}");
            }
            println!("{}", UtcTime::from_jd(jd));
        }
        Commands::Frames { json } => {
            let frames = rotation_frames();
            if json {
                println!("{}", serde_json::to_string_pretty(&frames)?);
            } else {
                for (step, f) in frames.iter().enumerate() {
                    let flip = if f.mirrored { " (mirrored)" } else { "" };
                    println!("{step:>2}  frame {:>2}{flip}", f.index.get());
                }
            }
        }
        Commands::Image {
            date,
            phase,
            dir,
            format,
            out,
        } => {
            let cfg = SeleneConfig::load(cli.config.as_deref())?;
            let format = match format {
                Some(name) => name.parse()?,
                None => cfg.format()?,
            };
            let Some(dir) = dir.or(cfg.assets.dir) else {
                bail!("no frame directory: pass --dir or set [assets] dir in the config");
            };
            let loader = DirectoryLoader::new(dir, format);
            let request = build_request(date.as_deref(), phase)?;
            let (data, frame) = render_with_loader(&request, &loader)?;
            print_render_data(&data);
            if let Some(path) = &frame.path {
                println!("File:         {}", path.display());
            }
            println!("Media type:   {} ({} bytes)", frame.media_type(), frame.bytes.len());
            if let Some(out) = out {
                std::fs::write(&out, &frame.bytes)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                info!(path = %out.display(), "frame written");
            }
        }
        Commands::Table { start, days } => {
            let start = match start {
                Some(s) => parse_date(&s)?,
                None => {
                    let now = UtcTime::now()?;
                    UtcTime::new(now.year, now.month, now.day, 0, 0, 0.0)
                }
            };
            println!(
                "{:<10}  {:>6}  {:<16}  {:>5}  {:>5}",
                "date", "phase", "name", "lit", "frame"
            );
            for (date, data) in daily_phases(start, days)? {
                println!(
                    "{:04}-{:02}-{:02}  {:>6.4}  {:<16}  {:>4.0}%  {:>5}",
                    date.year,
                    date.month,
                    date.day,
                    data.moon.phase,
                    data.moon.name.name(),
                    data.moon.illumination * 100.0,
                    data.image_index.get()
                );
            }
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<UtcTime> {
    s.parse::<UtcTime>()
        .with_context(|| format!("invalid --date {s:?}"))
}

fn build_request(date: Option<&str>, phase: Option<f64>) -> Result<PhaseRequest> {
    let date = date.map(parse_date).transpose()?;
    Ok(PhaseRequest { date, phase })
}

fn print_render_data(data: &RenderData) {
    let moon = &data.moon;
    println!("Phase:        {:.4}", moon.phase);
    println!("Name:         {}", moon.name);
    println!("Illumination: {:.1}%", moon.illumination * 100.0);
    println!("Age:          {:.2} days", moon.age_days());
    println!(
        "Frame:        {} of {}..={}",
        data.image_index,
        ImageIndex::MIN,
        ImageIndex::MAX
    );
}
