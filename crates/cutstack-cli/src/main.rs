mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cutstack_impose::constants::{mm_to_pt, pt_to_mm};
use cutstack_impose::{ImpositionOptions, ImpositionPlan, Quadrant, SheetSide, SourcePages};
use log::LevelFilter;
use logger::CliLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutstack", about = "4-up cut-and-stack PDF imposition", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF 4-up for cut-and-stack printing
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Only impose the first N sheets
        #[arg(long)]
        preview_sheets: Option<usize>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the slot table for a page count without touching any PDF
    Plan {
        /// Number of source pages
        #[arg(short, long)]
        pages: usize,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Where to write the configuration
        path: PathBuf,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Options JSON file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Quadrant margin in points
    #[arg(long, conflicts_with = "margin_mm")]
    margin: Option<f32>,

    /// Quadrant margin in millimeters
    #[arg(long)]
    margin_mm: Option<f32>,

    /// Draw dashed guides along the cut lines
    #[arg(long)]
    cut_guides: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    SingleSided,
    DoubleSided,
    DoubleSidedMirrored,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<ModeArg> for cutstack_impose::LayoutMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SingleSided => Self::SingleSided,
            ModeArg::DoubleSided => Self::DoubleSided,
            ModeArg::DoubleSidedMirrored => Self::DoubleSidedMirrored,
        }
    }
}

impl From<PaperArg> for cutstack_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for cutstack_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl LayoutArgs {
    /// Start from the config file (or defaults) and apply explicit flags
    async fn resolve(&self) -> Result<ImpositionOptions> {
        let mut options = match &self.config {
            Some(path) => ImpositionOptions::load(path)
                .await
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => ImpositionOptions::default(),
        };

        if let Some(mode) = self.mode {
            options.layout_mode = mode.into();
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            options.margin_pt = margin;
        }
        if let Some(margin_mm) = self.margin_mm {
            options.margin_pt = mm_to_pt(margin_mm);
        }
        if self.cut_guides {
            options.cut_guides = true;
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    CliLogger::new(level).init()?;

    match cli.command {
        Commands::Impose {
            input,
            output,
            layout,
            preview_sheets,
            stats_only,
        } => {
            let options = layout.resolve().await?;

            let source = cutstack_impose::load_pdf(&input)
                .await
                .with_context(|| format!("Failed to load {}", input.display()))?;

            // Calculate and show statistics
            let stats = cutstack_impose::document_statistics(&source, &options)?;
            println!("Imposition Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Empty quadrants: {}", stats.empty_slots);
            if stats.padded_pages != stats.source_pages {
                println!("  Padded to: {} pages", stats.padded_pages);
            }

            if stats_only {
                return Ok(());
            }

            let imposed = match preview_sheets {
                Some(max_sheets) => {
                    cutstack_impose::generate_preview(&source, &options, max_sheets).await?
                }
                None => cutstack_impose::impose(&source, &options).await?,
            };
            cutstack_impose::save_pdf(imposed, &output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Imposed {} pages → {}", source.page_count(), output.display());
        }

        Commands::Plan { pages, layout } => {
            let options = layout.resolve().await?;
            let plan = cutstack_impose::plan(pages, options.layout_mode)?;
            let geometry = options.sheet_geometry()?;

            println!(
                "{:?}: {} pages on {} sheets ({} x {} pt, margin {} pt / {:.1} mm)",
                plan.mode,
                plan.source_pages,
                plan.sheets_total,
                geometry.width,
                geometry.height,
                geometry.margin,
                pt_to_mm(geometry.margin)
            );
            for (quadrant, rect) in Quadrant::ALL.iter().zip(geometry.quadrants()) {
                println!(
                    "  {:?}: ({}, {}) - ({}, {})",
                    quadrant, rect.x0, rect.y0, rect.x1, rect.y1
                );
            }
            print_plan(&plan);
        }

        Commands::InitConfig { path } => {
            ImpositionOptions::default()
                .save(&path)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default options → {}", path.display());
        }
    }

    Ok(())
}

/// Print one row per printed side, one-based page numbers, `-` for empty
fn print_plan(plan: &ImpositionPlan) {
    for (sheet, side) in plan.sides() {
        let cells: Vec<String> = side
            .slots
            .iter()
            .map(|slot| match slot {
                Some(index) => (index + 1).to_string(),
                None => "-".to_string(),
            })
            .collect();
        let label = match side.side {
            SheetSide::Front => "front",
            SheetSide::Back => "back",
        };
        println!(
            "sheet {:>3} {:<5}  [{:>4} {:>4} | {:>4} {:>4}]",
            sheet + 1,
            label,
            cells[0],
            cells[1],
            cells[2],
            cells[3]
        );
    }
}
