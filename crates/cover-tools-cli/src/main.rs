use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cover_dieline::{
    BLUEPRINT_FILENAME, CoverDimensions, CoverSpecs, Unit, export_blueprint, export_template,
    template_filename,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covt", about = "Hardcover cover dieline tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DimensionArgs {
    /// Width of each cover board
    #[arg(long, default_value = "153.0")]
    board_width: f32,

    /// Height of each cover board
    #[arg(long, default_value = "216.0")]
    board_height: f32,

    /// Width of the spine panel
    #[arg(long, default_value = "20.0")]
    spine_width: f32,

    /// Gap between each board and the spine
    #[arg(long, default_value = "7.0")]
    hinge_gap: f32,

    /// Wrap-around margin outside the boards
    #[arg(long, default_value = "18.0")]
    turn_in: f32,

    /// Extra print margin outside the trim box
    #[arg(long, default_value = "0.0")]
    bleed: f32,

    /// Measurement unit (label only; values are not converted)
    #[arg(long, default_value = "mm", value_enum)]
    unit: UnitArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived flat-sheet specification
    Specs {
        #[command(flatten)]
        dims: DimensionArgs,
    },

    /// Export the actual-size prepress template PDF
    Template {
        #[command(flatten)]
        dims: DimensionArgs,

        /// Output file (defaults to the patterned template name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the A4 blueprint spec sheet PDF
    Blueprint {
        #[command(flatten)]
        dims: DimensionArgs,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate InDesign setup script text via the advisory service
    Script {
        #[command(flatten)]
        dims: DimensionArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Mm,
    Cm,
    In,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => Self::Mm,
            UnitArg::Cm => Self::Cm,
            UnitArg::In => Self::Inch,
        }
    }
}

impl DimensionArgs {
    fn into_dimensions(self) -> CoverDimensions {
        CoverDimensions {
            unit: self.unit.into(),
            board_width: self.board_width,
            board_height: self.board_height,
            spine_width: self.spine_width,
            hinge_gap: self.hinge_gap,
            turn_in: self.turn_in,
            bleed: self.bleed,
        }
    }
}

fn print_specs(dims: &CoverDimensions, specs: &CoverSpecs) {
    let u = dims.unit.suffix();
    let (page_w, page_h) = specs.page_size(dims.bleed);
    println!("Flat Sheet Specification:");
    println!("  Trim size:         {} x {} {u}", specs.total_width, specs.total_height);
    println!("  Page with bleed:   {page_w} x {page_h} {u}");
    println!("  Back board:        {} .. {} {u}", dims.turn_in, specs.back_board_end);
    println!("  Spine:             {} .. {} {u}", specs.spine_start, specs.spine_end);
    println!(
        "  Front board:       {} .. {} {u}",
        specs.front_board_start,
        specs.front_board_end(dims)
    );
    println!(
        "  Turn-in guides:    {} and {} {u}",
        dims.turn_in,
        specs.total_height - dims.turn_in
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Specs { dims } => {
            let dims = dims.into_dimensions();
            let specs = CoverSpecs::compute(&dims);
            print_specs(&dims, &specs);
        }

        Commands::Template { dims, output } => {
            let dims = dims.into_dimensions();
            let specs = CoverSpecs::compute(&dims);
            let path = output.unwrap_or_else(|| PathBuf::from(template_filename(&dims, &specs)));
            export_template(&dims, &path).await?;
            println!("Template → {}", path.display());
        }

        Commands::Blueprint { dims, output } => {
            let dims = dims.into_dimensions();
            let path = output.unwrap_or_else(|| PathBuf::from(BLUEPRINT_FILENAME));
            export_blueprint(&dims, &path).await?;
            println!("Blueprint → {}", path.display());
        }

        Commands::Script { dims } => {
            let dims = dims.into_dimensions();
            let specs = CoverSpecs::compute(&dims);
            let client = cover_advisor::AdvisorClient::from_env()
                .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;
            let script = client.generate_indesign_script(&dims, &specs).await;
            println!("{script}");
        }
    }

    Ok(())
}
