use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use urdf_merge::Merger;

#[derive(Parser, Debug)]
#[command(name = "urdf-merge")]
#[command(about = "Attach a gripper URDF to a robot arm URDF", long_about = None)]
#[command(version)]
struct Args {
    /// Robot arm URDF
    #[arg(value_name = "ROBOT_URDF")]
    robot: PathBuf,

    /// Gripper URDF
    #[arg(value_name = "GRIPPER_URDF")]
    gripper: PathBuf,

    /// Where to write the combined URDF
    #[arg(value_name = "OUTPUT_URDF")]
    output: PathBuf,

    /// Quiet operation, suppress warnings
    #[arg(short = 'q', conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Set verbosity level explicitly (0-4)
    #[arg(
        long = "verbosity",
        value_name = "LEVEL",
        conflicts_with = "verbose",
        conflicts_with = "quiet"
    )]
    verbosity_level: Option<u8>,
}

impl Args {
    fn get_verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else if let Some(level) = self.verbosity_level {
            level.min(4)
        } else {
            1 + self.verbose.min(3)
        }
    }
}

fn init_logging(verbosity: u8) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new().filter_level(level).init();
}

fn main() -> anyhow::Result<()> {
    // Usage errors exit 1 like every other failure; help and version still exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                process::exit(1);
            }
        },
    };

    init_logging(args.get_verbosity());

    if let Err(err) = Merger::check_inputs(&args.robot, &args.gripper) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    let merger = Merger::new();

    println!("Combining URDFs:");
    println!("  Robot: {}", args.robot.display());
    println!("  Gripper: {}", args.gripper.display());
    println!("  Output: {}", args.output.display());
    println!(
        "  Attaching gripper '{}' to robot link '{}'",
        merger.gripper_base_link(),
        merger.attach_link()
    );

    let report = merger
        .run(&args.robot, &args.gripper, &args.output)
        .context("Failed to combine URDFs")?;

    print!("{}", report);
    io::stdout().flush()?;

    Ok(())
}
