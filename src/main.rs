use aelther::chronology::{EraBounds, Marker, interpolate_year};
use aelther::{config, starfield};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "aelther", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Sweep a cursor down a synthetic chronology page and print the year readout
    Sweep {
        /// Number of probe rows to print
        #[arg(short, long, default_value_t = 24)]
        steps: usize,
    },
    /// Sample a background star field
    Stars {
        /// Seed for reproducible fields
        #[arg(short, long)]
        seed: Option<u64>,
        /// Override the configured star count
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Write the default configuration file and print its path
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep { steps } => sweep(steps),
        Commands::Stars { seed, count } => stars(seed, count),
        Commands::Init => init(),
    }
}

/// The terminal version of the site's debug year-lines: a stand-in page
/// of four cards, probed top to bottom.
fn sweep(steps: usize) -> anyhow::Result<()> {
    let markers = [
        Marker::new(180.0, -3200),
        Marker::new(560.0, -1450),
        Marker::new(940.0, 0),
        Marker::new(1320.0, 842),
    ];
    let tail = 1540.0;
    let era = EraBounds {
        start_year: -4000,
        end_year: 1205,
    };

    let bottom = tail + 120.0;
    println!("{:>8}  {:>6}", "cursor", "year");
    for i in 0..=steps {
        let cursor = bottom * i as f64 / steps.max(1) as f64;
        let year = interpolate_year(&markers, tail, era, cursor)?;
        println!("{:>8.1}  {:>6}", cursor, year);
    }
    Ok(())
}

fn stars(seed: Option<u64>, count: Option<usize>) -> anyhow::Result<()> {
    let cfg = config::load_or_default();
    let count = count.unwrap_or(cfg.stars.count);

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    for star in starfield::scatter(count, &mut rng) {
        println!(
            "{:6.2}% {:6.2}%  {:4.2}px  alpha {:4.2}  {:5.2}s +{:5.2}s",
            star.x, star.y, star.size, star.opacity, star.duration, star.delay
        );
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let path = config::write_default_config()?;
    println!("{}", path.display());
    Ok(())
}
