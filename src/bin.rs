use clap::Parser;
use fenwick::{LightBulbs, SumTree};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Runs the sum tree example, then checks random light bulb toggles against a plain array.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of light bulbs
    #[arg(short, long, default_value_t = 10)]
    len: usize,
    /// Number of random toggles
    #[arg(short, long, default_value_t = 10_000)]
    rounds: usize,
    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the bulbs after the run
    #[arg(short, long)]
    print: bool,
}

fn sum_example() -> fenwick::error::Result<()> {
    // data starts at index 1. ar[0] is ignored
    let ar = vec![0, 5, 2, 9, -3, 5, 20, 10, -7, 2, 3, -4, 0, -2, 15, 5];
    let mut tree: SumTree = SumTree::from(ar);

    tracing::info!(value = tree.value_at(3)?, "value at 3");
    tracing::info!(sum = tree.range_query(1, 3)?, "sum(1, 3)");
    tree.update(2, 20)?;
    tracing::info!(sum = tree.range_query(1, 3)?, "sum(1, 3) after setting index 2 to 20");
    Ok(())
}

fn toggle_check(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.len == 0 {
        tracing::warn!("no light bulbs to toggle");
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, len = args.len, rounds = args.rounds, "toggling light bulbs");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut bulbs = LightBulbs::with_len(args.len);
    // brute force way of toggling
    let mut expected = vec![false; args.len + 1];

    for round in 0..args.rounds {
        let start = rng.gen_range(1..=args.len);
        let end = rng.gen_range(start..=args.len);
        tracing::debug!(round, start, end, "toggle");

        bulbs.toggle(start, end)?;
        for on in &mut expected[start..=end] {
            *on = !*on;
        }

        for (i, &on) in expected.iter().enumerate().skip(1) {
            if bulbs.is_on(i)? != on {
                tracing::error!(round, bulb = i, "light bulb disagrees with the plain array");
                println!("{bulbs}");
                return Err(format!("bulb {i} is wrong after round {round}").into());
            }
        }
    }

    tracing::info!(on = expected.iter().filter(|&&on| on).count(), "all rounds agree");
    if args.print {
        println!("{bulbs}");
    }
    Ok(())
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    sum_example()?;
    toggle_check(&args)?;
    Ok(())
}
