use clap::Parser;
use miette::*;
use tracing_subscriber::EnvFilter;

use junction_circuits::{config::Args, parser::parse_junctions, part2, Scene};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let points = parse_junctions(&args.read_input()?)?;
    let spanning = part2::connect_all(&points)?;
    println!("Result: {}", spanning.product);

    if let Some(path) = &args.scene {
        Scene::new(&points, &spanning.accepted).write_to(path)?;
    }
    Ok(())
}
