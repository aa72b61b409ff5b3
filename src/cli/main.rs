#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use augflow::{max_flow, EdgeFlow, FlowNetwork, Strategy};
use clap::{Parser, ValueEnum};
use csv::Writer;
use log::LevelFilter;
use serde::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
    Widest,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Widest => Strategy::WidestPath,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Compute the maximum flow of a capacitated network")]
struct Cli {
    /// CSV file of edges with a `from,to,capacity` header
    input: PathBuf,

    #[arg(long)]
    source: usize,

    #[arg(long)]
    sink: usize,

    #[arg(long, value_enum, default_value_t = StrategyArg::Bfs)]
    strategy: StrategyArg,

    /// Number of vertices, defaults to the largest vertex id in the input plus one
    #[arg(long)]
    vertices: Option<usize>,

    /// Write the flow assignment as `from,to,flow,capacity` CSV
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also report edges that carry no flow
    #[arg(long)]
    show_empty: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Clone, Debug, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    capacity: i64,
}

// Read the edge list from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Vec<EdgeRecord>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(File::open(filepath)?);
    let rows: Result<Vec<_>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

// Write the flow assignment
fn write_csv(flows: &[EdgeFlow<i64>], filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for flow in flows {
        wtr.serialize(flow)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let edges = read_edges_csv(&cli.input)?;
    let vertex_count = cli.vertices.unwrap_or_else(|| {
        edges
            .iter()
            .map(|e| e.from.max(e.to) + 1)
            .max()
            .unwrap_or_default()
    });

    let mut network = FlowNetwork::new(vertex_count);
    for e in &edges {
        network
            .add_edge(e.from, e.to, e.capacity)
            .map_err(|err| {
                log::error!("rejected edge {} -> {}", e.from, e.to);
                err
            })?;
    }

    let strategy = Strategy::from(cli.strategy);
    log::debug!("running {strategy} search over {} edges", edges.len());

    let value = max_flow(&mut network, cli.source, cli.sink, strategy)?;
    network.check(cli.source, cli.sink)?;

    let flows: Vec<_> = network.flows(cli.show_empty).collect();
    for EdgeFlow {
        from,
        to,
        flow,
        capacity,
    } in &flows
    {
        println!("{from} -> {to} : {flow}/{capacity}");
    }
    println!("Max flow ({strategy}): {value}");

    if let Some(output) = &cli.output {
        write_csv(&flows, output)?;
    }
    Ok(())
}
