use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use subway_core::domain::{LineId, StationId};
use subway_core::network::{Network, NetworkError};
use subway_core::route::RouteConfig;

#[derive(Parser)]
#[command(name = "subway")]
#[command(about = "Subway line maintenance and route planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a line's stations from upstream to downstream terminus
    Stations {
        /// Path to the network JSON file
        network: PathBuf,
        /// Line ID
        line_id: u64,
    },
    /// Find the shortest route between two stations and its fare
    Path {
        /// Path to the network JSON file
        network: PathBuf,
        /// Departure station ID
        source: u64,
        /// Arrival station ID
        target: u64,
        /// Passenger age, used for the fare discount
        #[arg(long, default_value_t = 20)]
        age: i32,
        /// Allow travel against segment direction
        #[arg(long)]
        bidirectional: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stations { network, line_id } => cmd_stations(&network, LineId(line_id)),
        Commands::Path {
            network,
            source,
            target,
            age,
            bidirectional,
        } => cmd_path(
            &network,
            StationId(source),
            StationId(target),
            age,
            bidirectional,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_stations(path: &Path, line_id: LineId) -> Result<(), NetworkError> {
    print!("{}", stations_report(path, line_id)?);
    Ok(())
}

fn cmd_path(
    path: &Path,
    source: StationId,
    target: StationId,
    age: i32,
    bidirectional: bool,
) -> Result<(), NetworkError> {
    print!("{}", path_report(path, source, target, age, bidirectional)?);
    Ok(())
}

fn stations_report(path: &Path, line_id: LineId) -> Result<String, NetworkError> {
    let network = Network::load(path)?;
    let chain = network.chain(line_id)?;

    let mut out = format!(
        "{} ({} segments, distance {})\n",
        chain.line(),
        chain.len(),
        chain.total_distance()
    );
    for station in chain.stations() {
        out.push_str(&format!("  {} {}\n", station.id(), station.name()));
    }
    Ok(out)
}

fn path_report(
    path: &Path,
    source: StationId,
    target: StationId,
    age: i32,
    bidirectional: bool,
) -> Result<String, NetworkError> {
    let mut network = Network::load(path)?;
    if bidirectional {
        network = network.with_route_config(RouteConfig::bidirectional());
    }

    let summary = network.find_path(source, target, age)?;

    let names: Vec<&str> = summary.stations().iter().map(|s| s.name()).collect();
    let mut out = format!("Route:    {}\n", names.join(" -> "));
    out.push_str(&format!("Distance: {}\n", summary.distance()));
    let lines: Vec<String> = summary.route.lines().iter().map(|l| l.name.clone()).collect();
    if !lines.is_empty() {
        out.push_str(&format!("Lines:    {}\n", lines.join(", ")));
    }
    out.push_str(&format!(
        "Fare:     {} (distance {}, extra {}, {:?})\n",
        summary.fare.total, summary.fare.distance_fare, summary.fare.extra_fare, summary.fare.age_group
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn snapshot_file() -> tempfile::NamedTempFile {
        let json = serde_json::json!({
            "stations": [
                {"id": 1, "name": "Gyodae"},
                {"id": 2, "name": "Nambu Bus Terminal"},
                {"id": 3, "name": "Yangjae"}
            ],
            "lines": [{"id": 3, "name": "Line 3", "color": "bg-orange-600", "extra_fare": 500}],
            "segments": [
                {"id": 2, "line_id": 3, "up_station_id": 2, "down_station_id": 3, "distance": 3},
                {"id": 1, "line_id": 3, "up_station_id": 1, "down_station_id": 2, "distance": 2}
            ]
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn stations_output() {
        let file = snapshot_file();
        let out = stations_report(file.path(), LineId(3)).unwrap();
        assert_eq!(
            out,
            "Line 3 (2 segments, distance 5)\n  #1 Gyodae\n  #2 Nambu Bus Terminal\n  #3 Yangjae\n"
        );
    }

    #[test]
    fn path_output() {
        let file = snapshot_file();
        let out = path_report(file.path(), StationId(1), StationId(3), 15, false).unwrap();
        assert_eq!(
            out,
            "Route:    Gyodae -> Nambu Bus Terminal -> Yangjae\n\
             Distance: 5\n\
             Lines:    Line 3\n\
             Fare:     1120 (distance 1250, extra 500, Teenager)\n"
        );
    }

    #[test]
    fn path_against_direction_needs_flag() {
        let file = snapshot_file();
        assert!(matches!(
            path_report(file.path(), StationId(3), StationId(1), 30, false).unwrap_err(),
            NetworkError::Route(_)
        ));

        let out = path_report(file.path(), StationId(3), StationId(1), 30, true).unwrap();
        assert!(out.starts_with("Route:    Yangjae -> Nambu Bus Terminal -> Gyodae\n"));
        assert!(out.contains("Fare:     1750 "));
    }

    #[test]
    fn unknown_line_reported() {
        let file = snapshot_file();
        let err = stations_report(file.path(), LineId(9)).unwrap_err();
        assert_eq!(err.to_string(), "line L9 does not exist");
    }
}
