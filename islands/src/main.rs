use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
    process,
    time::Instant,
};

use clap::{App, Arg, ArgMatches};

use archipelago::{Grid, IslandId, Labeling, LAND_MARKER};

/// Character used for water when a map is printed back out.
const WATER_MARKER: char = '~';

fn main() {
    let matches = App::new("Islands")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Counts and labels the islands on a text map of land and water.")
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .help("path to the map file to scan")
                .required(true),
        )
        .arg(
            Arg::with_name("labels")
                .short("l")
                .long("labels")
                .help("print the labeled map, one island id per land cell"),
        )
        .arg(
            Arg::with_name("island")
                .short("i")
                .long("island")
                .value_name("ID")
                .help("print the map with only the given island shown as land")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let path = matches.value_of("map").unwrap();
    let rows = read_rows(path)?;
    let grid = Grid::parse(&rows)?;

    let start = Instant::now();
    let labeling = Labeling::scan(&grid);
    let elapsed = start.elapsed();

    println!("Number of islands: {}", labeling.island_count());
    println!("Map size: {}", grid.dimensions().total_size());
    println!("Time: {}ms", elapsed.as_millis());

    if matches.is_present("labels") {
        println!();
        println!("{}", labeling);
    }

    if let Some(raw) = matches.value_of("island") {
        let id = parse_island_id(raw, &labeling)?;
        println!();
        print_island(&labeling, id);
    }

    Ok(())
}

/// Read the rows of the map file at `path`.
fn read_rows(path: &str) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// Parse an island id argument and check that the labeling actually contains it.
fn parse_island_id(raw: &str, labeling: &Labeling) -> Result<IslandId, String> {
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("invalid island id: {}", raw))?;
    if value == 0 || value > labeling.island_count() {
        return Err(format!(
            "no island with id {}, the map has {} island(s)",
            value,
            labeling.island_count()
        ));
    }
    Ok(IslandId::new(value))
}

/// Print the island with the given id in its original ocean: its cells as land, every
/// other cell as water.
fn print_island(labeling: &Labeling, id: IslandId) {
    for row in labeling.dimensions().iter_coordinates() {
        let line: String = row
            .map(|coord| {
                if labeling.get(coord) == Some(id) {
                    LAND_MARKER
                } else {
                    WATER_MARKER
                }
            })
            .collect();
        println!("{}", line);
    }
}
