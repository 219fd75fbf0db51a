//! The line-oriented front-end.
//!
//! Reads commands, runs them against a [`TransitRegistry`], and writes
//! rendered results. All registry logic lives behind the facade; this
//! module only parses, dispatches, and formats.

mod command;
mod render;

pub use command::{Command, CommandError, parse};
pub use render::{NO_COORD, NO_NAME, NO_REGION, NO_STATION, NO_TIME, NO_TRAIN};

use crate::registry::TransitRegistry;
use std::io::{self, BufRead, Write};

/// Front-end behavior knobs.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Printed before reading each command line, and as the prefix of
    /// echoed lines.
    pub prompt: String,
    /// Echo each input line before executing it. Used for command
    /// files, where the input is not otherwise visible.
    pub echo: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            echo: false,
        }
    }
}

/// Run commands from `input` until `quit` or end of input. Parse errors
/// are reported on `output` and do not stop the loop.
pub fn run<R: BufRead, W: Write>(
    registry: &mut TransitRegistry,
    config: &ReplConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if !config.echo {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if config.echo {
            writeln!(output, "{}{line}", config.prompt)?;
        }

        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(parsed)) => execute(registry, parsed, &mut output)?,
            Err(error) => writeln!(output, "error: {error}")?,
        }
    }
    Ok(())
}

fn execute<W: Write>(
    registry: &mut TransitRegistry,
    command: Command,
    output: &mut W,
) -> io::Result<()> {
    match command {
        Command::StationCount => writeln!(output, "{}", registry.station_count()),
        Command::ClearAll => {
            registry.clear_all();
            writeln!(output, "{}", render::boolean(true))
        }
        Command::AllStations => {
            // Arbitrary store order, sorted here for stable output.
            let mut ids = registry.all_stations();
            ids.sort();
            writeln!(output, "{}", render::station_list(&ids))
        }
        Command::AddStation { id, name, coord } => {
            writeln!(output, "{}", render::boolean(registry.add_station(id, name, coord)))
        }
        Command::GetStationName { id } => {
            writeln!(output, "{}", render::name_or_sentinel(registry.station_name(&id)))
        }
        Command::GetStationCoord { id } => {
            writeln!(output, "{}", render::coord_or_sentinel(registry.station_coord(&id)))
        }
        Command::StationsAlphabetically => {
            writeln!(output, "{}", render::station_list(registry.stations_alphabetically()))
        }
        Command::StationsDistanceIncreasing => {
            writeln!(output, "{}", render::station_list(registry.stations_distance_increasing()))
        }
        Command::FindStationWithCoord { coord } => {
            writeln!(
                output,
                "{}",
                render::station_or_sentinel(registry.find_station_with_coord(coord))
            )
        }
        Command::ChangeStationCoord { id, coord } => {
            writeln!(output, "{}", render::boolean(registry.change_station_coord(&id, coord)))
        }
        Command::RemoveStation { id } => {
            writeln!(output, "{}", render::boolean(registry.remove_station(&id)))
        }
        Command::AddDeparture { station, train, time } => {
            writeln!(output, "{}", render::boolean(registry.add_departure(&station, train, time)))
        }
        Command::RemoveDeparture { station, train, time } => {
            writeln!(
                output,
                "{}",
                render::boolean(registry.remove_departure(&station, &train, time))
            )
        }
        Command::StationDeparturesAfter { station, time } => {
            let departures = registry.station_departures_after(&station, time);
            writeln!(output, "{}", render::departures_or_sentinel(departures.as_deref()))
        }
        Command::AddRegion { id, name, boundary } => {
            writeln!(output, "{}", render::boolean(registry.add_region(id, name, boundary)))
        }
        Command::AllRegions => {
            // Insertion order in the store, sorted by id for display.
            let mut ids = registry.all_regions().to_vec();
            ids.sort();
            writeln!(output, "{}", render::regions_or_sentinel(Some(&ids)))
        }
        Command::GetRegionName { id } => {
            writeln!(output, "{}", render::name_or_sentinel(registry.region_name(id)))
        }
        Command::GetRegionCoords { id } => {
            writeln!(output, "{}", render::boundary_or_sentinel(registry.region_boundary(id)))
        }
        Command::AddSubregionToRegion { child, parent } => {
            writeln!(
                output,
                "{}",
                render::boolean(registry.add_subregion_to_region(child, parent))
            )
        }
        Command::AddStationToRegion { station, region } => {
            writeln!(
                output,
                "{}",
                render::boolean(registry.add_station_to_region(&station, region))
            )
        }
        Command::StationInRegions { station } => {
            let chain = registry.station_in_regions(&station);
            writeln!(output, "{}", render::regions_or_sentinel(chain.as_deref()))
        }
        Command::AllSubregionsOfRegion { region } => {
            let subregions = registry.all_subregions_of_region(region);
            writeln!(output, "{}", render::regions_or_sentinel(subregions.as_deref()))
        }
        Command::StationsClosestTo { coord } => {
            writeln!(output, "{}", render::station_list(&registry.stations_closest_to(coord)))
        }
        Command::CommonParentOfRegions { first, second } => {
            writeln!(
                output,
                "{}",
                render::region_or_sentinel(registry.common_parent_of_regions(first, second))
            )
        }
        Command::Help => help(output),
        // `quit` is handled by the loop before dispatch.
        Command::Quit => Ok(()),
    }
}

fn help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  station_count")?;
    writeln!(output, "  all_stations")?;
    writeln!(output, "  add_station <id> <name> (x,y)")?;
    writeln!(output, "  get_station_name <id>")?;
    writeln!(output, "  get_station_coord <id>")?;
    writeln!(output, "  stations_alphabetically")?;
    writeln!(output, "  stations_distance_increasing")?;
    writeln!(output, "  find_station_with_coord (x,y)")?;
    writeln!(output, "  change_station_coord <id> (x,y)")?;
    writeln!(output, "  remove_station <id>")?;
    writeln!(output, "  stations_closest_to (x,y)")?;
    writeln!(output, "  add_departure <station> <train> HH:MM")?;
    writeln!(output, "  remove_departure <station> <train> HH:MM")?;
    writeln!(output, "  station_departures_after <station> HH:MM")?;
    writeln!(output, "  add_region <id> <name> [(x,y) ...]")?;
    writeln!(output, "  all_regions")?;
    writeln!(output, "  get_region_name <id>")?;
    writeln!(output, "  get_region_coords <id>")?;
    writeln!(output, "  add_subregion_to_region <subregion> <region>")?;
    writeln!(output, "  add_station_to_region <station> <region>")?;
    writeln!(output, "  station_in_regions <station>")?;
    writeln!(output, "  all_subregions_of_region <region>")?;
    writeln!(output, "  common_parent_of_regions <region> <region>")?;
    writeln!(output, "  clear_all")?;
    writeln!(output, "  help")?;
    writeln!(output, "  quit")
}
