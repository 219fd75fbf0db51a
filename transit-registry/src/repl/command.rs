//! Command-line parsing for the front-end.
//!
//! One line is one command. Double quotes group words into a single
//! token, coordinates are written `(x,y)`, and times `HH:MM`. Blank
//! lines and lines starting with `#` parse to nothing.

use crate::domain::{
    Coord, DepartureTime, InvalidRegionId, InvalidStationId, InvalidTrainId, RegionId, StationId,
    TimeError, TrainId,
};

/// Error produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("bad coordinate `{0}`, expected (x,y)")]
    BadCoord(String),
    #[error(transparent)]
    Station(#[from] InvalidStationId),
    #[error(transparent)]
    Train(#[from] InvalidTrainId),
    #[error(transparent)]
    Region(#[from] InvalidRegionId),
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// A parsed front-end command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StationCount,
    ClearAll,
    AllStations,
    AddStation { id: StationId, name: String, coord: Coord },
    GetStationName { id: StationId },
    GetStationCoord { id: StationId },
    StationsAlphabetically,
    StationsDistanceIncreasing,
    FindStationWithCoord { coord: Coord },
    ChangeStationCoord { id: StationId, coord: Coord },
    RemoveStation { id: StationId },
    AddDeparture { station: StationId, train: TrainId, time: DepartureTime },
    RemoveDeparture { station: StationId, train: TrainId, time: DepartureTime },
    StationDeparturesAfter { station: StationId, time: DepartureTime },
    AddRegion { id: RegionId, name: String, boundary: Vec<Coord> },
    AllRegions,
    GetRegionName { id: RegionId },
    GetRegionCoords { id: RegionId },
    AddSubregionToRegion { child: RegionId, parent: RegionId },
    AddStationToRegion { station: StationId, region: RegionId },
    StationInRegions { station: StationId },
    AllSubregionsOfRegion { region: RegionId },
    StationsClosestTo { coord: Coord },
    CommonParentOfRegions { first: RegionId, second: RegionId },
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` means there was nothing to run
/// (blank line or comment).
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    if line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (name.as_str(), args) {
        ("station_count", []) => Command::StationCount,
        ("station_count", _) => return Err(CommandError::Usage("station_count")),

        ("clear_all", []) => Command::ClearAll,
        ("clear_all", _) => return Err(CommandError::Usage("clear_all")),

        ("all_stations", []) => Command::AllStations,
        ("all_stations", _) => return Err(CommandError::Usage("all_stations")),

        ("add_station", [id, station_name, coord]) => Command::AddStation {
            id: StationId::new(id.clone())?,
            name: station_name.clone(),
            coord: parse_coord(coord)?,
        },
        ("add_station", _) => {
            return Err(CommandError::Usage("add_station <id> <name> (x,y)"));
        }

        ("get_station_name", [id]) => Command::GetStationName { id: StationId::new(id.clone())? },
        ("get_station_name", _) => return Err(CommandError::Usage("get_station_name <id>")),

        ("get_station_coord", [id]) => Command::GetStationCoord { id: StationId::new(id.clone())? },
        ("get_station_coord", _) => return Err(CommandError::Usage("get_station_coord <id>")),

        ("stations_alphabetically", []) => Command::StationsAlphabetically,
        ("stations_alphabetically", _) => {
            return Err(CommandError::Usage("stations_alphabetically"));
        }

        ("stations_distance_increasing", []) => Command::StationsDistanceIncreasing,
        ("stations_distance_increasing", _) => {
            return Err(CommandError::Usage("stations_distance_increasing"));
        }

        ("find_station_with_coord", [coord]) => {
            Command::FindStationWithCoord { coord: parse_coord(coord)? }
        }
        ("find_station_with_coord", _) => {
            return Err(CommandError::Usage("find_station_with_coord (x,y)"));
        }

        ("change_station_coord", [id, coord]) => Command::ChangeStationCoord {
            id: StationId::new(id.clone())?,
            coord: parse_coord(coord)?,
        },
        ("change_station_coord", _) => {
            return Err(CommandError::Usage("change_station_coord <id> (x,y)"));
        }

        ("remove_station", [id]) => Command::RemoveStation { id: StationId::new(id.clone())? },
        ("remove_station", _) => return Err(CommandError::Usage("remove_station <id>")),

        ("add_departure", [station, train, time]) => Command::AddDeparture {
            station: StationId::new(station.clone())?,
            train: TrainId::new(train.clone())?,
            time: DepartureTime::parse_hhmm(time)?,
        },
        ("add_departure", _) => {
            return Err(CommandError::Usage("add_departure <station> <train> HH:MM"));
        }

        ("remove_departure", [station, train, time]) => Command::RemoveDeparture {
            station: StationId::new(station.clone())?,
            train: TrainId::new(train.clone())?,
            time: DepartureTime::parse_hhmm(time)?,
        },
        ("remove_departure", _) => {
            return Err(CommandError::Usage("remove_departure <station> <train> HH:MM"));
        }

        ("station_departures_after", [station, time]) => Command::StationDeparturesAfter {
            station: StationId::new(station.clone())?,
            time: DepartureTime::parse_hhmm(time)?,
        },
        ("station_departures_after", _) => {
            return Err(CommandError::Usage("station_departures_after <station> HH:MM"));
        }

        ("add_region", [id, region_name, boundary @ ..]) => Command::AddRegion {
            id: id.parse()?,
            name: region_name.clone(),
            boundary: boundary.iter().map(|token| parse_coord(token)).collect::<Result<_, _>>()?,
        },
        ("add_region", _) => {
            return Err(CommandError::Usage("add_region <id> <name> [(x,y) ...]"));
        }

        ("all_regions", []) => Command::AllRegions,
        ("all_regions", _) => return Err(CommandError::Usage("all_regions")),

        ("get_region_name", [id]) => Command::GetRegionName { id: id.parse()? },
        ("get_region_name", _) => return Err(CommandError::Usage("get_region_name <id>")),

        ("get_region_coords", [id]) => Command::GetRegionCoords { id: id.parse()? },
        ("get_region_coords", _) => return Err(CommandError::Usage("get_region_coords <id>")),

        ("add_subregion_to_region", [child, parent]) => Command::AddSubregionToRegion {
            child: child.parse()?,
            parent: parent.parse()?,
        },
        ("add_subregion_to_region", _) => {
            return Err(CommandError::Usage("add_subregion_to_region <subregion> <region>"));
        }

        ("add_station_to_region", [station, region]) => Command::AddStationToRegion {
            station: StationId::new(station.clone())?,
            region: region.parse()?,
        },
        ("add_station_to_region", _) => {
            return Err(CommandError::Usage("add_station_to_region <station> <region>"));
        }

        ("station_in_regions", [station]) => {
            Command::StationInRegions { station: StationId::new(station.clone())? }
        }
        ("station_in_regions", _) => {
            return Err(CommandError::Usage("station_in_regions <station>"));
        }

        ("all_subregions_of_region", [region]) => {
            Command::AllSubregionsOfRegion { region: region.parse()? }
        }
        ("all_subregions_of_region", _) => {
            return Err(CommandError::Usage("all_subregions_of_region <region>"));
        }

        ("stations_closest_to", [coord]) => {
            Command::StationsClosestTo { coord: parse_coord(coord)? }
        }
        ("stations_closest_to", _) => {
            return Err(CommandError::Usage("stations_closest_to (x,y)"));
        }

        ("common_parent_of_regions", [first, second]) => Command::CommonParentOfRegions {
            first: first.parse()?,
            second: second.parse()?,
        },
        ("common_parent_of_regions", _) => {
            return Err(CommandError::Usage("common_parent_of_regions <region> <region>"));
        }

        ("help", _) => Command::Help,
        ("quit", _) | ("exit", _) => Command::Quit,

        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Split a line into tokens. Double quotes group words into one token
/// and are stripped; there is no escaping inside quotes.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '"' {
            chars.next();
            let mut token = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(other) => token.push(other),
                    None => return Err(CommandError::UnterminatedQuote),
                }
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}

/// Parse a `(x,y)` coordinate token.
fn parse_coord(token: &str) -> Result<Coord, CommandError> {
    let bad = || CommandError::BadCoord(token.to_string());

    let inner = token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (x, y) = inner.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse::<i32>().map_err(|_| bad())?;
    let y = y.trim().parse::<i32>().map_err(|_| bad())?;
    Ok(Coord::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::new(s.to_string()).unwrap()
    }

    #[test]
    fn blank_and_comment_lines_parse_to_nothing() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t "), Ok(None));
        assert_eq!(parse("# add_station HKI Helsinki (1,1)"), Ok(None));
    }

    #[test]
    fn zero_argument_commands() {
        assert_eq!(parse("station_count"), Ok(Some(Command::StationCount)));
        assert_eq!(parse("all_stations"), Ok(Some(Command::AllStations)));
        assert_eq!(parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn add_station_with_quoted_name() {
        assert_eq!(
            parse("add_station PSL \"Pasila asema\" (3,-4)"),
            Ok(Some(Command::AddStation {
                id: station("PSL"),
                name: "Pasila asema".to_string(),
                coord: Coord::new(3, -4),
            }))
        );
    }

    #[test]
    fn add_region_takes_a_variadic_boundary() {
        assert_eq!(
            parse("add_region 3 Uusimaa (0,0) (4,0) (4,4)"),
            Ok(Some(Command::AddRegion {
                id: RegionId::new(3),
                name: "Uusimaa".to_string(),
                boundary: vec![Coord::new(0, 0), Coord::new(4, 0), Coord::new(4, 4)],
            }))
        );
        assert_eq!(
            parse("add_region 4 Empty"),
            Ok(Some(Command::AddRegion {
                id: RegionId::new(4),
                name: "Empty".to_string(),
                boundary: Vec::new(),
            }))
        );
    }

    #[test]
    fn departure_commands_parse_times() {
        assert_eq!(
            parse("add_departure HKI IC-42 06:30"),
            Ok(Some(Command::AddDeparture {
                station: station("HKI"),
                train: TrainId::new("IC-42".to_string()).unwrap(),
                time: DepartureTime::parse_hhmm("06:30").unwrap(),
            }))
        );
        assert!(matches!(
            parse("add_departure HKI IC-42 6:30"),
            Err(CommandError::Time(_))
        ));
    }

    #[test]
    fn arity_errors_report_usage() {
        assert_eq!(
            parse("add_station HKI"),
            Err(CommandError::Usage("add_station <id> <name> (x,y)"))
        );
        assert_eq!(
            parse("station_count now"),
            Err(CommandError::Usage("station_count"))
        );
    }

    #[test]
    fn unknown_commands_are_reported_by_name() {
        assert_eq!(
            parse("teleport HKI"),
            Err(CommandError::Unknown("teleport".to_string()))
        );
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for token in ["1,1", "(1 1)", "(1,)", "(a,b)", "(1,2", "[1,2]"] {
            let line = format!("find_station_with_coord {token}");
            assert_eq!(parse(&line), Err(CommandError::BadCoord(token.to_string())));
        }
    }

    #[test]
    fn coordinates_allow_negative_components() {
        assert_eq!(
            parse("stations_closest_to (-7,0)"),
            Ok(Some(Command::StationsClosestTo { coord: Coord::new(-7, 0) }))
        );
    }

    #[test]
    fn empty_station_id_is_rejected() {
        assert!(matches!(
            parse("get_station_name \"\""),
            Err(CommandError::Station(_))
        ));
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert_eq!(
            parse("add_station HKI \"Helsinki (1,1)"),
            Err(CommandError::UnterminatedQuote)
        );
    }

    #[test]
    fn region_ids_must_be_unsigned_integers() {
        assert!(matches!(parse("get_region_name -1"), Err(CommandError::Region(_))));
        assert!(matches!(parse("get_region_name abc"), Err(CommandError::Region(_))));
    }
}
