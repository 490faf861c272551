//! Map data loading.
//!
//! Map data is a sequence of tabular records, one per line:
//!
//! ```text
//! x,y,terrain[,city_name,population]
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A city record
//! carries a name and a population figure, from which the city's point
//! value is derived. Loading fails fast on the first malformed or
//! duplicate record; a partial world is never constructed.

use std::collections::BTreeMap;
use std::fmt;

use crate::game::{City, Position, Province, Terrain, World};

/// Error produced when map data is malformed.
///
/// Fatal to world construction: no partial world is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapDataError {
    /// A record has the wrong number of fields.
    Incomplete {
        /// 1-based source line of the record.
        line: usize,
    },
    /// A field could not be parsed.
    InvalidField {
        /// 1-based source line of the record.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
    },
    /// Two records supply the same position.
    DuplicatePosition {
        /// 1-based source line of the later record.
        line: usize,
        /// The duplicated position.
        position: Position,
    },
}

impl fmt::Display for MapDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapDataError::Incomplete { line } => write!(f, "line {line}: incomplete record"),
            MapDataError::InvalidField { line, field } => {
                write!(f, "line {line}: invalid {field}")
            }
            MapDataError::DuplicatePosition { line, position } => {
                write!(f, "line {line}: duplicate position {position}")
            }
        }
    }
}

impl std::error::Error for MapDataError {}

impl World {
    /// Load a world from tabular map data.
    ///
    /// # Errors
    ///
    /// Returns a [`MapDataError`] if any record has the wrong number of
    /// fields, an unparseable coordinate or population, an unknown
    /// terrain designator, or duplicates an earlier record's position.
    pub fn load(data: &str) -> Result<Self, MapDataError> {
        let mut provinces = BTreeMap::new();

        for (index, raw) in data.lines().enumerate() {
            let line = index + 1;
            let record = raw.trim();
            if record.is_empty() || record.starts_with('#') {
                continue;
            }
            let (position, province) = parse_record(line, record)?;
            if provinces.insert(position, province).is_some() {
                return Err(MapDataError::DuplicatePosition { line, position });
            }
        }

        Ok(Self::from_provinces(provinces))
    }
}

/// Parse one record into a position and its province.
fn parse_record(line: usize, record: &str) -> Result<(Position, Province), MapDataError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if !matches!(fields.len(), 3 | 5) {
        return Err(MapDataError::Incomplete { line });
    }

    let x = parse_number(line, "x coordinate", fields[0])?;
    let y = parse_number(line, "y coordinate", fields[1])?;
    let terrain = Terrain::parse(fields[2]).ok_or(MapDataError::InvalidField {
        line,
        field: "terrain",
    })?;
    let position = Position::new(x, y);

    if fields.len() == 3 {
        return Ok((position, Province::new(terrain)));
    }

    let name = fields[3];
    if name.is_empty() {
        return Err(MapDataError::InvalidField {
            line,
            field: "city name",
        });
    }
    let population: u32 = parse_number(line, "population", fields[4])?;
    let city = City::from_population(name, population);
    Ok((position, Province::with_city(terrain, city)))
}

/// Parse an unsigned numeric field.
fn parse_number<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, MapDataError> {
    value
        .parse()
        .map_err(|_| MapDataError::InvalidField { line, field })
}
