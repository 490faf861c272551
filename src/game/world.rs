//! The world: provinces, cities, and terrain.

use std::collections::BTreeMap;

use crate::game::{PlayerId, Position};

/// Terrain of a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    /// Open flatland.
    Plains,
    /// Rolling hills.
    Hills,
    /// Dense forest.
    Forest,
    /// Arid desert.
    Desert,
    /// High mountains.
    Mountains,
}

impl Terrain {
    /// Parse a terrain designator from map data.
    ///
    /// Returns `None` for unrecognized designators.
    #[must_use]
    pub fn parse(designator: &str) -> Option<Self> {
        match designator {
            "plains" => Some(Terrain::Plains),
            "hills" => Some(Terrain::Hills),
            "forest" => Some(Terrain::Forest),
            "desert" => Some(Terrain::Desert),
            "mountains" => Some(Terrain::Mountains),
            _ => None,
        }
    }
}

/// A named population center inside a province.
///
/// Created at world-load time, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Name of the city.
    pub name: String,
    /// Point value, derived from the city's population.
    pub points: u32,
}

impl City {
    /// Create a city with its point value derived from a population
    /// figure.
    #[must_use]
    pub fn from_population(name: impl Into<String>, population: u32) -> Self {
        Self {
            name: name.into(),
            points: population,
        }
    }
}

/// A single cell of the world, the atomic unit of territorial control.
///
/// Created at load time for every map record and never destroyed; the
/// owner is the only field that ever mutates, via [`World::set_owner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Province {
    /// Terrain of this cell.
    pub terrain: Terrain,
    /// City inside this province, if any.
    pub city: Option<City>,
    /// Owner of this province (`None` = neutral).
    pub owner: Option<PlayerId>,
}

impl Province {
    /// Create a neutral province with the given terrain.
    #[must_use]
    pub const fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            city: None,
            owner: None,
        }
    }

    /// Create a neutral province containing a city.
    #[must_use]
    pub fn with_city(terrain: Terrain, city: City) -> Self {
        Self {
            terrain,
            city: Some(city),
            owner: None,
        }
    }
}

/// The game world: an immutable-after-load map of provinces.
///
/// Built once by the map loader. A position is in bounds iff a province
/// was loaded for it, so every in-bounds position maps to exactly one
/// province by construction. After load the only mutation the world
/// exposes is province ownership, through [`World::set_owner`].
#[derive(Debug, Clone)]
pub struct World {
    /// Provinces keyed by position. `BTreeMap` keeps iteration order
    /// stable for display.
    provinces: BTreeMap<Position, Province>,
    /// Width of the enclosing bounding box (max x + 1).
    width: u16,
    /// Height of the enclosing bounding box (max y + 1).
    height: u16,
}

impl World {
    /// Build a world from already-parsed provinces. The loader is the
    /// only caller.
    pub(crate) fn from_provinces(provinces: BTreeMap<Position, Province>) -> Self {
        let width = provinces
            .keys()
            .map(|p| p.x.saturating_add(1))
            .max()
            .unwrap_or(0);
        let height = provinces
            .keys()
            .map(|p| p.y.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self {
            provinces,
            width,
            height,
        }
    }

    /// Width of the enclosing bounding box.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the enclosing bounding box.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of provinces in the world.
    #[must_use]
    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    /// Check whether the world has no provinces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Check whether a province was loaded for the given position.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        self.provinces.contains_key(&position)
    }

    /// Get the province at the given position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Province> {
        self.provinces.get(&position)
    }

    /// Transfer ownership of the province at `position` to `owner`.
    ///
    /// This is the sole mutator of province ownership. Setting the same
    /// owner again is a no-op, not an error; callers that care about
    /// the distinction check the current owner first. Returns `false`
    /// only when the position has no province.
    pub fn set_owner(&mut self, position: Position, owner: PlayerId) -> bool {
        if let Some(province) = self.provinces.get_mut(&position) {
            province.owner = Some(owner);
            true
        } else {
            false
        }
    }

    /// Iterate over all provinces in stable position order.
    pub fn provinces(&self) -> impl Iterator<Item = (Position, &Province)> {
        self.provinces
            .iter()
            .map(|(position, province)| (*position, province))
    }

    /// Iterate over all provinces owned by a player.
    pub fn provinces_owned_by(
        &self,
        player: PlayerId,
    ) -> impl Iterator<Item = (Position, &Province)> {
        self.provinces()
            .filter(move |(_, province)| province.owner == Some(player))
    }

    /// Count provinces owned by a player.
    #[must_use]
    pub fn count_territory(&self, player: PlayerId) -> usize {
        self.provinces_owned_by(player).count()
    }

    /// Iterate over all cities in stable position order.
    pub fn cities(&self) -> impl Iterator<Item = (Position, &City)> {
        self.provinces()
            .filter_map(|(position, province)| province.city.as_ref().map(|city| (position, city)))
    }
}
