// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types used for defining ships and where they sit on the board.
use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::coords::{Axis, Coordinate, CoordinateError};

/// Total number of cells covered by a full fleet, one ship of each type.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Type of a ship. A board holds at most one ship of each type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ShipType {
    /// Aircraft carrier: length 5.
    AircraftCarrier,
    /// Battleship: length 4.
    Battleship,
    /// Destroyer: length 3.
    Destroyer,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 2.
    Cruiser,
}

impl ShipType {
    /// All ship types, in the order a fleet is laid out.
    pub const ALL: &'static [ShipType] = &[
        ShipType::AircraftCarrier,
        ShipType::Battleship,
        ShipType::Destroyer,
        ShipType::Submarine,
        ShipType::Cruiser,
    ];

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            ShipType::AircraftCarrier => 5,
            ShipType::Battleship => 4,
            ShipType::Destroyer => 3,
            ShipType::Submarine => 3,
            ShipType::Cruiser => 2,
        }
    }

    /// Tag used for this type in text, e.g. `aircraft_carrier`.
    pub fn name(self) -> &'static str {
        match self {
            ShipType::AircraftCarrier => "aircraft_carrier",
            ShipType::Battleship => "battleship",
            ShipType::Destroyer => "destroyer",
            ShipType::Submarine => "submarine",
            ShipType::Cruiser => "cruiser",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShipType {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ShipError::InvalidShipType(s.to_owned()))
    }
}

/// Direction a ship extends in from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Extends toward increasing `x`.
    Horizontal,
    /// Extends toward increasing `y`.
    Vertical,
}

impl Direction {
    /// Axis along which a ship in this direction extends.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::X,
            Direction::Vertical => Axis::Y,
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Direction::Horizontal => "hor",
            Direction::Vertical => "vert",
        })
    }
}

impl FromStr for Direction {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hor" | "horizontal" => Ok(Direction::Horizontal),
            "vert" | "vertical" => Ok(Direction::Vertical),
            other => Err(ShipError::InvalidDirection(other.to_owned())),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        if rng.gen() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }
}

/// Errors from validating a ship description.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipError {
    #[error("invalid ship type {0:?}")]
    InvalidShipType(String),

    #[error("{ship_type} has length {length}, ships must be at least 2 long")]
    InvalidLength { ship_type: ShipType, length: usize },

    #[error("invalid direction {0:?}")]
    InvalidDirection(String),

    #[error("invalid origin: {0}")]
    Coordinate(#[from] CoordinateError),
}

/// Error returned when hitting a ship that has already been sunk.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{0} has already been sunk")]
pub struct AlreadySunk(pub ShipType);

/// Where a ship of a given type should go: its origin and direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub ship_type: ShipType,
    pub origin: Coordinate,
    pub direction: Direction,
}

impl Placement {
    pub fn new(ship_type: ShipType, origin: Coordinate, direction: Direction) -> Self {
        Self {
            ship_type,
            origin,
            direction,
        }
    }

    /// Build a placement from untyped parts. Checks are applied in order: ship type,
    /// length, direction, then origin, and the first failure is returned.
    pub fn parse(ship_type: &str, origin: (i64, i64), direction: &str) -> Result<Self, ShipError> {
        let ship_type: ShipType = ship_type.parse()?;
        check_length(ship_type)?;
        let direction = direction.parse()?;
        let origin = Coordinate::new(origin.0, origin.1)?;
        Ok(Self::new(ship_type, origin, direction))
    }
}

fn check_length(ship_type: ShipType) -> Result<(), ShipError> {
    if ship_type.len() < 2 {
        Err(ShipError::InvalidLength {
            ship_type,
            length: ship_type.len(),
        })
    } else {
        Ok(())
    }
}

/// A ship on (or headed for) the board, tracking how many times it has been hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    ship_type: ShipType,
    origin: Coordinate,
    direction: Direction,
    hit_count: usize,
}

impl Ship {
    /// Create an unhit ship. The cells past the origin are not checked; a ship may run
    /// off the edge of the board, and it is up to the board to reject it.
    pub fn new(placement: Placement) -> Result<Self, ShipError> {
        check_length(placement.ship_type)?;
        Ok(Self {
            ship_type: placement.ship_type,
            origin: placement.origin,
            direction: placement.direction,
            hit_count: 0,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells this ship covers.
    pub fn len(&self) -> usize {
        self.ship_type.len()
    }

    /// Number of times this ship has been hit.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// The placement this ship was created from.
    pub fn placement(&self) -> Placement {
        Placement::new(self.ship_type, self.origin, self.direction)
    }

    /// Record a hit on this ship.
    pub fn hit(&mut self) -> Result<(), AlreadySunk> {
        if self.is_sunk() {
            return Err(AlreadySunk(self.ship_type));
        }
        self.hit_count += 1;
        Ok(())
    }

    /// Returns true once the ship has been hit as many times as it is long.
    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.len()
    }

    /// Iterate the cells this ship covers, starting at the origin. Cells that would
    /// fall off the board are yielded as errors rather than clamped.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Result<Coordinate, CoordinateError>> {
        let axis = self.direction.axis();
        (0..self.len()).map(move |i| self.origin.offset(axis, i))
    }

    /// Collect the cells this ship covers, failing if any of them is off the board.
    pub fn occupied_cells(&self) -> Result<Vec<Coordinate>, CoordinateError> {
        self.cells().collect()
    }
}
