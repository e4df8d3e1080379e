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
//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{
    coords::{Coordinate, CoordinateError},
    ships::{Placement, ShipType},
};

/// Reason why a ship could not be placed with a given placement.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// A ship of the same type is already on the board.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// The ship description failed validation.
    #[error("the ship is not valid")]
    InvalidShip,
    /// Part of the ship would lie past the edge of the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the cells was already occupied by another ship.
    #[error("the ship overlaps with another ship")]
    AlreadyOccupied,
    /// The board's occupancy refers to a ship that is not on the board.
    #[error("the board is in an inconsistent state")]
    InconsistentState,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not place {} at {}: {reason}", .placement.ship_type, .placement.origin)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    placement: Placement,
}

impl PlaceError {
    /// Construct a placement error from a reason and placement.
    pub(crate) fn new(reason: CannotPlaceReason, placement: Placement) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the [`Placement`] that was attempted.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Extract the Placement from this error.
    pub fn into_placement(self) -> Placement {
        self.placement
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell was already attacked and nothing was there.
    #[error("the cell has already been targeted and missed")]
    AlreadyMissed,
    /// The ship in the cell has already been sunk.
    #[error("the ship in the cell has already been sunk")]
    AlreadySunk,
    /// The board's occupancy refers to a ship that is not on the board.
    #[error("the board is in an inconsistent state")]
    InconsistentState,
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not attack cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be attacked.
    #[source]
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// An occupied cell names a ship type that has no ship on the board. This is a bug in
/// the board, never a user error.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cell {coord} is occupied by {ship_type}, which does not exist")]
pub struct InconsistentState {
    pub coord: Coordinate,
    pub ship_type: ShipType,
}

/// Errors from looking up a cell in one of the board's maps by name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MembershipError {
    #[error("invalid map type {0:?}, expected hit, missed or occupied")]
    InvalidMapType(String),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}
