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
//! Randomized ship placement.
//!
//! Two strategies are used. On an empty board, a ship is dropped at a random origin and
//! direction, retrying until it lands somewhere legal. Once any cell is taken, every
//! legal origin for the ship is enumerated and one is picked uniformly.
use std::collections::HashMap;

use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    board::{Board, CannotPlaceReason, MapKind, PlaceError},
    coords::{Coordinate, BOARD_SIZE},
    ships::{Direction, Placement, Ship, ShipType},
};

/// Number of random drops attempted on an empty board before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Error returned when a ship could not be placed randomly.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RandomPlaceError {
    /// There is no legal position left for the ship.
    #[error("no available space for {0}")]
    NoAvailableSpace(ShipType),

    /// Placement failed for a reason other than a conflict.
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// Place a ship of the given type at a random legal position. If `direction` is `None`,
/// a direction is drawn at random. On a partially filled board the other direction is
/// tried if the requested one has no room.
pub fn randomly_place_ship<R: Rng + ?Sized>(
    board: &mut Board,
    ship_type: ShipType,
    direction: Option<Direction>,
    rng: &mut R,
) -> Result<Placement, RandomPlaceError> {
    if board.occupied().is_empty() {
        drop_until_placed(board, ship_type, direction, rng)
    } else {
        let direction = direction.unwrap_or_else(|| rng.gen());
        pick_from_candidates(board, ship_type, direction, rng)
    }
}

/// Clear any placed ships and lay out one of every type, in [`ShipType::ALL`] order.
/// Hits and misses already recorded on the board are kept.
pub fn randomly_place_ships<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), RandomPlaceError> {
    board.clear_ships();
    for &ship_type in ShipType::ALL {
        randomly_place_ship(board, ship_type, None, rng)?;
    }
    debug!("randomized fleet over {} cells", board.taken_cell_count());
    Ok(())
}

/// Drop the ship at random origins until one is accepted.
fn drop_until_placed<R: Rng + ?Sized>(
    board: &mut Board,
    ship_type: ShipType,
    direction: Option<Direction>,
    rng: &mut R,
) -> Result<Placement, RandomPlaceError> {
    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let direction = direction.unwrap_or_else(|| rng.gen());
        let origin = pull_back_from_edge(Coordinate::random(rng), ship_type, direction);
        let placement = Placement::new(ship_type, origin, direction);
        match board.place_ship(placement) {
            Ok(_) => return Ok(placement),
            Err(err) => match err.reason() {
                CannotPlaceReason::AlreadyOccupied | CannotPlaceReason::OutOfBounds => {
                    trace!("attempt {} for {} rejected: {}", attempt, ship_type, err);
                }
                _ => return Err(err.into()),
            },
        }
    }
    Err(RandomPlaceError::NoAvailableSpace(ship_type))
}

/// Move the origin back one cell along the ship's axis if the ship would run past the
/// far edge. This only moves by one, so long ships may still not fit.
fn pull_back_from_edge(
    origin: Coordinate,
    ship_type: ShipType,
    direction: Direction,
) -> Coordinate {
    let (x, y) = (i64::from(origin.x()), i64::from(origin.y()));
    let overflows =
        usize::from(origin.get(direction.axis())) + ship_type.len() > usize::from(BOARD_SIZE);
    if !overflows {
        return origin;
    }
    let shifted = match direction {
        Direction::Horizontal => Coordinate::new(x - 1, y),
        Direction::Vertical => Coordinate::new(x, y - 1),
    };
    shifted.unwrap_or(origin)
}

/// Pick uniformly among every legal origin for the ship in `direction`, falling back to
/// the opposite direction if there are none.
fn pick_from_candidates<R: Rng + ?Sized>(
    board: &mut Board,
    ship_type: ShipType,
    mut direction: Direction,
    rng: &mut R,
) -> Result<Placement, RandomPlaceError> {
    let mut candidates = candidate_origins(board, ship_type, direction);
    if candidates.is_empty() {
        direction = direction.opposite();
        candidates = candidate_origins(board, ship_type, direction);
    }
    let origin = *candidates
        .choose(rng)
        .ok_or(RandomPlaceError::NoAvailableSpace(ship_type))?;
    let placement = Placement::new(ship_type, origin, direction);
    board.place_ship(placement)?;
    Ok(placement)
}

/// Every origin where a ship of the given type and direction would fit on the board
/// without touching an occupied cell.
pub fn candidate_origins(
    board: &Board,
    ship_type: ShipType,
    direction: Direction,
) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&origin| !board.contains(MapKind::Occupied, origin))
        .filter(|&origin| {
            Ship::new(Placement::new(ship_type, origin, direction))
                .map(|ship| {
                    ship.cells().all(|cell| match cell {
                        Ok(cell) => !board.contains(MapKind::Occupied, cell),
                        Err(_) => false,
                    })
                })
                .unwrap_or(false)
        })
        .collect()
}

/// Returns true if every ship type is present and no two ships share a cell.
pub fn is_valid_placement(ships: &HashMap<ShipType, Ship>) -> bool {
    if ships.len() < ShipType::ALL.len() {
        return false;
    }
    let cells: Vec<Vec<Coordinate>> = ships
        .values()
        .map(|ship| ship.cells().filter_map(Result::ok).collect())
        .collect();
    cells.iter().enumerate().all(|(i, ours)| {
        cells[i + 1..]
            .iter()
            .all(|theirs| ours.iter().all(|cell| !theirs.contains(cell)))
    })
}

impl Board {
    /// Place a ship of the given type at a random legal position using the thread-local
    /// generator. See [`randomly_place_ship`].
    pub fn randomly_place_ship(
        &mut self,
        ship_type: ShipType,
        direction: Option<Direction>,
    ) -> Result<Placement, RandomPlaceError> {
        randomly_place_ship(self, ship_type, direction, &mut rand::thread_rng())
    }

    /// Replace the fleet with a random one using the thread-local generator.
    pub fn randomly_place_ships(&mut self) -> Result<(), RandomPlaceError> {
        randomly_place_ships(self, &mut rand::thread_rng())
    }
}
