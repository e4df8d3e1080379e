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
//! The board engine: ship placement, attack resolution and the loss condition.

use std::{collections::HashMap, fmt, str::FromStr};

use log::{debug, error};

use crate::{
    coords::{CellKey, Coordinate, CoordinateError},
    ships::{Direction, Placement, Ship, ShipType},
};

pub use self::errors::{
    CannotPlaceReason, CannotShootReason, InconsistentState, MembershipError, PlaceError,
    ShotError,
};

mod errors;

/// Result of a successful attack on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The attack did not hit anything.
    Miss,
    /// The attack hit the ship with the given type, but did not sink it.
    Hit(ShipType),
    /// The attack sank the ship with the given type, but other ships remain afloat.
    Sunk(ShipType),
    /// The attack sank the ship with the given type, and every ship is now sunk.
    Defeated(ShipType),
}

impl AttackOutcome {
    /// Get the type of the ship that was hit.
    pub fn ship(&self) -> Option<ShipType> {
        match *self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit(ty) | AttackOutcome::Sunk(ty) | AttackOutcome::Defeated(ty) => {
                Some(ty)
            }
        }
    }
}

/// Selects one of the board's per-cell maps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MapKind {
    /// Cells where an attack landed on a ship.
    Hit,
    /// Cells where an attack landed on open water.
    Missed,
    /// Cells covered by some ship.
    Occupied,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            MapKind::Hit => "hit",
            MapKind::Missed => "missed",
            MapKind::Occupied => "occupied",
        })
    }
}

impl FromStr for MapKind {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(MapKind::Hit),
            "missed" => Ok(MapKind::Missed),
            "occupied" | "taken" => Ok(MapKind::Occupied),
            other => Err(MembershipError::InvalidMapType(other.to_owned())),
        }
    }
}

/// Reference to a particular cell of the board.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    coord: Coordinate,
    hit: bool,
    missed: bool,
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether an attack on this cell hit a ship.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Whether an attack on this cell missed.
    pub fn missed(&self) -> bool {
        self.missed
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }
}

/// A single player's board: their ships and their side of the ocean.
///
/// `occupied` always holds exactly the cells of the ships in `ships`. `hit` and
/// `missed` hold an entry for every cell of the grid.
#[derive(Debug, Clone)]
pub struct Board {
    /// Placed ships by type.
    ships: HashMap<ShipType, Ship>,

    /// Owner of every cell covered by a ship.
    occupied: HashMap<Coordinate, ShipType>,

    /// Cells where an attack landed on a ship.
    hit: HashMap<Coordinate, bool>,

    /// Cells where an attack landed on open water.
    missed: HashMap<Coordinate, bool>,
}

/// Map with a `false` entry for every cell of the board.
fn blank_cells() -> HashMap<Coordinate, bool> {
    Coordinate::all().map(|coord| (coord, false)).collect()
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            ships: HashMap::new(),
            occupied: HashMap::new(),
            hit: blank_cells(),
            missed: blank_cells(),
        }
    }

    /// Create a board with the given ships already placed. The ships keep their hit
    /// counts. Fails the same way [`place_ship`][Board::place_ship] would if the ships
    /// conflict.
    pub fn with_ships<S: IntoIterator<Item = Ship>>(ships: S) -> Result<Self, PlaceError> {
        let mut board = Self::new();
        for ship in ships {
            board.insert_ship(ship)?;
        }
        Ok(board)
    }

    /// Placed ships, by type.
    pub fn ships(&self) -> &HashMap<ShipType, Ship> {
        &self.ships
    }

    /// Get the ship of the given type if it is on the board.
    pub fn ship(&self, ship_type: ShipType) -> Option<&Ship> {
        self.ships.get(&ship_type)
    }

    /// Owner of every occupied cell.
    pub fn occupied(&self) -> &HashMap<Coordinate, ShipType> {
        &self.occupied
    }

    /// Number of cells covered by ships.
    pub fn taken_cell_count(&self) -> usize {
        self.occupied.len()
    }

    /// Hit flag for every cell.
    pub fn hit_cells(&self) -> &HashMap<Coordinate, bool> {
        &self.hit
    }

    /// Missed flag for every cell.
    pub fn missed_cells(&self) -> &HashMap<Coordinate, bool> {
        &self.missed
    }

    /// Get a view of the cell at the given coordinate.
    pub fn cell(&self, coord: Coordinate) -> CellRef<'_> {
        CellRef {
            coord,
            hit: self.contains(MapKind::Hit, coord),
            missed: self.contains(MapKind::Missed, coord),
            ship: self
                .occupied
                .get(&coord)
                .and_then(|ship_type| self.ships.get(ship_type)),
        }
    }

    /// Look up the ship at `coord`, calling `on_occupied` with it if there is one and
    /// `on_empty` otherwise.
    pub fn inspect<T, O, E>(
        &self,
        coord: Coordinate,
        on_occupied: O,
        on_empty: E,
    ) -> Result<T, InconsistentState>
    where
        O: FnOnce(&Ship) -> T,
        E: FnOnce() -> T,
    {
        if self.ships.is_empty() {
            return Ok(on_empty());
        }
        match self.occupied.get(&coord) {
            None => Ok(on_empty()),
            Some(&ship_type) => match self.ships.get(&ship_type) {
                Some(ship) => Ok(on_occupied(ship)),
                None => Err(inconsistent(coord, ship_type)),
            },
        }
    }

    /// Place a new, unhit ship.
    pub fn place_ship(&mut self, placement: Placement) -> Result<&Ship, PlaceError> {
        let ship = Ship::new(placement)
            .map_err(|_| PlaceError::new(CannotPlaceReason::InvalidShip, placement))?;
        self.insert_ship(ship)
    }

    /// Check that `ship` fits on the board and add it.
    fn insert_ship(&mut self, ship: Ship) -> Result<&Ship, PlaceError> {
        let placement = ship.placement();
        let fail = |reason| PlaceError::new(reason, placement);
        if self.ships.contains_key(&placement.ship_type) {
            return Err(fail(CannotPlaceReason::AlreadyPlaced));
        }
        match self.inspect(placement.origin, |_| true, || false) {
            Ok(false) => {}
            Ok(true) => return Err(fail(CannotPlaceReason::AlreadyOccupied)),
            Err(_) => return Err(fail(CannotPlaceReason::InconsistentState)),
        }
        let cells = match ship.occupied_cells() {
            Ok(cells) => cells,
            Err(_) => return Err(fail(CannotPlaceReason::OutOfBounds)),
        };
        if cells.iter().any(|cell| self.occupied.contains_key(cell)) {
            return Err(fail(CannotPlaceReason::AlreadyOccupied));
        }

        self.occupied
            .extend(cells.into_iter().map(|cell| (cell, placement.ship_type)));
        debug!(
            "placed {} at {} ({})",
            placement.ship_type, placement.origin, placement.direction
        );
        Ok(self.ships.entry(placement.ship_type).or_insert(ship))
    }

    /// Take the ship of the given type off the board, clearing its cells. Returns the
    /// removed ship, or `None` if there was no such ship.
    pub fn remove_ship(&mut self, ship_type: ShipType) -> Option<Ship> {
        let ship = self.ships.remove(&ship_type)?;
        for cell in ship.cells().filter_map(Result::ok) {
            self.occupied.remove(&cell);
        }
        debug!("removed {} from {}", ship_type, ship.origin());
        Some(ship)
    }

    /// Remove the ship of the given type and place a fresh one at the new origin and
    /// direction.
    ///
    /// If the new placement fails, the ship stays removed. The caller is responsible for
    /// placing it again.
    pub fn move_ship(
        &mut self,
        ship_type: ShipType,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<&Ship, PlaceError> {
        self.remove_ship(ship_type);
        debug!("moving {} to {} ({})", ship_type, origin, direction);
        self.place_ship(Placement::new(ship_type, origin, direction))
    }

    /// Fire at the given cell.
    ///
    /// A cell that was already missed may not be attacked again. A cell that was
    /// already hit may be; each attack hits the owning ship again until it sinks.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, ShotError> {
        if self.contains(MapKind::Missed, coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyMissed, coord));
        }
        let ship_type = match self.occupied.get(&coord) {
            Some(&ship_type) => ship_type,
            None => {
                self.missed.insert(coord, true);
                debug!("attack at {} missed", coord);
                return Ok(AttackOutcome::Miss);
            }
        };
        let ship = match self.ships.get_mut(&ship_type) {
            Some(ship) => ship,
            None => {
                inconsistent(coord, ship_type);
                return Err(ShotError::new(
                    CannotShootReason::InconsistentState,
                    coord,
                ));
            }
        };
        ship.hit()
            .map_err(|_| ShotError::new(CannotShootReason::AlreadySunk, coord))?;
        let sunk = ship.is_sunk();
        self.hit.insert(coord, true);

        let outcome = if !sunk {
            AttackOutcome::Hit(ship_type)
        } else if self.has_lost() {
            AttackOutcome::Defeated(ship_type)
        } else {
            AttackOutcome::Sunk(ship_type)
        };
        debug!("attack at {}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Returns true if there is at least one ship and every ship has been sunk.
    pub fn has_lost(&self) -> bool {
        !self.ships.is_empty() && self.ships.values().all(Ship::is_sunk)
    }

    /// Check whether the cell is present in the selected map. `Occupied` is checked by
    /// presence, `Hit` and `Missed` by their flag.
    pub fn contains(&self, map: MapKind, coord: Coordinate) -> bool {
        match map {
            MapKind::Occupied => self.occupied.contains_key(&coord),
            MapKind::Hit => self.hit.get(&coord) == Some(&true),
            MapKind::Missed => self.missed.get(&coord) == Some(&true),
        }
    }

    /// Like [`contains`][Board::contains], but accepts a textual key such as `(1,4)`.
    pub fn check_membership<K: CellKey + ?Sized>(
        &self,
        map: MapKind,
        cell: &K,
    ) -> Result<bool, CoordinateError> {
        Ok(self.contains(map, cell.to_coordinate()?))
    }

    /// Like [`check_membership`][Board::check_membership], selecting the map by name:
    /// `hit`, `missed`, or `occupied` (also `taken`).
    pub fn check_membership_by_name<K: CellKey + ?Sized>(
        &self,
        map: &str,
        cell: &K,
    ) -> Result<bool, MembershipError> {
        let map: MapKind = map.parse()?;
        Ok(self.check_membership(map, cell)?)
    }

    /// Remove every ship, keeping the record of hits and misses.
    pub(crate) fn clear_ships(&mut self) {
        self.ships.clear();
        self.occupied.clear();
    }

    /// Remove every ship and clear all hits and misses.
    pub fn reset(&mut self) {
        self.ships.clear();
        self.occupied.clear();
        self.hit = blank_cells();
        self.missed = blank_cells();
        debug!("board reset");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a cell owned by a ship that is missing from the board.
fn inconsistent(coord: Coordinate, ship_type: ShipType) -> InconsistentState {
    let err = InconsistentState { coord, ship_type };
    error!("{}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    fn placement(ship_type: ShipType, x: i64, y: i64, direction: Direction) -> Placement {
        Placement::new(ship_type, coord(x, y), direction)
    }

    fn ship(ship_type: ShipType, x: i64, y: i64, direction: Direction) -> Ship {
        Ship::new(placement(ship_type, x, y, direction)).unwrap()
    }

    #[test]
    fn new_board_is_blank() {
        let board = Board::new();
        assert!(board.ships().is_empty());
        assert!(board.occupied().is_empty());
        assert_eq!(board.hit_cells().len(), 100);
        assert_eq!(board.missed_cells().len(), 100);
        assert!(board.hit_cells().values().all(|hit| !hit));
        assert!(!board.has_lost());
    }

    #[test]
    fn place_ship_fills_cells() {
        let mut board = Board::new();
        let placed = board
            .place_ship(placement(ShipType::Cruiser, 1, 4, Direction::Horizontal))
            .unwrap();
        assert_eq!(placed.origin(), coord(1, 4));
        assert_eq!(placed.direction(), Direction::Horizontal);
        assert_eq!(board.taken_cell_count(), 2);
        assert_eq!(board.occupied().get(&coord(2, 4)), Some(&ShipType::Cruiser));
    }

    #[test]
    fn place_ship_rejects_overlap() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 4, Direction::Horizontal))
            .unwrap();
        let err = board
            .place_ship(placement(ShipType::AircraftCarrier, 2, 4, Direction::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        // Overlap away from the origin is caught too.
        let err = board
            .place_ship(placement(ShipType::Battleship, 2, 1, Direction::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.taken_cell_count(), 2);
    }

    #[test]
    fn place_ship_rejects_out_of_bounds() {
        let mut board = Board::new();
        let err = board
            .place_ship(placement(ShipType::AircraftCarrier, 7, 1, Direction::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(board.occupied().is_empty());
        board
            .place_ship(placement(ShipType::AircraftCarrier, 6, 1, Direction::Horizontal))
            .unwrap();
    }

    #[test]
    fn place_ship_rejects_duplicate_type() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 1, Direction::Horizontal))
            .unwrap();
        let err = board
            .place_ship(placement(ShipType::Cruiser, 5, 5, Direction::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
        assert_eq!(err.placement().origin, coord(5, 5));
    }

    #[test]
    fn with_ships_derives_occupied() {
        let board = Board::with_ships(vec![
            ship(ShipType::Cruiser, 1, 1, Direction::Horizontal),
            ship(ShipType::Battleship, 1, 4, Direction::Vertical),
        ])
        .unwrap();
        assert_eq!(board.ships().len(), 2);
        assert_eq!(board.taken_cell_count(), 6);
        assert!(board.contains(MapKind::Occupied, coord(1, 7)));
    }

    #[test]
    fn with_ships_rejects_conflicts() {
        let err = Board::with_ships(vec![
            ship(ShipType::Cruiser, 1, 1, Direction::Horizontal),
            ship(ShipType::Battleship, 2, 1, Direction::Vertical),
        ])
        .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    }

    #[test]
    fn inspect_calls_matching_callback() {
        let board = Board::with_ships(vec![
            ship(ShipType::Cruiser, 1, 1, Direction::Horizontal),
            ship(ShipType::Battleship, 1, 4, Direction::Vertical),
        ])
        .unwrap();
        let mut matched = Vec::new();
        let mut missed = 0;
        for &c in &[coord(1, 1), coord(1, 5), coord(9, 9)] {
            board
                .inspect(c, |ship| matched.push(ship.ship_type()), || missed += 1)
                .unwrap();
        }
        assert_eq!(matched, [ShipType::Cruiser, ShipType::Battleship]);
        assert_eq!(missed, 1);
    }

    #[test]
    fn inspect_empty_board() {
        let board = Board::new();
        assert_eq!(board.inspect(coord(1, 1), |_| 1, || 2), Ok(2));
    }

    #[test]
    fn inspect_detects_inconsistency() {
        let mut board = Board::with_ships(vec![
            ship(ShipType::Cruiser, 1, 1, Direction::Horizontal),
            ship(ShipType::Battleship, 1, 4, Direction::Vertical),
        ])
        .unwrap();
        board.ships.remove(&ShipType::Cruiser);
        assert_eq!(
            board.inspect(coord(2, 1), |_| (), || ()),
            Err(InconsistentState {
                coord: coord(2, 1),
                ship_type: ShipType::Cruiser
            })
        );
        let err = board.receive_attack(coord(2, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::InconsistentState);
    }

    #[test]
    fn remove_ship_clears_cells() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 4, Direction::Horizontal))
            .unwrap();
        let removed = board.remove_ship(ShipType::Cruiser).unwrap();
        for cell in removed.occupied_cells().unwrap() {
            assert!(!board.contains(MapKind::Occupied, cell));
        }
        assert!(board.ship(ShipType::Cruiser).is_none());
        assert!(board.remove_ship(ShipType::Cruiser).is_none());
    }

    #[test]
    fn move_ship_relocates() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 2, 1, Direction::Horizontal))
            .unwrap();
        board
            .move_ship(ShipType::Cruiser, coord(3, 3), Direction::Vertical)
            .unwrap();
        let moved = board.ship(ShipType::Cruiser).unwrap();
        assert_eq!(moved.origin(), coord(3, 3));
        assert!(!board.contains(MapKind::Occupied, coord(2, 1)));
        assert!(board.contains(MapKind::Occupied, coord(3, 4)));
    }

    #[test]
    fn move_ship_failure_leaves_ship_removed() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 2, 1, Direction::Horizontal))
            .unwrap();
        board
            .place_ship(placement(ShipType::Battleship, 9, 1, Direction::Vertical))
            .unwrap();
        let err = board
            .move_ship(ShipType::Cruiser, coord(9, 1), Direction::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert!(board.ship(ShipType::Cruiser).is_none());
        assert!(!board.contains(MapKind::Occupied, coord(2, 1)));
        assert_eq!(board.taken_cell_count(), 4);
    }

    #[test]
    fn attack_hits_and_misses() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 4, Direction::Horizontal))
            .unwrap();
        assert_eq!(
            board.receive_attack(coord(2, 4)),
            Ok(AttackOutcome::Hit(ShipType::Cruiser))
        );
        assert_eq!(board.ship(ShipType::Cruiser).unwrap().hit_count(), 1);
        assert_eq!(board.receive_attack(coord(9, 9)), Ok(AttackOutcome::Miss));

        assert_eq!(board.check_membership(MapKind::Occupied, "(1,4)"), Ok(true));
        assert_eq!(board.check_membership(MapKind::Hit, &coord(2, 4)), Ok(true));
        assert_eq!(board.check_membership(MapKind::Missed, &coord(9, 9)), Ok(true));
        assert_eq!(board.check_membership(MapKind::Hit, &coord(9, 9)), Ok(false));

        let cell = board.cell(coord(2, 4));
        assert!(cell.hit());
        assert!(!cell.missed());
        assert_eq!(cell.ship().map(Ship::ship_type), Some(ShipType::Cruiser));
    }

    #[test]
    fn missed_cell_cannot_be_attacked_twice() {
        let mut board = Board::new();
        board.receive_attack(coord(4, 10)).unwrap();
        let err = board.receive_attack(coord(4, 10)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyMissed);
        assert_eq!(err.coord(), coord(4, 10));
    }

    #[test]
    fn hit_cell_can_be_attacked_until_sunk() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 1, Direction::Horizontal))
            .unwrap();
        assert_eq!(
            board.receive_attack(coord(1, 1)),
            Ok(AttackOutcome::Hit(ShipType::Cruiser))
        );
        assert_eq!(
            board.receive_attack(coord(1, 1)),
            Ok(AttackOutcome::Defeated(ShipType::Cruiser))
        );
        assert!(board.ship(ShipType::Cruiser).unwrap().is_sunk());
        let err = board.receive_attack(coord(1, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadySunk);
    }

    #[test]
    fn sunk_versus_defeated() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 1, Direction::Horizontal))
            .unwrap();
        board
            .place_ship(placement(ShipType::Battleship, 1, 4, Direction::Horizontal))
            .unwrap();
        board.receive_attack(coord(1, 1)).unwrap();
        assert_eq!(
            board.receive_attack(coord(2, 1)),
            Ok(AttackOutcome::Sunk(ShipType::Cruiser))
        );
        assert!(!board.has_lost());
        for x in 1..4 {
            board.receive_attack(coord(x, 4)).unwrap();
        }
        assert_eq!(
            board.receive_attack(coord(4, 4)),
            Ok(AttackOutcome::Defeated(ShipType::Battleship))
        );
        assert!(board.has_lost());
    }

    #[test]
    fn membership_by_name() {
        let board = Board::new();
        assert_eq!(board.check_membership_by_name("taken", "(1,4)"), Ok(false));
        assert_eq!(
            board.check_membership_by_name("sunk", "(1,4)"),
            Err(MembershipError::InvalidMapType("sunk".to_owned()))
        );
        assert!(matches!(
            board.check_membership_by_name("hit", "bad string"),
            Err(MembershipError::Coordinate(CoordinateError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Board::new();
        board
            .place_ship(placement(ShipType::Cruiser, 1, 1, Direction::Horizontal))
            .unwrap();
        board.receive_attack(coord(1, 1)).unwrap();
        board.receive_attack(coord(5, 5)).unwrap();
        board.reset();
        assert!(board.ships().is_empty());
        assert!(board.occupied().is_empty());
        assert!(!board.contains(MapKind::Hit, coord(1, 1)));
        assert!(!board.contains(MapKind::Missed, coord(5, 5)));
        assert_eq!(board.missed_cells().len(), 100);
        board.receive_attack(coord(5, 5)).unwrap();
    }

    #[test]
    fn random_placement_turns_when_blocked() {
        use crate::placement::randomly_place_ship;
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        for cell in Coordinate::all().filter(|cell| cell.x() % 2 == 0) {
            board.occupied.insert(cell, ShipType::AircraftCarrier);
        }
        let placement = randomly_place_ship(
            &mut board,
            ShipType::Cruiser,
            Some(Direction::Horizontal),
            &mut rng,
        )
        .unwrap();
        assert_eq!(placement.direction, Direction::Vertical);
        assert_eq!(placement.origin.x() % 2, 1);
        assert_eq!(board.ship(ShipType::Cruiser).unwrap().placement(), placement);
    }

    #[test]
    fn random_placement_on_full_board() {
        use crate::placement::{randomly_place_ship, RandomPlaceError};
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        for cell in Coordinate::all() {
            board.occupied.insert(cell, ShipType::AircraftCarrier);
        }
        assert_eq!(
            randomly_place_ship(&mut board, ShipType::Destroyer, None, &mut rng),
            Err(RandomPlaceError::NoAvailableSpace(ShipType::Destroyer))
        );
        assert!(board.ship(ShipType::Destroyer).is_none());
    }
}
