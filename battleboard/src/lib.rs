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
//! Crate for a single-player game of Battleship on the classic 10x10 grid.
//!
//! The [`board::Board`] owns all of the state for one side of the ocean: which ships
//! are placed where, which cells have been hit and which have been missed. Ships are
//! described by [`ships::ShipType`], [`ships::Direction`] and an origin
//! [`coords::Coordinate`]. The [`placement`] module provides the randomized placement
//! generator used to lay out a whole fleet.
//!
//! The engine is synchronous and single-owner. Presentation layers read from the
//! board's accessors and drive it only through its mutator methods.

pub mod board;
pub mod coords;
pub mod placement;
pub mod ships;

pub use crate::{
    board::{AttackOutcome, Board, MapKind},
    coords::{convert_string_to_coords, Coordinate, Point, BOARD_SIZE},
    ships::{Direction, Placement, Ship, ShipType},
};
