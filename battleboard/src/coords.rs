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
//! Validated grid coordinates and parsing of their textual form.
use std::{convert::TryFrom, fmt, str::FromStr};

use once_cell::sync::Lazy;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use regex::Regex;
use thiserror::Error;

/// Width and height of the board. Coordinates are 1-based, so valid values on either
/// axis are `1..=BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 10;

/// Matches the first run of decimal digits in one half of a coordinate string.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// One of the two axes of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// A single labeled component of a [`Coordinate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AxisValue {
    pub axis: Axis,
    pub value: u8,
}

/// Errors from building or parsing a [`Coordinate`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CoordinateError {
    /// One of the axes was outside of `[1, BOARD_SIZE]`.
    #[error("{axis} must be in range [1,10], got {value}")]
    OutOfRange { axis: Axis, value: i64 },

    /// The string did not contain two positive numbers separated by a comma.
    #[error("invalid coordinate string {0:?}")]
    InvalidFormat(String),
}

/// Position of a cell on the board. Both axes are guaranteed to be in
/// `[1, BOARD_SIZE]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`], failing if either axis is out of range. The upper
    /// bounds are checked before the lower bounds.
    pub fn new(x: i64, y: i64) -> Result<Self, CoordinateError> {
        let max = i64::from(BOARD_SIZE);
        if x > max {
            Err(CoordinateError::OutOfRange { axis: Axis::X, value: x })
        } else if y > max {
            Err(CoordinateError::OutOfRange { axis: Axis::Y, value: y })
        } else if x < 1 {
            Err(CoordinateError::OutOfRange { axis: Axis::X, value: x })
        } else if y < 1 {
            Err(CoordinateError::OutOfRange { axis: Axis::Y, value: y })
        } else {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        }
    }

    /// Draw a coordinate with both axes chosen uniformly from `[1, BOARD_SIZE]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(1, BOARD_SIZE + 1),
            y: rng.gen_range(1, BOARD_SIZE + 1),
        }
    }

    /// Horizontal position of the cell.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Vertical position of the cell.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Value of this coordinate along the given axis.
    pub fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Canonical key for this cell, `(x,y)` without whitespace.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The two labeled axis values of this coordinate, `x` first.
    pub fn axes(&self) -> [AxisValue; 2] {
        [
            AxisValue {
                axis: Axis::X,
                value: self.x,
            },
            AxisValue {
                axis: Axis::Y,
                value: self.y,
            },
        ]
    }

    /// Step `by` cells forward along `axis`. Fails if that leaves the board.
    pub fn offset(&self, axis: Axis, by: usize) -> Result<Self, CoordinateError> {
        let by = i64::try_from(by).unwrap_or(i64::MAX);
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        match axis {
            Axis::X => Self::new(x.saturating_add(by), y),
            Axis::Y => Self::new(x, y.saturating_add(by)),
        }
    }

    /// Iterate every cell of the board, column by column.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE).flat_map(|x| (1..=BOARD_SIZE).map(move |y| Coordinate { x, y }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Distribution<Coordinate> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::random(rng)
    }
}

impl From<Coordinate> for (u8, u8) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl TryFrom<(i64, i64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((x, y): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl TryFrom<Point> for Coordinate {
    type Error = CoordinateError;

    fn try_from(point: Point) -> Result<Self, Self::Error> {
        Self::new(i64::from(point.x), i64::from(point.y))
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse a key such as `(3,7)` and check that it lies on the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::try_from(convert_string_to_coords(s)?)
    }
}

/// Anything that names a single cell: a [`Coordinate`] or its textual key.
pub trait CellKey {
    /// Resolve this key to a coordinate on the board.
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError>;
}

impl CellKey for Coordinate {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Ok(*self)
    }
}

impl CellKey for str {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        self.parse()
    }
}

impl CellKey for String {
    fn to_coordinate(&self) -> Result<Coordinate, CoordinateError> {
        self.parse()
    }
}

/// An unvalidated pair of positive numbers, as read from text. May lie outside the
/// board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        Self {
            x: u32::from(coord.x),
            y: u32::from(coord.y),
        }
    }
}

/// Parse a string such as `(1,2)` or `( 12 , 4 )` into a [`Point`]. The text is split
/// on commas and the first run of digits on either side of the first comma is used.
/// Fails if either side has no digits or is zero. No range check is applied.
pub fn convert_string_to_coords(s: &str) -> Result<Point, CoordinateError> {
    let mut parts = s.split(',').map(first_number);
    match (parts.next().flatten(), parts.next().flatten()) {
        (Some(x), Some(y)) if x != 0 && y != 0 => Ok(Point { x, y }),
        _ => Err(CoordinateError::InvalidFormat(s.to_owned())),
    }
}

/// First run of decimal digits in `part`, if any fits in a `u32`.
fn first_number(part: &str) -> Option<u32> {
    NUMBER.find(part).and_then(|m| m.as_str().parse().ok())
}
