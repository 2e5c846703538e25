//! Seat identification, colors, and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat identifier. A match always has exactly four seats,
//! numbered 0-3 in turn order; a seat's start cell on the shared track
//! is `index * 13`.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::LudoError;

/// Number of seats around the board.
pub const SEAT_COUNT: usize = 4;

/// Distance along the shared track between consecutive start cells.
pub const START_DISTANCE: u8 = 13;

/// Seat identifier in `0..=3`.
///
/// The inner index is private so every `Seat` in circulation is valid;
/// use [`Seat::new`] or `TryFrom<u8>` to construct one from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seat(u8);

impl Seat {
    /// All seats in turn order.
    pub const ALL: [Seat; SEAT_COUNT] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    /// Create a seat from a raw index.
    ///
    /// ```
    /// use ludo_engine::core::Seat;
    ///
    /// assert_eq!(Seat::new(2).unwrap().index(), 2);
    /// assert!(Seat::new(4).is_err());
    /// ```
    pub fn new(index: u8) -> Result<Self, LudoError> {
        if (index as usize) < SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(LudoError::invalid_input(format!(
                "seat index {index} is outside 0..={}",
                SEAT_COUNT - 1
            )))
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Absolute shared-track cell where this seat's tokens enter play.
    #[must_use]
    pub const fn start_offset(self) -> u8 {
        self.0 * START_DISTANCE
    }

    /// The color that sits in this seat.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self.0 as usize]
    }
}

impl TryFrom<u8> for Seat {
    type Error = LudoError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {} ({})", self.0, self.color())
    }
}

/// Player colors, one per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors in seat order.
    pub const ALL: [Color; SEAT_COUNT] = [Color::Yellow, Color::Red, Color::Green, Color::Blue];

    /// The seat this color plays from.
    #[must_use]
    pub const fn seat(self) -> Seat {
        match self {
            Color::Yellow => Seat(0),
            Color::Red => Seat(1),
            Color::Green => Seat(2),
            Color::Blue => Seat(3),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// Lowercase name, as printed in match results.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 4]`, one entry per seat.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Seat, SeatMap};
///
/// let mut goals: SeatMap<u8> = SeatMap::with_value(0);
/// goals[Seat::ALL[1]] = 3;
/// assert_eq!(goals[Seat::ALL[1]], 3);
/// assert_eq!(goals[Seat::ALL[0]], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
