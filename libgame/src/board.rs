use itertools::Itertools;
use rand::Rng;

use super::{pos::Position, rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    /// Seeds every tile independently, alive with probability 0.5.
    pub fn new_random(width: usize, height: usize) -> Self {
        Self::new_random_with(width, height, &mut rand::rng())
    }

    pub fn new_random_with<R>(width: usize, height: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tiles = (0..width * height)
            .map(|_| {
                if rng.random_bool(0.5) {
                    TileState::Alive
                } else {
                    TileState::Dead
                }
            })
            .collect();

        Self::with_tiles(width, height, tiles)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    /// Out-of-range reads report [`TileState::Dead`].
    pub fn get(&self, x: usize, y: usize) -> TileState {
        self.tile([x, y]).copied().unwrap_or_default()
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, state: TileState) {
        if let Some(tile) = self.tile_mut([x, y]) {
            *tile = state;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| **tile == TileState::Alive)
            .count()
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    /// Counts alive tiles in the Moore neighborhood of `pos`. Neighbors past
    /// the board edge don't exist; there is no wraparound.
    pub fn live_neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let center = pos.into();

        (-1isize..=1)
            .cartesian_product(-1isize..=1)
            .filter(|offset| *offset != (0, 0))
            .filter_map(|(dx, dy)| {
                let pos = Position {
                    x: center.x.checked_add_signed(dx)?,
                    y: center.y.checked_add_signed(dy)?,
                };

                self.tile(pos)
            })
            .filter(|neighbor| **neighbor == TileState::Alive)
            .count()
    }

    /// Writes the generation following `self` into `next`, reading only from
    /// `self`. `next` takes on the dimensions and tile count of `self`.
    pub fn next_generation_into(&self, next: &mut GameBoard) {
        next.width = self.width;
        next.height = self.height;
        next.tiles.resize(self.tiles.len(), TileState::Dead);

        for (index, (tile, next_tile)) in self.tiles.iter().zip(&mut next.tiles).enumerate() {
            let alive_neighbor_count = self.live_neighbor_count(self.index_to_pos(index));
            *next_tile = rule::next_state(*tile, alive_neighbor_count);
        }
    }

    pub fn next_generation(&self) -> GameBoard {
        let mut next = GameBoard::new(self.width, self.height);
        self.next_generation_into(&mut next);
        next
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}
