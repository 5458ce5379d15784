use super::board::TileState;

/// Conway's B3/S23 transition for a single tile.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    match (tile, alive_neighbors) {
        (TileState::Alive, 2 | 3) => TileState::Alive,
        (TileState::Alive, _) => TileState::Dead,
        (TileState::Dead, 3) => TileState::Alive,
        (TileState::Dead, _) => TileState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_survives_with_two_or_three() {
        assert_eq!(next_state(TileState::Alive, 2), TileState::Alive);
        assert_eq!(next_state(TileState::Alive, 3), TileState::Alive);
    }

    #[test]
    fn alive_dies_otherwise() {
        for count in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(
                next_state(TileState::Alive, count),
                TileState::Dead,
                "{count} neighbors"
            );
        }
    }

    #[test]
    fn dead_is_born_only_with_three() {
        for count in 0..=8 {
            let expected = if count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_state(TileState::Dead, count), expected, "{count} neighbors");
        }
    }
}
