#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl From<[usize; 2]> for Position {
    fn from([x, y]: [usize; 2]) -> Self {
        Self { x, y }
    }
}
