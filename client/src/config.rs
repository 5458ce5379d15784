use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub board_width: usize,
    pub board_height: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub tick_interval: Duration, // Minimum time between two ticks.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_owned(),
            board_width: 100,
            board_height: 100,
            window_width: 800,
            window_height: 800,
            tick_interval: Duration::from_millis(100),
        }
    }
}
