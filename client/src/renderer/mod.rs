mod renderthing;

use libgame::{
    Game,
    board::{GameBoard, TileState},
};
use log::{debug, info};
use renderthing::{
    Renderer,
    frame::{PIXEL_BITS, RenderFrame},
    window::RendererWindowConfig,
};

use crate::config::Config;

const ALIVE_COLOR: [u8; PIXEL_BITS] = [255; 4];
const DEAD_COLOR: [u8; PIXEL_BITS] = [0, 0, 0, 255];

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut game = Game::new_random(config.board_width, config.board_height);

    info!(
        "Seeded {}x{} board with {} alive tiles",
        config.board_width,
        config.board_height,
        game.board().alive_count()
    );
    info!(
        "Opening {}x{} window, ticking every {:?}",
        config.window_width, config.window_height, config.tick_interval
    );

    let renderer = Renderer::new(RendererWindowConfig {
        title: config.title.clone(),
        width: config.window_width,
        height: config.window_height,
        buffer_width: u32::try_from(config.board_width)?,
        buffer_height: u32::try_from(config.board_height)?,
        frame_interval: config.tick_interval,
        draw_callback: Box::new(move |frame| {
            game.tick();
            debug!(
                "Generation {}: {} alive",
                game.generation(),
                game.board().alive_count()
            );

            draw(game.board(), frame);
        }),
    })?;

    renderer.run()
}

/// Writes one pixel per tile. The frame must have the board's dimensions.
fn draw(board: &GameBoard, mut frame: RenderFrame) {
    debug_assert_eq!(frame.width as usize, board.width);
    debug_assert_eq!(frame.height as usize, board.height);

    frame.fill(DEAD_COLOR);

    for (tile_pos, tile) in board.enumerate_tiles() {
        if *tile == TileState::Alive {
            frame.draw_pixel(tile_pos.x as u32, tile_pos.y as u32, ALIVE_COLOR);
        }
    }
}
