//! Output-only views of the simulation.
//! This module exists so a session can draw each tick without knowing the target.
//! It does not read input or touch state.

use std::io::{self, Write};

use crate::state::GameState;
use crate::types::{Pos, TileKind};

/// Draws the board once per tick. Implementations must not mutate the state.
pub trait Renderer {
    /// Called once before the first frame with the cell size in pixels and the grid size.
    fn init(&mut self, cell_px: u32, width: usize, height: usize) -> io::Result<()>;

    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn init(&mut self, _cell_px: u32, _width: usize, _height: usize) -> io::Result<()> {
        Ok(())
    }

    fn render(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }
}

/// Prints a header line and the grid as text, highest row first.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn init(&mut self, _cell_px: u32, width: usize, height: usize) -> io::Result<()> {
        writeln!(self.out, "board {width}x{height}")
    }

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.out.write_all(render_to_string(state).as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

/// One text frame: `score lives power` header, then the grid with entities drawn on top.
pub fn render_to_string(state: &GameState) -> String {
    let grid = state.grid();
    let mut frame =
        format!("score {} lives {} power {}\n", state.score(), state.lives(), state.power_ticks());
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            frame.push(glyph_at(state, Pos::new(x as i32, y as i32)));
        }
        frame.push('\n');
    }
    frame
}

fn glyph_at(state: &GameState, pos: Pos) -> char {
    if state.agent().pos() == pos {
        return 'P';
    }
    if let Some((_, hostile)) = state.hostiles().find(|(_, hostile)| hostile.pos() == pos) {
        return if hostile.is_eatable() { 'g' } else { 'G' };
    }
    match state.grid().tile_at(pos) {
        TileKind::Wall => '#',
        TileKind::Empty => ' ',
        TileKind::Collectible => '.',
        TileKind::PowerCollectible => 'o',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state;

    const BOARD: &str = "######\n#P.oG#\n#____#\n######";

    #[test]
    fn frame_draws_highest_row_first() {
        let state = state(BOARD);
        let expected = "score 0 lives 3 power 0\n######\n#P.oG#\n#    #\n######\n";
        assert_eq!(render_to_string(&state), expected);
    }

    #[test]
    fn eatable_hostiles_use_lowercase() {
        let mut state = state(BOARD);
        state.activate_power(4);
        let frame = render_to_string(&state);
        assert!(frame.starts_with("score 0 lives 3 power 4\n"));
        assert!(frame.contains("#P.og#"));
    }

    #[test]
    fn text_renderer_writes_header_and_frames() {
        let state = state(BOARD);
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.init(32, state.grid().width(), state.grid().height()).expect("init");
        renderer.render(&state).expect("render");
        renderer.render(&state).expect("render");
        assert_eq!(renderer.frames(), 2);

        let text = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert!(text.starts_with("board 6x4\n"));
        assert_eq!(text.matches("score 0 lives 3 power 0").count(), 2);
    }
}
