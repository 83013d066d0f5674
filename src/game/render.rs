use super::components::Player;

/// Sink for state changes the presentation layer must mirror.
///
/// The core drives an implementation of this trait and knows nothing else
/// about how the board is shown. After `game_ended` fires the session stops
/// accepting input, and the implementation must stop forwarding column
/// selections.
pub trait Renderer {
    /// A piece landed at (row, col). The cell must be marked for `player`.
    fn piece_placed(&mut self, row: usize, col: usize, player: Player);

    /// The four cells that ended the game, in sweep order. Fires right
    /// before `game_ended` on a win so the line can be highlighted.
    fn four_connected(&mut self, _line: [(usize, usize); 4], _player: Player) {}

    /// The game is over; `message` is the terminal announcement.
    fn game_ended(&mut self, message: &str);
}
