use super::{
    board::Board,
    components::{Player, Status},
    error::{Error, GameResult},
    render::Renderer,
};

/// A single game from the first move to a win or a tie.
///
/// The session owns the board and the active-player marker; every mutation
/// goes through [`handle_column`](Self::handle_column). There is no reset:
/// a rematch is a fresh session.
#[derive(Debug)]
pub struct GameSession<const W: usize, const H: usize> {
    board: Board<W, H>,
    current: Player,
    status: Status,
}

impl<const W: usize, const H: usize> GameSession<W, H> {
    /// Create a new session with an empty board, player 1 to move.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height constants are smaller than 4.
    pub fn new() -> GameResult<Self> {
        Ok(Self {
            board: Board::new()?,
            current: Player::One,
            status: Status::InProgress,
        })
    }

    /// Play the active player's piece into `col` and advance the game.
    ///
    /// Selecting a full column is a no-op, as is any input once the game
    /// has ended. Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` for a column outside the board. The
    /// specified renderer interface can never produce one, so hitting this
    /// means a broken caller.
    pub fn handle_column(
        &mut self,
        col: usize,
        renderer: &mut dyn Renderer,
    ) -> GameResult<Status> {
        if !self.status.in_progress() {
            log::debug!("ignoring column {col}: game already over");
            return Ok(self.status);
        }

        let row = match self.board.drop_piece(col, self.current) {
            Ok(row) => row,
            Err(Error::ColumnFull) => {
                log::debug!("ignoring column {col}: full");
                return Ok(self.status);
            }
            Err(e) => return Err(e),
        };

        renderer.piece_placed(row, col, self.current);

        if let Some(line) = self.board.winning_line(self.current) {
            self.status = Status::Won(self.current);
            log::debug!("player {} connected four at {line:?}", self.current);
            renderer.four_connected(line, self.current);
            renderer.game_ended(&format!("Player {} won!", self.current));
        } else if self.board.is_full() {
            self.status = Status::Tied;
            log::debug!("board full, tie");
            renderer.game_ended("It's a tie!");
        } else {
            self.current = self.current.other();
        }

        Ok(self.status)
    }

    /// Where the game stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The player whose turn it is. Meaningless once the game has ended.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Read access to the board, for rendering.
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }
}
