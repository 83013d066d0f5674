use super::{
    components::{Player, Tile},
    error::{Error, GameResult},
};

/// The playing grid. Row 0 is the top, row `H - 1` the bottom; pieces fall
/// to the lowest empty row of their column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const W: usize, const H: usize> {
    board: [[Tile; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is smaller than 4,
    /// since such a board can never hold a four-in-a-row.
    pub fn new() -> GameResult<Self> {
        if W < 4 || H < 4 {
            return Err(Error::InvalidDim);
        }
        Ok(Self {
            board: [[Tile::default(); W]; H],
        })
    }

    /// Drop a piece into the given column. The column is zero indexed.
    /// Returns the row the piece landed in.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the column is outside the board
    /// dimensions.
    ///
    /// Returns `Error::ColumnFull` if every row of the column is occupied.
    /// The board is left untouched in both cases.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> GameResult<usize> {
        if col >= W {
            return Err(Error::InvalidColumn);
        }
        for y in (0..H).rev() {
            if self.board[y][col] == Tile::Empty {
                log::trace!("player {player} lands in column {col}, row {y}");
                self.board[y][col] = player.tile();
                return Ok(y);
            }
        }
        Err(Error::ColumnFull)
    }

    /// Check if every cell of the grid is occupied.
    pub fn is_full(&self) -> bool {
        self.board
            .iter()
            .flatten()
            .all(|tile| *tile != Tile::Empty)
    }

    /// Find four connected tiles belonging to `player`, if any.
    ///
    /// Every cell anchors four candidate lines: rightward, downward and the
    /// two downward diagonals. Any winning line, whatever its direction, is
    /// one of these candidates for its top-most (then left-most) cell, so
    /// the sweep needs no upward or leftward projections. Four lines per
    /// cell keeps this O(W * H).
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); 4]> {
        let tile = player.tile();
        for y in 0..H {
            for x in 0..W {
                if self.board[y][x] != tile {
                    continue;
                }

                // rightward
                if x + 3 < W
                    && self.board[y][x + 1] == tile
                    && self.board[y][x + 2] == tile
                    && self.board[y][x + 3] == tile
                {
                    return Some([(y, x), (y, x + 1), (y, x + 2), (y, x + 3)]);
                }

                if y + 3 < H {
                    // downward
                    if self.board[y + 1][x] == tile
                        && self.board[y + 2][x] == tile
                        && self.board[y + 3][x] == tile
                    {
                        return Some([(y, x), (y + 1, x), (y + 2, x), (y + 3, x)]);
                    }

                    // down & right
                    if x + 3 < W
                        && self.board[y + 1][x + 1] == tile
                        && self.board[y + 2][x + 2] == tile
                        && self.board[y + 3][x + 3] == tile
                    {
                        return Some([
                            (y, x),
                            (y + 1, x + 1),
                            (y + 2, x + 2),
                            (y + 3, x + 3),
                        ]);
                    }

                    // down & left
                    if x > 2
                        && self.board[y + 1][x - 1] == tile
                        && self.board[y + 2][x - 2] == tile
                        && self.board[y + 3][x - 3] == tile
                    {
                        return Some([
                            (y, x),
                            (y + 1, x - 1),
                            (y + 2, x - 2),
                            (y + 3, x - 3),
                        ]);
                    }
                }
            }
        }
        None
    }

    /// Check if `player` has four connected tiles anywhere on the board.
    pub fn has_won(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Get the type of tile at position (row, col).
    pub fn get(&self, row: usize, col: usize) -> GameResult<Tile> {
        if row >= H || col >= W {
            return Err(Error::InvalidDim);
        }

        Ok(self.board[row][col])
    }
}

impl<const W: usize, const H: usize> std::fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 1..=W {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else if x < 100 {
                write!(f, "{x}-")?;
            } else {
                write!(f, "{x}")?;
            }
        }
        writeln!(f, "#")?;
        for y in 0..H {
            write!(f, "|")?;
            for x in 0..W {
                match self.board[y][x] {
                    Tile::Empty => write!(f, " . ")?,
                    Tile::Player1 => write!(f, " x ")?,
                    Tile::Player2 => write!(f, " o ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 1..=W {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}
