/// The type of tiles that can be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Occupied by player 1.
    Player1,
    /// Occupied by player 2.
    Player2,
    /// Unoccupied.
    Empty,
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1, moves first.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Get the other player.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The tile this player places.
    pub fn tile(self) -> Tile {
        match self {
            Self::One => Tile::Player1,
            Self::Two => Tile::Player2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}

/// Where the game stands. Terminal states are final: once a session leaves
/// `InProgress` its board no longer changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// The given player connected four.
    Won(Player),
    /// The board filled with no four connected.
    Tied,
}

impl Status {
    /// True while moves are still accepted.
    pub fn in_progress(self) -> bool {
        self == Self::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player_toggles() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn player_to_tile() {
        assert_eq!(Player::One.tile(), Tile::Player1);
        assert_eq!(Player::Two.tile(), Tile::Player2);
    }

    #[test]
    fn player_display_matches_messages() {
        assert_eq!(Player::One.to_string(), "1");
        assert_eq!(Player::Two.to_string(), "2");
    }
}
