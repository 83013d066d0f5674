use connect_four::{Error, GameSession, Input, Player, Renderer};

const W: usize = 7;
const H: usize = 6;

/// Renderer printing to the terminal. The grid itself is reprinted from the
/// session after every accepted move.
struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn piece_placed(&mut self, row: usize, col: usize, player: Player) {
        log::trace!("player {player} placed at row {row}, column {col}");
    }

    fn four_connected(&mut self, line: [(usize, usize); 4], player: Player) {
        log::info!("player {player} connected {line:?}");
    }

    fn game_ended(&mut self, message: &str) {
        println!("{message}");
    }
}

fn print_help() {
    println!("Place a piece in a column by typing a number between 1 and {W}");
    println!(" (the column numbers are visible above the columns)");
    println!("Commands");
    println!("  help\t\tshow this page");
    println!("  quit\t\tstop the game");
    println!("Aliases");
    println!("  h, ?\t\tshort for help");
    println!("  exit, stop, q, e, s\tshort for quit");
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut session = GameSession::<W, H>::new().unwrap();
    let mut renderer = TerminalRenderer;

    print!("{}", session.board());
    while session.status().in_progress() {
        println!("Player {}'s turn.", session.current_player());
        match Input::get() {
            Ok(Input::Col(col)) if (1..=W).contains(&col) => {
                // the board indexes columns from 0, the prompt from 1
                match session.handle_column(col - 1, &mut renderer) {
                    Ok(_) => print!("{}", session.board()),
                    Err(e) => {
                        log::error!("move rejected: {e}");
                        break;
                    }
                }
            }
            Ok(Input::Col(col)) => println!("Column {col} does not exist!"),
            Ok(Input::Quit) => break,
            Ok(Input::Help) => print_help(),
            Err(Error::InvalidInput(s)) => {
                println!("Invalid input. Must be a number between 1 and {W}\nprovided input: {s:?}")
            }
            Err(e) => println!("Invalid input: {e}"),
        }
    }
}
