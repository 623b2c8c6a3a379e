use chess_engine::engine::Engine;
use chess_engine::types::{ChosenMove, Color, Difficulty, GameStatus, PieceKind};
use rand::Rng;
use std::io::{self, Write};

struct Cli {
    engine: Engine,
    computer_side: Option<Color>,
    display_enabled: bool,
    flip: bool,
}

impl Cli {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            computer_side: None,
            display_enabled: true,
            flip: false,
        }
    }

    fn show_help(&self) {
        println!("\n======================= INFORMATION ======================");
        println!("h or help - Displays help on the commands");
        println!("d or dd   - Displays board / toggles display setting");
        println!("moves     - Displays a list of legal moves");
        println!("fen       - Displays a FEN string for the current position");
        println!("f         - Flips the board");
        println!("q or quit - Quits the program");
        println!("================= CONTROLLING THE ENGINE =================");
        println!("go        - Starts a game against the computer");
        println!("new       - Starts a new game");
        println!("p or play - The computer plays a move");
        println!("off       - Turns the computer player off");
        println!("undo      - Takes back the last move");
        println!("===================== CONFIGURATION ======================");
        println!("fen <FEN>    - Loads a FEN string");
        println!("level <1-3>  - Sets the AI level (1 random, 2 greedy, 3 search)");
    }

    fn display_board(&self) {
        if self.display_enabled {
            self.engine.display_board(self.flip);
        }
    }

    fn print_status(&mut self) {
        match self.engine.status() {
            GameStatus::Normal => {}
            GameStatus::Check => {
                println!("\nCheck!");
            }
            GameStatus::Checkmate { winner } => {
                self.display_board();
                println!("\nGAME OVER");

                if winner == Color::White {
                    println!("{{White mates}}");
                } else {
                    println!("{{Black mates}}");
                }

                self.engine.new_game();
                self.computer_side = None;
            }
            GameStatus::Stalemate => {
                println!("{{Stalemate}}");
                self.engine.new_game();
                self.computer_side = None;
            }
        }
    }

    fn run_main_loop(&mut self) {
        self.display_board();

        loop {
            println!("\n-------------------------------");
            println!("*   To move: {:?}   *", self.engine.turn);
            println!("-------------------------------");

            // Computer's turn
            if self.computer_side == Some(self.engine.turn) {
                println!("\nComputer is thinking...");

                match self.engine.play_computer_move() {
                    Some(choice) => {
                        println!(
                            "Computer plays: \x1b[32m{}\x1b[0m",
                            Engine::move_string(choice.from, choice.mv)
                        );
                    }
                    None => {
                        println!("(No legal moves)");
                        self.computer_side = None;
                    }
                }

                self.print_status();
                self.display_board();
                continue;
            }

            print!("\nMove OR command > ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => return, // EOF
                Ok(_) => {}
                Err(_) => return,
            }

            let command = input.trim().to_lowercase();

            // COMMANDS WITHOUT PARAMETERS
            match command.as_str() {
                "d" => {
                    self.engine.display_board(self.flip);
                    continue;
                }
                "dd" => {
                    self.display_enabled = !self.display_enabled;

                    if self.display_enabled {
                        println!("\nBoard display enabled");
                        self.display_board();
                    } else {
                        println!("\nBoard display disabled");
                    }
                    continue;
                }
                "f" => {
                    self.flip = !self.flip;
                    self.display_board();
                    continue;
                }
                "go" => {
                    self.handle_go_command();
                    continue;
                }
                "h" | "help" => {
                    self.show_help();
                    continue;
                }
                "fen" => {
                    println!("\n{}", self.engine.to_fen());
                    continue;
                }
                "moves" => {
                    println!("\nLegal moves:");
                    self.display_legal_moves();
                    continue;
                }
                "new" => {
                    self.engine.new_game();
                    self.computer_side = None;
                    self.display_board();
                    continue;
                }
                "p" | "play" => {
                    self.computer_side = Some(self.engine.turn);
                    continue;
                }
                "off" => {
                    self.computer_side = None;
                    continue;
                }
                "q" | "quit" => {
                    println!("\nProgram exiting");
                    break;
                }
                "undo" => {
                    if !self.engine.undo() {
                        println!("\nNo moves to undo");
                        continue;
                    }
                    self.computer_side = None;
                    self.display_board();
                    continue;
                }
                _ => {}
            }

            // COMMANDS WITH PARAMETERS
            if command.starts_with("fen ") {
                // FEN is case-sensitive: slice the original input, not the
                // lowercased command.
                let fen_str = input.trim()[4..].trim();
                match Engine::from_fen(fen_str) {
                    Ok(engine) => {
                        self.engine = engine;
                        self.display_board();
                        println!("FEN loaded successfully");
                    }
                    Err(e) => println!("Error loading FEN: {e}"),
                }
                continue;
            }

            if let Some(level_str) = command.strip_prefix("level ") {
                match level_str
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| "Level must be a number")
                    .and_then(Difficulty::from_level)
                {
                    Ok(difficulty) => {
                        self.engine.difficulty = difficulty;
                        println!("\nAI level set to {difficulty:?}");
                    }
                    Err(e) => println!("\n{e}"),
                }
                continue;
            }

            // PARSE A MOVE IN LONG ALGEBRAIC NOTATION
            match self.parse_player_move(&command) {
                Some(choice) => {
                    self.engine.make_move(choice.from, choice.mv);
                    self.print_status();
                    self.display_board();
                }
                None => println!("\nILLEGAL MOVE!"),
            }
        }
    }

    /// Accepts "e2e4", or "e2" followed by a prompt for the target square.
    /// Prompts for a piece when the move is an unresolved promotion.
    fn parse_player_move(&mut self, command: &str) -> Option<ChosenMove> {
        let cleaned = command.replace(' ', "");

        let move_str = match cleaned.len() {
            4 | 5 => cleaned,
            2 => {
                print!("             To square > ");
                io::stdout().flush().unwrap();

                let mut to_input = String::new();
                io::stdin().read_line(&mut to_input).ok()?;

                format!("{}{}", cleaned, to_input.trim())
            }
            _ => {
                println!("\nINVALID COMMAND!");
                return None;
            }
        };

        let choice = match self.engine.parse_move(&move_str) {
            Ok(choice) => choice,
            Err(_) => return None,
        };

        if choice.mv.is_promotion() && move_str.len() == 4 {
            let kind = self.prompt_promotion_piece()?;
            return Some(ChosenMove {
                from: choice.from,
                mv: choice.mv.with_promotion(kind),
            });
        }

        Some(choice)
    }

    fn prompt_promotion_piece(&self) -> Option<PieceKind> {
        print!("      Promote to (q/r/b/n) > ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok()?;

        match input.trim() {
            "q" => Some(PieceKind::Queen),
            "r" => Some(PieceKind::Rook),
            "b" => Some(PieceKind::Bishop),
            "n" => Some(PieceKind::Knight),
            _ => {
                println!("Defaulting to queen");
                Some(PieceKind::Queen)
            }
        }
    }

    fn display_legal_moves(&self) {
        let mut moves: Vec<String> = self
            .engine
            .all_legal_moves()
            .iter()
            .map(|choice| Engine::move_string(choice.from, choice.mv))
            .collect();

        moves.sort();

        for (index, move_str) in moves.iter().enumerate() {
            print!("{move_str} ");
            if (index + 1) % 8 == 0 {
                println!();
            }
        }
        println!();
    }

    fn handle_go_command(&mut self) {
        println!("\nChoose your side:");
        println!("1. White");
        println!("2. Black");
        println!("3. Random");
        print!("\nEnter choice (1-3) > ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => {}
            Err(_) => return,
        }

        println!();

        let player_side = match input.trim() {
            "1" => Color::White,
            "2" => Color::Black,
            "3" => {
                let side = match rand::thread_rng().gen_bool(0.5) {
                    true => Color::White,
                    false => Color::Black,
                };
                println!("You are playing as {side:?}");
                side
            }
            _ => {
                println!("Invalid choice. Defaulting to White.");
                Color::White
            }
        };

        self.computer_side = Some(player_side.opponent());
    }
}

fn main() {
    println!("\n==============================");
    println!("|    Mailbox Chess Engine    |");
    println!("==============================\n");
    println!("\"h or help\" displays a list of commands\n");

    let mut cli = Cli::new();
    cli.run_main_loop();
}
