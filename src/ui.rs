#![cfg(feature = "std")]

use crate::{
    config::BOARD_SIZE,
    fleet::Fleet,
    game::{Match, Phase, Side},
    grid::GridView,
};

/// Print a grid projection with column letters and 1-based row numbers.
pub fn print_board(title: &str, view: &GridView) {
    std::println!("    {}", title);
    std::println!("    ╔═══════════════════════╗");
    std::print!("    ║  ");
    for c in 0..BOARD_SIZE as usize {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {}", ch);
    }
    std::println!(" ║");
    std::println!("    ╠═══════════════════════╣");
    for (r, row) in view.rows().enumerate() {
        std::print!("    ║ {:2}", r + 1);
        for cell in row.iter() {
            std::print!(" {}", cell.symbol());
        }
        std::println!(" ║");
    }
    std::println!("    ╚═══════════════════════╝");

    if view.is_revealed() {
        std::println!("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    } else {
        std::println!("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
}

/// Per-ship status. Enemy damage is only shown once a ship is lost.
pub fn print_fleet_status(fleet: &Fleet, enemy: bool) {
    std::println!("    {}", if enemy { "Enemy Fleet Intel" } else { "Allied Fleet Status" });
    for ship in fleet {
        let status = if ship.is_sunk() {
            "LOST".to_string()
        } else if enemy {
            "Active".to_string()
        } else {
            format!("{}/{} intact", ship.size() - ship.hits(), ship.size())
        };
        std::println!("      {:<11} ({}): {}", ship.name(), ship.size(), status);
    }
}

/// Both boards, fleet summaries and the latest log entries.
pub fn print_match(game: &Match, log_lines: usize) {
    match game.phase() {
        Phase::Setup => {
            print_board("FLEET DEPLOYMENT", &game.setup_board().view(true));
        }
        Phase::Playing | Phase::GameOver => {
            let over = game.phase() == Phase::GameOver;
            print_board("ENEMY WATERS", &game.view(Side::Ai, over));
            print_fleet_status(game.board(Side::Ai).fleet(), true);
            std::println!();
            print_board("HOME FLEET", &game.view(Side::Human, true));
            print_fleet_status(game.board(Side::Human).fleet(), false);
            std::println!(
                "\n    Shots fired: {}   Enemy surviving: {}",
                game.shots_fired(Side::Human),
                game.ships_surviving(Side::Ai)
            );
        }
    }
    std::println!();
    for line in game.log().take(log_lines) {
        std::println!("    > {}", line);
    }
}
