//! Interactive blackjack table.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Account, ActionError, BetError, Card, HandOutcome, PlayerAction, Round, RoundPhase,
    RoundResult, Shoe, TableOptions,
};

const RULE: &str = "========================================";

/// Demo conversion rates, in units per US dollar.
const RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("BTC", 0.000016),
    ("ETH", 0.00031),
    ("SOL", 0.0058),
    ("DOGE", 7.1),
];

fn main() {
    println!("Hello! Welcome to the table.\n{RULE}");
    let name = prompt_line("Enter Name: ");

    let options = TableOptions::new();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut shoe = Shoe::new(options, seed);
    let mut account = Account::new();

    while main_menu(&mut account, &mut shoe, options, &name) {}
}

/// Shows the main menu and runs the chosen flow. Returns whether the
/// session continues.
fn main_menu(account: &mut Account, shoe: &mut Shoe, options: TableOptions, name: &str) -> bool {
    println!(
        "{RULE}\nMain Menu:\n1) Play Game\n2) View Account\n3) Make Deposit\n4) Cash Out and Exit\n{RULE}"
    );
    let option = loop {
        let choice = prompt_line("Select option (1-4): ");
        if matches!(choice.as_str(), "1" | "2" | "3" | "4") {
            break choice;
        }
        println!("Invalid Option");
    };

    println!("{RULE}");
    match option.as_str() {
        "1" => {
            if account.balance() <= 0.0 {
                prompt_line("You must add funds before you can play. Press Enter to return to Main Menu");
                return true;
            }
            play_round(account, shoe, options);
            true
        }
        "2" => {
            print_account(account, name);
            prompt_line("Press Enter to Return to Main Menu");
            true
        }
        "3" => {
            deposit(account);
            println!("{RULE}\nNew account balance: ${:.2}", account.balance());
            true
        }
        _ => {
            cash_out(account, name);
            false
        }
    }
}

/// Plays one round from bet prompt to outcome message.
fn play_round(account: &mut Account, shoe: &mut Shoe, options: TableOptions) {
    let mut round = loop {
        let input = prompt_line(&format!(
            "Current balance ${:.2}\nSet bet amount: $",
            account.balance()
        ));
        let Ok(bet) = input.parse::<f64>() else {
            println!("Bet must be dollar amount, minimum $2.");
            continue;
        };
        match Round::begin(&mut *shoe, &mut *account, options, to_cents(bet)) {
            Ok(round) => break round,
            Err(BetError::BelowMinimum) => {
                println!("Bet must be dollar amount, minimum $2.");
            }
            Err(BetError::InsufficientFunds) => {
                println!("{RULE}\nInsufficient funds.\n{RULE}");
            }
        }
    };

    let mut seen_shuffles = 0;
    note_reshuffles(&round, &mut seen_shuffles);
    print_table(&round);
    if round.hands()[0].hand().is_blackjack() {
        println!("Blackjack!");
    }

    let mut announced = [false; 2];
    while round.phase() == RoundPhase::PlayerTurn {
        let Some(cursor) = round.active_hand() else {
            break;
        };
        if round.hands().len() == 2 && !announced[cursor] {
            println!("PLAYING HAND {}:", cursor + 1);
            announced[cursor] = true;
        }

        let legal = round.legal_actions();
        let choice = prompt_line(action_prompt(&legal)).to_uppercase();
        let action = match choice.as_str() {
            "H" => PlayerAction::Hit,
            "S" => PlayerAction::Stand,
            "D" => PlayerAction::Double,
            "L" => PlayerAction::Split,
            _ => {
                println!("Invalid Action");
                continue;
            }
        };
        if let Err(err) = round.apply(action) {
            match err {
                ActionError::InsufficientFunds => println!("Insufficient Funds"),
                ActionError::CannotSplit => {
                    println!("Splitting is not allowed on this hand.");
                }
                ActionError::CannotDouble | ActionError::OutOfTurn => {
                    println!("Invalid Action");
                }
            }
            continue;
        }
        note_reshuffles(&round, &mut seen_shuffles);
        print_table(&round);
    }

    if round.phase() == RoundPhase::DealerTurn {
        if let Ok(drawn) = round.dealer_turn() {
            if !drawn.is_empty() {
                println!("Dealer hits...");
            }
        }
        note_reshuffles(&round, &mut seen_shuffles);
        print_table(&round);
    }

    let Ok(result) = round.settle() else { return };
    print_outcome(&result);
    prompt_line("Hit Enter to return to Main Menu.");
}

/// Picks the prompt wording for the set of actions on offer.
fn action_prompt(legal: &[PlayerAction]) -> &'static str {
    if legal.contains(&PlayerAction::Split) {
        "Do you want to hit (H), stand (S), double (D) or split (L): "
    } else if legal.contains(&PlayerAction::Double) {
        "Do you want to hit (H) or stand (S), double (D): "
    } else {
        "Do you want to hit (H) or stand (S): "
    }
}

fn print_table(round: &Round<'_>) {
    println!("{RULE}");
    println!("Dealer:");
    println!("{}", hand_art(round.dealer().cards()));
    if round.hands().len() == 2 {
        for (index, seat) in round.hands().iter().enumerate() {
            println!("Hand {}:", index + 1);
            println!("{}", hand_art(seat.hand().cards()));
        }
    } else {
        println!("Hand:");
        println!("{}", hand_art(round.hands()[0].hand().cards()));
    }
}

fn print_outcome(result: &RoundResult) {
    if result.hands.len() == 2 {
        if result.hands.iter().all(|hand| hand.value > 21) {
            println!("Both bust! Dealer wins.");
            return;
        }
        if result.dealer_busted() {
            println!("Dealer bust!");
        }
        for hand in &result.hands {
            println!("Hand {}: {}", hand.index + 1, outcome_message(hand.outcome, hand.value));
        }
    } else {
        let hand = &result.hands[0];
        if hand.value > 21 {
            println!("Bust! Dealer wins.");
        } else if result.dealer_busted() {
            println!("Dealer bust! You win.");
        } else {
            println!("{}", outcome_message(hand.outcome, hand.value));
        }
    }
}

fn outcome_message(outcome: HandOutcome, value: u8) -> &'static str {
    if value > 21 {
        return "Bust!";
    }
    match outcome {
        HandOutcome::Win | HandOutcome::Blackjack => "You win!",
        HandOutcome::Push => "Push!",
        HandOutcome::Loss => "Dealer wins.",
    }
}

fn note_reshuffles(round: &Round<'_>, seen: &mut u32) {
    while *seen < round.reshuffles() {
        println!("Shuffling deck...");
        *seen += 1;
    }
}

fn print_account(account: &Account, name: &str) {
    println!("ACCOUNT DETAILS");
    println!("{RULE}");
    println!("Username: {name}");
    println!("Balance: ${:.2}", account.balance());
    println!(
        "Hands Played: {} ({:.1}% win rate)",
        account.rounds_played(),
        account.win_rate() * 100.0
    );
    println!("Amount Deposited: ${:.2}", account.deposited());
    println!("Amount Bet: ${:.2}", account.wagered());
    println!("Earnings: ${:.2}", account.net_earnings());
    println!("Return on Wager: {:.1}%", account.return_on_wager() * 100.0);
    println!("{RULE}");
}

fn deposit(account: &mut Account) {
    let (_, rate) =
        select_currency("What (crypto)currency would you like to pay with? Type currency code: ");
    let amount = prompt_amount("Set deposit amount (do not include currency sign): ");
    let amount_usd = to_cents(amount / rate);
    prompt_line(&format!(
        "You are depositing ${amount_usd:.2}. Press Enter to confirm."
    ));
    account.deposit(amount_usd);
}

fn cash_out(account: &mut Account, name: &str) {
    if account.deposited() <= 0.0 {
        println!("Thank you for playing.\n{RULE}");
        return;
    }
    let (code, rate) =
        select_currency("What (crypto)currency would you like to be paid in? Type currency code: ");
    let payment = account.cash_out() * rate;
    prompt_line(&format!(
        "You will be paid {payment:.2} {code}. Press Enter to confirm."
    ));
    println!("{RULE}");
    println!("RECEIPT");
    println!("Username: {name}");
    println!("Payment: {payment:.2} {code}");
    println!(
        "Hands Played: {} ({:.1}% win rate)",
        account.rounds_played(),
        account.win_rate() * 100.0
    );
    println!("Return on Wager: {:.1}%", account.return_on_wager() * 100.0);
    println!("{RULE}");
    println!("Thank you for playing.");
    println!("{RULE}");
}

fn select_currency(prompt: &str) -> (&'static str, f64) {
    loop {
        let code = prompt_line(prompt).to_uppercase();
        if let Some(&(name, rate)) = RATES.iter().find(|(name, _)| *name == code) {
            return (name, rate);
        }
        println!("Invalid currency code. Note we only support payment from major cryptocurrencies.");
    }
}

/// Renders the cards of a hand side by side as boxed ASCII art.
fn hand_art(cards: &[Card]) -> String {
    let mut rows: [String; 9] = std::array::from_fn(|_| String::new());
    for &card in cards {
        for (row, line) in card_lines(card).iter().enumerate() {
            rows[row].push_str(line);
            rows[row].push_str("  ");
        }
    }
    rows.iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The nine rows of one card. The ten takes different padding since its
/// label is two characters wide.
fn card_lines(card: Card) -> [String; 9] {
    let rank = card.rank.label();
    let suit = card.suit.glyph();
    let (top, bottom) = if rank == "10" {
        (format!("│{rank}         │"), format!("│         {rank}│"))
    } else {
        (format!("│{rank}          │"), format!("│          {rank}│"))
    };
    [
        "┌───────────┐".to_string(),
        top,
        "│           │".to_string(),
        "|           |".to_string(),
        format!("│     {suit}     │"),
        "│           │".to_string(),
        "│           │".to_string(),
        bottom,
        "└───────────┘".to_string(),
    ]
}

fn to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_amount(prompt: &str) -> f64 {
    loop {
        match prompt_line(prompt).parse::<f64>() {
            Ok(value) => return value,
            Err(_) => println!("Please enter numeric amount."),
        }
    }
}
