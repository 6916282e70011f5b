use bridge_cli::display::{format_auction, format_hand, format_hands_table};
use bridge_cli::{telemetry, Tutor};
use bridge_core::Position;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Practise Polish Club bidding against the engine", long_about = None)]
struct Args {
    /// Seed for a reproducible deal
    #[arg(long, env = "BIDTUTOR_SEED")]
    seed: Option<u64>,

    /// Your seat (N, E, S or W)
    #[arg(long, default_value = "S")]
    seat: Position,

    /// Who calls first
    #[arg(long, default_value = "N")]
    dealer: Position,

    /// Show the engine's suggestion before each of your calls
    #[arg(long)]
    hints: bool,
}

fn main() -> io::Result<()> {
    telemetry::init_tracing();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut tutor = Tutor::deal(&mut rng, args.dealer, args.seat);

    println!("Dealer: {}", tutor.dealer());
    print!("{}", format_hand(tutor.human(), tutor.hand(tutor.human())));
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while tutor.to_act().is_some() {
        if let Some((seat, trace)) = tutor.engine_turn() {
            println!("{:<6} {:<4} ({})", seat.name(), trace.selected.render(), trace.rule_name);
            continue;
        }

        if args.hints {
            let hint = tutor.hint();
            println!("Hint: {} ({})", hint.selected.describe(), hint.rule_name);
        }
        print!("Your call> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        match tutor.human_call(&line?) {
            Ok(call) => println!("{:<6} {:<4}", tutor.human().name(), call.render()),
            Err(e) => println!("{e}, try again"),
        }
    }

    println!();
    print!("{}", format_auction(tutor.auction(), tutor.dealer()));
    println!("\nResult: {}\n", tutor.outcome());
    print!("{}", format_hands_table(tutor.hands()));
    Ok(())
}
