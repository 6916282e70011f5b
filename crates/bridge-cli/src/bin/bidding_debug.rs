use bridge_cli::display::{format_row, format_table_header, format_trace};
use bridge_cli::{parse_auction, telemetry};
use bridge_core::{Hand, Position};
use bridge_engine::select_call_with_trace;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show how the engine picks a call", long_about = None)]
struct Args {
    /// Hand as clubs.diamonds.hearts.spades, e.g. AQ2.KJ3.KQ32.A32
    #[arg(long)]
    hand: String,

    /// Calls made so far, e.g. "1C P 1D P"
    #[arg(long, default_value = "")]
    auction: String,

    /// Seat that made the first call
    #[arg(long, default_value = "N")]
    first: Position,

    /// Print the trace as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();

    let hand = match Hand::parse(&args.hand) {
        Ok(hand) => hand,
        Err(e) => {
            eprintln!("Error: bad hand: {e}");
            return ExitCode::FAILURE;
        }
    };
    let auction = match parse_auction(args.first, &args.auction) {
        Ok(auction) => auction,
        Err(e) => {
            eprintln!("Error: bad auction: {e}");
            return ExitCode::FAILURE;
        }
    };
    let seat = auction.next_position().unwrap_or(args.first);
    let trace = select_call_with_trace(&hand, &auction, seat);

    if args.json {
        match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print!("{}", format_table_header());
    for (idx, entry) in auction.entries().iter().enumerate() {
        println!(
            "{}",
            format_row(idx + 1, entry.position.to_char(), &entry.call.render(), "", "(History)")
        );
    }
    println!(
        "{}",
        format_row(
            auction.len() + 1,
            seat.to_char(),
            &trace.selected.render(),
            trace.rule_name,
            ""
        )
    );
    println!();
    print!("{}", format_trace(&trace));
    ExitCode::SUCCESS
}
