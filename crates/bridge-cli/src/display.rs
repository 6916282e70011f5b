use bridge_core::{Auction, Call, Hand, Position, Suit};
use bridge_engine::{BidTrace, RuleRegistry};

const DISPLAY_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
const AUCTION_COLUMNS: [Position; 4] = [
    Position::West,
    Position::North,
    Position::East,
    Position::South,
];

fn lines_to_string(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub fn suit_lines(hand: &Hand) -> Vec<String> {
    DISPLAY_ORDER
        .iter()
        .map(|&suit| {
            let cards = hand.holding(suit);
            format!(
                "{}: {}",
                suit.to_char(),
                if cards.is_empty() { "-" } else { &cards }
            )
        })
        .collect()
}

/// One hand with its point count, as shown to the player.
pub fn format_hand(position: Position, hand: &Hand) -> String {
    let mut lines = vec![format!("{} ({} HCP)", position, hand.hcp())];
    lines.extend(suit_lines(hand).into_iter().map(|line| format!("  {line}")));
    lines_to_string(&lines)
}

/// Compass layout of all four hands.
pub fn format_hands_table(hands: &[Hand; 4]) -> String {
    let suits = |pos: Position| suit_lines(&hands[pos.idx()]);
    let indent = "        ";

    let mut lines = vec![format!("{indent}North")];
    lines.extend(suits(Position::North).iter().map(|l| format!("{indent}{l}")));
    lines.push(String::new());
    lines.push(format!("{:<20} East", "West"));
    lines.extend(
        suits(Position::West)
            .iter()
            .zip(suits(Position::East))
            .map(|(west, east)| format!("{west:<20} {east}")),
    );
    lines.push(String::new());
    lines.push(format!("{indent}South"));
    lines.extend(suits(Position::South).iter().map(|l| format!("{indent}{l}")));
    lines_to_string(&lines)
}

/// The auction so far in four columns, West to South, starting with the first caller.
pub fn format_auction(auction: &Auction, first: Position) -> String {
    let offset = AUCTION_COLUMNS.iter().position(|&p| p == first).unwrap_or(0);
    let cells: Vec<String> = std::iter::repeat(String::new())
        .take(offset)
        .chain(auction.entries().iter().map(|e| e.call.render()))
        .collect();

    let row = |cells: &[String]| -> String { cells.iter().map(|c| format!("{c:<7}")).collect() };
    let header: Vec<String> = AUCTION_COLUMNS.iter().map(|p| p.name().to_string()).collect();

    let mut lines = vec![row(header.as_slice())];
    lines.extend(cells.chunks(4).map(row));
    lines_to_string(&lines)
}

pub fn format_row(idx: usize, pos: char, call: &str, rule: &str, desc: &str) -> String {
    format!("{:<3} | {:<3} | {:<5} | {:<25} | {}", idx, pos, call, rule, desc)
}

pub fn format_table_header() -> String {
    lines_to_string(&[
        format!(
            "{:<3} | {:<3} | {:<5} | {:<25} | Description",
            "Idx", "Pos", "Call", "Rule Name"
        ),
        format!(
            "{:-<3}-+-{:-<3}-+-{:-<5}-+-{:-<25}-+---------------------------",
            "", "", "", ""
        ),
    ])
}

/// Everything the engine looked at for one decision.
pub fn format_trace(trace: &BidTrace) -> String {
    let registry = RuleRegistry::for_context(trace.context.kind);
    let ctx = &trace.context;
    let show = |call: Option<Call>| call.map_or("-".to_string(), |c| c.render());

    let mut lines = vec![
        format!("Seat: {}  Context: {:?}", ctx.seat, ctx.kind),
        format!(
            "HCP: {}  Shape: {:?}  Balanced: {}",
            ctx.hcp,
            ctx.distribution.shape(),
            ctx.balanced
        ),
        format!(
            "My last: {}  Partner's last: {}",
            show(ctx.my_last),
            show(ctx.partner_last)
        ),
        String::new(),
        "Selection Process:".to_string(),
    ];
    lines.extend(trace.silent_rules.iter().map(|name| format!("[SILENT ] {name}")));
    lines.extend(trace.steps.iter().map(|step| {
        let status = if step.legal { "MATCHED" } else { "ILLEGAL" };
        let desc = registry.description(step.rule).unwrap_or("");
        format!("[{status}] {} ({}) {desc}", step.call.render(), step.rule)
    }));
    lines.push(String::new());
    lines.push(format!(
        "Selected: {} via {}",
        trace.selected.describe(),
        trace.rule_name
    ));
    lines_to_string(&lines)
}
