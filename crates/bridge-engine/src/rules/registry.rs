use crate::context::ContextKind;
use crate::rules::{opening, rebid, response, PassByDefault, Rule};

/// An ordered rule table. Earlier rules take priority.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn for_context(kind: ContextKind) -> Self {
        match kind {
            ContextKind::Opening => Self::opening(),
            ContextKind::Response => Self::response(),
            ContextKind::Rebid => Self::rebid(),
            ContextKind::Competitive => Self::competitive(),
        }
    }

    pub fn opening() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(opening::StrongClub),
            Box::new(opening::WeakClub),
            Box::new(opening::OneNoTrump),
            Box::new(opening::MajorOpening),
            Box::new(opening::DiamondOpening),
            Box::new(PassByDefault),
        ];
        Self { rules }
    }

    pub fn response() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(response::SlamTry),
            Box::new(response::JacobyTransfer),
            Box::new(response::Stayman),
            Box::new(response::NoTrumpPass),
            Box::new(response::NegativeDiamond),
            Box::new(response::PositiveClubResponse),
            Box::new(response::SingleRaise),
            Box::new(PassByDefault),
        ];
        Self { rules }
    }

    pub fn rebid() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(rebid::BlackwoodResponse),
            Box::new(rebid::GerberResponse),
            Box::new(rebid::TransferCompletion),
            Box::new(rebid::StaymanAnswer),
            Box::new(rebid::StaymanFollowUp),
            Box::new(rebid::PuppetAnswer),
            Box::new(rebid::PuppetFollowUp),
            Box::new(rebid::ResponderSecondTurn),
            Box::new(rebid::StrongClubRebid),
            Box::new(rebid::ClubMajorContinuation),
            Box::new(rebid::ClubNoTrumpContinuation),
            Box::new(PassByDefault),
        ];
        Self { rules }
    }

    /// Competitive bidding isn't modelled; the seat passes.
    pub fn competitive() -> Self {
        Self {
            rules: vec![Box::new(PassByDefault)],
        }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn description(&self, name: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.description())
    }
}
