//! Filtering and ranking of generated proposals

use crate::wardrobe::{OccasionTag, OutfitProposal, SeasonTag, StyleTag};

/// Exact-match filter over proposal tags; unset fields match everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProposalFilter {
    pub occasion: Option<OccasionTag>,
    pub season: Option<SeasonTag>,
    pub style: Option<StyleTag>,
}

impl ProposalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occasion(mut self, occasion: OccasionTag) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn season(mut self, season: SeasonTag) -> Self {
        self.season = Some(season);
        self
    }

    pub fn style(mut self, style: StyleTag) -> Self {
        self.style = Some(style);
        self
    }

    pub fn matches(&self, proposal: &OutfitProposal) -> bool {
        self.occasion.map_or(true, |o| proposal.occasion() == o)
            && self.season.map_or(true, |s| proposal.season() == s)
            && self.style.map_or(true, |s| proposal.style() == s)
    }

    /// Matching proposals, highest score first; equal scores keep input order
    pub fn apply<'a>(&self, proposals: &'a [OutfitProposal]) -> Vec<&'a OutfitProposal> {
        let mut matching: Vec<&OutfitProposal> =
            proposals.iter().filter(|p| self.matches(p)).collect();
        matching.sort_by(|a, b| b.score().cmp(&a.score()));
        matching
    }
}

/// The `n` best-scoring proposals
pub fn top_ranked(proposals: &[OutfitProposal], n: usize) -> Vec<&OutfitProposal> {
    let mut ranked = ProposalFilter::new().apply(proposals);
    ranked.truncate(n);
    ranked
}
