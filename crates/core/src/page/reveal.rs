use super::ObserverOptions;

pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    bottom_margin_px: 50,
};

/// Card-like blocks that fade in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Stat,
    Feature,
    Action,
    Info,
    FunFact,
}

impl RevealKind {
    pub const ALL: [Self; 5] = [Self::Stat, Self::Feature, Self::Action, Self::Info, Self::FunFact];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Stat => "stat-card",
            Self::Feature => "feature-card",
            Self::Action => "action-card",
            Self::Info => "info-card",
            Self::FunFact => "fun-fact-card",
        }
    }
}

/// One-directional reveal: once shown, scrolling away never hides it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn observe(self, intersecting: bool) -> Self {
        if intersecting { Self::Revealed } else { self }
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_card_classes() {
        let classes: Vec<&str> = RevealKind::ALL.iter().map(|kind| kind.class()).collect();
        assert_eq!(
            classes,
            ["stat-card", "feature-card", "action-card", "info-card", "fun-fact-card"]
        );
    }

    #[test]
    fn reveal_never_rehides() {
        let state = RevealState::default()
            .observe(false)
            .observe(true)
            .observe(false);
        assert!(state.is_revealed());
    }
}
