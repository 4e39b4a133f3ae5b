/// Scroll offset in pixels past which the navbar switches to its compact look.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarState {
    #[default]
    Top,
    Scrolled,
}

impl NavbarState {
    #[must_use]
    pub fn from_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SCROLL_THRESHOLD {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Top => "navbar",
            Self::Scrolled => "navbar scrolled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive_and_reversible() {
        assert_eq!(NavbarState::from_scroll(0.0), NavbarState::Top);
        assert_eq!(NavbarState::from_scroll(50.0), NavbarState::Top);
        assert_eq!(NavbarState::from_scroll(50.5), NavbarState::Scrolled);
        assert_eq!(NavbarState::from_scroll(10.0).class(), "navbar");
    }
}
