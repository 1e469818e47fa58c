//! Screen navigation state.

use serde::{Deserialize, Serialize};

/// Screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Branding shown once at startup.
    #[default]
    Splash,
    /// Catalog listing and cart button.
    Home,
    /// Order summary, delivery form and account panel.
    Checkout,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Home => "home",
            Screen::Checkout => "checkout",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Splash => "Splash",
            Screen::Home => "Home",
            Screen::Checkout => "Checkout",
        }
    }

    /// Check if a direct transition to `to` exists.
    ///
    /// The splash screen is left exactly once and never revisited.
    pub fn can_navigate_to(&self, to: Screen) -> bool {
        matches!(
            (self, to),
            (Screen::Splash, Screen::Home)
                | (Screen::Home, Screen::Checkout)
                | (Screen::Checkout, Screen::Home)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_edges() {
        assert!(Screen::Splash.can_navigate_to(Screen::Home));
        assert!(Screen::Home.can_navigate_to(Screen::Checkout));
        assert!(Screen::Checkout.can_navigate_to(Screen::Home));

        assert!(!Screen::Splash.can_navigate_to(Screen::Checkout));
        assert!(!Screen::Home.can_navigate_to(Screen::Splash));
        assert!(!Screen::Checkout.can_navigate_to(Screen::Splash));
    }

    #[test]
    fn test_default_is_splash() {
        assert_eq!(Screen::default(), Screen::Splash);
    }
}
