//! One storefront session: catalog, cart, account, delivery form and theme.
//!
//! Both the interactive shop and scripted runs drive a [`ShopSession`] by
//! applying [`Action`]s and rendering the returned [`Outcome`]s.

use std::str::FromStr;

use agree_auth::{
    AuthError, AuthSession, LoginForm, PasswordRules, RegistrationForm, UserAccount,
};
use agree_commerce::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::CliConfig;
use crate::theme::Theme;

/// Errors raised while applying an action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No direct transition between the two screens.
    #[error("cannot go from {from} to {to}")]
    Navigation { from: &'static str, to: &'static str },

    /// The action is not offered on the current screen.
    #[error("{action} is not available on the {screen} screen")]
    Unavailable {
        action: &'static str,
        screen: &'static str,
    },
}

impl SessionError {
    /// Check if this is a form validation failure.
    pub fn is_validation_error(&self) -> bool {
        match self {
            SessionError::Commerce(e) => e.is_validation_error(),
            SessionError::Auth(e) => e.is_validation_error(),
            SessionError::Navigation { .. } | SessionError::Unavailable { .. } => false,
        }
    }
}

/// A user action on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add one unit of a product to the cart. Returns to home first.
    Add(ProductId),
    /// Show the cart.
    Cart,
    /// Fill in one delivery field.
    Deliver { field: DeliveryField, value: String },
    /// Submit the "Create Account" form.
    Register(RegistrationForm),
    /// Submit the "Login" form.
    Login(LoginForm),
    Logout,
    /// Show who is signed in.
    WhoAmI,
    /// Place the order.
    Order,
    /// Switch theme; `None` toggles.
    Theme(Option<Theme>),
    /// Go to a screen.
    Go(Screen),
}

impl FromStr for Action {
    type Err = String;

    /// Parse one script line.
    ///
    /// Trailing arguments left off a form command are treated as empty
    /// fields, so the form's own validation reports them.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = words.collect();
        let arg = |i: usize| args.get(i).copied().unwrap_or_default().to_string();
        let rest = |from: usize| args.get(from..).map(|r| r.join(" ")).unwrap_or_default();

        let action = match verb.to_lowercase().as_str() {
            "add" => {
                let id = arg(0);
                if id.is_empty() {
                    return Err("usage: add <product-id>".to_string());
                }
                Action::Add(ProductId::new(id))
            }
            "cart" => Action::Cart,
            "deliver" => {
                let field = arg(0);
                if field.is_empty() {
                    return Err("usage: deliver <field> <value>".to_string());
                }
                Action::Deliver {
                    field: field.parse()?,
                    value: rest(1),
                }
            }
            "register" => Action::Register(RegistrationForm::new(arg(0), arg(1), arg(2), rest(3))),
            "login" => Action::Login(LoginForm::new(arg(0), arg(1))),
            "logout" => Action::Logout,
            "whoami" => Action::WhoAmI,
            "order" => Action::Order,
            "theme" => {
                let theme = arg(0);
                if theme.is_empty() {
                    Action::Theme(None)
                } else {
                    Action::Theme(Some(theme.parse()?))
                }
            }
            "home" => Action::Go(Screen::Home),
            "checkout" => Action::Go(Screen::Checkout),
            other => return Err(format!("unknown command: {}", other)),
        };

        Ok(action)
    }
}

/// The public fields of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub nickname: String,
    pub email: String,
}

impl From<&UserAccount> for AccountInfo {
    fn from(account: &UserAccount) -> Self {
        let view = account.view();
        Self {
            nickname: view.nickname.to_string(),
            email: view.email.to_string(),
        }
    }
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    Added {
        product_id: ProductId,
        name: String,
        quantity: u32,
        summary: CartSummary,
    },
    Cart {
        lines: Vec<OrderLineItem>,
        summary: CartSummary,
    },
    DeliveryUpdated {
        field: DeliveryField,
        complete: bool,
    },
    Registered {
        account: AccountInfo,
    },
    LoggedIn {
        account: AccountInfo,
    },
    LoggedOut,
    WhoAmI {
        account: Option<AccountInfo>,
    },
    OrderPlaced {
        confirmation: OrderConfirmation,
    },
    ThemeChanged {
        theme: Theme,
    },
    Navigated {
        screen: Screen,
    },
}

/// All state for one run of the storefront.
///
/// Owned by the command that drives it; nothing outlives the process.
#[derive(Debug)]
pub struct ShopSession {
    catalog: Catalog,
    cart: Cart,
    auth: AuthSession,
    delivery: DeliveryForm,
    rules: PasswordRules,
    theme: Theme,
    screen: Screen,
}

impl ShopSession {
    /// Start a session on the splash screen with an empty cart.
    pub fn new(catalog: Catalog, config: &CliConfig) -> Self {
        Self {
            cart: Cart::new(catalog.currency()),
            catalog,
            auth: AuthSession::new().with_policy(config.auth.on_existing_account),
            delivery: DeliveryForm::default(),
            rules: config.password_rules(),
            theme: config.ui.theme,
            screen: Screen::Splash,
        }
    }

    /// Leave the splash screen for home.
    pub fn finish_splash(&mut self) -> Result<(), SessionError> {
        self.navigate(Screen::Home)
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, SessionError> {
        match action {
            Action::Add(id) => {
                self.enter_home("add")?;
                let product = self.catalog.require(&id)?.clone();
                let quantity = self.cart.add_product(&product);
                Ok(Outcome::Added {
                    product_id: id,
                    name: product.name.clone(),
                    quantity,
                    summary: self.cart.summary(),
                })
            }
            Action::Cart => Ok(Outcome::Cart {
                lines: self.cart.items().iter().map(OrderLineItem::from).collect(),
                summary: self.cart.summary(),
            }),
            Action::Deliver { field, value } => {
                self.enter_checkout()?;
                self.delivery.set(field, value);
                Ok(Outcome::DeliveryUpdated {
                    field,
                    complete: self.delivery.is_complete(),
                })
            }
            Action::Register(form) => {
                self.enter_checkout()?;
                let account = form.submit(&mut self.auth, &self.rules)?;
                Ok(Outcome::Registered {
                    account: account.into(),
                })
            }
            Action::Login(form) => {
                self.enter_checkout()?;
                let account = form.submit(&mut self.auth)?;
                Ok(Outcome::LoggedIn {
                    account: account.into(),
                })
            }
            Action::Logout => {
                self.auth.logout();
                Ok(Outcome::LoggedOut)
            }
            Action::WhoAmI => Ok(Outcome::WhoAmI {
                account: self.auth.current_account().map(AccountInfo::from),
            }),
            Action::Order => {
                self.enter_checkout()?;
                let confirmation = place_order(&self.cart, &self.delivery)?;
                self.navigate(confirmation.next_screen)?;
                Ok(Outcome::OrderPlaced { confirmation })
            }
            Action::Theme(theme) => {
                self.theme = theme.unwrap_or_else(|| self.theme.toggle());
                Ok(Outcome::ThemeChanged { theme: self.theme })
            }
            Action::Go(screen) => {
                self.navigate(screen)?;
                Ok(Outcome::Navigated { screen })
            }
        }
    }

    /// Move to another screen.
    ///
    /// Leaving checkout discards whatever was typed into the delivery form.
    pub fn navigate(&mut self, to: Screen) -> Result<(), SessionError> {
        if self.screen == to {
            return Ok(());
        }
        if !self.screen.can_navigate_to(to) {
            return Err(SessionError::Navigation {
                from: self.screen.as_str(),
                to: to.as_str(),
            });
        }
        if self.screen == Screen::Checkout {
            self.delivery.clear();
        }

        tracing::debug!(from = self.screen.as_str(), to = to.as_str(), "navigate");
        self.screen = to;
        Ok(())
    }

    /// Products are only added from home; checkout is left, splash is not.
    fn enter_home(&mut self, action: &'static str) -> Result<(), SessionError> {
        if self.screen == Screen::Splash {
            return Err(SessionError::Unavailable {
                action,
                screen: self.screen.as_str(),
            });
        }
        self.navigate(Screen::Home)
    }

    fn enter_checkout(&mut self) -> Result<(), SessionError> {
        self.navigate(Screen::Checkout)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    pub fn delivery(&self) -> &DeliveryForm {
        &self.delivery
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agree_auth::RegistrationPolicy;

    fn catalog() -> Catalog {
        Catalog::new(
            Currency::MAD,
            vec![],
            vec![
                Product::new("a", "Product A", Money::new(1000, Currency::MAD)),
                Product::new("b", "Product B", Money::new(1550, Currency::MAD)),
            ],
        )
        .unwrap()
    }

    fn session() -> ShopSession {
        let mut session = ShopSession::new(catalog(), &CliConfig::default());
        session.finish_splash().unwrap();
        session
    }

    fn parse(line: &str) -> Result<Action, String> {
        line.parse()
    }

    fn run(session: &mut ShopSession, line: &str) -> Result<Outcome, SessionError> {
        session.apply(parse(line).unwrap())
    }

    fn fill_delivery(session: &mut ShopSession) {
        run(session, "deliver first Amina").unwrap();
        run(session, "deliver last Benali").unwrap();
        run(session, "deliver phone 0612345678").unwrap();
        run(session, "deliver address 12 Rue des Oliviers").unwrap();
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse("add a"), Ok(Action::Add(ProductId::new("a"))));
        assert_eq!(parse("CART"), Ok(Action::Cart));
        assert_eq!(
            parse("deliver address 12 Rue des Oliviers"),
            Ok(Action::Deliver {
                field: DeliveryField::Address,
                value: "12 Rue des Oliviers".to_string(),
            })
        );
        assert_eq!(
            parse("register a@b.com secret1 secret1 Nick Name"),
            Ok(Action::Register(RegistrationForm::new(
                "a@b.com", "secret1", "secret1", "Nick Name"
            )))
        );
        assert_eq!(parse("theme"), Ok(Action::Theme(None)));
        assert_eq!(parse("theme dark"), Ok(Action::Theme(Some(Theme::Dark))));
        assert_eq!(parse("home"), Ok(Action::Go(Screen::Home)));
    }

    #[test]
    fn test_parse_missing_arguments_become_empty_fields() {
        assert_eq!(
            parse("register a@b.com"),
            Ok(Action::Register(RegistrationForm::new("a@b.com", "", "", "")))
        );
        assert_eq!(parse("login"), Ok(Action::Login(LoginForm::new("", ""))));
        assert_eq!(
            parse("deliver phone"),
            Ok(Action::Deliver {
                field: DeliveryField::Phone,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("add").is_err());
        assert!(parse("deliver").is_err());
        assert!(parse("deliver zip 20000").is_err());
        assert!(parse("theme sepia").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn test_new_session_starts_on_splash_with_empty_cart() {
        let session = ShopSession::new(catalog(), &CliConfig::default());
        assert_eq!(session.screen(), Screen::Splash);
        assert!(session.cart().is_empty());
        assert!(!session.auth().is_authenticated());
    }

    #[test]
    fn test_adding_twice_merges() {
        let mut session = session();
        run(&mut session, "add a").unwrap();
        let outcome = run(&mut session, "add a").unwrap();

        match outcome {
            Outcome::Added { quantity, summary, .. } => {
                assert_eq!(quantity, 2);
                assert_eq!(summary.unique_items, 1);
                assert_eq!(summary.badge().as_deref(), Some("1"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.cart().items().len(), 1);
    }

    #[test]
    fn test_cart_total() {
        let mut session = session();
        run(&mut session, "add a").unwrap();
        run(&mut session, "add a").unwrap();
        run(&mut session, "add b").unwrap();

        match run(&mut session, "cart").unwrap() {
            Outcome::Cart { lines, summary } => {
                assert_eq!(lines.len(), 2);
                assert_eq!(summary.total.display_amount(), "35.50");
                assert_eq!(summary.item_count, 3);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = session();
        let err = run(&mut session, "add nope").unwrap_err();
        assert_eq!(
            err,
            SessionError::Commerce(CommerceError::ProductNotFound("nope".to_string()))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_order_with_missing_field() {
        let mut session = session();
        run(&mut session, "add a").unwrap();
        run(&mut session, "deliver first Amina").unwrap();

        let err = run(&mut session, "order").unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(
            err,
            SessionError::Commerce(CommerceError::MissingField(vec![
                "last name",
                "phone number",
                "delivery address"
            ]))
        );
        assert_eq!(session.screen(), Screen::Checkout);
    }

    #[test]
    fn test_order_returns_home() {
        let mut session = session();
        run(&mut session, "add a").unwrap();
        run(&mut session, "add a").unwrap();
        run(&mut session, "add b").unwrap();
        fill_delivery(&mut session);

        match run(&mut session, "order").unwrap() {
            Outcome::OrderPlaced { confirmation } => {
                assert!(confirmation.message.contains("35.50"));
                assert!(confirmation.message.contains("Amina Benali"));
                assert_eq!(confirmation.next_screen, Screen::Home);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.screen(), Screen::Home);
        assert!(!session.delivery().is_complete());
        assert_eq!(session.cart().items().len(), 2);
    }

    #[test]
    fn test_order_with_empty_cart() {
        let mut session = session();
        fill_delivery(&mut session);
        assert_eq!(
            run(&mut session, "order").unwrap_err(),
            SessionError::Commerce(CommerceError::EmptyCart)
        );
    }

    #[test]
    fn test_leaving_checkout_clears_delivery() {
        let mut session = session();
        run(&mut session, "deliver first Amina").unwrap();
        assert_eq!(session.delivery().first_name, "Amina");

        run(&mut session, "home").unwrap();
        assert_eq!(session.delivery().first_name, "");
    }

    #[test]
    fn test_register_login_logout() {
        let mut session = session();
        match run(&mut session, "register a@b.com secret1 secret1 Nick").unwrap() {
            Outcome::Registered { account } => assert_eq!(account.nickname, "Nick"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.auth().is_authenticated());

        run(&mut session, "logout").unwrap();
        assert_eq!(
            run(&mut session, "whoami").unwrap(),
            Outcome::WhoAmI { account: None }
        );

        assert_eq!(
            run(&mut session, "login a@b.com wrong").unwrap_err(),
            SessionError::Auth(AuthError::InvalidCredentials)
        );
        assert_eq!(
            run(&mut session, "login a@b.com secret1").unwrap_err(),
            SessionError::Auth(AuthError::InvalidCredentials)
        );
        assert!(!session.auth().is_authenticated());

        run(&mut session, "register a@b.com secret1 secret1 Nick").unwrap();
        run(&mut session, "logout").unwrap();
        run(&mut session, "register c@d.com secret2 secret2 Other").unwrap();
        assert_eq!(session.auth().display_name(), Some("Other"));
    }

    #[test]
    fn test_registration_validation() {
        let mut session = session();
        assert_eq!(
            run(&mut session, "register a@b.com secret1 secret2 Nick").unwrap_err(),
            SessionError::Auth(AuthError::PasswordMismatch)
        );
        assert_eq!(
            run(&mut session, "register a@b.com abc abc Nick").unwrap_err(),
            SessionError::Auth(AuthError::WeakPassword { min_length: 6 })
        );
        assert!(matches!(
            run(&mut session, "register a@b.com").unwrap_err(),
            SessionError::Auth(AuthError::MissingField(_))
        ));
        assert!(!session.auth().has_account());
    }

    #[test]
    fn test_config_drives_auth_rules() {
        let mut config = CliConfig::default();
        config.auth.min_password_length = 3;
        config.auth.on_existing_account = RegistrationPolicy::Reject;

        let mut session = ShopSession::new(catalog(), &config);
        session.finish_splash().unwrap();
        assert!(run(&mut session, "register a@b.com abc abc Nick").is_ok());
        assert_eq!(
            run(&mut session, "register c@d.com abcd abcd Other").unwrap_err(),
            SessionError::Auth(AuthError::AccountExists("a@b.com".to_string()))
        );
    }

    #[test]
    fn test_theme_toggle() {
        let mut session = session();
        assert_eq!(session.theme(), Theme::Light);
        run(&mut session, "theme").unwrap();
        assert_eq!(session.theme(), Theme::Dark);
        run(&mut session, "theme dark").unwrap();
        assert_eq!(session.theme(), Theme::Dark);
        run(&mut session, "theme").unwrap();
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_add_returns_home_from_checkout() {
        let mut session = session();
        run(&mut session, "deliver first Amina").unwrap();
        assert_eq!(session.screen(), Screen::Checkout);

        run(&mut session, "add a").unwrap();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.delivery().first_name, "");
        assert_eq!(session.cart().quantity_of(&ProductId::new("a")), 1);
    }

    #[test]
    fn test_add_refused_on_splash() {
        let mut session = ShopSession::new(catalog(), &CliConfig::default());
        assert_eq!(
            run(&mut session, "add a").unwrap_err(),
            SessionError::Unavailable {
                action: "add",
                screen: "splash"
            }
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_checkout_unreachable_from_splash() {
        let mut session = ShopSession::new(catalog(), &CliConfig::default());
        assert_eq!(
            run(&mut session, "checkout").unwrap_err(),
            SessionError::Navigation {
                from: "splash",
                to: "checkout"
            }
        );
    }

    #[test]
    fn test_outcome_serializes_with_event_tag() {
        let json = serde_json::to_value(Outcome::ThemeChanged { theme: Theme::Dark }).unwrap();
        assert_eq!(json["event"], "theme_changed");
        assert_eq!(json["theme"], "dark");
    }
}
