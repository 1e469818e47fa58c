//! Interactive shopping session.

use std::time::Duration;

use agree_auth::{LoginForm, RegistrationForm};
use agree_commerce::prelude::{DeliveryField, Screen};
use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password, Select};

use super::{report, report_error};
use crate::context::Context;
use crate::output::cart_badge;
use crate::session::{Action, ShopSession};

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop is interactive; use `agree run` for JSON output.");
    }
    if !console::user_attended() {
        bail!("The shop needs a terminal; use `agree run` to play a script.");
    }

    let mut session = ShopSession::new(ctx.load_catalog()?, &ctx.config);
    ctx.output.set_theme(session.theme());
    splash(ctx);
    session.finish_splash()?;

    loop {
        let keep_going = match session.screen() {
            Screen::Checkout => checkout_screen(ctx, &mut session)?,
            _ => home_screen(ctx, &mut session)?,
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

fn splash(ctx: &Context) {
    let store = &ctx.config.store;
    let spinner = ctx.output.spinner(&format!(
        "{}  {}",
        ctx.output.theme().accent().apply_to(&store.name),
        store.tagline
    ));
    std::thread::sleep(Duration::from_millis(ctx.config.ui.splash_millis));
    spinner.finish_and_clear();
}

/// Apply an action and print the result. Refusals are shown, not returned.
fn apply(ctx: &Context, session: &mut ShopSession, action: Action) {
    match session.apply(action) {
        Ok(outcome) => report(ctx, &outcome),
        Err(e) => report_error(ctx, &e),
    }
}

/// Returns `false` when the user quits.
fn home_screen(ctx: &Context, session: &mut ShopSession) -> Result<bool> {
    let theme = ctx.output.theme();
    ctx.output.header(&ctx.config.store.name);

    let popular: Vec<String> = session
        .catalog()
        .popular()
        .map(|p| format!("{} {}", p.image, p.name))
        .collect();
    if !popular.is_empty() {
        println!("  {} {}", theme.muted().apply_to("Popular:"), popular.join(", "));
    }

    let items = [
        "Add a product".to_string(),
        format!("View cart {}", cart_badge(session.cart().summary().badge())),
        format!("Switch to {} theme", session.theme().toggle()),
        "Quit".to_string(),
    ];
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => pick_product(ctx, session)?,
        1 => {
            apply(ctx, session, Action::Go(Screen::Checkout));
        }
        2 => apply(ctx, session, Action::Theme(None)),
        _ => {
            if session.cart().is_empty()
                || Confirm::new()
                    .with_prompt("Your cart is not empty. Quit anyway?")
                    .default(false)
                    .interact()?
            {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn pick_product(ctx: &Context, session: &mut ShopSession) -> Result<()> {
    let products = session.catalog().products().to_vec();
    let mut items: Vec<String> = products
        .iter()
        .map(|p| format!("{} {}  {}", p.image, p.name, p.price.display()))
        .collect();
    items.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Choose a product")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(product) = products.get(selection) {
        apply(ctx, session, Action::Add(product.id.clone()));
    }
    Ok(())
}

/// Returns `false` when the user quits.
fn checkout_screen(ctx: &Context, session: &mut ShopSession) -> Result<bool> {
    apply(ctx, session, Action::Cart);
    account_panel(ctx, session);

    let items = checkout_menu(session.cart().is_empty(), session.auth().is_authenticated());
    let selection = Select::new()
        .with_prompt("Checkout")
        .items(&items)
        .default(0)
        .interact()?;

    match items[selection] {
        "Fill in delivery details" => fill_delivery(ctx, session)?,
        "Place order" => apply(ctx, session, Action::Order),
        "Create account" => {
            let email = prompt("Email", "")?;
            let password = Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()?;
            let confirmation = Password::new()
                .with_prompt("Confirm password")
                .allow_empty_password(true)
                .interact()?;
            let nickname = prompt("Nickname", "")?;
            let form = RegistrationForm::new(email, password, confirmation, nickname);
            apply(ctx, session, Action::Register(form));
        }
        "Log in" => {
            let email = prompt("Email", "")?;
            let password = Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()?;
            apply(ctx, session, Action::Login(LoginForm::new(email, password)));
        }
        "Log out" => apply(ctx, session, Action::Logout),
        _ => apply(ctx, session, Action::Go(Screen::Home)),
    }

    Ok(true)
}

/// Checkout entries. The delivery form and order button only exist while
/// the cart has something in it.
fn checkout_menu(cart_empty: bool, signed_in: bool) -> Vec<&'static str> {
    let mut items = Vec::new();
    if !cart_empty {
        items.extend(["Fill in delivery details", "Place order"]);
    }
    if signed_in {
        items.push("Log out");
    } else {
        items.extend(["Create account", "Log in"]);
    }
    items.push("Back to home");
    items
}

fn account_panel(ctx: &Context, session: &ShopSession) {
    match session.auth().current_account() {
        Some(account) => {
            let view = account.view();
            ctx.output.kv("logged in as", &format!("{} <{}>", view.nickname, view.email));
        }
        None => ctx.output.kv("account", "guest"),
    }
}

fn fill_delivery(ctx: &Context, session: &mut ShopSession) -> Result<()> {
    for field in DeliveryField::ALL {
        let current = session.delivery().get(field).to_string();
        let value = prompt(field.label(), &current)?;
        apply(ctx, session, Action::Deliver { field, value });
    }
    Ok(())
}

fn prompt(label: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_menu_hides_order_for_empty_cart() {
        let items = checkout_menu(true, false);
        assert!(!items.contains(&"Fill in delivery details"));
        assert!(!items.contains(&"Place order"));
        assert_eq!(items, vec!["Create account", "Log in", "Back to home"]);
    }

    #[test]
    fn test_checkout_menu_with_items() {
        assert_eq!(
            checkout_menu(false, true),
            vec!["Fill in delivery details", "Place order", "Log out", "Back to home"]
        );
    }
}
