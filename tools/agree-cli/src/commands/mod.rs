//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;
pub mod shop;

use clap::{Args, Subcommand};

use crate::context::Context;
use crate::output::cart_badge;
use crate::session::{Outcome, SessionError};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show popular products.
    #[arg(short, long)]
    pub popular: bool,

    /// Only show one category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Script file, or `-` for stdin.
    pub script: String,

    /// Stop at the first rejected command.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Print what an action did.
pub fn report(ctx: &Context, outcome: &Outcome) {
    let output = &ctx.output;
    if output.is_json() {
        output.json(outcome);
        return;
    }

    match outcome {
        Outcome::Added {
            name,
            quantity,
            summary,
            ..
        } => {
            output.success(&format!(
                "Added {} (x{})  {}  {}",
                name,
                quantity,
                cart_badge(summary.badge()),
                summary.total.display()
            ));
        }
        Outcome::Cart { lines, summary } => {
            output.header("Your cart");
            if lines.is_empty() {
                output.info("Your cart is empty");
                return;
            }
            for line in lines {
                output.line(
                    &line.image,
                    &format!("{} x{}", line.name, line.quantity),
                    &line.subtotal.display(),
                    None,
                );
            }
            output.line(" ", "Total", &summary.total.display(), None);
        }
        Outcome::DeliveryUpdated { field, complete } => {
            output.debug(&format!("Set {}", field.label()));
            if *complete {
                output.info("Delivery details complete");
            }
        }
        Outcome::Registered { account } => {
            output.success(&format!("Welcome, {}! Your account is ready", account.nickname));
        }
        Outcome::LoggedIn { account } => {
            output.success(&format!("Logged in as {}", account.nickname));
        }
        Outcome::LoggedOut => output.success("Logged out"),
        Outcome::WhoAmI { account } => match account {
            Some(account) => output.info(&format!(
                "Logged in as {} <{}>",
                account.nickname, account.email
            )),
            None => output.info("Not logged in"),
        },
        Outcome::OrderPlaced { confirmation } => {
            output.success(&confirmation.message);
            output.kv("order", confirmation.order.id.as_str());
            output.kv(
                "placed",
                &crate::output::format_timestamp(confirmation.order.placed_at),
            );
        }
        Outcome::ThemeChanged { theme } => {
            output.set_theme(*theme);
            output.info(&format!("Theme: {}", theme));
        }
        Outcome::Navigated { screen } => output.debug(&format!("Now on {}", screen.display_name())),
    }
}

/// Print why an action was refused.
pub fn report_error(ctx: &Context, err: &SessionError) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "event": "rejected",
            "validation": err.is_validation_error(),
            "error": err.to_string(),
        }));
    } else if err.is_validation_error() {
        ctx.output.warn(&capitalize(&err.to_string()));
    } else {
        ctx.output.error(&capitalize(&err.to_string()));
    }
}

fn capitalize(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
