//! Scripted sessions.
//!
//! A script is one command per line, applied in order to a single session.
//! Blank lines and `#` comments are skipped. A line that does not parse
//! aborts the run; a command the storefront refuses is reported and the
//! script carries on unless `--strict` is given.

use std::io::Read;

use anyhow::{bail, Context as _, Result};

use super::{report, report_error, RunArgs};
use crate::context::Context;
use crate::session::{Action, ShopSession};

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let script = read_script(&args.script)?;
    let steps = parse_script(&script)?;

    let mut session = ShopSession::new(ctx.load_catalog()?, &ctx.config);
    session.finish_splash()?;
    ctx.output.set_theme(session.theme());

    let mut rejected = 0;
    for (line_no, action) in steps.iter().cloned() {
        ctx.output.debug(&format!("line {}: {:?}", line_no, action));
        match session.apply(action) {
            Ok(outcome) => report(ctx, &outcome),
            Err(e) => {
                report_error(ctx, &e);
                rejected += 1;
                if args.strict {
                    bail!("Line {} was rejected", line_no);
                }
            }
        }
    }

    ctx.output.info(&format!(
        "{} command(s) run, {} rejected",
        steps.len(),
        rejected
    ));
    Ok(())
}

fn read_script(path: &str) -> Result<String> {
    if path == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read script from stdin")?;
        return Ok(script);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read script: {}", path))
}

/// Parse every line up front so a typo never leaves a half-run session.
fn parse_script(script: &str) -> Result<Vec<(usize, Action)>> {
    let mut steps = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: Action = line
            .parse()
            .map_err(|e: String| anyhow::anyhow!("Line {}: {}", index + 1, e))?;
        steps.push((index + 1, action));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::session::Outcome;
    use agree_commerce::prelude::{ProductId, Screen};

    #[test]
    fn test_parse_script_skips_comments() {
        let steps = parse_script(
            "# start\n\nadd harira\n   # indented comment\ncart\n",
        )
        .unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], (3, Action::Add(ProductId::new("harira"))));
        assert_eq!(steps[1], (5, Action::Cart));
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("add harira\nfly away\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: unknown command: fly");
    }

    #[test]
    fn test_full_script_against_builtin_menu() {
        let script = "\
            add harira\n\
            add harira\n\
            add mint-tea\n\
            order\n\
            register amina@example.com secret1 secret1 Amina\n\
            deliver first Amina\n\
            deliver last Benali\n\
            deliver phone 0612345678\n\
            deliver address 12 Rue des Oliviers, Rabat\n\
            order\n";

        let catalog = crate::menu::load_catalog(None).unwrap();
        let mut session = ShopSession::new(catalog, &CliConfig::default());
        session.finish_splash().unwrap();

        let results: Vec<_> = parse_script(script)
            .unwrap()
            .into_iter()
            .map(|(_, action)| session.apply(action))
            .collect();

        // The first order has no delivery details yet.
        assert!(results[3].as_ref().unwrap_err().is_validation_error());

        match results.last().unwrap() {
            Ok(Outcome::OrderPlaced { confirmation }) => {
                assert_eq!(
                    confirmation.message,
                    "Thank you Amina Benali! Your order of DH75.00 will be delivered soon."
                );
                assert_eq!(confirmation.order.item_count(), 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.auth().display_name(), Some("Amina"));
    }
}
