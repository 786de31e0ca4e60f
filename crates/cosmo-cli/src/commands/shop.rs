//! Interactive shopping shell.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use cosmo_application::StorefrontSession;
use cosmo_core::catalog::{ALL_CATEGORIES, ProductId};
use cosmo_core::CosmoError;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::AppContext;
use crate::render;

const COMMANDS: &[&str] = &[
    "list", "category", "categories", "add", "remove", "cart", "recs", "dismiss", "checkout",
    "session", "help", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShopCommand {
    List(String),
    Category(String),
    Categories,
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Recommendations,
    Dismiss,
    Checkout,
    Session,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<ShopCommand, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let product_id = |what: &str| -> Result<ProductId, String> {
        rest.parse()
            .map_err(|_| format!("usage: {} <product id>", what))
    };

    match verb.to_lowercase().as_str() {
        "list" | "ls" | "search" => Ok(ShopCommand::List(rest.to_string())),
        "category" | "cat" => Ok(ShopCommand::Category(if rest.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            rest.to_string()
        })),
        "categories" => Ok(ShopCommand::Categories),
        "add" => product_id("add").map(ShopCommand::Add),
        "remove" | "rm" => product_id("remove").map(ShopCommand::Remove),
        "cart" => Ok(ShopCommand::Cart),
        "recs" | "recommendations" => Ok(ShopCommand::Recommendations),
        "dismiss" | "ok" => Ok(ShopCommand::Dismiss),
        "checkout" => Ok(ShopCommand::Checkout),
        "session" => Ok(ShopCommand::Session),
        "help" | "?" => Ok(ShopCommand::Help),
        "quit" | "exit" => Ok(ShopCommand::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

/// rustyline helper: completes and hints command verbs.
struct ShopHelper;

impl Helper for ShopHelper {}

impl Completer for ShopHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ShopHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match parse_command(line) {
            Ok(_) => Owned(line.bright_cyan().to_string()),
            Err(_) => Borrowed(line),
        }
    }
}

impl Hinter for ShopHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ShopHelper {}

struct Shop {
    storefront: StorefrontSession,
    category: String,
}

impl Shop {
    /// Executes one command; `Ok(false)` ends the session.
    async fn execute(&mut self, command: ShopCommand) -> Result<bool, CosmoError> {
        match command {
            ShopCommand::List(term) => {
                let products = self.storefront.browse(&term, &self.category);
                println!("{}", render::product_list(&products));
            }
            ShopCommand::Category(category) => {
                if !self.storefront.categories().contains(&category) {
                    return Err(CosmoError::not_found("Category", category));
                }
                self.category = category;
                let products = self.storefront.browse("", &self.category);
                println!("{}", render::product_list(&products));
            }
            ShopCommand::Categories => {
                for category in self.storefront.categories() {
                    let marker = if category == self.category { "*" } else { " " };
                    println!("{} {}", marker, category);
                }
            }
            ShopCommand::Add(id) => {
                let outcome = self.storefront.add_to_cart(id).await?;
                println!("{}", render::outcome(&outcome));
            }
            ShopCommand::Remove(id) => {
                let removed = self.storefront.remove_from_cart(id).await;
                if removed == 0 {
                    println!("{}", format!("Product {} is not in the cart.", id).yellow());
                } else {
                    println!("{}", format!("Removed {} item(s).", removed).bright_green());
                }
            }
            ShopCommand::Cart => {
                println!(
                    "{}",
                    render::cart(
                        &self.storefront.cart().await,
                        self.storefront.cart_total().await
                    )
                );
            }
            ShopCommand::Recommendations => {
                println!(
                    "{}",
                    render::recommendations(&self.storefront.recommendations().await)
                );
            }
            ShopCommand::Dismiss => self.storefront.dismiss_confirmation().await,
            ShopCommand::Checkout => self.storefront.checkout().await?,
            ShopCommand::Session => {
                let token = self.storefront.session_token().await;
                println!("{} ({:?})", token.as_str().bold(), token.origin());
            }
            ShopCommand::Help => print_help(),
            ShopCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn print_help() {
    let rows = [
        ("list [term]", "search the current category"),
        ("category <name>", "switch category (\"All\" for everything)"),
        ("categories", "list categories"),
        ("add <id>", "add a product to the cart"),
        ("remove <id>", "remove every entry of a product"),
        ("cart", "show the cart and its total"),
        ("recs", "show the latest recommendations"),
        ("dismiss", "clear the last confirmation"),
        ("checkout", "check out"),
        ("session", "show the session token"),
        ("quit", "leave the shop"),
    ];
    for (usage, meaning) in rows {
        println!("  {:<18} {}", usage.bright_cyan(), meaning.bright_black());
    }
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut shop = Shop {
        storefront: ctx.storefront()?,
        category: ALL_CATEGORIES.to_string(),
    };

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ShopHelper));

    println!("{}", "=== CosmoCart ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".bright_black());
    println!();

    loop {
        let prompt = format!("[{}] > ", shop.category);
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                match shop.execute(command).await {
                    Ok(true) => {}
                    Ok(false) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
