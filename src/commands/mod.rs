//! REPL Commands Module
//!
//! The static command table and the session state the handlers mutate.

mod handlers;

use std::collections::HashMap;

use crate::api::PokeClient;
use crate::error::{DexError, Result};
use crate::models::Pokemon;

// == Command Spec ==
/// One entry in the command table: the word the user types and the line
/// `help` prints for it.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// All commands, in the order `help` lists them.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        description: "Tabs through pages of locations",
    },
    CommandSpec {
        name: "mapb",
        description: "Tabs to a previous location page",
    },
    CommandSpec {
        name: "explore",
        description: "Explores an area for Pokemon",
    },
    CommandSpec {
        name: "catch",
        description: "Catch a Pokemon",
    },
    CommandSpec {
        name: "inspect",
        description: "View a Pokemon's details if it has been registered",
    },
    CommandSpec {
        name: "pokedex",
        description: "View a list of Pokemon registered in your Pokedex",
    },
];

// == Flow ==
/// What the REPL should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next command
    Continue,
    /// Leave the REPL
    Exit,
}

// == Session ==
/// Mutable interpreter state carried across commands.
#[derive(Debug)]
pub struct Session {
    /// Current `map` page; 0 means no page viewed yet
    pub loc_index: u32,
    /// Cached API client
    pub client: PokeClient,
    /// Pokemon caught so far, by name. Unbounded, like the cache.
    pub pokedex: HashMap<String, Pokemon>,
}

impl Session {
    /// Creates a fresh session around an API client.
    pub fn new(client: PokeClient) -> Self {
        Self {
            loc_index: 0,
            client,
            pokedex: HashMap::new(),
        }
    }
}

// == Dispatch ==
/// Runs one command by name.
///
/// A failed command leaves the session, including the cache, untouched
/// beyond whatever the handler completed before failing; the REPL prints the
/// error and keeps going.
pub async fn dispatch(session: &mut Session, name: &str, args: &[&str]) -> Result<Flow> {
    match name {
        "help" => handlers::help(),
        "exit" => return handlers::exit(),
        "map" => handlers::map_next(session).await,
        "mapb" => handlers::map_back(session).await,
        "explore" => handlers::explore(session, args).await,
        "catch" => handlers::catch(session, args).await,
        "inspect" => handlers::inspect(session, args),
        "pokedex" => handlers::pokedex(session),
        _ => Err(DexError::UnknownCommand(name.to_string())),
    }
    .map(|()| Flow::Continue)
}
