//! Command Handlers
//!
//! One function per REPL command. Handlers print their output directly and
//! report failures through `DexError`; the REPL decides what to do next.

use rand::Rng;

use crate::error::{DexError, Result};

use super::{Flow, Session, COMMANDS};

/// Number of location areas shown per `map` page.
const PAGE_SIZE: u32 = 20;

/// Exclusive upper bound of the catch roll. A Pokemon is caught when a
/// uniform roll in `0..CATCH_ROLL_MAX` exceeds its base experience, so
/// anything with base experience of 619 or more can never be caught.
const CATCH_ROLL_MAX: u32 = 620;

// == Help ==
/// Prints every command with its description.
pub(super) fn help() -> Result<()> {
    for cmd in COMMANDS {
        println!("{} : {}", cmd.name, cmd.description);
    }
    Ok(())
}

// == Exit ==
pub(super) fn exit() -> Result<Flow> {
    println!("Exiting Pokedex...");
    Ok(Flow::Exit)
}

// == Map ==
/// Advances to the next page of location areas and prints their names.
pub(super) async fn map_next(session: &mut Session) -> Result<()> {
    session.loc_index += 1;
    print_location_page(session).await
}

/// Steps back one page of location areas.
pub(super) async fn map_back(session: &mut Session) -> Result<()> {
    if session.loc_index < 2 {
        return Err(DexError::NoPreviousPage);
    }
    session.loc_index -= 1;
    print_location_page(session).await
}

/// Prints the 20 area names on the session's current page.
///
/// Location areas are fetched one by one by numeric id; each fetch lands in
/// the response cache, so paging back over a recent page is network-free.
async fn print_location_page(session: &mut Session) -> Result<()> {
    let page = session.loc_index;
    for i in 0..PAGE_SIZE {
        let id = (page - 1) * PAGE_SIZE + i + 1;
        let area = session.client.location_area(&id.to_string()).await?;
        println!("{}", area.name);
    }
    Ok(())
}

// == Explore ==
/// Lists the Pokemon encounterable in one location area.
pub(super) async fn explore(session: &mut Session, args: &[&str]) -> Result<()> {
    let area_name = one_arg(args, "location area")?;
    let area = session.client.location_area(area_name).await?;

    for encounter in &area.pokemon_encounters {
        println!("{}", encounter.pokemon.name);
    }
    Ok(())
}

// == Catch ==
/// Throws a Pokeball: fetches the Pokemon and rolls against its base
/// experience. A catch registers it in the session's pokedex.
pub(super) async fn catch(session: &mut Session, args: &[&str]) -> Result<()> {
    let name = one_arg(args, "Pokemon name")?;
    let pokemon = session.client.pokemon(name).await?;

    println!("Throwing a Pokeball at {}...", pokemon.name);

    let roll = rand::thread_rng().gen_range(0..CATCH_ROLL_MAX);
    if roll > pokemon.base_experience {
        println!("{} was caught!", pokemon.name);
        session.pokedex.insert(pokemon.name.clone(), pokemon);
    } else {
        println!("{} fled!", pokemon.name);
    }
    Ok(())
}

// == Inspect ==
/// Prints the details of a previously caught Pokemon.
pub(super) fn inspect(session: &Session, args: &[&str]) -> Result<()> {
    let name = one_arg(args, "Pokemon name")?;
    let pokemon = session
        .pokedex
        .get(name)
        .ok_or_else(|| DexError::NotRegistered(name.to_string()))?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  -{}", slot.kind.name);
    }
    Ok(())
}

// == Pokedex ==
/// Lists every caught Pokemon by name.
pub(super) fn pokedex(session: &Session) -> Result<()> {
    if session.pokedex.is_empty() {
        return Err(DexError::EmptyPokedex);
    }

    println!("Your Pokedex:");
    for name in session.pokedex.keys() {
        println!("  -{}", name);
    }
    Ok(())
}

// == Helpers ==
/// Extracts the single expected argument, rejecting zero or several.
fn one_arg<'a>(args: &[&'a str], what: &str) -> Result<&'a str> {
    match args {
        [single] => Ok(*single),
        [] => Err(DexError::InvalidArgs(format!("please provide a {what}"))),
        _ => Err(DexError::InvalidArgs(format!(
            "only one {what} may be accepted"
        ))),
    }
}
