//! Command line Pokedex backed by PokeAPI.
//!
//! Usage:
//!   pokedex matchup ground flying
//!   pokedex list --generation 3 --type water
//!   pokedex show gliscor --version platinum --method level-up
//!   pokedex evolution eevee --json
//!   pokedex locations red-blue --location rock-tunnel

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pokedex_catalog::{LearnMethod, version_label};
use pokedex_client::{
    CatalogFilter, ClientConfig, DetailOptions, DetailView, EvolutionTree, Game, Generation,
    PokedexClient, Type,
};
use pokedex_core::{EffectivenessResult, EvolutionNode, effectiveness_for_names};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokedex", version, about = "Browse Pokemon, type matchups and evolutions")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// PokeAPI base url (overrides POKEDEX_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// More logging; repeat for trace output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weaknesses, resistances and immunities of one or two types
    Matchup(MatchupArgs),

    /// Load a generation and print the filtered grid
    List(ListArgs),

    /// Full detail view of one pokemon
    Show(ShowArgs),

    /// Evolution tree of a pokemon's family
    Evolution(EvolutionArgs),

    /// Locations of a game's region and the pokemon found there
    Locations(LocationsArgs),
}

#[derive(Args, Debug)]
struct MatchupArgs {
    /// Defending types, e.g. `ground flying`
    #[arg(required = true, num_args = 1..=2)]
    types: Vec<String>,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Generation number, 1 to 9
    #[arg(short, long, default_value_t = 1, conflicts_with = "all")]
    generation: u8,

    /// Load the whole national dex
    #[arg(long)]
    all: bool,

    /// Confirm loading the whole national dex
    #[arg(long, requires = "all")]
    yes: bool,

    /// Case-insensitive name search
    #[arg(short, long)]
    search: Option<String>,

    /// Required type
    #[arg(long = "type")]
    primary: Option<Type>,

    /// Second required type
    #[arg(long)]
    second_type: Option<Type>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// National dex id or name
    pokemon: String,

    /// Game version of the pokedex entry
    #[arg(long)]
    version: Option<String>,

    /// Only list moves learned this way: all, level-up, machine, egg or tutor
    #[arg(short, long)]
    method: Option<String>,

    #[arg(long)]
    shiny: bool,
}

#[derive(Args, Debug)]
struct EvolutionArgs {
    /// National dex id or name
    pokemon: String,
}

#[derive(Args, Debug)]
struct LocationsArgs {
    /// Game id, e.g. red-blue or sword-shield
    game: String,

    /// Only show locations whose name contains this, with their encounters
    #[arg(short, long)]
    location: Option<String>,
}

#[derive(Serialize)]
struct GridEntry<'a> {
    id: u32,
    name: &'a str,
    types: Vec<&'a str>,
    sprite: Option<&'a str>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }

    match &cli.command {
        Commands::Matchup(args) => matchup(&cli, args),
        Commands::List(args) => list(&cli, connect(config)?, args).await,
        Commands::Show(args) => show(&cli, connect(config)?, args).await,
        Commands::Evolution(args) => evolution(&cli, connect(config)?, args).await,
        Commands::Locations(args) => locations(&cli, connect(config)?, args).await,
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn connect(config: ClientConfig) -> Result<PokedexClient> {
    PokedexClient::new(config).context("Failed to set up PokeAPI client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn matchup(cli: &Cli, args: &MatchupArgs) -> Result<()> {
    let result = effectiveness_for_names(&args.types).context("Invalid defending types")?;

    if cli.json {
        return print_json(&result);
    }

    print_effectiveness(&result);
    Ok(())
}

async fn list(cli: &Cli, client: PokedexClient, args: &ListArgs) -> Result<()> {
    let generation = if args.all {
        Generation::all()
    } else {
        Generation::by_number(args.generation)?
    };

    if generation.requires_confirmation() && !args.yes {
        anyhow::bail!(
            "{} loads {} pokemon; pass --yes to confirm",
            generation,
            generation.len()
        );
    }

    let mut filter = CatalogFilter::new()
        .with_primary(args.primary)
        .with_secondary(args.second_type);
    if let Some(search) = &args.search {
        filter.set_search(search.as_str());
    }

    let loaded = client
        .generation(generation)
        .await
        .with_context(|| format!("Failed to load {}", generation))?;
    let visible = filter.apply(&loaded);

    if cli.json {
        let entries: Vec<GridEntry> = visible
            .iter()
            .map(|p| GridEntry {
                id: p.id,
                name: &p.name,
                types: p.type_names(),
                sprite: p.sprites.front_default.as_deref(),
            })
            .collect();
        return print_json(&entries);
    }

    println!("{} ({} of {} shown)", generation, visible.len(), loaded.len());
    for pokemon in visible {
        println!(
            "#{:<5} {:<16} {}",
            pokemon.id,
            pokemon.name,
            pokemon.type_names().join("/")
        );
    }
    Ok(())
}

async fn show(cli: &Cli, client: PokedexClient, args: &ShowArgs) -> Result<()> {
    let options = DetailOptions {
        version: args.version.clone(),
        method: args.method.as_deref().and_then(LearnMethod::parse_filter),
        shiny: args.shiny,
    };

    let view = client
        .detail_view(&args.pokemon, &options)
        .await
        .with_context(|| format!("Failed to load {}", args.pokemon))?;

    if cli.json {
        return print_json(&view);
    }

    print_detail(&view, options.method.as_ref());
    Ok(())
}

async fn evolution(cli: &Cli, client: PokedexClient, args: &EvolutionArgs) -> Result<()> {
    let tree = client
        .evolution(&args.pokemon)
        .await
        .with_context(|| format!("Failed to load the evolution chain of {}", args.pokemon))?;

    if cli.json {
        return print_json(&tree);
    }

    print_tree(&tree);
    Ok(())
}

async fn locations(cli: &Cli, client: PokedexClient, args: &LocationsArgs) -> Result<()> {
    let game = Game::by_id(&args.game)?;

    let mut locations = client
        .locations(game)
        .await
        .with_context(|| format!("Failed to load the locations of {}", game))?;

    if let Some(wanted) = &args.location {
        let wanted = wanted.to_lowercase().replace('-', " ");
        locations.retain(|location| location.name.contains(&wanted));
    }

    if cli.json {
        return print_json(&locations);
    }

    println!("{} ({} locations)", game, locations.len());
    for location in &locations {
        println!(
            "  {:<32} {:<6} {} pokemon",
            location.name,
            location.kind,
            location.encounters.len()
        );
        if args.location.is_none() {
            continue;
        }
        for encounter in &location.encounters {
            let times = match (encounter.day, encounter.night) {
                (true, true) => "day, night",
                (true, false) => "day",
                (false, true) => "night",
                (false, false) => "-",
            };
            println!("      #{:<5} {:<20} {}", encounter.id, encounter.display_name, times);
        }
    }
    Ok(())
}

fn type_list(types: &BTreeSet<Type>) -> String {
    if types.is_empty() {
        return "none".to_string();
    }
    types
        .iter()
        .map(Type::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_effectiveness(result: &EffectivenessResult) {
    println!("Weak to:    {}", type_list(&result.weaknesses));
    println!("Resists:    {}", type_list(&result.resistances));
    println!("Immune to:  {}", type_list(&result.immunities));
}

fn print_node(prefix: &str, node: &EvolutionNode) {
    let labels = node
        .condition
        .as_ref()
        .map(|condition| condition.labels())
        .unwrap_or_default();

    if labels.is_empty() {
        println!("{}{} (#{})", prefix, node.name, node.id);
    } else {
        println!("{}{} (#{}) [{}]", prefix, node.name, node.id, labels.join(", "));
    }
}

fn print_tree(tree: &EvolutionTree) {
    let [base, second, last] = tree.stages();
    for node in base {
        print_node("  ", node);
    }
    for node in second {
        print_node("  -> ", node);
    }
    for node in last {
        print_node("     -> ", node);
    }
}

fn print_detail(view: &DetailView, method: Option<&LearnMethod>) {
    println!("#{} {} [{}]", view.id, view.name, view.types);
    if let Some(generation) = view.generation {
        println!("{}", generation);
    }
    println!("Height {}  Weight {}", view.height, view.weight);

    let abilities: Vec<String> = view
        .abilities
        .iter()
        .map(|a| {
            if a.hidden {
                format!("{} (hidden)", a.display_name)
            } else {
                a.display_name.clone()
            }
        })
        .collect();
    println!("Abilities: {}", abilities.join(", "));

    let stats: Vec<String> = view
        .stats
        .iter()
        .map(|s| format!("{} {}", s.name, s.base_stat))
        .collect();
    println!("Stats: {}", stats.join(", "));

    println!();
    print_effectiveness(&view.effectiveness);

    if let (Some(version), Some(text)) = (&view.version, &view.flavor_text) {
        println!();
        println!("{}: {}", version_label(version), text.replace('\n', " "));
    }

    if let Some(tree) = &view.evolution
        && tree.has_evolutions()
    {
        println!();
        println!("Evolution:");
        print_tree(tree);
    }

    if view.forms.len() > 1 {
        let labels: Vec<&str> = view.forms.iter().map(|f| f.label.as_str()).collect();
        println!();
        println!("Forms: {}", labels.join(", "));
    }

    println!();
    match method {
        Some(method) => println!("Moves, {} ({}):", method.label(), view.moves.len()),
        None => println!("Moves ({}):", view.moves.len()),
    }
    for row in &view.moves {
        let power = row.power.map_or("-".to_string(), |p| p.to_string());
        let accuracy = row.accuracy.map_or("-".to_string(), |a| a.to_string());
        println!(
            "  {:<10} {:<20} {:<10} {:>4} {:>4}",
            row.method_label(),
            row.display_name,
            row.move_type.as_deref().unwrap_or("-"),
            power,
            accuracy
        );
    }
}
