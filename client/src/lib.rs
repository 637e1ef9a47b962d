//! Async PokeAPI fetch layer for the Pokemon catalog.
//!
//! [`PokedexClient`] loads generation pages for the grid and everything one detail view
//! needs, with the independent requests of a view running concurrently up to
//! [`ClientConfig::max_concurrent_requests`]. Once every request of a view has resolved
//! the catalog view model is assembled from the results.
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_client::{ClientConfig, DetailOptions, PokedexClient};
//!
//! let client = PokedexClient::new(ClientConfig::from_env())?;
//! let view = client.detail_view("gliscor", &DetailOptions::default()).await?;
//!
//! println!("{} is weak to {:?}", view.name, view.effectiveness.weaknesses);
//! ```

mod config;
mod error;
mod transport;

use std::collections::HashMap;

use futures_util::{StreamExt, stream};
use pokedex_catalog::sort_locations;

pub use config::{
    ClientConfig, DEFAULT_API_URL, ENV_API_URL, ENV_MAX_CONCURRENT, ENV_TIMEOUT_SECS,
    RetryPolicy,
};
pub use error::{FetchError, StatusError, check_status};

pub use pokedex_catalog::{
    CatalogError, CatalogFilter, DetailOptions, DetailSources, DetailView, Game, Generation,
    LearnMethod, LocationView,
};
pub use pokedex_core::{EvolutionTree, Type, TypePair};
pub use pokedex_protocol::{
    AbilityDetail, EvolutionChainResponse, Location, LocationArea, MoveDetail, NamedResource,
    Pokemon, PokemonForm, PokemonSpecies, Region,
};

use transport::Transport;

/// PokeAPI client
pub struct PokedexClient {
    transport: Transport,
}

impl PokedexClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Client configured from `POKEDEX_*` environment variables
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Fetch a creature by national dex id or API name
    pub async fn pokemon(&self, id_or_name: &str) -> Result<Pokemon, FetchError> {
        let url = self.endpoint("pokemon", id_or_name);
        self.transport.get(&url).await
    }

    /// Fetch the species a creature belongs to
    pub async fn species_of(&self, pokemon: &Pokemon) -> Result<PokemonSpecies, FetchError> {
        let url = self.resource_url("pokemon-species", &pokemon.species);
        self.transport.get(&url).await
    }

    /// Fetch the evolution chain of a species, if it has one
    pub async fn evolution_chain(
        &self,
        species: &PokemonSpecies,
    ) -> Result<Option<EvolutionChainResponse>, FetchError> {
        match &species.evolution_chain {
            Some(chain) => self.transport.get(&chain.url).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn move_detail(&self, resource: &NamedResource) -> Result<MoveDetail, FetchError> {
        let url = self.resource_url("move", resource);
        self.transport.get(&url).await
    }

    pub async fn ability(&self, resource: &NamedResource) -> Result<AbilityDetail, FetchError> {
        let url = self.resource_url("ability", resource);
        self.transport.get(&url).await
    }

    pub async fn form(&self, resource: &NamedResource) -> Result<PokemonForm, FetchError> {
        let url = self.resource_url("pokemon-form", resource);
        self.transport.get(&url).await
    }

    /// Fetch the region a game takes place in
    pub async fn region(&self, game: &Game) -> Result<Region, FetchError> {
        let url = self.endpoint("region", game.region_key());
        self.transport.get(&url).await
    }

    pub async fn location(&self, resource: &NamedResource) -> Result<Location, FetchError> {
        let url = self.resource_url("location", resource);
        self.transport.get(&url).await
    }

    pub async fn location_area(
        &self,
        resource: &NamedResource,
    ) -> Result<LocationArea, FetchError> {
        let url = self.resource_url("location-area", resource);
        self.transport.get(&url).await
    }

    /// Every location of a game's region with its encounters, sorted by name
    ///
    /// The region is required. Locations and areas that fail to load are logged and
    /// left out.
    pub async fn locations(&self, game: &Game) -> Result<Vec<LocationView>, FetchError> {
        let region = self.region(game).await?;
        tracing::debug!(
            game = %game,
            region = %region.name,
            count = region.locations.len(),
            "Loading locations"
        );

        let locations: Vec<Location> = stream::iter(&region.locations)
            .map(move |resource| async move { (resource, self.location(resource).await) })
            .buffered(self.concurrency())
            .filter_map(|(resource, result)| async move {
                degrade("location", &resource.name, result)
            })
            .collect()
            .await;

        // Areas of all locations share one bounded stream
        let area_refs: Vec<(usize, &NamedResource)> = locations
            .iter()
            .enumerate()
            .flat_map(|(index, location)| location.areas.iter().map(move |area| (index, area)))
            .collect();
        let fetched: Vec<(usize, LocationArea)> = stream::iter(area_refs)
            .map(move |(index, resource)| async move {
                (index, resource, self.location_area(resource).await)
            })
            .buffered(self.concurrency())
            .filter_map(|(index, resource, result)| async move {
                degrade("location area", &resource.name, result).map(|area| (index, area))
            })
            .collect()
            .await;

        let mut areas: Vec<Vec<LocationArea>> = vec![Vec::new(); locations.len()];
        for (index, area) in fetched {
            areas[index].push(area);
        }

        let mut views: Vec<LocationView> = locations
            .iter()
            .zip(&areas)
            .map(|(location, areas)| LocationView::assemble(location, areas))
            .collect();
        sort_locations(&mut views);

        Ok(views)
    }

    /// Load every creature of a generation in dex order
    ///
    /// Creatures that fail to load are logged and left out. Fails only when nothing
    /// could be loaded at all.
    pub async fn generation(&self, generation: &Generation) -> Result<Vec<Pokemon>, FetchError> {
        tracing::debug!(
            generation = %generation,
            count = generation.len(),
            "Loading generation"
        );

        let results: Vec<(u32, Result<Pokemon, FetchError>)> = stream::iter(generation.ids())
            .map(move |id| async move { (id, self.pokemon(&id.to_string()).await) })
            .buffered(self.concurrency())
            .collect()
            .await;

        let mut loaded = Vec::with_capacity(results.len());
        let mut failed = 0;
        for (id, result) in results {
            match result {
                Ok(pokemon) => loaded.push(pokemon),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        generation = %generation,
                        id = id,
                        error = %e,
                        "Failed to load pokemon"
                    );
                }
            }
        }

        if loaded.is_empty() && failed > 0 {
            return Err(FetchError::PartialData(format!(
                "none of the {} pokemon in {} could be loaded",
                failed, generation
            )));
        }
        if failed > 0 {
            tracing::info!(
                generation = %generation,
                loaded = loaded.len(),
                failed = failed,
                "Generation loaded with gaps"
            );
        }

        Ok(loaded)
    }

    /// Details of every move the creature learns, keyed by move name
    ///
    /// Moves whose details fail to load are logged and left out.
    pub async fn move_details(&self, pokemon: &Pokemon) -> HashMap<String, MoveDetail> {
        stream::iter(&pokemon.moves)
            .map(move |entry| async move {
                let result = self.move_detail(&entry.r#move).await;
                (entry.r#move.name.clone(), result)
            })
            .buffer_unordered(self.concurrency())
            .filter_map(|(name, result)| async move {
                degrade("move", &name, result).map(|detail| (name, detail))
            })
            .collect()
            .await
    }

    /// Details of every ability the creature can have, keyed by ability name
    pub async fn ability_details(&self, pokemon: &Pokemon) -> HashMap<String, AbilityDetail> {
        stream::iter(&pokemon.abilities)
            .map(move |entry| async move {
                let result = self.ability(&entry.ability).await;
                (entry.ability.name.clone(), result)
            })
            .buffer_unordered(self.concurrency())
            .filter_map(|(name, result)| async move {
                degrade("ability", &name, result).map(|detail| (name, detail))
            })
            .collect()
            .await
    }

    /// The creature's forms in API order
    pub async fn forms(&self, pokemon: &Pokemon) -> Vec<PokemonForm> {
        stream::iter(&pokemon.forms)
            .map(move |resource| async move { (resource, self.form(resource).await) })
            .buffered(self.concurrency())
            .filter_map(|(resource, result)| async move {
                degrade("form", &resource.name, result)
            })
            .collect()
            .await
    }

    /// Evolution tree of the family a creature belongs to
    pub async fn evolution(&self, id_or_name: &str) -> Result<EvolutionTree, FetchError> {
        let pokemon = self.pokemon(id_or_name).await?;
        let species = self.species_of(&pokemon).await?;
        let chain = self.evolution_chain(&species).await?.ok_or_else(|| {
            FetchError::PartialData(format!("{} has no evolution chain", species.name))
        })?;

        EvolutionTree::from_response(&chain)
            .map_err(|e| FetchError::View(CatalogError::Evolution(e)))
    }

    /// Fetch everything the detail view shows and assemble it
    ///
    /// The creature itself is required. Species, evolution chain, forms, moves and
    /// abilities are optional and left out of the view when they fail to load.
    pub async fn detail_view(
        &self,
        id_or_name: &str,
        options: &DetailOptions,
    ) -> Result<DetailView, FetchError> {
        let pokemon = self.pokemon(id_or_name).await?;

        let (species, forms, move_details, ability_details) = tokio::join!(
            self.species_of(&pokemon),
            self.forms(&pokemon),
            self.move_details(&pokemon),
            self.ability_details(&pokemon),
        );

        let species = degrade("species", &pokemon.name, species);
        let chain = match &species {
            Some(species) => {
                degrade("evolution chain", &pokemon.name, self.evolution_chain(species).await)
                    .flatten()
            }
            None => None,
        };

        tracing::debug!(
            pokemon = %pokemon.name,
            forms = forms.len(),
            moves = move_details.len(),
            abilities = ability_details.len(),
            has_species = species.is_some(),
            has_chain = chain.is_some(),
            "Assembling detail view"
        );

        let sources = DetailSources {
            species: species.as_ref(),
            evolution_chain: chain.as_ref(),
            forms: &forms,
            ..DetailSources::new(&pokemon, &move_details, &ability_details)
        };

        Ok(DetailView::assemble(&sources, options)?)
    }

    fn concurrency(&self) -> usize {
        self.config().max_concurrent_requests
    }

    fn endpoint(&self, kind: &str, id_or_name: &str) -> String {
        let key = id_or_name.trim().to_lowercase();
        self.config().endpoint(&format!("{}/{}", kind, key))
    }

    /// The reference's own url, or the named endpoint when the url is missing
    fn resource_url(&self, kind: &str, resource: &NamedResource) -> String {
        if resource.url.is_empty() {
            self.endpoint(kind, &resource.name)
        } else {
            resource.url.clone()
        }
    }
}

/// Log a failed optional sub-resource and drop it
fn degrade<T>(what: &str, name: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(resource = what, name = %name, error = %e, "Skipping optional data");
            None
        }
    }
}
