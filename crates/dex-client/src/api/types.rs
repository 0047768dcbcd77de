//! Wire types for the data service responses.
//!
//! Only the fields Dexview reads are declared; everything else in the
//! payloads is ignored. Conversions into the model live here too.

use std::collections::BTreeMap;

use serde::Deserialize;

use dex_model::{
    EvolutionStage, RecordDetail, RecordSummary, Sprites, StatName, id_from_resource_url,
};

/// A `{ name, url }` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Resource locator.
    pub url: String,
}

impl NamedResource {
    /// Summary for a listing entry; `None` when the locator has no numeric id.
    #[must_use]
    pub fn to_summary(&self) -> Option<RecordSummary> {
        id_from_resource_url(&self.url).map(|id| RecordSummary::new(id, self.name.clone()))
    }
}

/// A `{ url }` reference without a name.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlResource {
    /// Resource locator.
    pub url: String,
}

/// Paginated listing (`/pokemon?limit=&offset=`).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    /// Total number of resources upstream.
    #[serde(default)]
    pub count: u32,
    /// Entries on this page.
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Type slot of a pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    /// The type.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Stat entry of a pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    /// Base value.
    pub base_stat: u32,
    /// The stat.
    pub stat: NamedResource,
}

/// Ability slot of a pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    /// The ability.
    pub ability: NamedResource,
}

/// Artwork sprite set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprite {
    /// Front image.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternative sprite sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    /// Official artwork.
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprite>,
}

/// Sprite block of a pokemon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpritesResponse {
    /// Small front sprite.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternative sets.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// Single record (`/pokemon/{id or name}`).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    /// Record id.
    pub id: u32,
    /// Record name.
    pub name: String,
    /// Types in slot order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Base stats.
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Abilities in slot order.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Species resource.
    #[serde(default)]
    pub species: Option<NamedResource>,
    /// Images.
    #[serde(default)]
    pub sprites: SpritesResponse,
}

impl From<PokemonResponse> for RecordDetail {
    fn from(response: PokemonResponse) -> Self {
        // Stats outside the six base stats are dropped.
        let stats: BTreeMap<StatName, u32> = response
            .stats
            .iter()
            .filter_map(|entry| {
                entry
                    .stat
                    .name
                    .parse::<StatName>()
                    .ok()
                    .map(|stat| (stat, entry.base_stat))
            })
            .collect();

        let official_artwork = response
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);

        Self {
            id: response.id,
            name: response.name,
            types: response.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats,
            height: response.height,
            weight: response.weight,
            abilities: response
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            species_url: response.species.map(|species| species.url),
            sprites: Sprites {
                front_default: response.sprites.front_default,
                official_artwork,
            },
        }
    }
}

/// Entry of a type's member list.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    /// The member pokemon.
    pub pokemon: NamedResource,
}

/// Type resource (`/type/{key}`).
#[derive(Debug, Clone, Deserialize)]
pub struct TypeResponse {
    /// Members of the type.
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

impl TypeResponse {
    /// Member names in response order.
    #[must_use]
    pub fn names(self) -> Vec<String> {
        self.pokemon.into_iter().map(|member| member.pokemon.name).collect()
    }
}

/// Habitat resource (`/pokemon-habitat/{key}`).
#[derive(Debug, Clone, Deserialize)]
pub struct HabitatResponse {
    /// Species living in the habitat.
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}

impl HabitatResponse {
    /// Member names in response order.
    #[must_use]
    pub fn names(self) -> Vec<String> {
        self.pokemon_species
            .into_iter()
            .map(|species| species.name)
            .collect()
    }
}

/// Species resource, linking a record to its evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResponse {
    /// Species name.
    pub name: String,
    /// Evolution chain locator.
    #[serde(default)]
    pub evolution_chain: Option<UrlResource>,
}

/// One link of an evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    /// Species at this stage.
    pub species: NamedResource,
    /// Following stages; absent means none.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl From<ChainLink> for EvolutionStage {
    fn from(link: ChainLink) -> Self {
        Self {
            // A locator without a numeric id still keeps its place in the tree.
            id: id_from_resource_url(&link.species.url).unwrap_or(0),
            name: link.species.name,
            evolves_to: link.evolves_to.into_iter().map(Self::from).collect(),
        }
    }
}

/// Evolution chain resource.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainResponse {
    /// Root link.
    pub chain: ChainLink,
}
