//! Alternate forms shown next to the default sprite

use pokedex_protocol::PokemonForm;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub name: String,
    pub label: String,
    pub sprite: String,
    pub shiny_sprite: Option<String>,
    pub types: Vec<String>,
}

/// Label for a form: its `form_name`, or the name without the species prefix
pub fn form_label(form: &PokemonForm) -> String {
    if !form.form_name.is_empty() {
        return form.form_name.clone();
    }
    form.name.split('-').skip(1).collect::<Vec<_>>().join(" ")
}

/// Convert fetched forms, dropping those without a default sprite (missing or empty)
pub fn collect_forms(forms: &[PokemonForm]) -> Vec<FormView> {
    forms
        .iter()
        .filter_map(|form| {
            let sprite = form
                .sprites
                .front_default
                .clone()
                .filter(|sprite| !sprite.is_empty())?;
            let mut slots: Vec<_> = form.types.iter().collect();
            slots.sort_by_key(|slot| slot.slot);

            Some(FormView {
                name: form.name.clone(),
                label: form_label(form),
                sprite,
                shiny_sprite: form.sprites.front_shiny.clone(),
                types: slots.iter().map(|slot| slot.r#type.name.clone()).collect(),
            })
        })
        .collect()
}
