//! Ability theft.
//!
//! Before a thief attacks, it looks at the card it is about to hit. Every
//! opposing card of exactly that card's species gives up the damage hooks
//! the species defines at its own level:
//!
//! - The thief copies each hook into its own overrides, unless it already
//!   holds one under that name (first theft wins)
//! - The hook is removed from the species table, so every current and
//!   future card of the species loses it for the rest of the duel
//!
//! Cards of the thief's own species (or its specializations) are never
//! robbed. An empty target slot makes the whole theft a no-op.

use smallvec::SmallVec;

use crate::cards::{DamageHook, SpeciesId};
use crate::core::{DuelError, EntityId, GameState};
use crate::effects::AttackContext;

/// What a theft changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TheftReport {
    /// Hooks newly installed on the thief.
    pub stolen: SmallVec<[DamageHook; 3]>,

    /// Hooks removed from species tables.
    pub stripped: SmallVec<[(SpeciesId, DamageHook); 3]>,

    /// Cards to redraw, robbed cards first and the thief last.
    pub refreshed: Vec<EntityId>,
}

impl TheftReport {
    /// Check if the theft changed any hook table.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.stolen.is_empty() && self.stripped.is_empty()
    }
}

/// Run a theft for `thief` aimed at the card opposite it.
pub fn steal_abilities(
    state: &mut GameState,
    thief: EntityId,
    context: &AttackContext,
) -> Result<TheftReport, DuelError> {
    let mut report = TheftReport::default();
    let Some(target) = context.target() else {
        return Ok(report);
    };

    let thief_species = state.card(thief)?.species;
    let victim_species = state.card(target)?.species;

    let victims: Vec<EntityId> = context
        .opposing_cards()
        .filter(|&card| {
            state.get_card(card).is_some_and(|instance| {
                instance.species == victim_species
                    && !state.species.is_a(instance.species, thief_species)
            })
        })
        .collect();

    for victim in victims {
        for hook in DamageHook::ALL {
            let Some(modifier) = state.species.own_hook(victim_species, hook) else {
                continue;
            };

            let overrides = &mut state.card_mut(thief)?.overrides;
            if !overrides.has(hook) {
                overrides.set(hook, modifier);
                report.stolen.push(hook);
            }

            state.species.strip_hook(victim_species, hook);
            report.stripped.push((victim_species, hook));
        }
        report.refreshed.push(victim);
    }
    report.refreshed.push(thief);

    tracing::debug!(
        %thief,
        species = %victim_species,
        stolen = report.stolen.len(),
        stripped = report.stripped.len(),
        "abilities stolen"
    );
    Ok(report)
}
