//! Client-side view state: the space list, the player's rentals and the
//! transient UI flags the host renders from.

use ig_core::network::protocol::RentQuote;
use ig_core::space::SpacePatch;
use ig_core::{EntryRequirements, Space, SpaceDisplay, SpaceId};

use crate::session::EvictionNotice;

/// Which dialog the host should have open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Details,
    Rent,
    Settings,
    Requirements,
    RentPayment,
}

#[derive(Debug, Default, Clone)]
pub struct SpaceStore {
    spaces: Vec<Space>,
    my_rentals: Vec<Space>,
    selected: Option<SpaceId>,
    modal: Option<Modal>,
    loading: bool,
    requirements: Option<EntryRequirements>,
    rent_quote: Option<RentQuote>,
    owner_info: Option<Space>,
    last_error: Option<String>,
    last_eviction: Option<EvictionNotice>,
}

impl SpaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn my_rentals(&self) -> &[Space] {
        &self.my_rentals
    }

    /// Lookup in the space list. Absence means "not found", never an error.
    pub fn find(&self, space_id: &SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|space| &space.id == space_id)
    }

    pub fn display(&self, space_id: &SpaceId) -> Option<SpaceDisplay> {
        self.find(space_id).map(SpaceDisplay::from)
    }

    pub fn displays(&self) -> Vec<SpaceDisplay> {
        self.spaces.iter().map(SpaceDisplay::from).collect()
    }

    pub fn replace_spaces(&mut self, spaces: Vec<Space>) {
        self.spaces = spaces;
    }

    pub fn replace_my_rentals(&mut self, spaces: Vec<Space>) {
        self.my_rentals = spaces;
    }

    pub fn clear_my_rentals(&mut self) {
        self.my_rentals.clear();
    }

    /// Replace the entry with the same id, or append it.
    pub fn upsert(&mut self, space: Space) {
        if let Some(rental) = self.my_rentals.iter_mut().find(|s| s.id == space.id) {
            *rental = space.clone();
        }
        match self.spaces.iter_mut().find(|s| s.id == space.id) {
            Some(existing) => *existing = space,
            None => self.spaces.push(space),
        }
    }

    /// Apply a partial update to every copy of the space. Returns whether
    /// anything was patched.
    pub fn patch(&mut self, space_id: &SpaceId, patch: &SpacePatch) -> bool {
        let mut touched = false;
        for space in self
            .spaces
            .iter_mut()
            .chain(self.my_rentals.iter_mut())
            .filter(|space| &space.id == space_id)
        {
            space.apply(patch);
            touched = true;
        }
        touched
    }

    pub fn selected(&self) -> Option<&SpaceId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, space_id: Option<SpaceId>) {
        self.selected = space_id;
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn requirements(&self) -> Option<&EntryRequirements> {
        self.requirements.as_ref()
    }

    /// Publish requirements for a denied entry and open the modal for them.
    pub fn surface_requirements(&mut self, requirements: EntryRequirements) {
        self.selected = Some(requirements.space_id.clone());
        self.requirements = Some(requirements);
        self.modal = Some(Modal::Requirements);
    }

    /// Drop requirements for `space_id` and close their modal if open.
    pub fn dismiss_requirements(&mut self, space_id: &SpaceId) -> bool {
        if self
            .requirements
            .as_ref()
            .is_some_and(|r| &r.space_id == space_id)
        {
            self.requirements = None;
            if self.modal == Some(Modal::Requirements) {
                self.modal = None;
            }
            return true;
        }
        false
    }

    pub fn rent_quote(&self) -> Option<&RentQuote> {
        self.rent_quote.as_ref()
    }

    pub fn set_rent_quote(&mut self, quote: RentQuote) {
        self.rent_quote = Some(quote);
    }

    pub fn owner_info(&self) -> Option<&Space> {
        self.owner_info.as_ref()
    }

    pub fn set_owner_info(&mut self, space: Space) {
        self.owner_info = Some(space);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn last_eviction(&self) -> Option<&EvictionNotice> {
        self.last_eviction.as_ref()
    }

    pub fn record_eviction(&mut self, notice: EvictionNotice) {
        self.last_eviction = Some(notice);
    }
}
