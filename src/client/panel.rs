//! Admin panel lifecycle, shared by every per-entity panel: a listing view,
//! a modal form for create or edit, and a submitting phase that always comes
//! back to the listing whether the write succeeded or not. Delete never goes
//! through the form; a confirmation prompt gates a direct delete call.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Listing,
    FormOpenCreate,
    FormOpenEdit { id: String },
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid panel transition")]
pub struct InvalidTransition;

impl Default for PanelState {
    fn default() -> Self {
        Self::Listing
    }
}

impl PanelState {
    pub fn open_create(&mut self) -> Result<(), InvalidTransition> {
        match self {
            PanelState::Listing => {
                *self = PanelState::FormOpenCreate;
                Ok(())
            }
            _ => Err(InvalidTransition),
        }
    }

    /// Pre-fills the form from the selected row, keyed by its id.
    pub fn open_edit(&mut self, id: impl Into<String>) -> Result<(), InvalidTransition> {
        match self {
            PanelState::Listing => {
                *self = PanelState::FormOpenEdit { id: id.into() };
                Ok(())
            }
            _ => Err(InvalidTransition),
        }
    }

    pub fn submit(&mut self) -> Result<(), InvalidTransition> {
        match self {
            PanelState::FormOpenCreate | PanelState::FormOpenEdit { .. } => {
                *self = PanelState::Submitting;
                Ok(())
            }
            _ => Err(InvalidTransition),
        }
    }

    /// The response came back. Success and failure both land on the listing;
    /// failure is only logged by the panels, not surfaced as a state.
    pub fn complete(&mut self) -> Result<(), InvalidTransition> {
        match self {
            PanelState::Submitting => {
                *self = PanelState::Listing;
                Ok(())
            }
            _ => Err(InvalidTransition),
        }
    }

    pub fn close_form(&mut self) -> Result<(), InvalidTransition> {
        match self {
            PanelState::FormOpenCreate | PanelState::FormOpenEdit { .. } => {
                *self = PanelState::Listing;
                Ok(())
            }
            _ => Err(InvalidTransition),
        }
    }

    pub fn is_form_open(&self) -> bool {
        matches!(
            self,
            PanelState::FormOpenCreate | PanelState::FormOpenEdit { .. }
        )
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            PanelState::FormOpenEdit { id } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_flow_loops_back_to_listing() {
        let mut panel = PanelState::default();

        panel.open_create().unwrap();
        assert!(panel.is_form_open());

        panel.submit().unwrap();
        assert_eq!(panel, PanelState::Submitting);

        panel.complete().unwrap();
        assert_eq!(panel, PanelState::Listing);
    }

    #[test]
    fn edit_flow_carries_the_row_id() {
        let mut panel = PanelState::default();

        panel.open_edit("42").unwrap();
        assert_eq!(panel.editing_id(), Some("42"));

        panel.submit().unwrap();
        panel.complete().unwrap();
        assert_eq!(panel, PanelState::Listing);
    }

    #[test]
    fn failure_also_returns_to_listing() {
        let mut panel = PanelState::default();
        panel.open_create().unwrap();
        panel.submit().unwrap();

        // Same transition regardless of the write's outcome.
        panel.complete().unwrap();
        assert_eq!(panel, PanelState::Listing);
    }

    #[test]
    fn form_can_be_dismissed_without_submitting() {
        let mut panel = PanelState::default();
        panel.open_edit("1").unwrap();

        panel.close_form().unwrap();
        assert_eq!(panel, PanelState::Listing);
    }

    #[test]
    fn double_open_and_submit_from_listing_are_rejected() {
        let mut panel = PanelState::default();

        assert!(panel.submit().is_err());

        panel.open_create().unwrap();
        assert!(panel.open_create().is_err());
        assert!(panel.open_edit("1").is_err());
    }
}
