use crate::{
    client::{error::Error, service::draft_selection::DraftSelectionService, store::EntityStore},
    model::DraftSelection,
};

pub type DraftSelectionStore<'a> = EntityStore<DraftSelectionService<'a>>;

impl DraftSelectionStore<'_> {
    /// Replaces the cache with every pick joined with its player and team
    pub async fn fetch_with_details(&mut self) -> Result<&[DraftSelection], Error> {
        self.state.begin();
        let result = self.service.get_all_with_details().await;
        let selections = self.state.settle("fetch", result)?;

        self.state.replace_all(selections);

        Ok(self.items())
    }

    /// Listed selections made by a team, in pick order
    pub fn selections_by_team(&self, team_id: i32) -> Vec<&DraftSelection> {
        let mut selections: Vec<&DraftSelection> = self
            .items()
            .iter()
            .filter(|selection| selection.team_id == Some(team_id))
            .collect();
        selections.sort_by_key(|selection| selection.pick_number);

        selections
    }
}
