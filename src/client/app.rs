use crate::client::{
    service::{
        combine_score::CombineScoreService, draft_pick::DraftPickService,
        draft_selection::DraftSelectionService, player::PlayerService,
        player_award::PlayerAwardService, schedule::ScheduleService, team::TeamService,
        team_dropdown::TeamDropdownService,
    },
    store::{
        combine_score::CombineScoreStore, draft_pick::DraftPickStore,
        draft_selection::DraftSelectionStore, player::PlayerStore,
        player_award::PlayerAwardStore, schedule::ScheduleStore, team::TeamStore,
    },
    transport::ApiClient,
};

/// Stores and cached services of the application, built once at start.
///
/// Everything borrows the one [`ApiClient`], each store keeps its own copy of the records it
/// has seen.
pub struct AppState<'a> {
    pub teams: TeamStore<'a>,
    pub players: PlayerStore<'a>,
    pub player_awards: PlayerAwardStore<'a>,
    pub combine_scores: CombineScoreStore<'a>,
    pub draft_picks: DraftPickStore<'a>,
    pub draft_selections: DraftSelectionStore<'a>,
    pub schedules: ScheduleStore<'a>,
    pub team_dropdown: TeamDropdownService<'a>,
}

impl<'a> AppState<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            teams: TeamStore::new(TeamService::new(client)),
            players: PlayerStore::new(PlayerService::new(client)),
            player_awards: PlayerAwardStore::new(PlayerAwardService::new(client)),
            combine_scores: CombineScoreStore::new(CombineScoreService::new(client)),
            draft_picks: DraftPickStore::new(DraftPickService::new(client)),
            draft_selections: DraftSelectionStore::new(DraftSelectionService::new(client)),
            schedules: ScheduleStore::new(ScheduleService::new(client)),
            team_dropdown: TeamDropdownService::new(client),
        }
    }
}
