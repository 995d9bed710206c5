//! Team entity <-> model mapper

use matchday_core::entities::Team;

use crate::models::TeamModel;

/// Convert TeamModel to Team entity
impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: model.id,
            name: model.name,
            abbreviation: model.abbreviation,
            coach_name: model.coach_name,
            home_stadium: model.home_stadium,
            founded_year: model.founded_year,
            wins: model.wins,
            draws: model.draws,
            losses: model.losses,
            goals_scored: model.goals_scored,
            goals_conceded: model.goals_conceded,
            country: model.country,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
