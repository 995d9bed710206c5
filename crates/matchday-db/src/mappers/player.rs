//! Player entity <-> model mapper

use matchday_core::entities::Player;

use crate::models::PlayerModel;

/// Convert PlayerModel to Player entity
impl From<PlayerModel> for Player {
    fn from(model: PlayerModel) -> Self {
        Player {
            id: model.id,
            name: model.name,
            position: model.position,
            age: model.age,
            nationality: model.nationality,
            team_id: model.team_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
