pub mod bonus;
pub mod opponents;

pub use bonus::bonus_for;
pub use opponents::{
    eligible_opponents_for, has_completed_round_robin, opponents_of, players_not_finished,
};
