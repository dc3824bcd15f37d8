pub mod epoch;
pub mod selection;
pub mod types;

pub use epoch::{epoch_at, epoch_end, latest_closed_epoch};
pub use selection::{select_winner, winning_ticket};
pub use types::{StakeWeight, StakerEntry};
