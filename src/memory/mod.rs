mod episode;
mod returns;

pub use episode::{EpisodeMemory, Sample};
pub use returns::discounted_returns;
