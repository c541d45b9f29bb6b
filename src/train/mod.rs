pub mod epoch_stats;
pub mod train_config;
pub mod update_rule;
pub mod loop_fn;

pub use epoch_stats::{EpochStats, TrainReport};
pub use train_config::{EarlyStop, TrainConfig};
pub use update_rule::UpdateRule;
pub use loop_fn::train_loop;
