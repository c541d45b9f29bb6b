pub mod sample;

pub use sample::TrainingSample;
