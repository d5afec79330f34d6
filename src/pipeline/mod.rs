// Batch pipeline: load a file of listings and score each one independently.

pub mod batch;
