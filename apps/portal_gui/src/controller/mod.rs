//! Controller layer: command orchestration from UI actions to the backend queue.

pub mod orchestration;
