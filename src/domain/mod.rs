// Domain layer: questionnaire models, the fixed area table and ports.

pub mod catalog;
pub mod model;
pub mod ports;
