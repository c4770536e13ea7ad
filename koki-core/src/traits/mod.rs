mod duration_model;

pub use duration_model::IDurationModel;
