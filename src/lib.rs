pub mod app;
pub mod data;
pub mod generate;
pub mod model;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
