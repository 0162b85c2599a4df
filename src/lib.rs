pub mod backend;
pub mod chatbot;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scoring;
