pub mod config;
pub mod logging;

// Pipeline modules: parse -> gather -> build -> classify.
pub mod evidence;
pub mod features;
pub mod model;
pub mod predict;
pub mod url_parts;
