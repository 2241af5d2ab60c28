mod models;
mod stats;
