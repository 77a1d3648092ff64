pub mod block;
pub mod config;
pub mod debug;
pub mod edit;
pub mod physics;
pub mod player;
pub mod view;
pub mod world;
pub mod worldgen;
