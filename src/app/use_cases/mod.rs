//! Use-Cases der Application-Layer-Orchestrierung.

pub mod connect;
pub mod editing;
pub mod gestures;
pub mod joints;
pub mod resize;
pub mod selection;
pub mod viewport;
