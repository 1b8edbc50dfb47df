//! vivi: AI teaching assistant that evaluates project-management deliverables
//! against the Shark Tank checklist. Hexagonal architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
