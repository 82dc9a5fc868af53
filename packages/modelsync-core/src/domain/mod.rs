/*
 * Domain Layer - Facade contracts
 *
 * HEXAGONAL ARCHITECTURE:
 * - No infrastructure types
 * - Request models and collaborator ports only
 */

pub mod models;
pub mod ports;

pub use models::ModelPayload;
pub use ports::{FileSystem, TemplateRenderer};
