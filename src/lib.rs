// Fichier principal de la bibliothèque du rover martien
// Expose tous les modules pour utilisation externe (par le binaire et les tests)

pub mod types;          // Types de base (Orientation, Position)
pub mod error;          // Types d'erreurs
pub mod grid;           // Limites de la grille et obstacles
pub mod command;        // Commandes et résultats
pub mod rover;          // Contrôleur du rover
pub mod display;        // Affichage terminal
pub mod snapshot;       // Instantanés JSON de l'état du rover
pub mod config;         // Configuration initiale
pub mod session;        // Boucle de commandes interactive

// Ré-exportation des types principaux pour faciliter l'importation
pub use types::*;
pub use command::{BlockReason, Command, Outcome, RoverState};
pub use config::{ConfigOverrides, ObstacleField, SimulationConfig};
pub use display::{Renderer, TerminalRenderer};
pub use error::{ConfigError, InvalidCommand};
pub use grid::Grid;
pub use rover::Rover;
pub use session::{Input, Session, SessionSummary};
pub use snapshot::{JsonRenderer, RoverSnapshot};
