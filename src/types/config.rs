//! Service configuration.

use serde::{Deserialize, Serialize};

use super::{ChunkingMethod, ChunkingOptions};
use crate::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Global service configuration, loaded from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Default chunk size in characters
    pub default_chunk_size: usize,

    /// Default chunk overlap in characters
    pub default_chunk_overlap: usize,

    /// Default splitting method
    pub default_method: ChunkingMethod,

    /// HTTP listen port
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_chunk_size: DEFAULT_CHUNK_SIZE,
            default_chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            default_method: ChunkingMethod::Recursive,
            port: 3024,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            default_chunk_size: std::env::var("CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CHUNK_SIZE),
            default_chunk_overlap: std::env::var("CHUNK_OVERLAP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CHUNK_OVERLAP),
            default_method: std::env::var("CHUNK_METHOD")
                .map(|s| ChunkingMethod::parse(&s))
                .unwrap_or(ChunkingMethod::Recursive),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3024),
        }
    }

    /// Chunking options used when a request does not supply its own.
    pub fn default_options(&self) -> ChunkingOptions {
        ChunkingOptions {
            chunk_size: self.default_chunk_size,
            chunk_overlap: self.default_chunk_overlap,
            method: self.default_method,
        }
    }
}
