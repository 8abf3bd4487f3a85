#[cfg(feature = "astorya-api")]
pub mod api;

pub mod error;
pub mod membership;
pub mod version;

// Re-export some of our dependencies for QoL, implementors of the lookup traits need it
pub use async_trait;

pub mod prelude {
    #[cfg(feature = "astorya-api")]
    pub use crate::api::*;

    pub use crate::error::*;
    pub use crate::membership::*;
    pub use crate::version::*;
}
