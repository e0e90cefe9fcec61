#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use rand::Rng;
use uuid::Uuid;

mod assembler;
pub mod catalog;
mod constraint;
mod error;
mod exercise;
mod generator;
mod history;
mod kid;
mod name;
mod profile;
mod routine;
mod sampling;
mod service;
mod settings;
mod statistics;

pub use assembler::*;
pub use catalog::Catalog;
pub use constraint::*;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use history::*;
pub use kid::*;
pub use name::*;
pub use profile::*;
pub use routine::*;
pub use sampling::*;
pub use service::*;
pub use settings::*;
pub use statistics::*;

/// Version 4 UUID drawn from the given generator, so that seeded generators give stable IDs.
pub(crate) fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_random_uuid() {
        let a = random_uuid(&mut ChaCha8Rng::seed_from_u64(1));
        let b = random_uuid(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
        assert_ne!(a, random_uuid(&mut ChaCha8Rng::seed_from_u64(2)));
    }
}
