use std::sync::{Mutex, OnceLock};
use ulid::{Generator, Ulid};

static GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Issues a fresh record id.
///
/// Ids come from one monotonic ULID generator shared by every resource, so
/// each id sorts after, and differs from, all ids issued before it.
pub fn next_id() -> String {
    let generator = GENERATOR.get_or_init(|| Mutex::new(Generator::new()));

    let id = match generator.lock() {
        Ok(mut generator) => generator.generate().unwrap_or_else(|err| {
            tracing::warn!("ULID generator overflowed, falling back to a random id: {}", err);
            Ulid::new()
        }),
        Err(_) => Ulid::new(),
    };

    id.to_string()
}
