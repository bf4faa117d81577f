//! Core evaluation building blocks: sanitizing, Roman-numeral decoding,
//! arithmetic, number-to-words rendering, and the per-line pipeline that
//! composes them. These are pure functions consumed by the `api` module.
pub mod params;
pub mod processing;

#[cfg(test)]
mod proptests;
