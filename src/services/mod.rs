pub mod composer;
pub mod pipeline;
pub mod reactions;
pub mod value;
pub mod voice;

#[cfg(test)]
mod composer_tests;
#[cfg(test)]
mod voice_tests;
