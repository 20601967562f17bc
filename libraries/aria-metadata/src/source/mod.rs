//! Build-time-selected platform backends implementing `MetadataSource`

#[cfg(feature = "lofty")]
mod lofty;
#[cfg(feature = "symphonia")]
mod symphonia;

#[cfg(feature = "lofty")]
pub use lofty::LoftySource;
#[cfg(feature = "symphonia")]
pub use symphonia::SymphoniaSource;
