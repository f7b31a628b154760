// Static files read at startup (logo)
pub mod assets;

pub use assets::LogoAsset;
