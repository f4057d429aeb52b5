//! Files written by assetlist.

mod assetlist_toml;
mod options_ts;
mod upload_ts;

pub use assetlist_toml::AssetlistToml;
pub use options_ts::OptionsTs;
pub use upload_ts::UploadTs;
