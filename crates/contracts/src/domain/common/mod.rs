pub mod card_block;
pub mod card_source;
pub mod cms_id;
pub mod collection;
pub mod de;
pub mod image_asset;
pub mod review;

pub use card_block::CardBlock;
pub use card_source::CardSource;
pub use cms_id::CmsId;
pub use collection::Collection;
pub use image_asset::{FocalPointDto, ImageAsset, ImageTier};
pub use review::Review;
