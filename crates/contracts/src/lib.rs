//! Wire types shared by the site client: raw CMS payload shapes and the
//! logical keys used to request them.

pub mod domain;
pub mod shared;
