mod texture;
mod texture_array;

pub use self::texture::*;
pub use self::texture_array::*;
