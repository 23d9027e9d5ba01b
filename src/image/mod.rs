pub mod io;
pub mod u8;

pub use self::io::{FileDecoder, ImageDecoder};
pub use self::u8::{GrayImageU8, ImageU8};
