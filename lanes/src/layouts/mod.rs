mod fixnum_vec;
mod group;
mod scratch;
mod word;

pub use fixnum_vec::*;
pub use group::*;
pub use scratch::*;
pub use word::*;

/// Marker bound for layout data containers.
pub trait Data: PartialEq + Eq + Sized {}
impl<T: PartialEq + Eq + Sized> Data for T {}

/// Read-only byte container (`Vec<u8>`, `&[u8]`, `&mut [u8]`).
pub trait DataRef: Data + AsRef<[u8]> {}
impl<T: Data + AsRef<[u8]>> DataRef for T {}

/// Mutable byte container (`Vec<u8>`, `&mut [u8]`).
pub trait DataMut: DataRef + AsMut<[u8]> {}
impl<T: DataRef + AsMut<[u8]>> DataMut for T {}
