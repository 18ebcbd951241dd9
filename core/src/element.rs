//! Sample element kinds and typed sample storage.

use std::fmt;

/// The kind of a single sample element in an array container.
///
/// Format adapters use this to find out whether they can represent
/// an array on the wire; most formats support only a subset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// 8-bit unsigned integer
    U8,
    /// 8-bit signed integer
    I8,
    /// 16-bit unsigned integer
    U16,
    /// 16-bit signed integer
    I16,
    /// 32-bit unsigned integer
    U32,
    /// 32-bit signed integer
    I32,
    /// 32-bit floating point number
    F32,
    /// 64-bit floating point number
    F64,
}

impl ElementKind {
    /// The number of bytes that one sample of this kind occupies.
    pub fn size_of(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => 1,
            ElementKind::U16 | ElementKind::I16 => 2,
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::F64 => 8,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ElementKind::U8 => "u8",
            ElementKind::I8 => "i8",
            ElementKind::U16 => "u16",
            ElementKind::I16 => "i16",
            ElementKind::U32 => "u32",
            ElementKind::I32 => "i32",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Typed sample storage of an array container,
/// with one variant per element kind.
///
/// Samples are stored flat, in the row-major order of the container's
/// dimensions, with the components of one element contiguous.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// 8-bit unsigned samples
    U8(Vec<u8>),
    /// 8-bit signed samples
    I8(Vec<i8>),
    /// 16-bit unsigned samples
    U16(Vec<u16>),
    /// 16-bit signed samples
    I16(Vec<i16>),
    /// 32-bit unsigned samples
    U32(Vec<u32>),
    /// 32-bit signed samples
    I32(Vec<i32>),
    /// 32-bit floating point samples
    F32(Vec<f32>),
    /// 64-bit floating point samples
    F64(Vec<f64>),
}

impl Samples {
    /// The element kind of these samples.
    pub fn kind(&self) -> ElementKind {
        match self {
            Samples::U8(_) => ElementKind::U8,
            Samples::I8(_) => ElementKind::I8,
            Samples::U16(_) => ElementKind::U16,
            Samples::I16(_) => ElementKind::I16,
            Samples::U32(_) => ElementKind::U32,
            Samples::I32(_) => ElementKind::I32,
            Samples::F32(_) => ElementKind::F32,
            Samples::F64(_) => ElementKind::F64,
        }
    }

    /// The total number of samples, over all components.
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::I8(v) => v.len(),
            Samples::U16(v) => v.len(),
            Samples::I16(v) => v.len(),
            Samples::U32(v) => v.len(),
            Samples::I32(v) => v.len(),
            Samples::F32(v) => v.len(),
            Samples::F64(v) => v.len(),
        }
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The samples as a slice of bytes,
    /// or `None` if the element kind is not [`U8`](ElementKind::U8).
    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Samples::U8(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for Samples {
    fn from(samples: Vec<u8>) -> Self {
        Samples::U8(samples)
    }
}

impl From<Vec<i8>> for Samples {
    fn from(samples: Vec<i8>) -> Self {
        Samples::I8(samples)
    }
}

impl From<Vec<u16>> for Samples {
    fn from(samples: Vec<u16>) -> Self {
        Samples::U16(samples)
    }
}

impl From<Vec<i16>> for Samples {
    fn from(samples: Vec<i16>) -> Self {
        Samples::I16(samples)
    }
}

impl From<Vec<u32>> for Samples {
    fn from(samples: Vec<u32>) -> Self {
        Samples::U32(samples)
    }
}

impl From<Vec<i32>> for Samples {
    fn from(samples: Vec<i32>) -> Self {
        Samples::I32(samples)
    }
}

impl From<Vec<f32>> for Samples {
    fn from(samples: Vec<f32>) -> Self {
        Samples::F32(samples)
    }
}

impl From<Vec<f64>> for Samples {
    fn from(samples: Vec<f64>) -> Self {
        Samples::F64(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_sizes() {
        assert_eq!(ElementKind::U8.size_of(), 1);
        assert_eq!(ElementKind::I16.size_of(), 2);
        assert_eq!(ElementKind::F32.size_of(), 4);
        assert_eq!(ElementKind::F64.size_of(), 8);
        assert_eq!(ElementKind::U16.to_string(), "u16");
    }

    #[test]
    fn samples_know_their_kind() {
        let samples = Samples::from(vec![1_u16, 2, 3]);
        assert_eq!(samples.kind(), ElementKind::U16);
        assert_eq!(samples.len(), 3);
        assert!(samples.as_u8().is_none());

        let samples = Samples::from(vec![0_u8; 4]);
        assert_eq!(samples.kind(), ElementKind::U8);
        assert_eq!(samples.as_u8(), Some(&[0_u8, 0, 0, 0][..]));
    }
}
