//! The array container, a multi-dimensional array of typed samples
//! with free-form tags attached.

use smallvec::SmallVec;
use snafu::{ensure, OptionExt, Snafu};

use crate::element::{ElementKind, Samples};
use crate::tags::TagList;

/// A sequence of dimension lengths or similar small numbers.
pub type C<T> = SmallVec<[T; 4]>;

/// An error from building an [`ArrayContainer`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ContainerError {
    /// The element count does not fit in memory.
    #[snafu(display("Array of dimensions {:?} with {} components is too large", dims, components))]
    TooLarge {
        /// The requested dimensions.
        dims: Vec<u32>,
        /// The requested number of components per element.
        components: u32,
    },
    /// Elements must have at least one component.
    #[snafu(display("Component count must be at least 1"))]
    NoComponents,
    /// The sample data does not match the declared shape.
    #[snafu(display(
        "Sample data length {} does not match the array shape ({} samples expected)",
        actual,
        expected
    ))]
    LengthMismatch {
        /// The number of samples the declared shape calls for.
        expected: usize,
        /// The number of samples actually given.
        actual: usize,
    },
}

/// A multi-dimensional array of typed elements, the unit of data
/// exchanged with format adapters.
///
/// Dimensions are ordered from slowest-varying to fastest-varying,
/// so a 2-D image is `[rows, columns]`, with row 0 being
/// the bottom row under the usual bottom-up convention of this library.
/// Each element has a fixed number of components of the same kind,
/// stored interleaved: the samples of one element are contiguous.
///
/// Free-form [tags](TagList) can be attached to the container as a whole
/// and to each component.
///
/// # Example
///
/// ```
/// use arrio_core::{ArrayContainer, ElementKind, tags};
///
/// // a 2 x 3 grayscale image
/// let mut array = ArrayContainer::from_samples(
///     vec![0_u8, 10, 20, 30, 40, 50],
///     &[2, 3],
///     1,
/// )?;
/// assert_eq!(array.dims(), &[2, 3]);
/// assert_eq!(array.element_kind(), ElementKind::U8);
///
/// if let Some(channel_tags) = array.component_tags_mut(0) {
///     channel_tags.insert(tags::CHANNEL, tags::CHANNEL_LUMINANCE);
/// }
/// # Ok::<_, arrio_core::ContainerError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayContainer {
    dims: C<u32>,
    components: u32,
    samples: Samples,
    tags: TagList,
    component_tags: Vec<TagList>,
}

impl ArrayContainer {
    /// Build a container from existing samples.
    ///
    /// The number of samples must be exactly the product of all dimensions
    /// times the number of components per element.
    pub fn from_samples(
        samples: impl Into<Samples>,
        dims: &[u32],
        components: u32,
    ) -> Result<Self, ContainerError> {
        let samples = samples.into();
        ensure!(components > 0, NoComponentsSnafu);
        let expected = dims
            .iter()
            .try_fold(components as usize, |acc, &dim| {
                acc.checked_mul(dim as usize)
            })
            .context(TooLargeSnafu { dims, components })?;
        ensure!(
            samples.len() == expected,
            LengthMismatchSnafu {
                expected,
                actual: samples.len(),
            }
        );
        Ok(ArrayContainer {
            dims: C::from_slice(dims),
            components,
            component_tags: vec![TagList::new(); components as usize],
            samples,
            tags: TagList::new(),
        })
    }

    /// The lengths of all dimensions, slowest-varying first.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// The length of the given dimension,
    /// or `None` if the array has fewer dimensions.
    pub fn dim(&self, index: u32) -> Option<u32> {
        self.dims.get(index as usize).copied()
    }

    /// The number of dimensions.
    pub fn dim_count(&self) -> u32 {
        self.dims.len() as u32
    }

    /// The number of components per element.
    pub fn components(&self) -> u32 {
        self.components
    }

    /// The kind of each sample element.
    pub fn element_kind(&self) -> ElementKind {
        self.samples.kind()
    }

    /// The total number of samples, over all components.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Whether the array holds no samples at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample data.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// The sample data, for modification.
    ///
    /// The shape of the container is fixed at construction,
    /// so mutation must keep the number of samples unchanged.
    pub fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    /// The tags attached to the container as a whole.
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// The tags attached to the container as a whole, for modification.
    pub fn tags_mut(&mut self) -> &mut TagList {
        &mut self.tags
    }

    /// The tags attached to the given component.
    pub fn component_tags(&self, component: u32) -> Option<&TagList> {
        self.component_tags.get(component as usize)
    }

    /// The tags attached to the given component, for modification.
    pub fn component_tags_mut(&mut self, component: u32) -> Option<&mut TagList> {
        self.component_tags.get_mut(component as usize)
    }

    /// Convert the sample data into an owned dynamic-dimension `ndarray`,
    /// with one extra innermost axis for the components.
    ///
    /// Returns `None` if the element kind is not [`U8`](ElementKind::U8).
    #[cfg(feature = "ndarray")]
    pub fn to_ndarray(&self) -> Option<ndarray::ArrayD<u8>> {
        let data = self.samples.as_u8()?;
        let mut shape: Vec<usize> = self.dims.iter().map(|&dim| dim as usize).collect();
        shape.push(self.components as usize);
        ndarray::ArrayD::from_shape_vec(ndarray::IxDyn(&shape), data.to_vec()).ok()
    }
}
