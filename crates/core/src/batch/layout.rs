use ndarray::Axis;

/// Which axis of a batch holds features and which holds samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Layout {
    /// Shape `(features, samples)`: row `i` holds feature `x[i]` for every sample.
    #[default]
    FeaturesBySamples,
    /// Shape `(samples, features)`: row `j` holds every feature of sample `j`.
    SamplesByFeatures,
}

impl Layout {
    /// Returns the axis that indexes samples.
    #[must_use]
    pub fn sample_axis(self) -> Axis {
        match self {
            Self::FeaturesBySamples => Axis(1),
            Self::SamplesByFeatures => Axis(0),
        }
    }

    /// Returns the axis that indexes features.
    #[must_use]
    pub fn feature_axis(self) -> Axis {
        match self {
            Self::FeaturesBySamples => Axis(0),
            Self::SamplesByFeatures => Axis(1),
        }
    }
}
