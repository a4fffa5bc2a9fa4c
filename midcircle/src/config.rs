#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Deserialize;
use tracing::debug;

use crate::circle::{Circle, Raster};
use crate::error::{ConfigError, CoordError};
use crate::validate::{validate_toml_pair, validate_toml_radius};

/// One `[[circle]]` entry as written in a circle-set file.
///
/// `center` and `radius` stay as raw TOML values until validation so that
/// malformed entries report a shape or value error rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct CircleConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub center: toml::Value,
    pub radius: toml::Value,
    #[serde(default)]
    pub fill: bool,
}

impl CircleConfig {
    pub fn to_circle(&self) -> Result<Circle, CoordError> {
        let center = validate_toml_pair("center", &self.center)?;
        let radius = validate_toml_radius(&self.radius)?;
        Ok(Circle::new(center, radius).filled(self.fill))
    }
}

/// A batch of circles loaded from TOML.
///
/// ```toml
/// [[circle]]
/// name = "small"
/// center = [50, 50]
/// radius = 2
/// fill = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircleSet {
    #[serde(default, rename = "circle")]
    pub entries: Vec<CircleConfig>,
}

/// A rasterized entry of a [`CircleSet`].
#[derive(Debug, Clone)]
pub struct NamedRaster {
    pub name: Option<String>,
    pub circle: Circle,
    pub raster: Raster,
}

impl CircleSet {
    pub fn from_toml(toml_str: &str) -> Result<CircleSet, ConfigError> {
        let set: CircleSet =
            toml::from_str(toml_str).map_err(|e| ConfigError::Toml(e.to_string()))?;
        debug!(entries = set.entries.len(), "loaded circle set");
        Ok(set)
    }

    /// Validate every entry. Fails on the first invalid one.
    pub fn circles(&self) -> Result<Vec<Circle>, ConfigError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .to_circle()
                    .map_err(|source| ConfigError::Circle { index, source })
            })
            .collect()
    }

    /// Validate and rasterize every entry, preserving file order.
    pub fn rasterize_all(&self) -> Result<Vec<NamedRaster>, ConfigError> {
        let circles = self.circles()?;
        let jobs: Vec<(&CircleConfig, Circle)> = self.entries.iter().zip(circles).collect();

        let rasterize_one = |&(entry, circle): &(&CircleConfig, Circle)| NamedRaster {
            name: entry.name.clone(),
            circle,
            raster: circle.rasterize(),
        };

        #[cfg(feature = "parallel")]
        let rasters: Vec<NamedRaster> = jobs.par_iter().map(rasterize_one).collect();

        #[cfg(not(feature = "parallel"))]
        let rasters: Vec<NamedRaster> = jobs.iter().map(rasterize_one).collect();

        Ok(rasters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn parse_entries_with_defaults() {
        let set = CircleSet::from_toml(
            r#"
            [[circle]]
            name = "a"
            center = [50, 50]
            radius = 2

            [[circle]]
            center = ["25", "25"]
            radius = "1"
            fill = true
            "#,
        )
        .unwrap();
        let circles = set.circles().unwrap();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0], Circle::new((50, 50), 2));
        assert_eq!(circles[1], Circle::new((25, 25), 1).filled(true));
        assert_eq!(set.entries[0].name.as_deref(), Some("a"));
        assert_eq!(set.entries[1].name, None);
    }

    #[test]
    fn empty_document_has_no_entries() {
        let set = CircleSet::from_toml("").unwrap();
        assert!(set.entries.is_empty());
        assert!(set.rasterize_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let result = CircleSet::from_toml("[[circle]\ncenter = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn missing_radius_is_config_error() {
        let result = CircleSet::from_toml("[[circle]]\ncenter = [1, 2]\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_entry_reports_index() {
        let set = CircleSet::from_toml(
            r#"
            [[circle]]
            center = [0, 5]
            radius = 1

            [[circle]]
            center = [1, 2, 3]
            radius = 1
            "#,
        )
        .unwrap();
        match set.circles() {
            Err(ConfigError::Circle { index, source }) => {
                assert_eq!(index, 1);
                assert!(source.is_shape());
            }
            other => panic!("expected circle error, got {other:?}"),
        }
    }

    #[test]
    fn rasterize_all_preserves_order() {
        let set = CircleSet::from_toml(
            r#"
            [[circle]]
            name = "one"
            center = [25, 25]
            radius = 1

            [[circle]]
            name = "zero"
            center = [42, 42]
            radius = 0
            fill = true
            "#,
        )
        .unwrap();
        let rasters = set.rasterize_all().unwrap();
        assert_eq!(rasters.len(), 2);
        assert_eq!(rasters[0].name.as_deref(), Some("one"));
        assert_eq!(rasters[0].raster.points.len(), 4);
        assert_eq!(rasters[1].name.as_deref(), Some("zero"));
        assert_eq!(rasters[1].raster.points, vec![Point::new(42, 42)]);
    }
}
