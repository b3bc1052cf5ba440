use crate::base::{Method, SearchConfig, Seismic, SeismicZone, SlopeGeometry, SoilLayer, SoilProfile};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

fn default_n_circles() -> usize {
    50
}

/// Holds the input data of a slope stability analysis
///
/// # Example of JSON file
///
/// ```text
/// {
///   "geometry": { "height": 8.0, "slope_ratio": 1.5, "crest_width": 10.0, "toe_x": 5.0, "toe_elevation": 0.0 },
///   "layers": [
///     { "name": "Clay", "thickness": 20.0, "gamma": 18.0, "gamma_sat": 19.0,
///       "cohesion": 20.0, "phi": 20.0, "compressibility": null }
///   ],
///   "gwl": 2.0,
///   "method": "Both",
///   "n_circles": 50,
///   "kh": 0.15
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnalysisInput {
    /// Slope geometry
    pub geometry: SlopeGeometry,

    /// Soil layers from top to bottom
    pub layers: Vec<SoilLayer>,

    /// Groundwater level (elevation)
    pub gwl: f64,

    /// Limit-equilibrium method
    pub method: Method,

    /// Hint of the number of trial centers
    #[serde(default = "default_n_circles")]
    pub n_circles: usize,

    /// Horizontal seismic coefficient (ignored if `seismic_zone` is given)
    #[serde(default)]
    pub kh: f64,

    /// Vertical seismic coefficient
    #[serde(default)]
    pub kv: f64,

    /// Seismic zone defining the horizontal coefficient
    #[serde(default)]
    pub seismic_zone: Option<SeismicZone>,

    /// Evaluates the trial circles in parallel
    #[serde(default)]
    pub parallel: bool,
}

impl AnalysisInput {
    /// Allocates a new instance with default search parameters and no seismic loading
    pub fn new(geometry: SlopeGeometry, layers: Vec<SoilLayer>, gwl: f64, method: Method) -> Self {
        AnalysisInput {
            geometry,
            layers,
            gwl,
            method,
            n_circles: default_n_circles(),
            kh: 0.0,
            kv: 0.0,
            seismic_zone: None,
            parallel: false,
        }
    }

    /// Returns the seismic loading
    pub fn seismic(&self) -> Result<Seismic, StrError> {
        let kh = match &self.seismic_zone {
            Some(zone) => zone.kh()?,
            None => self.kh,
        };
        Seismic::new(kh, self.kv)
    }

    /// Returns the (validated) soil profile
    pub fn profile(&self) -> Result<SoilProfile, StrError> {
        SoilProfile::new(self.layers.clone(), self.gwl)
    }

    /// Returns the search configuration
    pub fn config(&self) -> Result<SearchConfig, StrError> {
        let mut config = SearchConfig::new();
        config
            .set_n_circles(self.n_circles)?
            .set_seismic(self.seismic()?)?
            .set_parallel(self.parallel)?;
        Ok(config)
    }

    /// Checks all data
    pub fn validate(&self) -> Result<(), StrError> {
        self.geometry.validate()?;
        self.profile()?;
        self.config()?;
        Ok(())
    }

    /// Reads a JSON file containing the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data: AnalysisInput = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        data.validate()?;
        Ok(data)
    }

    /// Writes a JSON file with the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::AnalysisInput;
    use crate::base::{Method, SampleData, Seismic, SeismicZone, DEFAULT_TEST_DIR};

    fn sample_input() -> AnalysisInput {
        let profile = SampleData::profile_two_clays(2.0);
        AnalysisInput::new(SampleData::geometry_embankment(), profile.layers, 2.0, Method::Both)
    }

    #[test]
    fn handle_errors() {
        let mut input = sample_input();
        input.kh = -0.1;
        assert_eq!(input.seismic().err(), Some("horizontal seismic coefficient must be ≥ 0.0"));
        assert_eq!(input.validate().err(), Some("horizontal seismic coefficient must be ≥ 0.0"));
        let mut input = sample_input();
        input.seismic_zone = Some(SeismicZone::Custom(0.8));
        assert_eq!(input.seismic().err(), Some("custom seismic coefficient must be in [0, 0.5]"));
        let mut input = sample_input();
        input.layers.clear();
        assert_eq!(input.validate().err(), Some("at least one soil layer is required"));
        let mut input = sample_input();
        input.geometry.height = 0.0;
        assert_eq!(input.validate().err(), Some("height must be > 0.0"));
        let mut input = sample_input();
        input.n_circles = 0;
        assert_eq!(input.validate().err(), Some("n_circles must be ≥ 1"));
        assert_eq!(
            AnalysisInput::read_json("/tmp/slopesim/__does_not_exist__.json").err(),
            Some("file not found")
        );
    }

    #[test]
    fn seismic_and_config_work() {
        let mut input = sample_input();
        assert_eq!(input.seismic().unwrap(), Seismic::none());
        input.kh = 0.1;
        input.kv = 0.05;
        assert_eq!(input.seismic().unwrap(), Seismic { kh: 0.1, kv: 0.05 });
        input.seismic_zone = Some(SeismicZone::Zone2A);
        assert_eq!(input.seismic().unwrap(), Seismic { kh: 0.15, kv: 0.05 });
        let config = input.config().unwrap();
        assert_eq!(config.n_grid(), 7);
        assert_eq!(config.seismic(), Seismic { kh: 0.15, kv: 0.05 });
        let profile = input.profile().unwrap();
        assert_eq!(profile.layers.len(), 2);
        assert_eq!(profile.gwl, 2.0);
    }

    #[test]
    fn read_json_applies_defaults() {
        let json = r#"{
            "geometry": { "height": 8.0, "slope_ratio": 1.5, "crest_width": 10.0, "toe_x": 5.0, "toe_elevation": 0.0 },
            "layers": [
                { "name": "Clay", "thickness": 20.0, "gamma": 18.0, "gamma_sat": 19.0,
                  "cohesion": 20.0, "phi": 20.0, "compressibility": null }
            ],
            "gwl": 2.0,
            "method": "Bishop"
        }"#;
        let full_path = format!("{}/test_input_data_defaults.json", DEFAULT_TEST_DIR);
        std::fs::create_dir_all(DEFAULT_TEST_DIR).unwrap();
        std::fs::write(&full_path, json).unwrap();
        let input = AnalysisInput::read_json(&full_path).unwrap();
        assert_eq!(input.method, Method::Bishop);
        assert_eq!(input.n_circles, 50);
        assert_eq!(input.kh, 0.0);
        assert_eq!(input.seismic_zone, None);
        assert!(!input.parallel);
        assert_eq!(input.layers[0].name, "Clay");
    }

    #[test]
    fn write_and_read_json_work() {
        let mut input = sample_input();
        input.kh = 0.15;
        let full_path = format!("{}/test_input_data_write.json", DEFAULT_TEST_DIR);
        input.write_json(&full_path).unwrap();
        let read = AnalysisInput::read_json(&full_path).unwrap();
        assert_eq!(read.method, Method::Both);
        assert_eq!(read.kh, 0.15);
        assert_eq!(read.layers.len(), 2);
        assert!(read.layers[0].compressibility.is_some());
    }
}
