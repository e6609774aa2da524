use bon::bon;

/// Root of version 1.0 of the SMHI meteorological observations API.
pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se/api/version/1.0";
/// SMHI parameter 1: air temperature, instantaneous value once per hour.
pub const DEFAULT_PARAMETER: u32 = 1;
/// The quality-controlled historical period.
pub const DEFAULT_PERIOD: &str = "corrected-archive";

/// Where the archive fetcher looks for station data.
///
/// The metadata URL for a station is
/// `{base_url}/parameter/{parameter}/station/{id}/period/{period}.json`.
///
/// # Examples
///
/// ```
/// use smhi_weather::ArchiveConfig;
///
/// let config = ArchiveConfig::default();
/// assert_eq!(
///     config.metadata_url("98230"),
///     "https://opendata-download-metobs.smhi.se/api/version/1.0/parameter/1/station/98230/period/corrected-archive.json"
/// );
///
/// let latest = ArchiveConfig::builder().period("latest-months").build();
/// assert!(latest.metadata_url("98230").ends_with("/period/latest-months.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    base_url: String,
    parameter: u32,
    period: String,
}

#[bon]
impl ArchiveConfig {
    /// Builds a configuration; every setting falls back to the SMHI default.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. API root, a trailing `/` is ignored. Defaults to
    ///   [`DEFAULT_BASE_URL`].
    /// * `.parameter(u32)`: Optional. SMHI parameter id. Defaults to [`DEFAULT_PARAMETER`].
    /// * `.period(String)`: Optional. Archive period name. Defaults to [`DEFAULT_PERIOD`].
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        parameter: Option<u32>,
        #[builder(into)] period: Option<String>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            parameter: parameter.unwrap_or(DEFAULT_PARAMETER),
            period: period.unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn parameter(&self) -> u32 {
        self.parameter
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn metadata_url(&self, station_id: &str) -> String {
        format!(
            "{}/parameter/{}/station/{}/period/{}.json",
            self.base_url, self.parameter, station_id, self.period
        )
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
