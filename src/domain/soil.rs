use std::fmt;

/// Indicator severity shown next to a soil reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Caution,
    Poor,
}

impl Severity {
    /// Hex color for the status indicator
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Good => "#43A047",
            Severity::Caution => "#FB8C00",
            Severity::Poor => "#E53935",
        }
    }
}

/// The soil-health metrics reported per field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilMetric {
    /// Soil pH, unitless
    Ph,
    /// Electrical conductivity (salinity), dS/m
    Salinity,
    /// Organic carbon, percent by weight
    OrganicCarbon,
    /// Cation exchange capacity, cmol(+)/kg
    CationExchange,
    /// Land surface temperature, degrees C
    SurfaceTemperature,
    /// Volumetric soil water content, percent
    WaterContent,
}

impl SoilMetric {
    pub fn unit(&self) -> &'static str {
        match self {
            SoilMetric::Ph => "",
            SoilMetric::Salinity => "dS/m",
            SoilMetric::OrganicCarbon => "%",
            SoilMetric::CationExchange => "cmol/kg",
            SoilMetric::SurfaceTemperature => "°C",
            SoilMetric::WaterContent => "%",
        }
    }

    /// Classify a reading into a status band.
    ///
    /// Bands are fixed agronomic thresholds; boundary values fall into the
    /// band they open (e.g. pH 5.5 is already optimal, EC 4.0 is saline).
    pub fn classify(&self, value: f64) -> SoilStatus {
        match self {
            SoilMetric::Ph => {
                if value < 5.5 {
                    SoilStatus::new(
                        Severity::Poor,
                        "Acidic",
                        "Apply lime to raise pH before the next sowing",
                    )
                } else if value < 7.5 {
                    SoilStatus::new(Severity::Good, "Optimal", "No pH correction needed")
                } else {
                    SoilStatus::new(
                        Severity::Caution,
                        "Alkaline",
                        "Add gypsum or organic matter to lower pH",
                    )
                }
            }
            SoilMetric::Salinity => {
                if value < 2.0 {
                    SoilStatus::new(Severity::Good, "Non-saline", "Safe for all crops")
                } else if value < 4.0 {
                    SoilStatus::new(
                        Severity::Caution,
                        "Slightly saline",
                        "Yields of sensitive crops may be reduced",
                    )
                } else {
                    SoilStatus::new(
                        Severity::Poor,
                        "Saline",
                        "Improve drainage and leach salts before planting",
                    )
                }
            }
            SoilMetric::OrganicCarbon => {
                if value < 0.5 {
                    SoilStatus::new(
                        Severity::Poor,
                        "Low",
                        "Add compost or farmyard manure to build organic matter",
                    )
                } else if value < 0.75 {
                    SoilStatus::new(
                        Severity::Caution,
                        "Medium",
                        "Maintain residue retention to keep building carbon",
                    )
                } else {
                    SoilStatus::new(Severity::Good, "High", "Good organic matter reserve")
                }
            }
            SoilMetric::CationExchange => {
                if value < 10.0 {
                    SoilStatus::new(
                        Severity::Caution,
                        "Low",
                        "Split fertilizer doses; sandy soils hold few nutrients",
                    )
                } else if value < 25.0 {
                    SoilStatus::new(Severity::Good, "Medium", "Good nutrient retention")
                } else {
                    SoilStatus::new(
                        Severity::Good,
                        "High",
                        "Clay-rich soil with strong nutrient retention",
                    )
                }
            }
            SoilMetric::SurfaceTemperature => {
                if value < 10.0 {
                    SoilStatus::new(
                        Severity::Caution,
                        "Cold",
                        "Germination will be slow; delay sowing",
                    )
                } else if value < 35.0 {
                    SoilStatus::new(Severity::Good, "Moderate", "Suitable for sowing")
                } else {
                    SoilStatus::new(
                        Severity::Poor,
                        "Hot",
                        "Mulch to reduce surface temperature and evaporation",
                    )
                }
            }
            SoilMetric::WaterContent => {
                if value < 10.0 {
                    SoilStatus::new(Severity::Poor, "Dry", "Irrigate before sowing")
                } else if value < 35.0 {
                    SoilStatus::new(Severity::Good, "Adequate", "Moisture is sufficient")
                } else {
                    SoilStatus::new(
                        Severity::Caution,
                        "Waterlogged",
                        "Improve drainage; roots may be oxygen-starved",
                    )
                }
            }
        }
    }
}

impl fmt::Display for SoilMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoilMetric::Ph => "pH",
            SoilMetric::Salinity => "Salinity (EC)",
            SoilMetric::OrganicCarbon => "Organic carbon",
            SoilMetric::CationExchange => "CEC",
            SoilMetric::SurfaceTemperature => "Surface temperature",
            SoilMetric::WaterContent => "Water content",
        };
        f.write_str(name)
    }
}

/// Classification result for one soil reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilStatus {
    pub severity: Severity,
    pub label: &'static str,
    pub advice: &'static str,
}

impl SoilStatus {
    fn new(severity: Severity, label: &'static str, advice: &'static str) -> Self {
        Self {
            severity,
            label,
            advice,
        }
    }

    pub fn color(&self) -> &'static str {
        self.severity.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ph_bands() {
        assert_eq!(SoilMetric::Ph.classify(4.8).severity, Severity::Poor);
        assert_eq!(SoilMetric::Ph.classify(5.5).severity, Severity::Good);
        assert_eq!(SoilMetric::Ph.classify(6.8).label, "Optimal");
        assert_eq!(SoilMetric::Ph.classify(7.5).severity, Severity::Caution);
        assert_eq!(SoilMetric::Ph.classify(9.0).label, "Alkaline");
    }

    #[test]
    fn test_salinity_boundary_values() {
        assert_eq!(SoilMetric::Salinity.classify(1.9).label, "Non-saline");
        assert_eq!(SoilMetric::Salinity.classify(2.0).label, "Slightly saline");
        assert_eq!(SoilMetric::Salinity.classify(4.0).label, "Saline");
    }

    #[test]
    fn test_organic_carbon_bands() {
        assert_eq!(
            SoilMetric::OrganicCarbon.classify(0.3).severity,
            Severity::Poor
        );
        assert_eq!(
            SoilMetric::OrganicCarbon.classify(0.6).severity,
            Severity::Caution
        );
        assert_eq!(
            SoilMetric::OrganicCarbon.classify(1.1).severity,
            Severity::Good
        );
    }

    #[test]
    fn test_severity_colors_are_fixed() {
        assert_eq!(Severity::Good.color(), "#43A047");
        assert_eq!(Severity::Caution.color(), "#FB8C00");
        assert_eq!(Severity::Poor.color(), "#E53935");
        assert_eq!(SoilMetric::WaterContent.classify(5.0).color(), "#E53935");
    }
}
