use crate::model::City;

/// Read-only list of selectable cities, kept sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    pub fn new(mut cities: Vec<City>) -> Self {
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Self { cities }
    }

    pub fn all(&self) -> &[City] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Case-insensitive lookup by exact name.
    pub fn find(&self, name: &str) -> Option<&City> {
        let needle = name.trim().to_lowercase();
        self.cities.iter().find(|c| c.name.to_lowercase() == needle)
    }
}

impl Default for CityCatalog {
    /// Major German cities; Bright Sky only covers Germany well.
    fn default() -> Self {
        Self::new(vec![
            City::new("Berlin", 52.5200, 13.4050),
            City::new("Munich", 48.1351, 11.5820),
            City::new("Frankfurt", 50.1109, 8.6821),
            City::new("Hamburg", 53.5511, 9.9937),
            City::new("Cologne", 50.9375, 6.9603),
            City::new("Stuttgart", 48.7758, 9.1829),
            City::new("Düsseldorf", 51.2277, 6.7735),
            City::new("Dortmund", 51.5136, 7.4653),
            City::new("Essen", 51.4556, 7.0116),
            City::new("Leipzig", 51.3397, 12.3731),
            City::new("Dresden", 51.0504, 13.7373),
            City::new("Bremen", 53.0793, 8.8017),
            City::new("Hannover", 52.3759, 9.7320),
            City::new("Nuremberg", 49.4521, 11.0767),
            City::new("Mannheim", 49.4875, 8.4660),
            City::new("Münster", 51.9607, 7.6261),
            City::new("Aachen", 50.7753, 6.0839),
            City::new("Kiel", 54.3233, 10.1228),
            City::new("Freiburg", 47.9990, 7.8421),
            City::new("Rostock", 54.0924, 12.0991),
            City::new("Erfurt", 50.9848, 11.0299),
            City::new("Mainz", 49.9929, 8.2473),
            City::new("Lübeck", 53.8655, 10.6866),
        ])
    }
}
