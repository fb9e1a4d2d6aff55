use std::fmt;

use tracing::debug;

/// A doctor practising at a listed hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Doctor {
    /// Display name, title included.
    pub name: String,
    /// Specialty, e.g. `Cardiologist`.
    pub specialty: String,
    /// Experience as shown on the profile.
    pub experience: String,
}

impl Doctor {
    fn new(name: &str, specialty: &str, experience: &str) -> Self {
        Self {
            name: name.to_string(),
            specialty: specialty.to_string(),
            experience: experience.to_string(),
        }
    }
}

/// A hospital listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hospital {
    /// Catalog identifier, also the `/hospital/{id}` route segment.
    pub id: u32,
    /// Hospital name.
    pub name: String,
    /// Area and city.
    pub location: String,
    /// Consultation fee in rupees.
    pub consultation_fee: u32,
    /// Patient rating in percent.
    pub rating: u8,
    /// Years in operation, when published.
    pub experience: Option<String>,
    /// Typical wait, as shown on the listing.
    pub wait_time: String,
    /// Departments, e.g. `Cardiology`.
    pub specialities: Vec<String>,
    /// Free-form description.
    pub about: Option<String>,
    /// Earliest free slot, as shown on the listing.
    pub next_available: Option<String>,
    /// Whether the portal verified the listing.
    pub verified: bool,
    /// On-site amenities.
    pub amenities: Vec<String>,
    /// Doctors on staff.
    pub doctors: Vec<Doctor>,
}

impl Hospital {
    /// Fee as displayed, `₹900`.
    pub fn fee_label(&self) -> String {
        format!("₹{}", self.consultation_fee)
    }

    /// Route path of the detail page.
    pub fn route(&self) -> String {
        format!("/hospital/{}", self.id)
    }

    /// Whether the hospital lists `speciality`, ignoring case.
    pub fn offers(&self, speciality: &str) -> bool {
        self.specialities
            .iter()
            .any(|s| s.eq_ignore_ascii_case(speciality))
    }

    fn matches(&self, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        contains(&self.name)
            || contains(&self.location)
            || self.specialities.iter().any(|s| contains(s))
    }
}

impl fmt::Display for Hospital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

/// Hospitals shown by the portal, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    hospitals: Vec<Hospital>,
}

impl Catalog {
    /// A catalog over `hospitals`, keeping their order.
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    /// The hospitals the portal ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            seeded_hospital(1, "Manipal Hospital", "Whitefield, Bangalore"),
            seeded_hospital(2, "Medicare Hospital", "Sec 12, Chandigarh"),
        ])
    }

    /// Every hospital.
    pub fn all(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Number of hospitals.
    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    /// True when nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Hospital with identifier `id`.
    pub fn get(&self, id: u32) -> Option<&Hospital> {
        self.hospitals.iter().find(|hospital| hospital.id == id)
    }

    /// Hospital addressed by a `/hospital/{id}` route segment.
    ///
    /// ```rust
    /// use mediconnect::directory::Catalog;
    ///
    /// let catalog = Catalog::seeded();
    /// assert_eq!(catalog.find_by_route("2").unwrap().name, "Medicare Hospital");
    /// assert!(catalog.find_by_route("abc").is_none());
    /// ```
    pub fn find_by_route(&self, segment: &str) -> Option<&Hospital> {
        let id = match segment.trim().parse() {
            Ok(id) => id,
            Err(err) => {
                debug!(segment, %err, "unparseable hospital route");
                return None;
            }
        };
        self.get(id)
    }

    /// Hospitals whose name, location or a speciality contains `query`,
    /// ignoring case. A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Hospital> {
        let needle = query.trim().to_lowercase();
        self.hospitals
            .iter()
            .filter(|hospital| needle.is_empty() || hospital.matches(&needle))
            .collect()
    }

    /// Hospitals listing `speciality`.
    pub fn with_speciality(&self, speciality: &str) -> Vec<&Hospital> {
        self.hospitals
            .iter()
            .filter(|hospital| hospital.offers(speciality))
            .collect()
    }
}

fn seeded_hospital(id: u32, name: &str, location: &str) -> Hospital {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Hospital {
        id,
        name: name.to_string(),
        location: location.to_string(),
        consultation_fee: 900,
        rating: 100,
        experience: Some("15 years".to_string()),
        wait_time: "10 mins".to_string(),
        specialities: strings(&["Cardiology", "Neurology"]),
        about: Some(
            "Award-winning multi-specialty hospital with state-of-the-art facilities..."
                .to_string(),
        ),
        next_available: Some("Today".to_string()),
        verified: true,
        amenities: strings(&["Free WiFi", "Parking", "Cafeteria", "Pharmacy"]),
        doctors: vec![
            Doctor::new("Dr. Anjali Rao", "Cardiologist", "12 years"),
            Doctor::new("Dr. Ravi Verma", "Neurologist", "15 years"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 2);
        let manipal = catalog.get(1).unwrap();
        assert_eq!(manipal.fee_label(), "₹900");
        assert_eq!(manipal.route(), "/hospital/1");
        assert_eq!(manipal.doctors.len(), 2);
        assert!(manipal.verified);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn search_is_case_insensitive_over_name_location_speciality() {
        let catalog = Catalog::seeded();
        let ids = |found: Vec<&Hospital>| found.iter().map(|h| h.id).collect::<Vec<_>>();
        assert_eq!(ids(catalog.search("manipal")), vec![1]);
        assert_eq!(ids(catalog.search("CHANDIGARH")), vec![2]);
        assert_eq!(ids(catalog.search("neuro")), vec![1, 2]);
        assert_eq!(ids(catalog.search("  ")), vec![1, 2]);
        assert!(catalog.search("dermatology").is_empty());
    }

    #[test]
    fn speciality_filter() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.with_speciality("cardiology").len(), 2);
        assert!(catalog.with_speciality("Oncology").is_empty());
    }

    #[test]
    fn route_lookup() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find_by_route("1").map(|h| h.id), Some(1));
        assert!(catalog.find_by_route("").is_none());
        assert!(catalog.find_by_route("-1").is_none());
        assert!(catalog.find_by_route("99").is_none());
    }
}
