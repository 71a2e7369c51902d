use serde::{Deserialize, Serialize};

use crate::entities::Vehicle;

// Fixed catalogs behind the booking flow. Both are built once in
// `Engine::new` and never written afterwards; a real deployment would swap
// the directory for a geocoding service.

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new(
            "sedan",
            "Sedan",
            4,
            3500,
            &["Air conditioning", "Boot space"],
        ),
        Vehicle::new(
            "minivan",
            "Minivan",
            6,
            5000,
            &["Air conditioning", "Extra legroom"],
        ),
        Vehicle::new(
            "minibus",
            "Minibus",
            14,
            7000,
            &["Campus shuttle standard", "Luggage rack"],
        ),
        Vehicle::new(
            "bus",
            "Bus",
            18,
            8000,
            &["Campus shuttle standard", "Standing room"],
        ),
    ]
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub places: Vec<String>,
}

impl Region {
    fn new(name: &str, places: &[&str]) -> Self {
        Self {
            name: name.into(),
            places: places.iter().map(|p| p.to_string()).collect(),
        }
    }
}

pub fn regions() -> Vec<Region> {
    vec![
        Region::new(
            "Lagos",
            &[
                "Ikeja",
                "Victoria Island",
                "Lekki Phase 1",
                "Surulere",
                "Yaba",
                "Ajah",
                "Ikorodu",
                "Unilag Main Gate",
            ],
        ),
        Region::new(
            "Rivers",
            &[
                "Port Harcourt Town",
                "Mile 1",
                "Mile 2",
                "Mile 3",
                "Choba",
                "Rumuokoro",
                "Eleme Junction",
            ],
        ),
        Region::new(
            "Abuja",
            &["Wuse 2", "Garki", "Maitama", "Gwarinpa", "Kubwa", "Area 1"],
        ),
        Region::new(
            "Oyo",
            &["Bodija", "Dugbe", "Mokola", "Challenge", "Agodi Gate", "Ojoo"],
        ),
        Region::new(
            "Enugu",
            &[
                "Nsukka",
                "Abakpa",
                "New Haven",
                "Independence Layout",
                "Ogui Road",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_valid_vehicles() {
        let vehicles = vehicles();

        assert_eq!(vehicles.len(), 4);

        for vehicle in &vehicles {
            assert!(vehicle.capacity > 0);
            assert!(vehicle.base_price > 0);
            assert!(!vehicle.features.is_empty());
        }

        let ids: Vec<&str> = vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["sedan", "minivan", "minibus", "bus"]);
    }

    #[test]
    fn directory_has_five_regions_with_places() {
        let regions = regions();

        assert_eq!(regions.len(), 5);

        for region in &regions {
            assert!(!region.places.is_empty());
        }

        let lagos = regions.iter().find(|r| r.name == "Lagos").unwrap();
        assert!(lagos.places.iter().any(|p| p == "Victoria Island"));
    }
}
