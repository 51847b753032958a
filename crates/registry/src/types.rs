//! Core record types for the registry.
//!
//! Two kinds of people are registered: missing persons (reported by a
//! relative, with a disappearance event) and homeless persons (registered
//! by social workers during street outreach). Both share the closed
//! physical-attribute enumerations from [`crate::attributes`].
//!
//! Records are immutable snapshots: once loaded they are only ever read.
//! Derived values (age, was-a-child-at-disappearance) are computed on
//! demand rather than stored.

use crate::attributes::{CaseStatus, EyeColor, Gender, HairColor, SkinColor};
use crate::error::{RegistryError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Geographic coordinates of the last known location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A registered missing person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingPerson {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    /// `None` when the reporter does not know the birth date
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_disappearance: Option<NaiveDate>,
    #[serde(default)]
    pub height: String,
    /// Clothes worn when last seen
    #[serde(default)]
    pub clothes: String,
    pub gender: Gender,
    pub eyes: EyeColor,
    pub hair: HairColor,
    pub skin: SkinColor,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub status: CaseStatus,
    /// Free-text account of the disappearance
    #[serde(default)]
    pub event_report: String,
    #[serde(default)]
    pub tattoo_description: String,
    #[serde(default)]
    pub scar_description: String,
}

/// A person registered during homeless outreach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomelessPerson {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    pub eyes: EyeColor,
    pub hair: HairColor,
    pub skin: SkinColor,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Whole years between `birth` and `on`, clamped at zero
fn years_between(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

impl MissingPerson {
    /// Age on a given reference date, `None` when the birth date is unknown
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        self.birth_date.map(|birth| years_between(birth, on))
    }

    /// Current age, `None` when the birth date is unknown
    pub fn age(&self) -> Option<u32> {
        self.age_on(today())
    }

    /// Whether the person was under 18 at the date of disappearance.
    ///
    /// `false` when either date is unknown.
    pub fn was_child(&self) -> bool {
        match (self.birth_date, self.date_of_disappearance) {
            (Some(birth), Some(disappeared)) => years_between(birth, disappeared) < 18,
            _ => false,
        }
    }

    pub fn has_tattoo(&self) -> bool {
        !self.tattoo_description.is_empty()
    }

    pub fn has_scar(&self) -> bool {
        !self.scar_description.is_empty()
    }

    /// Validate domain invariants against a reference "today".
    ///
    /// Name and reporting user are required; birth and disappearance dates
    /// must not lie in the future.
    pub fn validate(&self, on: NaiveDate) -> Result<()> {
        if self.name.is_empty() {
            return Err(RegistryError::InvalidRecord {
                id: self.id.clone(),
                reason: "name is required".to_string(),
            });
        }
        if self.user_id.is_empty() {
            return Err(RegistryError::InvalidRecord {
                id: self.id.clone(),
                reason: "user_id is required".to_string(),
            });
        }
        if let Some(birth) = self.birth_date {
            if birth > on {
                return Err(RegistryError::InvalidRecord {
                    id: self.id.clone(),
                    reason: "birth date cannot be in the future".to_string(),
                });
            }
        }
        if let Some(disappeared) = self.date_of_disappearance {
            if disappeared > on {
                return Err(RegistryError::InvalidRecord {
                    id: self.id.clone(),
                    reason: "date of disappearance cannot be in the future".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl HomelessPerson {
    /// Age on a given reference date, `None` when the birth date is unknown
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        self.birth_date.map(|birth| years_between(birth, on))
    }

    /// Current age, `None` when the birth date is unknown
    pub fn age(&self) -> Option<u32> {
        self.age_on(today())
    }

    /// Validate domain invariants against a reference "today"
    pub fn validate(&self, on: NaiveDate) -> Result<()> {
        if self.name.is_empty() {
            return Err(RegistryError::InvalidRecord {
                id: self.id.clone(),
                reason: "name is required".to_string(),
            });
        }
        if let Some(birth) = self.birth_date {
            if birth > on {
                return Err(RegistryError::InvalidRecord {
                    id: self.id.clone(),
                    reason: "birth date cannot be in the future".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{CaseStatus, EyeColor, Gender, HairColor, SkinColor};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_missing() -> MissingPerson {
        MissingPerson {
            id: "m-1".to_string(),
            user_id: "u-1".to_string(),
            name: "Ana Souza".to_string(),
            nickname: "Aninha".to_string(),
            birth_date: Some(date(1999, 6, 15)),
            date_of_disappearance: Some(date(2024, 3, 1)),
            height: "1.65".to_string(),
            clothes: "red jacket".to_string(),
            gender: Gender::Female,
            eyes: EyeColor::Brown,
            hair: HairColor::Black,
            skin: SkinColor::Brown,
            photo_url: String::new(),
            location: None,
            status: CaseStatus::Disappeared,
            event_report: "last seen near the bus station".to_string(),
            tattoo_description: String::new(),
            scar_description: "scar on left arm".to_string(),
        }
    }

    #[test]
    fn test_age_on_counts_whole_years() {
        let person = sample_missing();
        // Day before the birthday
        assert_eq!(person.age_on(date(2024, 6, 14)), Some(24));
        // On the birthday
        assert_eq!(person.age_on(date(2024, 6, 15)), Some(25));
    }

    #[test]
    fn test_age_unknown_without_birth_date() {
        let mut person = sample_missing();
        person.birth_date = None;
        assert_eq!(person.age(), None);
    }

    #[test]
    fn test_was_child() {
        let mut person = sample_missing();
        assert!(!person.was_child()); // 24 at disappearance

        person.birth_date = Some(date(2010, 1, 1));
        assert!(person.was_child());

        person.date_of_disappearance = None;
        assert!(!person.was_child());
    }

    #[test]
    fn test_marks() {
        let person = sample_missing();
        assert!(!person.has_tattoo());
        assert!(person.has_scar());
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let mut person = sample_missing();
        person.name = String::new();
        assert!(person.validate(date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_validate_rejects_future_dates() {
        let mut person = sample_missing();
        person.date_of_disappearance = Some(date(2030, 1, 1));
        assert!(person.validate(date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_missing_person_from_json() {
        let json = r#"{
            "id": "m-9",
            "user_id": "u-2",
            "name": "Bruno Lima",
            "birth_date": "1984-02-20",
            "gender": "male",
            "eyes": "dark_brown",
            "hair": "brown",
            "skin": "white",
            "status": "disappeared"
        }"#;

        let person: MissingPerson = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Bruno Lima");
        assert_eq!(person.eyes, EyeColor::DarkBrown);
        assert_eq!(person.nickname, "");
        assert_eq!(person.location, None);
    }
}
