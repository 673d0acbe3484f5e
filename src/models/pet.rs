use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Pet as served by the petstore API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    Available,
    Pending,
    Sold,
    /// Anything else the API sends. Shown with a neutral badge, never written back.
    #[serde(other)]
    Unknown,
}

/// The demo API is filled by strangers: `null` reads like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    /// Wire value, also used in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
            PetStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PetStatus::Available => "Available",
            PetStatus::Pending => "Pending",
            PetStatus::Sold => "Sold",
            PetStatus::Unknown => "Unknown",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            PetStatus::Available => "success",
            PetStatus::Pending => "warning",
            PetStatus::Sold => "error",
            PetStatus::Unknown => "default",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PetStatus::Available),
            "pending" => Ok(PetStatus::Pending),
            "sold" => Ok(PetStatus::Sold),
            other => Err(format!("unknown pet status `{}`", other)),
        }
    }
}

impl Pet {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Tag names joined for display, `None` when there are no tags
    pub fn tag_list(&self) -> Option<String> {
        let names: Vec<&str> = self
            .tags
            .iter()
            .flatten()
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }

    pub fn photos(&self) -> &[String] {
        self.photo_urls.as_deref().unwrap_or(&[])
    }
}

/// Drop repeated ids, first occurrence wins. The demo API returns duplicates.
pub fn dedup_by_id(pets: Vec<Pet>) -> Vec<Pet> {
    let mut seen = HashSet::with_capacity(pets.len());
    pets.into_iter().filter(|pet| seen.insert(pet.id)).collect()
}

/// Case-insensitive substring match on the name. Empty query keeps everything.
pub fn filter_by_name<'a>(pets: &'a [Pet], query: &str) -> Vec<&'a Pet> {
    if query.is_empty() {
        return pets.iter().collect();
    }
    let needle = query.to_lowercase();
    pets.iter()
        .filter(|pet| !pet.name.is_empty() && pet.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pet(id: i64, name: &str) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            status: PetStatus::Available,
            category: None,
            tags: None,
            photo_urls: None,
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let pets = vec![pet(3, "a"), pet(1, "b"), pet(3, "c"), pet(2, "d"), pet(1, "e")];
        let unique = dedup_by_id(pets);
        let ids: Vec<(i64, &str)> = unique.iter().map(|p| (p.id, p.name.as_str())).collect();
        assert_eq!(ids, vec![(3, "a"), (1, "b"), (2, "d")]);
    }

    #[test]
    fn filter_is_case_insensitive_and_name_only() {
        let mut with_category = pet(2, "Whiskers");
        with_category.category = Some(Category { id: 1, name: "Rexford".into() });
        let pets = vec![pet(1, "Rex"), with_category, pet(3, "T-REX"), pet(4, "")];

        let hits: Vec<i64> = filter_by_name(&pets, "rEx").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![1, 3]);
    }

    #[test]
    fn empty_query_returns_everything_unchanged() {
        let pets = vec![pet(1, "Rex"), pet(2, ""), pet(3, "Max")];
        let all = filter_by_name(&pets, "");
        assert_eq!(all.len(), 3);
        assert!(all.iter().zip(pets.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn deserializes_sparse_api_records() {
        let raw = json!([
            {"id": 10, "name": "doggie", "status": "sold",
             "category": {"id": 1, "name": "Dogs"},
             "photoUrls": ["http://img/1.png"],
             "tags": [{"id": 0, "name": "good"}, {"id": 1}]},
            {"id": 11}
        ]);
        let pets: Vec<Pet> = serde_json::from_value(raw).expect("valid pets");

        assert_eq!(pets[0].status, PetStatus::Sold);
        assert_eq!(pets[0].category_name(), Some("Dogs"));
        assert_eq!(pets[0].tag_list().as_deref(), Some("good"));
        assert_eq!(pets[0].photos(), ["http://img/1.png".to_string()]);

        assert_eq!(pets[1].display_name(), "Unnamed");
        assert_eq!(pets[1].status, PetStatus::Available);
        assert_eq!(pets[1].tag_list(), None);
    }

    #[test]
    fn odd_records_do_not_sink_the_whole_list() {
        let raw = json!([
            {"id": 1, "name": null, "status": "adopted"},
            {"id": 2, "name": "Rex", "status": null, "category": {"id": 3, "name": null}},
            {"id": 3, "name": "Max", "status": "pending"}
        ]);
        let pets: Vec<Pet> = serde_json::from_value(raw).expect("tolerant pets");

        assert_eq!(pets.len(), 3);
        assert_eq!(pets[0].display_name(), "Unnamed");
        assert_eq!(pets[0].status, PetStatus::Unknown);
        assert_eq!(pets[0].status.badge_class(), "default");
        assert_eq!(pets[1].status, PetStatus::Available);
        assert_eq!(pets[1].category_name(), None);
        assert_eq!(pets[2].status, PetStatus::Pending);
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let body = serde_json::to_value(pet(1, "Rex")).expect("serializable");
        assert_eq!(body, json!({"id": 1, "name": "Rex", "status": "available"}));
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("pending".parse::<PetStatus>(), Ok(PetStatus::Pending));
        assert!("Pending".parse::<PetStatus>().is_err());
        assert!("unknown".parse::<PetStatus>().is_err());
        assert_eq!(PetStatus::Sold.badge_class(), "error");
    }
}
