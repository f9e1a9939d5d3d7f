//! Trip catalog response DTOs.
//!
//! These types map directly to the backend's JSON. The backend is loose
//! about shapes (numeric or string ids, durations sent as a day count or as
//! a label), so every field is optional and the ambiguous ones are untagged
//! enums. Validation happens in `convert`.

use serde::{Deserialize, Serialize};

/// Body of a catalog response.
///
/// Some deployments return the bare array, others wrap it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Bare(Vec<TripDto>),
    Trips { trips: Vec<TripDto> },
    Data { data: Vec<TripDto> },
}

impl CatalogResponse {
    pub fn into_trips(self) -> Vec<TripDto> {
        match self {
            CatalogResponse::Bare(trips)
            | CatalogResponse::Trips { trips }
            | CatalogResponse::Data { data: trips } => trips,
        }
    }
}

/// A trip as the backend sends it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Trip identifier; Mongo-style backends send `_id`.
    #[serde(alias = "_id")]
    pub id: Option<IdDto>,

    pub name: Option<String>,

    /// Free-text destination ("Himalayas", "Goa").
    pub destination: Option<String>,

    pub price: Option<f64>,

    pub duration: Option<DurationDto>,

    /// "Easy", "Moderate", "Hard" or "Extreme", any case.
    pub difficulty: Option<String>,

    pub rating: Option<f64>,

    pub group_size: Option<GroupSizeDto>,

    #[serde(alias = "seasons")]
    pub season: Option<SeasonDto>,

    #[serde(alias = "imageUrl")]
    pub image: Option<String>,

    pub description: Option<String>,
}

/// Identifier sent as either a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IdDto {
    Text(String),
    Number(u64),
}

/// Duration sent as either a day count or a label ("5-7 days").
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DurationDto {
    Days(f64),
    Label(String),
}

/// Group size sent as either a head count or a label ("8-12 people").
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GroupSizeDto {
    Count(f64),
    Label(String),
}

/// Season sent as a single tag or a list of tags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SeasonDto {
    One(String),
    Many(Vec<String>),
}

impl SeasonDto {
    pub fn tags(&self) -> &[String] {
        match self {
            SeasonDto::One(tag) => std::slice::from_ref(tag),
            SeasonDto::Many(tags) => tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_numeric_shapes() {
        let json = r#"{
            "_id": 17,
            "name": "Spiti Valley Trek",
            "destination": "Himalayas",
            "price": 21150,
            "duration": 9,
            "difficulty": "Hard",
            "rating": 4.8,
            "groupSize": 12,
            "season": "Summer",
            "image": "https://example.com/spiti.jpg"
        }"#;

        let dto: TripDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, Some(IdDto::Number(17)));
        assert_eq!(dto.duration, Some(DurationDto::Days(9.0)));
        assert_eq!(dto.group_size, Some(GroupSizeDto::Count(12.0)));
        assert_eq!(dto.season, Some(SeasonDto::One("Summer".into())));
        assert!(dto.description.is_none());
    }

    #[test]
    fn deserialize_label_shapes() {
        let json = r#"{
            "id": "goa-01",
            "name": "Goa Beach Party",
            "destination": "Goa",
            "duration": "5-7 days",
            "groupSize": "8-12 people",
            "seasons": ["Winter", "Spring"]
        }"#;

        let dto: TripDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, Some(IdDto::Text("goa-01".into())));
        assert_eq!(dto.duration, Some(DurationDto::Label("5-7 days".into())));
        assert_eq!(
            dto.group_size,
            Some(GroupSizeDto::Label("8-12 people".into()))
        );
        assert_eq!(dto.season.unwrap().tags(), ["Winter", "Spring"]);
        assert!(dto.price.is_none());
    }

    #[test]
    fn deserialize_wrapped_responses() {
        let bare: CatalogResponse = serde_json::from_str(r#"[{"name": "A"}]"#).unwrap();
        assert_eq!(bare.into_trips().len(), 1);

        let trips: CatalogResponse =
            serde_json::from_str(r#"{"trips": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
        assert_eq!(trips.into_trips().len(), 2);

        let data: CatalogResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(data.into_trips().is_empty());
    }
}
