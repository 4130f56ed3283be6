use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::de;

/// A single catalog record as it appears in the movie snapshot
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(deserialize_with = "de::whole")]
    pub id: i64,
    pub name: String,
    pub poster: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "Primary language")]
    pub language: Option<String>,
    /// Runtime in minutes
    #[serde(default, deserialize_with = "de::opt_whole")]
    pub minute: Option<i64>,
    #[serde(default)]
    pub genres: Option<String>,
    /// Release year
    #[serde(default, deserialize_with = "de::opt_whole")]
    pub date: Option<i64>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-delimited cast list
    #[serde(default)]
    pub actors: Option<String>,
    #[serde(flatten)]
    pub crew: Crew,
}

impl Movie {
    /// Cast members in billing order, blanks dropped
    pub fn cast(&self) -> Vec<String> {
        self.actors
            .as_deref()
            .map(|actors| {
                actors
                    .split(',')
                    .map(str::trim)
                    .filter(|actor| !actor.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Crew credits present on this record, in declared role order
    pub fn crew(&self) -> &[CrewCredit] {
        &self.crew.0
    }

    /// The tagline, unless it is missing or blank
    pub fn tagline(&self) -> Option<&str> {
        non_blank(self.tagline.as_deref())
    }

    /// Short facts shown under the title: rating, language, runtime, genres, year
    pub fn facts(&self) -> Vec<String> {
        let mut facts = Vec::new();

        if let Some(rating) = self.rating.filter(|r| r.is_finite()) {
            facts.push(format!("{}/5", format_rating(rating)));
        }
        if let Some(language) = non_blank(self.language.as_deref()) {
            facts.push(language.to_string());
        }
        if let Some(minute) = self.minute {
            facts.push(format!("{} min", minute));
        }
        if let Some(genres) = non_blank(self.genres.as_deref()) {
            facts.push(genres.to_string());
        }
        if let Some(date) = self.date {
            facts.push(date.to_string());
        }

        facts
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// Whole ratings keep one decimal ("4.0/5"), others print as stored ("3.85/5").
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Named crew roles carried by the movie snapshot, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrewRole {
    Director,
    Writer,
    OriginalWriter,
    Story,
    Producer,
    ExecutiveProducer,
    Editor,
    Composer,
    Cinematography,
    CameraOperator,
    Lighting,
    Makeup,
    Hairstyling,
    CostumeDesign,
    Casting,
    SetDecoration,
    ProductionDesign,
    ArtDirection,
    SpecialEffects,
    VisualEffects,
    Choreography,
    Stunts,
    Songs,
    TitleDesign,
    AssistantDirector,
    CoDirector,
    AdditionalDirecting,
    AdditionalPhotography,
    Sound,
}

impl CrewRole {
    pub const ALL: [CrewRole; 29] = [
        CrewRole::Director,
        CrewRole::Writer,
        CrewRole::OriginalWriter,
        CrewRole::Story,
        CrewRole::Producer,
        CrewRole::ExecutiveProducer,
        CrewRole::Editor,
        CrewRole::Composer,
        CrewRole::Cinematography,
        CrewRole::CameraOperator,
        CrewRole::Lighting,
        CrewRole::Makeup,
        CrewRole::Hairstyling,
        CrewRole::CostumeDesign,
        CrewRole::Casting,
        CrewRole::SetDecoration,
        CrewRole::ProductionDesign,
        CrewRole::ArtDirection,
        CrewRole::SpecialEffects,
        CrewRole::VisualEffects,
        CrewRole::Choreography,
        CrewRole::Stunts,
        CrewRole::Songs,
        CrewRole::TitleDesign,
        CrewRole::AssistantDirector,
        CrewRole::CoDirector,
        CrewRole::AdditionalDirecting,
        CrewRole::AdditionalPhotography,
        CrewRole::Sound,
    ];

    /// Column name in the snapshot, also used as the display label
    pub fn label(&self) -> &'static str {
        match self {
            CrewRole::Director => "Director",
            CrewRole::Writer => "Writer",
            CrewRole::OriginalWriter => "Original writer",
            CrewRole::Story => "Story",
            CrewRole::Producer => "Producer",
            CrewRole::ExecutiveProducer => "Executive producer",
            CrewRole::Editor => "Editor",
            CrewRole::Composer => "Composer",
            CrewRole::Cinematography => "Cinematography",
            CrewRole::CameraOperator => "Camera operator",
            CrewRole::Lighting => "Lighting",
            CrewRole::Makeup => "Makeup",
            CrewRole::Hairstyling => "Hairstyling",
            CrewRole::CostumeDesign => "Costume design",
            CrewRole::Casting => "Casting",
            CrewRole::SetDecoration => "Set decoration",
            CrewRole::ProductionDesign => "Production design",
            CrewRole::ArtDirection => "Art direction",
            CrewRole::SpecialEffects => "Special effects",
            CrewRole::VisualEffects => "Visual effects",
            CrewRole::Choreography => "Choreography",
            CrewRole::Stunts => "Stunts",
            CrewRole::Songs => "Songs",
            CrewRole::TitleDesign => "Title design",
            CrewRole::AssistantDirector => "Assistant director",
            CrewRole::CoDirector => "Co-director",
            CrewRole::AdditionalDirecting => "Additional directing",
            CrewRole::AdditionalPhotography => "Additional photography",
            CrewRole::Sound => "Sound",
        }
    }
}

impl Serialize for CrewRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One filled crew role, e.g. `Director: Sofia Coppola`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CrewCredit {
    pub role: CrewRole,
    pub names: String,
}

/// Present crew credits of a movie, ordered as in [`CrewRole::ALL`]
///
/// Deserialized from the flattened role columns of a movie record; columns
/// that are missing, null, non-string or blank are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crew(pub Vec<CrewCredit>);

impl<'de> Deserialize<'de> for Crew {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let credits = CrewRole::ALL
            .iter()
            .filter_map(|role| match columns.get(role.label()) {
                Some(serde_json::Value::String(names)) if !names.trim().is_empty() => {
                    Some(CrewCredit {
                        role: *role,
                        names: names.trim().to_string(),
                    })
                }
                _ => None,
            })
            .collect();

        Ok(Crew(credits))
    }
}
